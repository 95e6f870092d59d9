//! Bounding-box extraction from mesh vertex records.
//!
//! Only lines starting with the `"v "` marker are read; faces, normals,
//! texture coordinates and anything else in the file are ignored. A marked
//! line with fewer than three coordinate fields is skipped silently (the
//! reference meshes in the wild contain such lines), but a marked line whose
//! coordinate text does not parse as a number is a fatal error.

use crate::bounding_box::BoundingBox;
use crate::error::DatasetError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Two-character prefix identifying a vertex coordinate record.
const VERTEX_MARKER: &str = "v ";

/// Scan the mesh file and fold every vertex into per-axis extents.
///
/// Fails with [`DatasetError::EmptyMesh`] when no vertex records qualify, so
/// no downstream stage ever sees an undefined box.
pub fn extract_bounds(path: &Path) -> Result<BoundingBox, DatasetError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut lower = [f64::INFINITY; 3];
    let mut upper = [f64::NEG_INFINITY; 3];
    let mut count = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if !line.starts_with(VERTEX_MARKER) {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 4 {
            // Marker with too few coordinates: tolerated, not an error.
            continue;
        }
        let mut vertex = [0.0f64; 3];
        for axis in 0..3 {
            vertex[axis] =
                fields[axis + 1]
                    .parse()
                    .map_err(|_| DatasetError::MalformedNumber {
                        path: path.to_path_buf(),
                        line: index + 1,
                        value: fields[axis + 1].to_string(),
                    })?;
        }
        for axis in 0..3 {
            lower[axis] = lower[axis].min(vertex[axis]);
            upper[axis] = upper[axis].max(vertex[axis]);
        }
        count += 1;
    }

    if count == 0 {
        return Err(DatasetError::EmptyMesh {
            path: path.to_path_buf(),
        });
    }

    Ok(BoundingBox::new(lower, upper))
}
