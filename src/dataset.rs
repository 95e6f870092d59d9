//! The ray dataset file format.
//!
//! Plain UTF-8 text: three `#` header lines (description, field order, the
//! mesh center used for sampling) followed by one record per ray,
//!
//! ```text
//! ox oy oz dx dy dz tmin tmax
//! ```
//!
//! with origin/direction at 8 decimal places and the constant `0.0 100.0`
//! interval. The reader mirrors the downstream tracer's leniency: comment,
//! blank and unparsable lines are skipped rather than rejected.

use crate::error::DatasetError;
use crate::ray::Ray;
use crate::utilities::format_sig;
use std::fmt::Write as _;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Serialize header plus records and write them in a single filesystem
/// operation, replacing whatever is at `path`. Building the whole buffer
/// first keeps a failed run from leaving a truncated dataset behind.
pub fn write_dataset(path: &Path, center: [f64; 3], rays: &[Ray]) -> Result<(), DatasetError> {
    let mut out = String::new();
    out.push_str("# Dataset of rays (randomized to have chance to hit bunny)\n");
    out.push_str("# Format per line: ox oy oz dx dy dz tmin tmax\n");
    let _ = writeln!(
        out,
        "# center = {} {} {}",
        format_sig(center[0]),
        format_sig(center[1]),
        format_sig(center[2])
    );
    for ray in rays {
        let _ = writeln!(
            out,
            "{:.8} {:.8} {:.8} {:.8} {:.8} {:.8} {:.1} {:.1}",
            ray.origin[0],
            ray.origin[1],
            ray.origin[2],
            ray.direction[0],
            ray.direction[1],
            ray.direction[2],
            ray.tmin,
            ray.tmax
        );
    }
    fs::write(path, out)?;
    Ok(())
}

/// Parse a dataset file back into rays, skipping header and junk lines the
/// same way the intersection harness does.
pub fn read_dataset(path: &Path) -> Result<Vec<Ray>, DatasetError> {
    let file = fs::File::open(path)?;
    let reader = BufReader::new(file);

    let mut rays = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some(ray) = parse_record(trimmed) {
            rays.push(ray);
        }
    }
    Ok(rays)
}

fn parse_record(line: &str) -> Option<Ray> {
    let mut fields = [0.0f64; 8];
    let mut split = line.split_whitespace();
    for slot in fields.iter_mut() {
        *slot = split.next()?.parse().ok()?;
    }
    Some(Ray::new(
        [fields[0], fields[1], fields[2]],
        [fields[3], fields[4], fields[5]],
        fields[6],
        fields[7],
    ))
}
