use crate::backup::{backup_dataset, backup_path, BackupAction};
use crate::bounding_box::BoundingBox;
use crate::dataset::write_dataset;
use crate::error::DatasetError;
use crate::mesh::extract_bounds;
use crate::ray::Ray;
use crate::rng::DatasetRng;
use crate::settings::Settings;
use crate::source::PlaneSource;
use crate::utilities::format_sig;

/// The full generation run: extract bounds, back up any prior dataset,
/// sample, write. Each stage gates the next; the first failure aborts the
/// run with nothing written.
#[derive(Debug, Clone)]
pub struct Model {
    pub settings: Settings,
}

/// What a successful run produced, for callers and tests.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub bounds: BoundingBox,
    pub backup: BackupAction,
    pub rays_written: usize,
}

impl Model {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn run(&self) -> Result<RunSummary, DatasetError> {
        let bounds = extract_bounds(&self.settings.mesh_path)?;
        println!(
            "Mesh bbox: x=[{},{}] y=[{},{}] z=[{},{}]",
            format_sig(bounds.lower_left[0]),
            format_sig(bounds.upper_right[0]),
            format_sig(bounds.lower_left[1]),
            format_sig(bounds.upper_right[1]),
            format_sig(bounds.lower_left[2]),
            format_sig(bounds.upper_right[2]),
        );
        println!(
            "Center: {} {} {}",
            format_sig(bounds.center[0]),
            format_sig(bounds.center[1]),
            format_sig(bounds.center[2]),
        );

        let backup = backup_dataset(&self.settings.dataset_path)?;
        if backup == BackupAction::Created {
            println!(
                "Backed up {} -> {}",
                self.settings.dataset_path.display(),
                backup_path(&self.settings.dataset_path).display()
            );
        }

        let source = PlaneSource::new(bounds.clone(), self.settings.tmin, self.settings.tmax);
        let mut rng = DatasetRng::new(self.settings.seed);
        let rays: Vec<Ray> = (0..self.settings.rays)
            .map(|_| source.sample(&mut rng))
            .collect();

        write_dataset(&self.settings.dataset_path, bounds.center, &rays)?;
        println!(
            "Wrote {} with {} rays",
            self.settings.dataset_path.display(),
            rays.len()
        );

        Ok(RunSummary {
            bounds,
            backup,
            rays_written: rays.len(),
        })
    }
}
