use std::path::PathBuf;

/// Fixed constants for a generation run. The tool has no CLI or environment
/// surface; `Settings::default()` is the whole configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    pub mesh_path: PathBuf,
    pub dataset_path: PathBuf,
    pub rays: usize,
    pub seed: u64,
    pub tmin: f64,
    pub tmax: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            mesh_path: PathBuf::from("dataset/scenes/bunny.obj"),
            dataset_path: PathBuf::from("dataset/rays"),
            rays: 100,
            seed: 12345,
            tmin: 0.0,
            tmax: 100.0,
        }
    }
}
