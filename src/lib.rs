mod backup;
mod bounding_box;
mod dataset;
mod error;
mod mesh;
mod model;
mod ray;
mod rng;
mod settings;
mod source;
mod utilities;

pub use backup::{backup_dataset, backup_path, BackupAction};
pub use bounding_box::BoundingBox;
pub use dataset::{read_dataset, write_dataset};
pub use error::DatasetError;
pub use mesh::extract_bounds;
pub use model::{Model, RunSummary};
pub use ray::Ray;
pub use rng::DatasetRng;
pub use settings::Settings;
pub use source::PlaneSource;
pub use utilities::{format_sig, uniform};
