// End-to-end backup semantics: a prior dataset is preserved exactly once and
// never clobbered by later runs.

use raygen::{BackupAction, Model, Settings};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MESH: &str = "v 0.0 0.0 0.0\nv 2.0 2.0 2.0\n";

fn model_in(dir: &TempDir) -> Model {
    let mesh_path = dir.path().join("mesh.obj");
    fs::write(&mesh_path, MESH).unwrap();
    Model::new(Settings {
        mesh_path,
        dataset_path: dir.path().join("rays"),
        ..Settings::default()
    })
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_fresh_run_creates_no_backup() {
    let dir = TempDir::new().unwrap();
    let model = model_in(&dir);

    let summary = model.run().unwrap();
    assert_eq!(summary.backup, BackupAction::NoDataset);
    assert!(model.settings.dataset_path.exists());
    assert!(!dir.path().join("rays.bak").exists());

    let rays = raygen::read_dataset(&model.settings.dataset_path).unwrap();
    assert_eq!(rays.len(), 100);
}

#[test]
fn test_second_run_preserves_first_dataset() {
    let dir = TempDir::new().unwrap();
    let model = model_in(&dir);

    model.run().unwrap();
    let first_contents = read(&model.settings.dataset_path);

    let summary = model.run().unwrap();
    assert_eq!(summary.backup, BackupAction::Created);
    assert_eq!(read(&dir.path().join("rays.bak")), first_contents);
    // The dataset itself was regenerated.
    assert!(model.settings.dataset_path.exists());
}

#[test]
fn test_existing_backup_untouched_by_later_runs() {
    let dir = TempDir::new().unwrap();
    let model = model_in(&dir);
    let backup_path = dir.path().join("rays.bak");

    model.run().unwrap();
    model.run().unwrap();
    let preserved = read(&backup_path);

    // Third run: both dataset and backup exist; only the dataset changes.
    let summary = model.run().unwrap();
    assert_eq!(summary.backup, BackupAction::AlreadyExists);
    assert_eq!(read(&backup_path), preserved);

    let rays = raygen::read_dataset(&model.settings.dataset_path).unwrap();
    assert_eq!(rays.len(), 100);
}
