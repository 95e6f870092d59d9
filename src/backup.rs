//! One-time preservation of a previously generated dataset.
//!
//! Contract: an existing dataset is renamed to `<path>.bak` only when no
//! backup exists yet. Once a backup is on disk it is never touched again, so
//! at most one generation's output survives as the preserved fixture. Not
//! safe against concurrent runs on the same path; concurrent regeneration is
//! not a supported use case.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Which of the three backup cases applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupAction {
    /// Dataset existed and was renamed to the backup path.
    Created,
    /// A backup already existed; the dataset was left to be overwritten.
    AlreadyExists,
    /// No dataset on disk yet; nothing to preserve.
    NoDataset,
}

/// Backup path for a dataset: the same path with `.bak` appended.
pub fn backup_path(dataset_path: &Path) -> PathBuf {
    let mut name = dataset_path.as_os_str().to_os_string();
    name.push(".bak");
    PathBuf::from(name)
}

/// Preserve the current dataset before it is overwritten, per the contract
/// above. Rename failure propagates as an I/O error.
pub fn backup_dataset(dataset_path: &Path) -> io::Result<BackupAction> {
    if !dataset_path.exists() {
        return Ok(BackupAction::NoDataset);
    }
    let target = backup_path(dataset_path);
    if target.exists() {
        return Ok(BackupAction::AlreadyExists);
    }
    fs::rename(dataset_path, &target)?;
    Ok(BackupAction::Created)
}
