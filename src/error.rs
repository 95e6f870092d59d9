use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions surfaced by the generator. Every variant aborts the run
/// before a dataset file is written (or, for write failures, leaves no
/// partial dataset behind).
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("no vertex records found in {}", .path.display())]
    EmptyMesh { path: PathBuf },

    #[error("malformed coordinate '{}' at {}:{}", .value, .path.display(), .line)]
    MalformedNumber {
        path: PathBuf,
        line: usize,
        value: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
