use std::path::PathBuf;
use thiserror::Error;

/// Failure while converting a documentation tree. Always fatal to the run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to write backup {path:?}: {source}")]
    Backup {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to write {path:?}: {source}")]
    Write {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
}
