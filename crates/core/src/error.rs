use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetCheckError {
    #[error("failed to read directory {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DatasetCheckError {
    pub(crate) fn read_dir(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source: io::Error::from(source),
        }
    }

    /// Kind of the underlying I/O failure.
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            Self::ReadDir { source, .. } => source.kind(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DatasetCheckError>;
