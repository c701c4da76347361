use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by the chunking and merging operations.
#[derive(Debug, Error)]
pub enum PrompterError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O failure on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error on {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed JSON table: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PrompterError>;

impl PrompterError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        PrompterError::InvalidArgument(msg.into())
    }

    pub fn io(path: &Path, source: io::Error) -> Self {
        PrompterError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn csv(path: &Path, source: csv::Error) -> Self {
        PrompterError::Csv {
            path: path.to_path_buf(),
            source,
        }
    }

    /// True for the filesystem-level failures (`IOFailure`), including an
    /// I/O error surfaced through the CSV writer.
    pub fn is_io(&self) -> bool {
        match self {
            PrompterError::Io { .. } => true,
            PrompterError::Csv { source, .. } => source.is_io_error(),
            _ => false,
        }
    }
}
