//! Pipeline error types.

use std::path::PathBuf;

use keyrank_ingest::IngestError;
use keyrank_model::ModelError;
use keyrank_normalization::NormalizationError;
use keyrank_report::ReportError;
use thiserror::Error;

use crate::join::JoinError;

/// Coarse failure class of a pipeline error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A source file is missing, unreadable or too large.
    FileAccess,
    /// A source file could not be parsed, or lacks a required column.
    Parse,
    /// The caller's options are invalid; raised before any I/O.
    Options,
}

/// Errors that abort a ranking run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid options: {0}")]
    Options(#[from] ModelError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("failed to normalize {path}: {source}")]
    Normalization {
        path: PathBuf,
        #[source]
        source: NormalizationError,
    },

    #[error("failed to join {path}: {source}")]
    Join {
        path: PathBuf,
        #[source]
        source: JoinError,
    },

    #[error("failed to render selection: {0}")]
    Render(#[from] ReportError),
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Options(_) => ErrorKind::Options,
            Self::Ingest(err) if err.is_file_access() => ErrorKind::FileAccess,
            Self::Ingest(_) | Self::Normalization { .. } | Self::Join { .. } | Self::Render(_) => {
                ErrorKind::Parse
            }
        }
    }
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
