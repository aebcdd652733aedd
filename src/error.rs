//! Error types
//!
//! Nothing here is fatal to a running game: every caller degrades to a
//! default (zero score, placeholder sprite, default settings) and logs.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the load/save collaborators
#[derive(Error, Debug)]
pub enum DodgeError {
    /// Reading or writing a file failed
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid JSON for `Settings`
    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),

    /// A high-score line is not `NAME:score`
    #[error("malformed score record on line {line}: {content:?}")]
    MalformedRecord { line: usize, content: String },

    /// A high-score line names a tier that does not exist
    #[error("unknown difficulty: {0:?}")]
    UnknownDifficulty(String),

    /// An asset could not be provided
    #[error("asset '{name}' unavailable: {reason}")]
    Asset { name: String, reason: String },
}

impl DodgeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DodgeError>;
