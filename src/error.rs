// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to the caller. Per-file parse failures are collected in
/// the report instead of being returned.
#[derive(Debug, Error)]
pub enum UsecompassError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid configuration in {path}: {source}")]
    Config {
        source: serde_yaml::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, UsecompassError>;

impl UsecompassError {
    /// Wraps an I/O error with the path that produced it.
    #[must_use]
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}
