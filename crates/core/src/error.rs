//! # Errors
//!
//! Failures that can occur while assembling the site at startup. Serving a
//! page never produces one of these; the catalog filter is total.

use std::path::PathBuf;

/// Errors produced by `portfolio_core`
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate project name in catalog: {0:?}")]
    DuplicateProject(String),

    #[error("unknown color mode {0:?} (expected \"light\" or \"dark\")")]
    UnknownColorMode(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
