//! Unified Error Model
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LegalityError {
    #[error("CONFIG/{0}")]
    ConfigError(String),

    #[error("DATA/{0}")]
    DataError(String),

    #[error("IO/{path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
