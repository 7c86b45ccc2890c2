//! Table loading errors
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("PARSE/{0}")]
    Parse(String),

    #[error("TABLE/{group} row {language} has odd length {len}")]
    AsymmetricRow {
        group: String,
        language: usize,
        len: usize,
    },

    #[error("TABLE/unknown language code '{0}'")]
    UnknownLanguage(String),

    #[error("IO/{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<TableError> for legality_core::LegalityError {
    fn from(err: TableError) -> Self {
        legality_core::LegalityError::DataError(err.to_string())
    }
}
