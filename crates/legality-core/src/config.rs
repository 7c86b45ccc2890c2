//! Verifier configuration
//!
//! Loaded from YAML (or JSON, which YAML accepts) so the same file can be
//! shared between the CLI and embedding applications.

use crate::error::LegalityError;
use crate::language::LanguageId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// Run the content filter over custom nicknames
    #[serde(default = "default_true")]
    pub word_filter: bool,

    /// Extra terms appended to the built-in denylist
    #[serde(default)]
    pub denylist: Vec<String>,

    /// Language of the save file the record is being checked against
    #[serde(default)]
    pub active_trainer_language: Option<LanguageId>,

    /// Directory holding external reference table files
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            word_filter: true,
            denylist: Vec::new(),
            active_trainer_language: None,
            data_dir: None,
        }
    }
}

impl VerifierConfig {
    /// Parse a configuration document
    pub fn from_yaml(text: &str) -> Result<Self, LegalityError> {
        serde_yaml::from_str(text).map_err(|e| LegalityError::ConfigError(e.to_string()))
    }

    /// Load a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LegalityError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LegalityError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&text)?;
        tracing::debug!(path = %path.display(), "loaded verifier config");
        Ok(config)
    }

    pub fn with_active_language(mut self, language: LanguageId) -> Self {
        self.active_trainer_language = Some(language);
        self
    }
}
