//! Case files: a JSON array of record/encounter pairs

use anyhow::{Context, Result};
use legality_core::{Encounter, LanguageId, PassReport, Record};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    /// Optional label echoed in the output
    #[serde(default)]
    pub name: Option<String>,
    pub record: Record,
    pub encounter: Encounter,
    /// Overrides the configured save language for this case
    #[serde(default)]
    pub active_trainer_language: Option<LanguageId>,
}

#[derive(Debug, Serialize)]
pub struct CaseReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub report: PassReport,
}

pub fn parse_cases(text: &str) -> Result<Vec<Case>> {
    // a single case may be given without the surrounding array
    if text.trim_start().starts_with('{') {
        let case = serde_json::from_str(text).context("invalid case")?;
        return Ok(vec![case]);
    }
    serde_json::from_str(text).context("invalid case list")
}

pub fn load_cases(path: &Path) -> Result<Vec<Case>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading cases from {}", path.display()))?;
    parse_cases(&text).with_context(|| format!("parsing {}", path.display()))
}
