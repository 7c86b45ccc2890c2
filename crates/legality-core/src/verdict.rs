//! Verdict types for legality checks
//!
//! Provides graded Valid/Fishy/Invalid/Indeterminate results tagged with the
//! concern they were raised for.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grade of a single check result, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Consistent with the encounter
    Valid = 0,
    /// Passes, but only rare legitimate records look like this
    Fishy = 1,
    /// Not enough data to decide
    Indeterminate = 2,
    /// Rejects the record
    Invalid = 3,
}

impl Severity {
    /// Does this severity reject the record?
    pub fn is_rejecting(&self) -> bool {
        matches!(self, Severity::Invalid)
    }
}

/// Which concern a check result was raised for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckIdentifier {
    Nickname,
    Trainer,
    Egg,
    Language,
}

/// The result of one check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub severity: Severity,
    pub identifier: CheckIdentifier,
    /// Stable reason text
    pub comment: String,
}

impl CheckResult {
    /// Create a check result
    pub fn new(severity: Severity, identifier: CheckIdentifier, comment: impl Into<String>) -> Self {
        Self {
            severity,
            identifier,
            comment: comment.into(),
        }
    }

    pub fn valid(identifier: CheckIdentifier, comment: impl Into<String>) -> Self {
        Self::new(Severity::Valid, identifier, comment)
    }

    pub fn fishy(identifier: CheckIdentifier, comment: impl Into<String>) -> Self {
        Self::new(Severity::Fishy, identifier, comment)
    }

    pub fn invalid(identifier: CheckIdentifier, comment: impl Into<String>) -> Self {
        Self::new(Severity::Invalid, identifier, comment)
    }

    pub fn indeterminate(identifier: CheckIdentifier, comment: impl Into<String>) -> Self {
        Self::new(Severity::Indeterminate, identifier, comment)
    }

    pub fn is_valid(&self) -> bool {
        self.severity == Severity::Valid
    }

    pub fn is_invalid(&self) -> bool {
        self.severity == Severity::Invalid
    }
}

/// Most severe grade among `results`, `Valid` when empty
pub fn worst(results: &[CheckResult]) -> Severity {
    results
        .iter()
        .map(|r| r.severity)
        .max()
        .unwrap_or(Severity::Valid)
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Valid => write!(f, "Valid"),
            Severity::Fishy => write!(f, "Fishy"),
            Severity::Indeterminate => write!(f, "Indeterminate"),
            Severity::Invalid => write!(f, "Invalid"),
        }
    }
}

impl fmt::Display for CheckIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CheckIdentifier::Nickname => write!(f, "Nickname"),
            CheckIdentifier::Trainer => write!(f, "Trainer"),
            CheckIdentifier::Egg => write!(f, "Egg"),
            CheckIdentifier::Language => write!(f, "Language"),
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}: {}", self.severity, self.identifier, self.comment)
    }
}
