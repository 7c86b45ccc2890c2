//! Legality Core: record model, verdicts and the verifier contract
//!
//! Shared by every crate in the workspace. Records and encounters are
//! read-only inputs; verifiers turn them into graded [`CheckResult`]s.

pub mod config;
pub mod context;
pub mod data_model;
pub mod error;
pub mod language;
pub mod runner;
pub mod verdict;
pub mod verifier;

pub use config::VerifierConfig;
pub use context::LegalityData;
pub use data_model::{Encounter, EncounterStatic, EncounterTrade, MysteryGift, Record};
pub use error::LegalityError;
pub use language::{GameVersion, LanguageId};
pub use runner::{PassReport, VerificationPass};
pub use verdict::{CheckIdentifier, CheckResult, Severity};
pub use verifier::Verifier;
