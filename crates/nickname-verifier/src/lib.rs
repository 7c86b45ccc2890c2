//! Nickname Verifier: display-name legality for game-entity records
//!
//! Decides whether a record's nickname, egg name and (for in-game trades)
//! original trainer name are consistent with how the record was obtained.
//!
//! # Architecture
//!
//! ```text
//! Record + Encounter → NicknameVerifier
//!                           │
//!        ┌──────────────────┼──────────────────┬───────────────┐
//!        ↓                  ↓                  ↓               ↓
//!   alphabet bounds    trade routes       egg checks     default/custom
//!                           │                                  matcher
//!                    disambiguation                            │
//!                           ↓                                  ↓
//!                     trade tables                       word filter
//! ```
//!
//! # Example
//!
//! ```
//! use legality_core::{Encounter, EncounterTrade, GameVersion, LanguageId, LegalityData, Record, Verifier};
//! use nickname_verifier::NicknameVerifier;
//!
//! let verifier = NicknameVerifier::bundled();
//!
//! // Surge's Pikachu from a German HeartGold, stored with the English tag
//! let record = Record::new(25, "FUNKI", LanguageId::English, GameVersion::HG)
//!     .nicknamed()
//!     .with_trainer("BOB", 26491, 0);
//! let encounter = Encounter::Trade(EncounterTrade::new(25, 6));
//!
//! let results = verifier.verify(&LegalityData::new(&record, &encounter));
//! assert!(results.iter().all(|r| r.is_valid()));
//! ```

pub mod disambiguate;
pub mod messages;
pub mod rules;
pub mod verifier;

mod egg;
mod matcher;
mod trade;

pub use rules::{DefaultTrade1Rule, Trade1Rule};
pub use verifier::NicknameVerifier;

use legality_core::{CheckResult, Encounter, LegalityData, Record, Verifier};

/// Check one record against the bundled tables with default settings
pub fn check_nickname(record: &Record, encounter: &Encounter) -> Vec<CheckResult> {
    NicknameVerifier::bundled().verify(&LegalityData::new(record, encounter))
}
