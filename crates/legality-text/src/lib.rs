//! Legality Text: normalization, script classification and content filtering
//!
//! The verifier consumes these through the [`ScriptClassifier`] and
//! [`WordFilter`] traits so embedders can plug in their own implementations.
//!
//! # Example
//!
//! ```
//! use legality_text::{normalize_apostrophe, DefaultScriptClassifier, ScriptClassifier};
//!
//! let name = normalize_apostrophe("Farfetch'd");
//! assert_eq!(name, "Farfetch\u{2019}d");
//! assert!(DefaultScriptClassifier.is_g1_english("FARFETCH'D"));
//! ```

pub mod filter;
pub mod normalizer;
pub mod script;

pub use filter::{DenyListFilter, FilterError, WordFilter};
pub use normalizer::{
    display_length, normalize_apostrophe, strip_french_diacritics, CANONICAL_APOSTROPHE,
};
pub use script::{
    DefaultScriptClassifier, ScriptClassifier, G1_ENGLISH_MAX_LENGTH, G1_JAPANESE_MAX_LENGTH,
    G2_KOREAN_MAX_LENGTH,
};
