//! Verifier Trait: single contract for every legality check
use crate::context::LegalityData;
use crate::verdict::{CheckIdentifier, CheckResult};

/// A legality check over one record
///
/// Implementations are pure: the same inputs always produce the same results,
/// and nothing in `data` is mutated.
pub trait Verifier: Send + Sync {
    /// Unique id of the verifier (ex: "nickname.v1")
    fn id(&self) -> &'static str;

    /// Default concern results are tagged with
    fn identifier(&self) -> CheckIdentifier;

    /// Run the check, returning results in display order
    fn verify(&self, data: &LegalityData<'_>) -> Vec<CheckResult>;
}
