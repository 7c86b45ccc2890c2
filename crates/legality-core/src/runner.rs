//! Verification Pass: runs verifiers over one record and collects results
use crate::context::LegalityData;
use crate::verdict::{worst, CheckResult, Severity};
use crate::verifier::Verifier;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Results of a single pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassReport {
    pub pass_id: String,
    /// Hash of the serialized record and encounter
    pub input_hash: String,
    pub results: Vec<CheckResult>,
    pub severity: Severity,
    pub latency_us: u64,
}

impl PassReport {
    pub fn is_legal(&self) -> bool {
        !self.severity.is_rejecting()
    }
}

pub struct VerificationPass {
    verifiers: Vec<Box<dyn Verifier>>,
    pass_id: String,
}

impl VerificationPass {
    pub fn new(verifiers: Vec<Box<dyn Verifier>>) -> Self {
        let pass_id = verifiers
            .iter()
            .map(|v| v.id().split('.').next().unwrap_or("?"))
            .collect::<Vec<_>>()
            .join("+");

        Self { verifiers, pass_id }
    }

    pub fn run(&self, data: &LegalityData<'_>) -> PassReport {
        let start = Instant::now();
        let span = tracing::debug_span!("pass", id = %self.pass_id, species = data.record.species);
        let _guard = span.enter();

        let mut results = Vec::new();
        for verifier in &self.verifiers {
            let found = verifier.verify(data);
            tracing::trace!(verifier = verifier.id(), count = found.len(), "verifier finished");
            results.extend(found);
        }

        PassReport {
            pass_id: self.pass_id.clone(),
            input_hash: self.hash_input(data),
            severity: worst(&results),
            results,
            latency_us: start.elapsed().as_micros() as u64,
        }
    }

    fn hash_input(&self, data: &LegalityData<'_>) -> String {
        let mut hasher = blake3::Hasher::new();
        let parts = [
            ("record", serde_json::to_vec(data.record)),
            ("encounter", serde_json::to_vec(data.encounter)),
        ];
        for (part, bytes) in parts {
            match bytes {
                Ok(bytes) => {
                    hasher.update(&bytes);
                }
                Err(e) => tracing::warn!(part, error = %e, "input not hashed"),
            }
        }
        format!("blake3:{}", hasher.finalize())
    }

    pub fn pass_id(&self) -> &str {
        &self.pass_id
    }

    pub fn len(&self) -> usize {
        self.verifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verifiers.is_empty()
    }
}
