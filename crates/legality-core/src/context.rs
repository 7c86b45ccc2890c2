//! Legality Data: per-record inputs shared by every verifier in a pass
use crate::data_model::{Encounter, Record};
use crate::language::LanguageId;

/// A record together with the encounter it was matched to
#[derive(Debug, Clone, Copy)]
pub struct LegalityData<'a> {
    pub record: &'a Record,
    pub encounter: &'a Encounter,
    /// Language of the save the record is loaded into, when known
    pub active_trainer_language: Option<LanguageId>,
}

impl<'a> LegalityData<'a> {
    pub fn new(record: &'a Record, encounter: &'a Encounter) -> Self {
        Self {
            record,
            encounter,
            active_trainer_language: None,
        }
    }

    pub fn with_active_language(mut self, language: Option<LanguageId>) -> Self {
        self.active_trainer_language = language;
        self
    }
}
