//! Nickname Verifier: top-level dispatch over one record

use crate::egg;
use crate::matcher;
use crate::messages;
use crate::rules::{DefaultTrade1Rule, Trade1Rule};
use crate::trade::{self, TradeContext};
use legality_core::{
    CheckIdentifier, CheckResult, Encounter, LegalityData, LegalityError, Record, Verifier,
    VerifierConfig,
};
use legality_tables::TableStore;
use legality_text::{
    display_length, normalize_apostrophe, DefaultScriptClassifier, DenyListFilter, ScriptClassifier,
    WordFilter, G1_ENGLISH_MAX_LENGTH, G1_JAPANESE_MAX_LENGTH, G2_KOREAN_MAX_LENGTH,
};
use std::sync::Arc;

/// Checks display names, egg names and in-game trade names
pub struct NicknameVerifier {
    tables: Arc<TableStore>,
    classifier: Box<dyn ScriptClassifier>,
    filter: Box<dyn WordFilter>,
    trade1: Box<dyn Trade1Rule>,
    word_filter: bool,
}

impl NicknameVerifier {
    /// Verifier over the given tables with default collaborators
    pub fn new(tables: Arc<TableStore>) -> Self {
        Self {
            tables,
            classifier: Box::new(DefaultScriptClassifier),
            filter: Box::new(DenyListFilter::new()),
            trade1: Box::new(DefaultTrade1Rule),
            word_filter: true,
        }
    }

    /// Verifier over the bundled tables
    pub fn bundled() -> Self {
        Self::new(TableStore::bundled())
    }

    /// Build from configuration, loading external tables when a data
    /// directory is set
    pub fn from_config(config: &VerifierConfig) -> Result<Self, LegalityError> {
        let tables = match &config.data_dir {
            Some(dir) => Arc::new(TableStore::load_dir(dir)?),
            None => TableStore::bundled(),
        };
        let filter = DenyListFilter::with_terms(&config.denylist)
            .map_err(|e| LegalityError::ConfigError(e.to_string()))?;

        tracing::debug!(
            fingerprint = tables.fingerprint(),
            word_filter = config.word_filter,
            extra_terms = config.denylist.len(),
            "nickname verifier configured"
        );
        Ok(Self::new(tables)
            .with_filter(filter)
            .with_word_filter(config.word_filter))
    }

    pub fn with_classifier(mut self, classifier: impl ScriptClassifier + 'static) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    pub fn with_filter(mut self, filter: impl WordFilter + 'static) -> Self {
        self.filter = Box::new(filter);
        self
    }

    pub fn with_trade1_rule(mut self, rule: impl Trade1Rule + 'static) -> Self {
        self.trade1 = Box::new(rule);
        self
    }

    /// Enable or disable the content filter on custom nicknames
    pub fn with_word_filter(mut self, enabled: bool) -> Self {
        self.word_filter = enabled;
        self
    }

    pub fn tables(&self) -> &TableStore {
        &self.tables
    }

    fn verify_into(&self, data: &LegalityData<'_>, out: &mut Vec<CheckResult>) {
        let record = data.record;
        if record.nickname.is_empty() {
            out.push(CheckResult::invalid(CheckIdentifier::Nickname, messages::NICK_EMPTY));
            return;
        }

        let species = self.tables.species();
        if usize::from(record.species) >= species.bound() {
            tracing::warn!(species = record.species, bound = species.bound(), "species outside name table");
            out.push(CheckResult::indeterminate(CheckIdentifier::Nickname, messages::NICK_SPECIES_UNKNOWN));
            return;
        }

        if record.is_virtual_console && record.is_nicknamed {
            self.verify_bounded_alphabet(record, out);
        } else if let Some(gift) = data.encounter.as_mystery_gift() {
            if record.is_nicknamed && !gift.is_egg {
                out.push(CheckResult::fishy(CheckIdentifier::Nickname, messages::NICK_GIFT_CHANGED));
            }
        }

        if let Encounter::Trade(encounter) = data.encounter {
            let ctx = TradeContext {
                tables: &self.tables,
                trade1: self.trade1.as_ref(),
                data,
                trade: encounter,
            };
            trade::verify_trade(&ctx, out);
            return;
        }

        if record.is_egg {
            egg::verify_egg(species, data, out);
            return;
        }

        let nickname = normalize_apostrophe(&record.nickname);
        if matcher::verify_nickname(species, self.classifier.as_ref(), data, &nickname, out) {
            return;
        }

        if self.word_filter && record.is_nicknamed {
            if let Some(term) = self.filter.check(&nickname) {
                out.push(CheckResult::invalid(CheckIdentifier::Nickname, messages::filtered(&term)));
            }
        }
    }

    /// Names typed on a generation 1/2 cartridge must fit its alphabet
    fn verify_bounded_alphabet(&self, record: &Record, out: &mut Vec<CheckResult>) {
        let name = record.nickname.as_str();
        let length = display_length(name);

        let limit = if self.classifier.is_g1_english(name) {
            Some((G1_ENGLISH_MAX_LENGTH, messages::NICK_LENGTH_LONG))
        } else if self.classifier.is_g1_japanese(name) {
            Some((G1_JAPANESE_MAX_LENGTH, messages::NICK_LENGTH_LONG))
        } else if record.is_korean && self.classifier.is_g2_korean(name) {
            Some((G2_KOREAN_MAX_LENGTH, messages::NICK_LENGTH_KOREAN))
        } else {
            None
        };

        match limit {
            Some((max, comment)) if length > max => {
                out.push(CheckResult::invalid(CheckIdentifier::Nickname, comment));
            }
            Some(_) => {}
            None => out.push(CheckResult::invalid(CheckIdentifier::Nickname, messages::NICK_CHARSET)),
        }
    }
}

impl Verifier for NicknameVerifier {
    fn id(&self) -> &'static str {
        "nickname.v1"
    }

    fn identifier(&self) -> CheckIdentifier {
        CheckIdentifier::Nickname
    }

    fn verify(&self, data: &LegalityData<'_>) -> Vec<CheckResult> {
        let mut out = Vec::new();
        self.verify_into(data, &mut out);
        tracing::debug!(
            species = data.record.species,
            encounter = data.encounter.kind(),
            results = out.len(),
            "nickname verified"
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use legality_core::{GameVersion, LanguageId, MysteryGift, Severity};

    fn verify(record: &Record, encounter: &Encounter) -> Vec<CheckResult> {
        NicknameVerifier::bundled().verify(&LegalityData::new(record, encounter))
    }

    #[test]
    fn test_empty_nickname_stops() {
        let record = Record::new(25, "", LanguageId::English, GameVersion::X).nicknamed();
        let results = verify(&record, &Encounter::Wild { species: 25 });
        assert_eq!(results, vec![CheckResult::invalid(CheckIdentifier::Nickname, messages::NICK_EMPTY)]);
    }

    #[test]
    fn test_species_past_table_indeterminate() {
        let record = Record::new(700, "Sylveon", LanguageId::English, GameVersion::X);
        let results = verify(&record, &Encounter::Wild { species: 700 });
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].severity, Severity::Indeterminate);
    }

    #[test]
    fn test_virtual_console_alphabet() {
        let encounter = Encounter::Wild { species: 25 };
        let long = Record::new(25, "ABCDEFGHIJK", LanguageId::English, GameVersion::RD)
            .nicknamed()
            .virtual_console();
        assert!(verify(&long, &encounter).contains(&CheckResult::invalid(
            CheckIdentifier::Nickname,
            messages::NICK_LENGTH_LONG
        )));

        let hangul = Record::new(25, "피카츄", LanguageId::Korean, GameVersion::GD)
            .nicknamed()
            .virtual_console();
        assert!(verify(&hangul, &encounter)
            .iter()
            .any(|r| r.comment == messages::NICK_CHARSET));
        assert!(!verify(&hangul.clone().korean(), &encounter)
            .iter()
            .any(|r| r.comment == messages::NICK_CHARSET));
    }

    #[test]
    fn test_changed_gift_name_is_fishy() {
        let gift = Encounter::MysteryGift(MysteryGift::new(25, 1));
        let record = Record::new(25, "Zappy", LanguageId::English, GameVersion::X).nicknamed();
        let results = verify(&record, &gift);
        assert_eq!(results[0].severity, Severity::Fishy);
        assert_eq!(results[0].comment, messages::NICK_GIFT_CHANGED);
    }

    #[test]
    fn test_word_filter_toggle() {
        let encounter = Encounter::Wild { species: 25 };
        let record = Record::new(25, "BullShit", LanguageId::English, GameVersion::X).nicknamed();

        let results = verify(&record, &encounter);
        assert_eq!(results.last().unwrap().severity, Severity::Invalid);

        let lenient = NicknameVerifier::bundled().with_word_filter(false);
        let results = lenient.verify(&LegalityData::new(&record, &encounter));
        assert!(results.iter().all(CheckResult::is_valid));
    }

    #[test]
    fn test_from_config_adds_terms() {
        let config = VerifierConfig {
            denylist: vec!["rocket".to_string()],
            ..VerifierConfig::default()
        };
        let verifier = NicknameVerifier::from_config(&config).unwrap();
        let record = Record::new(25, "RocketMon", LanguageId::English, GameVersion::X).nicknamed();
        let results = verifier.verify(&LegalityData::new(&record, &Encounter::Wild { species: 25 }));
        assert!(results.iter().any(|r| r.is_invalid() && r.comment.contains("Rocket")));
    }

    #[test]
    fn test_from_config_missing_dir() {
        let config = VerifierConfig {
            data_dir: Some("/nonexistent/nickname-tables".into()),
            ..VerifierConfig::default()
        };
        let err = NicknameVerifier::from_config(&config).err().unwrap();
        assert!(err.to_string().starts_with("DATA/"));
    }
}
