//! Language disambiguation for trades whose stored language is ambiguous
//!
//! Some localizations of the same trade share a stored language tag, or
//! shipped with another region's strings. The trainer name (and, where
//! trainer names collide, the nickname) tells which row the record really
//! came from. When nothing matches, the stored language is kept.

use legality_core::{GameVersion, LanguageId, Record};
use legality_tables::TradeTable;

/// Position of the Meister Magikarp template in the D/P/Pt table
pub const MEISTER_MAGIKARP_INDEX: usize = 3;

/// Position of the Surge Pikachu template in the HG/SS table
pub const SURGE_PIKACHU_INDEX: usize = 6;

/// Jynx traded in FR/LG: Italian LeafGreen shipped the English strings
pub fn g3_jynx(record: &Record, language: LanguageId) -> LanguageId {
    if language == LanguageId::Italian && record.version == GameVersion::LG {
        LanguageId::English
    } else {
        language
    }
}

/// Magikarp traded by Meister in D/P/Pt
///
/// French, German and Spanish copies share the English trainer name, so the
/// nickname separates them.
pub fn g4_meister_magikarp(table: &TradeTable, record: &Record, language: LanguageId) -> LanguageId {
    if language == LanguageId::English {
        return LanguageId::German;
    }

    let resolved = row_with_trainer(table, MEISTER_MAGIKARP_INDEX, &record.trainer_name).unwrap_or(language);
    let resolved = if resolved == LanguageId::English {
        let french = table.row(LanguageId::French.index()).nickname(MEISTER_MAGIKARP_INDEX);
        if french == Some(record.nickname.as_str()) {
            LanguageId::French
        } else {
            LanguageId::Spanish
        }
    } else {
        resolved
    };

    tracing::debug!(stored = %language, resolved = %resolved, "meister magikarp language");
    resolved
}

/// Pikachu traded by Surge in HG/SS
///
/// French copies are stored as English; Italian and Spanish share the
/// English trainer name.
pub fn g4_surge_pikachu(table: &TradeTable, record: &Record, language: LanguageId) -> LanguageId {
    if language == LanguageId::French {
        return LanguageId::English;
    }

    let resolved = row_with_trainer(table, SURGE_PIKACHU_INDEX, &record.trainer_name).unwrap_or(language);
    let resolved = if resolved == LanguageId::English {
        let italian = table.row(LanguageId::Italian.index()).nickname(SURGE_PIKACHU_INDEX);
        if italian == Some(record.nickname.as_str()) {
            LanguageId::Italian
        } else {
            LanguageId::Spanish
        }
    } else {
        resolved
    };

    tracing::debug!(stored = %language, resolved = %resolved, "surge pikachu language");
    resolved
}

/// First language whose row expects `trainer` for template `index`
fn row_with_trainer(table: &TradeTable, index: usize, trainer: &str) -> Option<LanguageId> {
    table
        .rows()
        .filter(|(_, row)| !row.is_empty())
        .find(|(_, row)| row.trainer(index) == Some(trainer))
        .and_then(|(language, _)| u8::try_from(language).ok())
        .and_then(LanguageId::from_u8)
}
