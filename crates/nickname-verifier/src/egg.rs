//! Egg name checks
//!
//! Eggs display a fixed per-language name, and each storage format has its
//! own convention for the nicknamed flag.

use crate::messages;
use legality_core::{CheckIdentifier, CheckResult, LegalityData};
use legality_tables::SpeciesTable;

/// Species slot holding the egg name in every species list
const EGG_SLOT: u16 = 0;

pub(crate) fn verify_egg(species: &SpeciesTable, data: &LegalityData<'_>, out: &mut Vec<CheckResult>) {
    let record = data.record;

    match record.format {
        // format 4 never sets the flag on eggs
        4 => {
            if record.is_nicknamed {
                out.push(CheckResult::invalid(CheckIdentifier::Egg, messages::EGG_FLAG_SET));
            }
        }
        // format 7 sets it on bred eggs only, gift eggs stay unflagged
        7 => {
            if data.encounter.is_static() ^ !record.is_nicknamed {
                let comment = if record.is_nicknamed {
                    messages::EGG_FLAG_SET
                } else {
                    messages::EGG_FLAG_MISSING
                };
                out.push(CheckResult::invalid(CheckIdentifier::Egg, comment));
            }
        }
        _ => {
            if !record.is_nicknamed {
                out.push(CheckResult::invalid(CheckIdentifier::Egg, messages::EGG_FLAG_MISSING));
            }
        }
    }

    if record.format == 2 && species.is_nicknamed_any_language(EGG_SLOT, &record.nickname, 2) {
        // generation 2 eggs may keep a custom name from before they were laid
        out.push(CheckResult::valid(CheckIdentifier::Egg, messages::EGG_NAME_MATCH));
        return;
    }

    let expected = species.name_for_generation(EGG_SLOT, record.language, record.generation);
    if expected.as_deref() == Some(record.nickname.as_str()) {
        out.push(CheckResult::valid(CheckIdentifier::Egg, messages::EGG_NAME_MATCH));
    } else {
        tracing::debug!(expected = ?expected, nickname = %record.nickname, "egg name mismatch");
        out.push(CheckResult::invalid(CheckIdentifier::Egg, messages::EGG_NAME_MISMATCH));
    }
}
