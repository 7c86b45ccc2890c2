//! Default and custom nickname matching for non-trade, non-egg records

use crate::messages;
use legality_core::{CheckIdentifier, CheckResult, LegalityData, Record};
use legality_tables::SpeciesTable;
use legality_text::ScriptClassifier;

/// First generation whose games can display ideographic names
const EAST_ASIAN_NAMES_GENERATION: u8 = 7;

/// Match `nickname` (already normalized) against the species' default names.
///
/// Returns true when a custom nickname was graded fishy or invalid, in which
/// case the content filter is skipped.
pub(crate) fn verify_nickname(
    species: &SpeciesTable,
    classifier: &dyn ScriptClassifier,
    data: &LegalityData<'_>,
    nickname: &str,
    out: &mut Vec<CheckResult>,
) -> bool {
    let record = data.record;
    if record.is_nicknamed {
        return verify_custom(species, classifier, record, nickname, out);
    }

    if record.format < 3 {
        // generation 1/2 formats have no flag; a default name is not recorded
        out.push(CheckResult::valid(CheckIdentifier::Nickname, messages::NICK_DEFAULT));
        return false;
    }

    if matches_default(species, data, nickname) {
        out.push(CheckResult::valid(CheckIdentifier::Nickname, messages::NICK_DEFAULT));
    } else if data
        .encounter
        .as_mystery_gift()
        .map_or(false, |gift| gift.is_ash_greninja(record))
    {
        out.push(CheckResult::valid(CheckIdentifier::Nickname, messages::NICK_ASH_GRENINJA));
    } else {
        out.push(CheckResult::invalid(CheckIdentifier::Nickname, messages::NICK_MISMATCH));
    }
    false
}

fn verify_custom(
    species: &SpeciesTable,
    classifier: &dyn ScriptClassifier,
    record: &Record,
    nickname: &str,
    out: &mut Vec<CheckResult>,
) -> bool {
    for language in species.languages() {
        let Some(found) = species.find(language, nickname) else {
            continue;
        };
        tracing::debug!(%language, found, "nickname matches a species name");
        let comment = if found == record.species && language != record.language {
            messages::NICK_MATCH_OTHER_LANGUAGE
        } else {
            messages::NICK_MATCH_SPECIES
        };
        out.push(CheckResult::fishy(CheckIdentifier::Nickname, comment));
        return true;
    }

    if record.generation < EAST_ASIAN_NAMES_GENERATION && classifier.has_east_asian_script(nickname) {
        out.push(CheckResult::invalid(CheckIdentifier::Nickname, messages::NICK_SCRIPT_UNAVAILABLE));
        return true;
    }

    out.push(CheckResult::valid(CheckIdentifier::Nickname, messages::NICK_CUSTOM));
    false
}

fn matches_default(species: &SpeciesTable, data: &LegalityData<'_>, nickname: &str) -> bool {
    let record = data.record;
    let evolved = data.encounter.species() != record.species;

    let expected = species.name_for_generation(record.species, record.language, record.format);
    if expected.as_deref() == Some(nickname) {
        return true;
    }
    if (record.was_traded_egg || evolved)
        && species.is_nicknamed_any_language(record.species, nickname, record.format)
    {
        return true;
    }

    // generation 4 names survive the transfer into format 5 unchanged
    if record.format == 5 && !record.is_native {
        if evolved {
            return species.is_nicknamed_any_language(record.species, nickname, 4);
        }
        let gen4 = species.name_for_generation(record.species, record.language, 4);
        return gen4.as_deref() == Some(nickname);
    }
    false
}
