//! Reason strings attached to check results
//!
//! Kept stable so callers can match on them.

pub const NICK_EMPTY: &str = "Nickname is empty.";
pub const NICK_SPECIES_UNKNOWN: &str = "Species is outside the default name table; nickname not checked.";
pub const NICK_LENGTH_LONG: &str = "Nickname too long.";
pub const NICK_LENGTH_KOREAN: &str = "Korean nickname too long.";
pub const NICK_CHARSET: &str = "Nickname contains characters outside the expected alphabet.";
pub const NICK_GIFT_CHANGED: &str = "Distributed gift has a changed nickname.";

pub const NICK_MATCH_OTHER_LANGUAGE: &str = "Nickname matches the species name of another language.";
pub const NICK_MATCH_SPECIES: &str = "Nickname matches a species name.";
pub const NICK_SCRIPT_UNAVAILABLE: &str = "Nickname uses characters unavailable in the origin game.";
pub const NICK_CUSTOM: &str = "Nickname does not match a species name.";
pub const NICK_DEFAULT: &str = "Nickname matches the species name.";
pub const NICK_ASH_GRENINJA: &str = "Nickname matches the Ash-Greninja distribution.";
pub const NICK_MISMATCH: &str = "Nickname does not match the species name.";

pub const EGG_FLAG_SET: &str = "Egg should not be flagged as nicknamed.";
pub const EGG_FLAG_MISSING: &str = "Egg must be flagged as nicknamed.";
pub const EGG_NAME_MATCH: &str = "Egg name matches the language egg name.";
pub const EGG_NAME_MISMATCH: &str = "Egg name does not match the language egg name.";

pub const TRADE_NO_LOCALIZATION: &str = "In-game trade has no localization for this language.";
pub const TRADE_NOT_IN_TABLE: &str = "In-game trade template not found in the reference table.";
pub const TRADE_NICK_MATCH: &str = "Nickname matches the in-game trade.";
pub const TRADE_NICK_MISMATCH: &str = "Nickname does not match the in-game trade.";
pub const TRADE_OT_MISMATCH: &str = "Original trainer does not match the in-game trade.";

/// Content filter hit on a custom nickname
pub fn filtered(term: &str) -> String {
    format!("Nickname contains a filtered word: {}", term)
}

/// Stored language differs from the language the trade actually ships with
pub fn language_expected(expected: u8, stored: u8) -> String {
    format!("Language ID should be {}, not {}.", expected, stored)
}

/// Korean-only trade loaded into a save of another language
pub fn localized_mismatch(record: &str, active: &str) -> String {
    format!(
        "Korean in-game trade cannot exist on a non-Korean save: record {}, save {}.",
        record, active
    )
}
