//! Script classification for stored names.
//!
//! Generation 1 and 2 games encode names with small fixed alphabets; a
//! string outside the alphabet of its claimed language could not have been
//! entered on the original cartridge.

use lazy_static::lazy_static;
use regex::Regex;

/// Longest name the generation 1/2 English-alphabet games can store
pub const G1_ENGLISH_MAX_LENGTH: usize = 10;

/// Longest name the generation 1/2 Japanese games can store
pub const G1_JAPANESE_MAX_LENGTH: usize = 5;

/// Longest name the Korean generation 2 games can store
pub const G2_KOREAN_MAX_LENGTH: usize = 5;

lazy_static! {
    /// Characters available on the western generation 1/2 naming screen
    static ref G1_ENGLISH: Regex =
        Regex::new(r"^[A-Za-z0-9 ()\[\]:;'\u{2019}\-?!./,♂♀×é*]+$").unwrap();

    /// Kana, the long-vowel mark and the few symbols of the Japanese screen
    static ref G1_JAPANESE: Regex =
        Regex::new(r"^[\p{Hiragana}\p{Katakana}ー゛゜0-9A-Z？！・。、♂♀× ]+$").unwrap();

    /// Hangul syllables available on Korean generation 2 cartridges
    static ref G2_KOREAN: Regex = Regex::new(r"^[\p{Hangul}0-9 ?!]+$").unwrap();

    /// CJK ideographs
    static ref EAST_ASIAN: Regex = Regex::new(r"\p{Han}").unwrap();
}

/// Classifies strings by the historical alphabet they could have been typed in
pub trait ScriptClassifier: Send + Sync {
    fn is_g1_english(&self, text: &str) -> bool;
    fn is_g1_japanese(&self, text: &str) -> bool;
    fn is_g2_korean(&self, text: &str) -> bool;
    /// Contains ideographs only supported by later games
    fn has_east_asian_script(&self, text: &str) -> bool;
}

/// Regex-backed classifier covering the naming-screen alphabets
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultScriptClassifier;

impl ScriptClassifier for DefaultScriptClassifier {
    fn is_g1_english(&self, text: &str) -> bool {
        G1_ENGLISH.is_match(text)
    }

    fn is_g1_japanese(&self, text: &str) -> bool {
        G1_JAPANESE.is_match(text)
    }

    fn is_g2_korean(&self, text: &str) -> bool {
        G2_KOREAN.is_match(text)
    }

    fn has_east_asian_script(&self, text: &str) -> bool {
        EAST_ASIAN.is_match(text)
    }
}
