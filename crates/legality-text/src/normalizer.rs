//! Name normalization.
//!
//! Later games store the apostrophe as U+2019, while older formats and
//! hand-entered strings carry the ASCII glyph. Every comparison against
//! reference text goes through [`normalize_apostrophe`] first.

/// Apostrophe glyph used by the reference tables
pub const CANONICAL_APOSTROPHE: char = '\u{2019}';

/// Replace ASCII apostrophes with the canonical glyph
pub fn normalize_apostrophe(text: &str) -> String {
    text.chars()
        .map(|c| if c == '\'' { CANONICAL_APOSTROPHE } else { c })
        .collect()
}

/// Strip the accents generation 4 French text drops when upper-casing
pub fn strip_french_diacritics(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'É' | 'È' | 'Ê' | 'Ë' => 'E',
            'Ï' | 'Î' => 'I',
            other => other,
        })
        .collect()
}

/// Number of characters as the games count them
pub fn display_length(text: &str) -> usize {
    text.chars().count()
}
