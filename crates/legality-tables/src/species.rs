//! Default species names per language
//!
//! Index 0 of every list is the egg name. Names are stored with the casing
//! and punctuation of the latest games; [`SpeciesTable::name_for_generation`]
//! derives the form older games display.

use legality_core::LanguageId;
use legality_text::strip_french_diacritics;
use std::collections::{BTreeMap, HashMap};

/// Egg name shown by generation 3 games in every language
pub const GEN3_EGG_NAME: &str = "タマゴ";

#[derive(Debug, Clone, Default)]
pub struct SpeciesTable {
    names: BTreeMap<LanguageId, Vec<String>>,
    lookup: HashMap<LanguageId, HashMap<String, u16>>,
}

impl SpeciesTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the names of one language, replacing any previous list
    pub fn insert(&mut self, language: LanguageId, names: Vec<String>) {
        let mut index = HashMap::with_capacity(names.len());
        for (species, name) in names.iter().enumerate() {
            // first occurrence wins for duplicated names
            index.entry(name.clone()).or_insert(species as u16);
        }
        self.lookup.insert(language, index);
        self.names.insert(language, names);
    }

    /// Builder form of [`SpeciesTable::insert`]
    pub fn with_language<I, S>(mut self, language: LanguageId, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(language, names.into_iter().map(Into::into).collect());
        self
    }

    /// Species count covered by the reference (Japanese) list
    pub fn bound(&self) -> usize {
        self.names
            .get(&LanguageId::Japanese)
            .or_else(|| self.names.values().next())
            .map(Vec::len)
            .unwrap_or(0)
    }

    /// Loaded languages in id order
    pub fn languages(&self) -> impl Iterator<Item = LanguageId> + '_ {
        self.names.keys().copied()
    }

    /// Current-generation name of a species
    pub fn name(&self, species: u16, language: LanguageId) -> Option<&str> {
        self.names
            .get(&language)?
            .get(species as usize)
            .map(String::as_str)
    }

    /// Species whose current-generation name in `language` is exactly `name`
    pub fn find(&self, language: LanguageId, name: &str) -> Option<u16> {
        self.lookup.get(&language)?.get(name).copied()
    }

    /// Name as displayed by games of `generation`
    pub fn name_for_generation(
        &self,
        species: u16,
        language: LanguageId,
        generation: u8,
    ) -> Option<String> {
        if generation == 3 && species == 0 {
            return Some(GEN3_EGG_NAME.to_string());
        }

        let mut name = self.name(species, language)?.to_string();
        // generation 4 eggs keep their mixed-case name
        if generation < 5 && (generation != 4 || species != 0) {
            name = name.to_uppercase();
            if language == LanguageId::French {
                name = strip_french_diacritics(&name);
            }
        }
        if generation < 3 {
            name.retain(|c| c != ' ');
        }
        Some(name)
    }

    /// True when `nickname` is not the default name of `species` in any
    /// language a game of `generation` could have been released in
    pub fn is_nicknamed_any_language(&self, species: u16, nickname: &str, generation: u8) -> bool {
        LanguageId::for_generation(generation).iter().all(|&language| {
            self.name_for_generation(species, language, generation)
                .map_or(true, |name| name != nickname)
        })
    }
}
