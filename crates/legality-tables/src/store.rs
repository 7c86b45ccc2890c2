//! Reference Table Store
//!
//! Immutable after construction. The bundled store is built once on first
//! use and shared for the life of the process; external data directories
//! produce independent stores.

use crate::error::TableError;
use crate::species::SpeciesTable;
use crate::trade::{TradeGroup, TradeTable};
use legality_core::LanguageId;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;

/// Trainer id carried by the My Pokémon Ranch gifts
pub const RANCH_TID: u16 = 1000;

/// Trainer ids of the two named B2/W2 trades checked by trainer name only
pub const YANCY_TID: u16 = 10303;
pub const CURTIS_TID: u16 = 54118;

const BUNDLED_TABLES: &str = include_str!("../data/tables.json");

const BUNDLED_SPECIES: &[(&str, &str)] = &[
    ("ja", include_str!("../data/species/ja.txt")),
    ("en", include_str!("../data/species/en.txt")),
    ("fr", include_str!("../data/species/fr.txt")),
    ("it", include_str!("../data/species/it.txt")),
    ("de", include_str!("../data/species/de.txt")),
    ("es", include_str!("../data/species/es.txt")),
];

static BUNDLED: Lazy<Arc<TableStore>> = Lazy::new(|| {
    let species = BUNDLED_SPECIES.iter().map(|(code, text)| (*code, *text));
    let store = TableStore::from_sources(BUNDLED_TABLES, species)
        .expect("bundled reference tables are well-formed");
    Arc::new(store)
});

/// On-disk layout of `tables.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableData {
    /// Species names keyed by language code, used when no text list is given
    #[serde(default)]
    pub species: BTreeMap<String, Vec<String>>,
    /// Trade rows keyed by group, one row per language id
    #[serde(default)]
    pub trades: BTreeMap<TradeGroup, Vec<Vec<String>>>,
    /// Ranch trainer names indexed by language id
    #[serde(default)]
    pub ranch_trainers: Vec<String>,
    /// Trainer names of named NPC trades, keyed by trainer id
    #[serde(default)]
    pub npc_trainers: BTreeMap<u16, Vec<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct TableStore {
    species: SpeciesTable,
    trades: HashMap<TradeGroup, TradeTable>,
    ranch_trainers: Vec<String>,
    npc_trainers: BTreeMap<u16, Vec<String>>,
    fingerprint: String,
}

impl TableStore {
    /// Shared store built from the data shipped with the crate
    pub fn bundled() -> Arc<TableStore> {
        Arc::clone(&BUNDLED)
    }

    /// Build from parsed table data
    pub fn from_data(data: TableData) -> Result<Self, TableError> {
        let fingerprint = fingerprint_of(&data)?;
        let mut species = SpeciesTable::new();
        for (code, names) in data.species {
            let language =
                LanguageId::from_code(&code).ok_or_else(|| TableError::UnknownLanguage(code.clone()))?;
            species.insert(language, names);
        }

        let mut trades = HashMap::new();
        for (group, rows) in data.trades {
            trades.insert(group, TradeTable::new(group, rows)?);
        }

        Ok(Self {
            species,
            trades,
            ranch_trainers: data.ranch_trainers,
            npc_trainers: data.npc_trainers,
            fingerprint,
        })
    }

    /// Build from a `tables.json` document plus newline-separated species lists
    pub fn from_sources<'a, I>(tables_json: &str, species_lists: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut data: TableData =
            serde_json::from_str(tables_json).map_err(|e| TableError::Parse(e.to_string()))?;
        for (code, text) in species_lists {
            data.species.insert(code.to_string(), parse_name_list(text));
        }
        Self::from_data(data)
    }

    /// Load `tables.json` and `species/<code>.txt` from a data directory
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, TableError> {
        let dir = dir.as_ref();
        let tables_path = dir.join("tables.json");
        let tables = read(&tables_path)?;

        let mut lists = Vec::new();
        let species_dir = dir.join("species");
        if species_dir.is_dir() {
            for language in LanguageId::ALL {
                let path = species_dir.join(format!("{}.txt", language.code()));
                if path.is_file() {
                    lists.push((language.code(), read(&path)?));
                }
            }
        }

        let store = Self::from_sources(&tables, lists.iter().map(|(c, t)| (*c, t.as_str())))?;
        tracing::debug!(
            dir = %dir.display(),
            languages = store.species.languages().count(),
            groups = store.trades.len(),
            fingerprint = %store.fingerprint,
            "loaded reference tables"
        );
        Ok(store)
    }

    pub fn species(&self) -> &SpeciesTable {
        &self.species
    }

    /// Trade table of a group, if loaded
    pub fn trade_table(&self, group: TradeGroup) -> Option<&TradeTable> {
        self.trades.get(&group)
    }

    /// Ranch trainer names indexed by language id
    pub fn ranch_trainers(&self) -> &[String] {
        &self.ranch_trainers
    }

    /// Trainer names of a named NPC trade
    pub fn npc_trainers(&self, tid: u16) -> Option<&[String]> {
        self.npc_trainers.get(&tid).map(Vec::as_slice)
    }

    /// `blake3:` digest of the data the store was built from
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

fn read(path: &Path) -> Result<String, TableError> {
    std::fs::read_to_string(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_name_list(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect()
}

fn fingerprint_of(data: &TableData) -> Result<String, TableError> {
    let bytes = serde_json::to_vec(data).map_err(|e| TableError::Parse(e.to_string()))?;
    Ok(format!("blake3:{}", blake3::hash(&bytes)))
}
