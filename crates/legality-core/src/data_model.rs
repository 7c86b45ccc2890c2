//! Data Model: Record, Encounter and its variants
use crate::language::{GameVersion, LanguageId};
use serde::{Deserialize, Serialize};

/// Card id of the Ash-Greninja distribution
pub const ASH_GRENINJA_CARD_ID: u16 = 2046;

/// Fixed 32-bit trainer id (`sid << 16 | tid`) carried by the Ash-Greninja card
pub const ASH_GRENINJA_TRAINER_ID: u32 = 0x79F5_7B49;

fn default_true() -> bool {
    true
}

/// A game-entity record under verification. Never mutated by verifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// National species number
    pub species: u16,
    /// Display name as stored
    pub nickname: String,
    /// Stored "is nicknamed" flag
    #[serde(default)]
    pub is_nicknamed: bool,
    /// Stored language tag
    pub language: LanguageId,
    /// Original trainer name
    pub trainer_name: String,
    /// Generation whose storage format currently holds the record
    pub format: u8,
    /// Origin generation
    pub generation: u8,
    /// Origin game
    pub version: GameVersion,
    #[serde(default)]
    pub tid: u16,
    #[serde(default)]
    pub sid: u16,
    #[serde(default)]
    pub is_egg: bool,
    #[serde(default)]
    pub was_traded_egg: bool,
    /// Transferred from a virtual console release of a generation 1/2 game
    #[serde(default)]
    pub is_virtual_console: bool,
    /// Still stored in the format of the generation it originated in
    #[serde(default = "default_true")]
    pub is_native: bool,
    /// Originated on a Korean generation 2 cartridge
    #[serde(default)]
    pub is_korean: bool,
}

impl Record {
    /// Create a native, non-nicknamed record with the given display name
    pub fn new(
        species: u16,
        nickname: impl Into<String>,
        language: LanguageId,
        version: GameVersion,
    ) -> Self {
        let generation = version.generation();
        Self {
            species,
            nickname: nickname.into(),
            is_nicknamed: false,
            language,
            trainer_name: String::new(),
            format: generation,
            generation,
            version,
            tid: 0,
            sid: 0,
            is_egg: false,
            was_traded_egg: false,
            is_virtual_console: false,
            is_native: true,
            is_korean: false,
        }
    }

    /// Set the nicknamed flag
    pub fn nicknamed(mut self) -> Self {
        self.is_nicknamed = true;
        self
    }

    /// Mark as an egg
    pub fn egg(mut self) -> Self {
        self.is_egg = true;
        self
    }

    /// Mark as an egg that was traded before hatching
    pub fn traded_egg(mut self) -> Self {
        self.was_traded_egg = true;
        self
    }

    /// Set the original trainer
    pub fn with_trainer(mut self, name: impl Into<String>, tid: u16, sid: u16) -> Self {
        self.trainer_name = name.into();
        self.tid = tid;
        self.sid = sid;
        self
    }

    /// Move the record into a later storage format
    pub fn in_format(mut self, format: u8) -> Self {
        self.format = format;
        self.is_native = format == self.generation;
        self
    }

    /// Mark as a virtual console transfer
    pub fn virtual_console(mut self) -> Self {
        self.is_virtual_console = true;
        self.format = 7;
        self.is_native = false;
        self
    }

    /// Mark as originating from a Korean generation 2 cartridge
    pub fn korean(mut self) -> Self {
        self.is_korean = true;
        self
    }

    /// Combined 32-bit trainer id
    pub fn trainer_id32(&self) -> u32 {
        (u32::from(self.sid) << 16) | u32::from(self.tid)
    }
}

/// Encounter template a record was matched against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Encounter {
    /// Wild capture
    Wild { species: u16 },
    /// Static encounter or in-game gift
    Static(EncounterStatic),
    /// Distributed gift
    MysteryGift(MysteryGift),
    /// In-game trade
    Trade(EncounterTrade),
    /// Bred egg
    Egg { species: u16 },
}

impl Encounter {
    /// Species the template produces
    pub fn species(&self) -> u16 {
        match self {
            Encounter::Wild { species } | Encounter::Egg { species } => *species,
            Encounter::Static(s) => s.species,
            Encounter::MysteryGift(g) => g.species,
            Encounter::Trade(t) => t.species,
        }
    }

    /// Whether the template yields an egg
    pub fn is_egg(&self) -> bool {
        match self {
            Encounter::Egg { .. } => true,
            Encounter::Static(s) => s.is_egg,
            Encounter::MysteryGift(g) => g.is_egg,
            Encounter::Wild { .. } | Encounter::Trade(_) => false,
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self, Encounter::Static(_))
    }

    pub fn as_trade(&self) -> Option<&EncounterTrade> {
        match self {
            Encounter::Trade(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_mystery_gift(&self) -> Option<&MysteryGift> {
        match self {
            Encounter::MysteryGift(g) => Some(g),
            _ => None,
        }
    }

    /// Short label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Encounter::Wild { .. } => "wild",
            Encounter::Static(_) => "static",
            Encounter::MysteryGift(_) => "mystery_gift",
            Encounter::Trade(_) => "trade",
            Encounter::Egg { .. } => "egg",
        }
    }
}

/// Static encounter or in-game gift
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterStatic {
    pub species: u16,
    #[serde(default)]
    pub is_egg: bool,
}

impl EncounterStatic {
    pub fn new(species: u16) -> Self {
        Self { species, is_egg: false }
    }

    pub fn gift_egg(species: u16) -> Self {
        Self { species, is_egg: true }
    }
}

/// Distributed gift card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MysteryGift {
    pub species: u16,
    #[serde(default)]
    pub is_egg: bool,
    #[serde(default)]
    pub card_id: u16,
}

impl MysteryGift {
    pub fn new(species: u16, card_id: u16) -> Self {
        Self { species, is_egg: false, card_id }
    }

    /// The Ash-Greninja card ships a fixed display name regardless of language.
    pub fn is_ash_greninja(&self, record: &Record) -> bool {
        self.card_id == ASH_GRENINJA_CARD_ID && record.trainer_id32() == ASH_GRENINJA_TRAINER_ID
    }
}

/// In-game trade template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterTrade {
    pub species: u16,
    /// Trainer id the template assigns, 0 when it copies the player's
    #[serde(default)]
    pub tid: u16,
    /// Whether the template ships with a custom nickname
    #[serde(default = "default_true")]
    pub is_nicknamed: bool,
    /// Per-language trainer names for templates checked against their own list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trainer_names: Option<Vec<String>>,
    /// Position of the template in its group's trade table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl EncounterTrade {
    /// A nicknamed template at `index` of its group's table
    pub fn new(species: u16, index: usize) -> Self {
        Self {
            species,
            tid: 0,
            is_nicknamed: true,
            trainer_names: None,
            index: Some(index),
        }
    }

    pub fn with_tid(mut self, tid: u16) -> Self {
        self.tid = tid;
        self
    }

    pub fn not_nicknamed(mut self) -> Self {
        self.is_nicknamed = false;
        self
    }

    pub fn with_trainer_names(mut self, names: Vec<String>) -> Self {
        self.trainer_names = Some(names);
        self
    }

    /// Template without a table position
    pub fn unindexed(mut self) -> Self {
        self.index = None;
        self
    }
}
