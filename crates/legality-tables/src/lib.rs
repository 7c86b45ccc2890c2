//! Legality Tables: reference data for nickname checks
//!
//! Species names per language and per-group trade template tables. The
//! bundled data covers the first species generation and a representative
//! set of trade groups; [`TableStore::load_dir`] reads complete external
//! data with the same layout.
//!
//! # Example
//!
//! ```
//! use legality_core::LanguageId;
//! use legality_tables::{TableStore, TradeGroup};
//!
//! let store = TableStore::bundled();
//! assert_eq!(store.species().name(25, LanguageId::German), Some("Pikachu"));
//!
//! let hgss = store.trade_table(TradeGroup::Hgss).unwrap();
//! assert!(!hgss.row(LanguageId::English.index()).is_empty());
//! ```

pub mod error;
pub mod species;
pub mod store;
pub mod trade;

pub use error::TableError;
pub use species::{SpeciesTable, GEN3_EGG_NAME};
pub use store::{TableData, TableStore, CURTIS_TID, RANCH_TID, YANCY_TID};
pub use trade::{TradeGroup, TradeRow, TradeTable};
