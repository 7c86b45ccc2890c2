//! Pluggable rule for generation 1/2 in-game trades
//!
//! Templates of those games carry no trainer id, and the trainer name the
//! trade assigns depends on the cartridge; the rule is injectable so callers
//! with richer trade data can replace it.

use legality_core::{EncounterTrade, Record};

/// Trainer name given by Japanese generation 1/2 trades
pub const G1_TRADE_TRAINER_JAPANESE: &str = "トレーナー";

/// Trainer name given by western generation 1/2 trades
pub const G1_TRADE_TRAINER: &str = "TRAINER";

/// The same name after transfer to a later format
pub const G1_TRADE_TRAINER_TRANSFERRED: &str = "Trainer";

/// Decides whether a generation 1/2 trade record is consistent with its template
pub trait Trade1Rule: Send + Sync {
    fn is_valid(&self, record: &Record, trade: &EncounterTrade) -> bool;
}

/// Accepts the trainer names the original trades assign
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTrade1Rule;

impl Trade1Rule for DefaultTrade1Rule {
    fn is_valid(&self, record: &Record, _trade: &EncounterTrade) -> bool {
        let western = if record.format <= 2 {
            G1_TRADE_TRAINER
        } else {
            G1_TRADE_TRAINER_TRANSFERRED
        };
        record.trainer_name == G1_TRADE_TRAINER_JAPANESE || record.trainer_name == western
    }
}
