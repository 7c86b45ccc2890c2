//! In-game trade verification
//!
//! Each generation's trades are checked against a language-indexed table of
//! expected nickname/trainer pairs. Routing goes through a static table of
//! `(generation, version predicate, handler)`; the first matching route wins.

use crate::disambiguate;
use crate::messages;
use crate::rules::Trade1Rule;
use legality_core::{
    CheckIdentifier, CheckResult, EncounterTrade, GameVersion, LanguageId, LegalityData, Record,
};
use legality_tables::{TableStore, TradeGroup, CURTIS_TID, RANCH_TID, YANCY_TID};

const SPECIES_PIKACHU: u16 = 25;
const SPECIES_JYNX: u16 = 124;
const SPECIES_MAGIKARP: u16 = 129;

/// Everything a trade handler reads
pub(crate) struct TradeContext<'a> {
    pub tables: &'a TableStore,
    pub trade1: &'a dyn Trade1Rule,
    pub data: &'a LegalityData<'a>,
    pub trade: &'a EncounterTrade,
}

impl<'a> TradeContext<'a> {
    fn record(&self) -> &'a Record {
        self.data.record
    }
}

type Handler = fn(&TradeContext<'_>, &mut Vec<CheckResult>);

struct Route {
    generation: u8,
    applies: fn(GameVersion) -> bool,
    handler: Handler,
}

fn any_version(_: GameVersion) -> bool {
    true
}

const ROUTES: &[Route] = &[
    Route { generation: 1, applies: any_version, handler: verify_gen12 },
    Route { generation: 2, applies: any_version, handler: verify_gen12 },
    Route { generation: 3, applies: GameVersion::is_frlg, handler: verify_frlg },
    Route { generation: 3, applies: any_version, handler: verify_rse },
    Route { generation: 4, applies: any_version, handler: verify_gen4 },
    Route { generation: 5, applies: GameVersion::is_bw, handler: verify_bw },
    Route { generation: 5, applies: GameVersion::is_b2w2, handler: verify_b2w2 },
    Route { generation: 6, applies: GameVersion::is_xy, handler: verify_xy },
    Route { generation: 6, applies: GameVersion::is_ao, handler: verify_ao },
    Route { generation: 7, applies: GameVersion::is_sm, handler: verify_sm },
    Route { generation: 7, applies: GameVersion::is_usum, handler: verify_usum },
];

/// Check a record matched to an in-game trade
pub(crate) fn verify_trade(ctx: &TradeContext<'_>, out: &mut Vec<CheckResult>) {
    let record = ctx.record();
    let route = ROUTES
        .iter()
        .find(|r| r.generation == record.generation && (r.applies)(record.version));

    match route {
        Some(route) => (route.handler)(ctx, out),
        None => tracing::debug!(
            generation = record.generation,
            version = ?record.version,
            "no trade route"
        ),
    }
}

fn verify_gen12(ctx: &TradeContext<'_>, out: &mut Vec<CheckResult>) {
    // templates with a fixed trainer id were fully matched upstream
    if ctx.trade.tid != 0 {
        return;
    }
    if !ctx.trade1.is_valid(ctx.record(), ctx.trade) {
        out.push(CheckResult::invalid(CheckIdentifier::Trainer, messages::TRADE_OT_MISMATCH));
    }
}

fn verify_frlg(ctx: &TradeContext<'_>, out: &mut Vec<CheckResult>) {
    let record = ctx.record();
    let mut language = record.language;
    if ctx.trade.species == SPECIES_JYNX {
        language = disambiguate::g3_jynx(record, language);
    }
    verify_table(ctx, TradeGroup::Frlg, language.index(), out);
}

fn verify_rse(ctx: &TradeContext<'_>, out: &mut Vec<CheckResult>) {
    verify_table(ctx, TradeGroup::Rse, ctx.record().language.index(), out);
}

fn verify_gen4(ctx: &TradeContext<'_>, out: &mut Vec<CheckResult>) {
    let record = ctx.record();
    if record.tid == RANCH_TID {
        verify_trainer_only(ctx, ctx.tables.ranch_trainers(), out);
        return;
    }

    if record.version.is_hgss() {
        let table = ctx.tables.trade_table(TradeGroup::Hgss);
        let mut language = record.language;
        if let (SPECIES_PIKACHU, Some(table)) = (ctx.trade.species, table) {
            language = disambiguate::g4_surge_pikachu(table, record, language);
            check_korean_mismatch(ctx, language, out);
        }
        verify_table(ctx, TradeGroup::Hgss, language.index(), out);
        return;
    }

    let table = ctx.tables.trade_table(TradeGroup::Dppt);
    let mut language = record.language;
    if let (SPECIES_MAGIKARP, Some(table)) = (ctx.trade.species, table) {
        language = disambiguate::g4_meister_magikarp(table, record, language);
        check_korean_mismatch(ctx, language, out);
    } else if record.version != GameVersion::Pt && language == LanguageId::Japanese {
        // D/P Japanese copies of some trades carry the English strings
        let japanese = table
            .zip(ctx.trade.index)
            .and_then(|(t, i)| t.row(LanguageId::Japanese.index()).nickname(i));
        if japanese.is_some() && japanese != Some(record.nickname.as_str()) {
            language = LanguageId::English;
        }
    }
    verify_table(ctx, TradeGroup::Dppt, language.index(), out);
}

/// Korean-only trades cannot appear in a save of another language
fn check_korean_mismatch(ctx: &TradeContext<'_>, resolved: LanguageId, out: &mut Vec<CheckResult>) {
    if ctx.record().format != 4 || resolved != LanguageId::Korean {
        return;
    }
    if let Some(active) = ctx.data.active_trainer_language {
        if active != LanguageId::Korean {
            out.push(CheckResult::invalid(
                CheckIdentifier::Language,
                messages::localized_mismatch(resolved.code(), active.code()),
            ));
        }
    }
}

fn verify_bw(ctx: &TradeContext<'_>, out: &mut Vec<CheckResult>) {
    let record = ctx.record();
    if record.format == 5 && record.language == LanguageId::Japanese {
        // Japanese B/W trades are stored without a language
        out.push(CheckResult::invalid(
            CheckIdentifier::Language,
            messages::language_expected(LanguageId::Hacked as u8, LanguageId::Japanese as u8),
        ));
    }
    let language = record.language.index().max(LanguageId::Japanese.index());
    verify_table(ctx, TradeGroup::Bw, language, out);
}

fn verify_b2w2(ctx: &TradeContext<'_>, out: &mut Vec<CheckResult>) {
    let tid = ctx.trade.tid;
    if tid == YANCY_TID || tid == CURTIS_TID {
        let names = ctx
            .trade
            .trainer_names
            .as_deref()
            .or_else(|| ctx.tables.npc_trainers(tid))
            .unwrap_or(&[]);
        verify_trainer_only(ctx, names, out);
        return;
    }
    verify_table(ctx, TradeGroup::B2w2, ctx.record().language.index(), out);
}

fn verify_xy(ctx: &TradeContext<'_>, out: &mut Vec<CheckResult>) {
    verify_table(ctx, TradeGroup::Xy, ctx.record().language.index(), out);
}

fn verify_ao(ctx: &TradeContext<'_>, out: &mut Vec<CheckResult>) {
    verify_table(ctx, TradeGroup::Ao, ctx.record().language.index(), out);
}

fn verify_sm(ctx: &TradeContext<'_>, out: &mut Vec<CheckResult>) {
    verify_table(ctx, TradeGroup::Sm, ctx.record().language.index(), out);
}

fn verify_usum(ctx: &TradeContext<'_>, out: &mut Vec<CheckResult>) {
    verify_table(ctx, TradeGroup::Usum, ctx.record().language.index(), out);
}

/// Compare nickname and trainer with the expected pair of the template
fn verify_table(ctx: &TradeContext<'_>, group: TradeGroup, language: usize, out: &mut Vec<CheckResult>) {
    let record = ctx.record();
    let Some(table) = ctx.tables.trade_table(group) else {
        tracing::warn!(%group, "trade table not loaded");
        out.push(CheckResult::indeterminate(CheckIdentifier::Trainer, messages::TRADE_NO_LOCALIZATION));
        return;
    };

    let row = table.row(language);
    if row.is_empty() {
        out.push(CheckResult::indeterminate(CheckIdentifier::Trainer, messages::TRADE_NO_LOCALIZATION));
        return;
    }

    let Some((nickname, trainer)) = ctx.trade.index.and_then(|i| row.pair(i)) else {
        out.push(CheckResult::indeterminate(CheckIdentifier::Trainer, messages::TRADE_NOT_IN_TABLE));
        return;
    };
    tracing::trace!(%group, language, nickname, trainer, "trade lookup");

    if is_nickname_match(nickname, &record.nickname, ctx.trade) {
        out.push(CheckResult::valid(CheckIdentifier::Nickname, messages::TRADE_NICK_MATCH));
    } else {
        out.push(CheckResult::invalid(CheckIdentifier::Nickname, messages::TRADE_NICK_MISMATCH));
    }

    if trainer != record.trainer_name {
        out.push(CheckResult::invalid(CheckIdentifier::Trainer, messages::TRADE_OT_MISMATCH));
    }
}

/// Only templates that ship a nickname can match one
fn is_nickname_match(expected: &str, nickname: &str, trade: &EncounterTrade) -> bool {
    expected == nickname && trade.is_nicknamed
}

/// Templates checked only against a per-language trainer name list
fn verify_trainer_only(ctx: &TradeContext<'_>, names: &[String], out: &mut Vec<CheckResult>) {
    let record = ctx.record();
    if record.is_nicknamed {
        out.push(CheckResult::invalid(CheckIdentifier::Nickname, messages::TRADE_NICK_MISMATCH));
        return;
    }

    // an unset slot holds "" and is compared like any other name
    match names.get(record.language.index()) {
        Some(name) if *name == record.trainer_name => {
            out.push(CheckResult::valid(CheckIdentifier::Nickname, messages::TRADE_NICK_MATCH));
        }
        Some(_) => out.push(CheckResult::invalid(CheckIdentifier::Trainer, messages::TRADE_OT_MISMATCH)),
        None => out.push(CheckResult::invalid(CheckIdentifier::Trainer, messages::TRADE_NOT_IN_TABLE)),
    }
}
