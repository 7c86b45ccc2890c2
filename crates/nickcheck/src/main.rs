//! nickcheck: verify nickname legality for records in a JSON case file
//!
//! ```text
//! nickcheck cases.json --config verifier.yaml --active-language German
//! ```
//!
//! Prints one JSON report per case and exits non-zero when any case is
//! rejected. Set `RUST_LOG=debug` to trace the decisions taken.

mod cases;

use anyhow::{Context, Result};
use cases::CaseReport;
use clap::Parser;
use legality_core::{LanguageId, LegalityData, VerificationPass, VerifierConfig};
use nickname_verifier::NicknameVerifier;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nickcheck")]
#[command(about = "Check nicknames, egg names and trade names of game records")]
struct Args {
    /// JSON file holding a case or an array of cases
    cases: PathBuf,

    /// Verifier configuration (YAML or JSON); defaults to NICKCHECK_CONFIG
    #[arg(short, long, env = "NICKCHECK_CONFIG")]
    config: Option<PathBuf>,

    /// Language of the save the records are loaded into (ex: German, ja)
    #[arg(short, long)]
    active_language: Option<String>,

    /// Pretty-print the reports
    #[arg(long)]
    pretty: bool,
}

fn parse_language(value: &str) -> Result<LanguageId> {
    LanguageId::from_code(value)
        .or_else(|| {
            LanguageId::ALL
                .iter()
                .copied()
                .find(|l| format!("{:?}", l).eq_ignore_ascii_case(value))
        })
        .with_context(|| format!("unknown language '{}'", value))
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => VerifierConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => VerifierConfig::default(),
    };
    if let Some(value) = &args.active_language {
        config = config.with_active_language(parse_language(value)?);
    }

    let verifier = NicknameVerifier::from_config(&config).context("building verifier")?;
    tracing::info!(tables = verifier.tables().fingerprint(), "verifier ready");
    let pass = VerificationPass::new(vec![Box::new(verifier)]);

    let cases = cases::load_cases(&args.cases)?;
    let mut rejected = 0usize;
    let mut reports = Vec::with_capacity(cases.len());
    for case in cases {
        let active = case.active_trainer_language.or(config.active_trainer_language);
        let data = LegalityData::new(&case.record, &case.encounter).with_active_language(active);
        let report = pass.run(&data);
        if !report.is_legal() {
            rejected += 1;
        }
        reports.push(CaseReport { name: case.name, report });
    }

    let output = if args.pretty {
        serde_json::to_string_pretty(&reports)?
    } else {
        serde_json::to_string(&reports)?
    };
    println!("{}", output);

    tracing::info!(cases = reports.len(), rejected, "done");
    Ok(if rejected == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
