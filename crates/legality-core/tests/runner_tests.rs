//! Integration tests for the verification pass runner.

use legality_core::{
    CheckIdentifier, CheckResult, Encounter, GameVersion, LanguageId, LegalityData, Record,
    Severity, VerificationPass, Verifier,
};

struct AlwaysValid;

impl Verifier for AlwaysValid {
    fn id(&self) -> &'static str {
        "always.valid.v1"
    }

    fn identifier(&self) -> CheckIdentifier {
        CheckIdentifier::Nickname
    }

    fn verify(&self, _data: &LegalityData<'_>) -> Vec<CheckResult> {
        vec![CheckResult::valid(CheckIdentifier::Nickname, "fine")]
    }
}

struct RejectsEggs;

impl Verifier for RejectsEggs {
    fn id(&self) -> &'static str {
        "no_eggs.v1"
    }

    fn identifier(&self) -> CheckIdentifier {
        CheckIdentifier::Egg
    }

    fn verify(&self, data: &LegalityData<'_>) -> Vec<CheckResult> {
        if data.record.is_egg {
            vec![CheckResult::invalid(CheckIdentifier::Egg, "egg")]
        } else {
            Vec::new()
        }
    }
}

fn pass() -> VerificationPass {
    VerificationPass::new(vec![Box::new(AlwaysValid), Box::new(RejectsEggs)])
}

#[test]
fn test_pass_id_joins_verifier_prefixes() {
    let pass = pass();
    assert_eq!(pass.pass_id(), "always+no_eggs");
    assert_eq!(pass.len(), 2);
    assert!(!pass.is_empty());
}

#[test]
fn test_pass_collects_in_order() {
    let record = Record::new(172, "Egg", LanguageId::English, GameVersion::X).egg();
    let encounter = Encounter::Egg { species: 172 };
    let report = pass().run(&LegalityData::new(&record, &encounter));

    assert_eq!(report.results.len(), 2);
    assert_eq!(report.results[0].identifier, CheckIdentifier::Nickname);
    assert_eq!(report.results[1].identifier, CheckIdentifier::Egg);
    assert_eq!(report.severity, Severity::Invalid);
    assert!(!report.is_legal());
}

#[test]
fn test_input_hash_is_stable() {
    let record = Record::new(25, "Pikachu", LanguageId::English, GameVersion::X);
    let encounter = Encounter::Wild { species: 25 };
    let data = LegalityData::new(&record, &encounter);

    let first = pass().run(&data);
    let second = pass().run(&data);
    assert!(first.input_hash.starts_with("blake3:"));
    assert_eq!(first.input_hash, second.input_hash);
    assert_eq!(first.results, second.results);
    assert!(first.is_legal());
}

#[test]
fn test_input_hash_covers_record_and_encounter() {
    let record = Record::new(25, "Pikachu", LanguageId::English, GameVersion::X);
    let wild = Encounter::Wild { species: 25 };
    let egg = Encounter::Egg { species: 25 };
    let renamed = Record::new(25, "Sparky", LanguageId::English, GameVersion::X);

    let base = pass().run(&LegalityData::new(&record, &wild)).input_hash;
    let other_encounter = pass().run(&LegalityData::new(&record, &egg)).input_hash;
    let other_record = pass().run(&LegalityData::new(&renamed, &wild)).input_hash;
    assert_ne!(base, other_encounter);
    assert_ne!(base, other_record);
}
