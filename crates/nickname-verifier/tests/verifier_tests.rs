//! Integration tests for nickname verification outside of trades.

use legality_core::{
    CheckIdentifier, CheckResult, Encounter, EncounterStatic, GameVersion, LanguageId, LegalityData,
    MysteryGift, Record, Severity, VerificationPass, Verifier, VerifierConfig,
};
use nickname_verifier::{check_nickname, messages, NicknameVerifier};

fn wild(species: u16) -> Encounter {
    Encounter::Wild { species }
}

// =============================================================================
// Dispatch
// =============================================================================

#[test]
fn test_empty_nickname_single_result() {
    for record in [
        Record::new(25, "", LanguageId::English, GameVersion::X),
        Record::new(25, "", LanguageId::Japanese, GameVersion::RD).nicknamed().virtual_console(),
        Record::new(25, "", LanguageId::English, GameVersion::HG).egg(),
    ] {
        let results = check_nickname(&record, &wild(25));
        assert_eq!(results, vec![CheckResult::invalid(CheckIdentifier::Nickname, messages::NICK_EMPTY)]);
    }
}

#[test]
fn test_verify_is_idempotent() {
    let verifier = NicknameVerifier::bundled();
    let record = Record::new(25, "Bulbasaur", LanguageId::English, GameVersion::X).nicknamed();
    let encounter = wild(25);
    let data = LegalityData::new(&record, &encounter);

    let first = verifier.verify(&data);
    let second = verifier.verify(&data);
    assert_eq!(first, second);
    assert_eq!(record.nickname, "Bulbasaur");
}

#[test]
fn test_gift_fishy_then_matcher() {
    let gift = Encounter::MysteryGift(MysteryGift::new(25, 501));
    let record = Record::new(25, "Pika", LanguageId::English, GameVersion::X).nicknamed();
    let results = check_nickname(&record, &gift);
    assert_eq!(
        results,
        vec![
            CheckResult::fishy(CheckIdentifier::Nickname, messages::NICK_GIFT_CHANGED),
            CheckResult::valid(CheckIdentifier::Nickname, messages::NICK_CUSTOM),
        ]
    );
}

#[test]
fn test_egg_gift_name_not_fishy() {
    let mut gift = MysteryGift::new(25, 502);
    gift.is_egg = true;
    let record = Record::new(25, "Egg", LanguageId::English, GameVersion::X).egg().nicknamed();
    let results = check_nickname(&record, &Encounter::MysteryGift(gift));
    assert!(results.iter().all(|r| r.severity != Severity::Fishy));
}

// =============================================================================
// Virtual console transfers
// =============================================================================

#[test]
fn test_gen1_english_eleven_chars_invalid() {
    let record = Record::new(25, "PIKAPIKACHU", LanguageId::English, GameVersion::YW)
        .nicknamed()
        .virtual_console();
    let results = check_nickname(&record, &wild(25));
    assert_eq!(results[0], CheckResult::invalid(CheckIdentifier::Nickname, messages::NICK_LENGTH_LONG));
}

#[test]
fn test_gen1_japanese_length() {
    let short = Record::new(25, "ピカ", LanguageId::Japanese, GameVersion::GN)
        .nicknamed()
        .virtual_console();
    assert!(check_nickname(&short, &wild(25)).iter().all(CheckResult::is_valid));

    let long = Record::new(25, "ピカピカピカ", LanguageId::Japanese, GameVersion::GN)
        .nicknamed()
        .virtual_console();
    assert_eq!(check_nickname(&long, &wild(25))[0].comment, messages::NICK_LENGTH_LONG);
}

#[test]
fn test_gen2_korean_length() {
    let short = Record::new(25, "피카츄", LanguageId::Korean, GameVersion::GD)
        .nicknamed()
        .virtual_console()
        .korean();
    assert!(!check_nickname(&short, &wild(25))
        .iter()
        .any(|r| r.comment == messages::NICK_LENGTH_KOREAN));

    let long = Record::new(25, "피카츄피카츄", LanguageId::Korean, GameVersion::GD)
        .nicknamed()
        .virtual_console()
        .korean();
    assert_eq!(
        check_nickname(&long, &wild(25))[0],
        CheckResult::invalid(CheckIdentifier::Nickname, messages::NICK_LENGTH_KOREAN)
    );
}

#[test]
fn test_unexpected_charset() {
    let record = Record::new(25, "Пикачу", LanguageId::English, GameVersion::RD)
        .nicknamed()
        .virtual_console();
    assert_eq!(check_nickname(&record, &wild(25))[0].comment, messages::NICK_CHARSET);
}

// =============================================================================
// Default and custom names
// =============================================================================

#[test]
fn test_other_species_english_name_fishy() {
    let record = Record::new(25, "Bulbasaur", LanguageId::English, GameVersion::SN).nicknamed();
    let results = check_nickname(&record, &wild(25));
    assert_eq!(results, vec![CheckResult::fishy(CheckIdentifier::Nickname, messages::NICK_MATCH_SPECIES)]);
}

#[test]
fn test_straight_apostrophe_normalized() {
    // Farfetch’d is stored with the curly apostrophe
    let record = Record::new(1, "Farfetch'd", LanguageId::English, GameVersion::X).nicknamed();
    let results = check_nickname(&record, &wild(1));
    assert_eq!(results[0].severity, Severity::Fishy);
}

#[test]
fn test_filtered_custom_name() {
    let record = Record::new(25, "Sh1tty", LanguageId::English, GameVersion::X).nicknamed();
    let results = check_nickname(&record, &wild(25));
    assert_eq!(results.len(), 2);
    assert!(results[1].is_invalid());
    assert!(results[1].comment.ends_with("Sh1t"));
}

#[test]
fn test_fishy_name_skips_filter() {
    let verifier = NicknameVerifier::from_config(&VerifierConfig {
        denylist: vec!["saur".to_string()],
        ..VerifierConfig::default()
    })
    .unwrap();
    let record = Record::new(25, "Bulbasaur", LanguageId::English, GameVersion::X).nicknamed();
    let results = verifier.verify(&LegalityData::new(&record, &wild(25)));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].severity, Severity::Fishy);
}

#[test]
fn test_unflagged_default_names() {
    let x = Record::new(129, "Karpador", LanguageId::German, GameVersion::Y);
    assert!(check_nickname(&x, &wild(129))[0].is_valid());

    let platinum = Record::new(129, "KARPADOR", LanguageId::German, GameVersion::Pt);
    assert!(check_nickname(&platinum, &wild(129))[0].is_valid());

    let gen3_french = Record::new(1, "BULBIZARRE", LanguageId::French, GameVersion::E);
    assert!(check_nickname(&gen3_french, &wild(1))[0].is_valid());

    let wrong_language = Record::new(129, "Magikarp", LanguageId::German, GameVersion::Y);
    assert!(check_nickname(&wrong_language, &wild(129))[0].is_invalid());
}

#[test]
fn test_traded_egg_any_language() {
    let record = Record::new(129, "Magicarpe", LanguageId::German, GameVersion::X).traded_egg();
    assert!(check_nickname(&record, &Encounter::Egg { species: 129 })[0].is_invalid());

    let custom = Record::new(129, "Karpi", LanguageId::German, GameVersion::X).traded_egg();
    assert!(check_nickname(&custom, &Encounter::Egg { species: 129 })[0].is_valid());
}

// =============================================================================
// Eggs
// =============================================================================

#[test]
fn test_gen2_egg_custom_name_valid() {
    let record = Record::new(25, "PICHU", LanguageId::English, GameVersion::C).egg().nicknamed();
    let results = check_nickname(&record, &Encounter::Egg { species: 25 });
    assert_eq!(results, vec![CheckResult::valid(CheckIdentifier::Egg, messages::EGG_NAME_MATCH)]);
}

#[test]
fn test_format4_eggs() {
    let plain = Record::new(25, "Egg", LanguageId::English, GameVersion::P).egg();
    let results = check_nickname(&plain, &Encounter::Egg { species: 25 });
    assert!(results.iter().all(|r| r.comment != messages::EGG_FLAG_MISSING));
    assert!(results.iter().all(CheckResult::is_valid));

    let flagged = plain.nicknamed();
    let results = check_nickname(&flagged, &Encounter::Egg { species: 25 });
    assert_eq!(results[0], CheckResult::invalid(CheckIdentifier::Egg, messages::EGG_FLAG_SET));

    let hatched = Record::new(25, "PIKACHU", LanguageId::English, GameVersion::P);
    let results = check_nickname(&hatched, &Encounter::Egg { species: 25 });
    assert!(results.iter().all(|r| r.identifier != CheckIdentifier::Egg));
}

#[test]
fn test_format7_gift_egg() {
    let gift = Encounter::Static(EncounterStatic::gift_egg(25));
    let record = Record::new(25, "Egg", LanguageId::English, GameVersion::MN).egg();
    assert!(check_nickname(&record, &gift).iter().all(CheckResult::is_valid));
}

// =============================================================================
// Passes and configuration
// =============================================================================

#[test]
fn test_pass_report() {
    let pass = VerificationPass::new(vec![Box::new(NicknameVerifier::bundled())]);
    assert_eq!(pass.pass_id(), "nickname");

    let record = Record::new(25, "Bulbasaur", LanguageId::English, GameVersion::X).nicknamed();
    let encounter = wild(25);
    let report = pass.run(&LegalityData::new(&record, &encounter));
    assert_eq!(report.severity, Severity::Fishy);
    assert!(report.is_legal());
    assert!(report.input_hash.starts_with("blake3:"));
}

#[test]
fn test_config_from_yaml() {
    let config = VerifierConfig::from_yaml("word_filter: false\n").unwrap();
    let verifier = NicknameVerifier::from_config(&config).unwrap();
    let record = Record::new(25, "BullShit", LanguageId::English, GameVersion::X).nicknamed();
    let results = verifier.verify(&LegalityData::new(&record, &wild(25)));
    assert!(results.iter().all(CheckResult::is_valid));
}

#[test]
fn test_external_data_dir() {
    let dir = std::env::temp_dir().join(format!("nickname-verifier-{}", std::process::id()));
    std::fs::create_dir_all(dir.join("species")).unwrap();
    std::fs::write(
        dir.join("tables.json"),
        r#"{ "trades": { "xy": [[], [], ["Zippy", "Ada"]] } }"#,
    )
    .unwrap();
    std::fs::write(dir.join("species").join("en.txt"), "Egg\nBulbasaur\nIvysaur\n").unwrap();

    let config = VerifierConfig {
        data_dir: Some(dir.clone()),
        ..VerifierConfig::default()
    };
    let verifier = NicknameVerifier::from_config(&config).unwrap();
    assert_eq!(verifier.tables().species().bound(), 3);

    let record = Record::new(2, "Zippy", LanguageId::English, GameVersion::X)
        .nicknamed()
        .with_trainer("Ada", 1, 0);
    let trade = Encounter::Trade(legality_core::EncounterTrade::new(2, 0));
    let results = verifier.verify(&LegalityData::new(&record, &trade));
    assert!(results.iter().all(CheckResult::is_valid));

    let too_far = Record::new(25, "Pikachu", LanguageId::English, GameVersion::X);
    let results = verifier.verify(&LegalityData::new(&too_far, &wild(25)));
    assert_eq!(results[0].severity, Severity::Indeterminate);

    std::fs::remove_dir_all(dir).unwrap();
}
