use criterion::{black_box, criterion_group, criterion_main, Criterion};
use legality_core::{Encounter, EncounterTrade, GameVersion, LanguageId, LegalityData, Record, Verifier};
use nickname_verifier::NicknameVerifier;

fn bench_verify(c: &mut Criterion) {
    let verifier = NicknameVerifier::bundled();

    let custom = Record::new(25, "Sparky", LanguageId::English, GameVersion::X).nicknamed();
    let wild = Encounter::Wild { species: 25 };
    c.bench_function("custom_nickname", |b| {
        b.iter(|| verifier.verify(black_box(&LegalityData::new(&custom, &wild))))
    });

    let surge = Record::new(25, "FUNKI", LanguageId::English, GameVersion::HG)
        .nicknamed()
        .with_trainer("BOB", 26491, 0);
    let trade = Encounter::Trade(EncounterTrade::new(25, 6));
    c.bench_function("hgss_trade_disambiguation", |b| {
        b.iter(|| verifier.verify(black_box(&LegalityData::new(&surge, &trade))))
    });
}

criterion_group!(benches, bench_verify);
criterion_main!(benches);
