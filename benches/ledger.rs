use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tint::core::codec;
use tint::core::{calculate_delta, PlayerName, ScoreLedger, ScoreModifiers, ScoreRecord, TurnScore};
use tint::types::LEDGER_CAPACITY;

fn full_ledger() -> ScoreLedger {
    let mut ledger = ScoreLedger::new();
    for i in 0..LEDGER_CAPACITY {
        let name = PlayerName::new(&format!("player{}", i));
        ledger.insert(ScoreRecord::new(name, 100 * (i as i32 + 1), i as i64));
    }
    ledger
}

fn bench_encode(c: &mut Criterion) {
    let ledger = full_ledger();

    c.bench_function("encode_full_ledger", |b| {
        b.iter(|| codec::encode(black_box(&ledger)))
    });
}

fn bench_decode(c: &mut Criterion) {
    let bytes = codec::encode(&full_ledger());

    c.bench_function("decode_full_ledger", |b| {
        b.iter(|| codec::decode(black_box(&bytes)))
    });
}

fn bench_insert(c: &mut Criterion) {
    let ledger = full_ledger();
    let record = ScoreRecord::new(PlayerName::new("abz"), 550, 42);

    c.bench_function("insert_mid_table", |b| {
        b.iter(|| {
            let mut ledger = ledger.clone();
            ledger.insert(black_box(record))
        })
    });
}

fn bench_report(c: &mut Criterion) {
    let ledger = full_ledger();

    c.bench_function("report_full_ledger", |b| {
        b.iter(|| ledger.report(black_box(Some(3))).to_string())
    });
}

fn bench_delta(c: &mut Criterion) {
    let turn = TurnScore {
        level: 5,
        drop_count: 12,
        cleared_lines: 4,
    };
    let modifiers = ScoreModifiers {
        preview: true,
        guide_lines: false,
    };

    c.bench_function("calculate_delta", |b| {
        b.iter(|| calculate_delta(black_box(turn), black_box(modifiers)))
    });
}

criterion_group!(
    benches,
    bench_encode,
    bench_decode,
    bench_insert,
    bench_report,
    bench_delta
);
criterion_main!(benches);
