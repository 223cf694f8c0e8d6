use criterion::{black_box, criterion_group, criterion_main, Criterion};
use expense_splitter::aggregation::settlement::SettlementEngine;
use expense_splitter::aggregation::totals::{total_by_payee, PayeeTotals};
use expense_splitter::core::payee::{PayeeName, Roster};
use expense_splitter::simulation::sample::{generate_sample_expenses, SampleConfig};

fn bench_total_by_payee(c: &mut Criterion) {
    let config = SampleConfig {
        count: 10_000,
        ..Default::default()
    };
    let list = generate_sample_expenses(&config);
    let rahul = PayeeName::new("Rahul");

    c.bench_function("total_by_payee_10k", |b| {
        b.iter(|| total_by_payee(black_box(&list), black_box(&rahul)))
    });
}

fn bench_payee_totals(c: &mut Criterion) {
    let config = SampleConfig {
        count: 10_000,
        ..Default::default()
    };
    let list = generate_sample_expenses(&config);

    c.bench_function("payee_totals_10k", |b| {
        b.iter(|| PayeeTotals::from_records(black_box(&list)))
    });
}

fn bench_settlement(c: &mut Criterion) {
    let config = SampleConfig {
        count: 10_000,
        ..Default::default()
    };
    let list = generate_sample_expenses(&config);
    let roster = Roster::default();

    c.bench_function("settlement_10k", |b| {
        b.iter(|| SettlementEngine::settle(black_box(&list), black_box(&roster)))
    });
}

criterion_group!(
    benches,
    bench_total_by_payee,
    bench_payee_totals,
    bench_settlement
);
criterion_main!(benches);
