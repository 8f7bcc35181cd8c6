use criterion::{black_box, criterion_group, criterion_main, Criterion};
use game_helper::battle::{simulate, RngDice};
use game_helper::odds::{estimate, exact_win_probability};

fn bench_simulate(c: &mut Criterion) {
    let mut dice = RngDice::seeded(42);
    c.bench_function("simulate 50 vs 50", |b| {
        b.iter(|| simulate(black_box(50), black_box(50), &mut dice))
    });
}

fn bench_exact(c: &mut Criterion) {
    c.bench_function("exact 100 vs 100", |b| {
        b.iter(|| exact_win_probability(black_box(100), black_box(100)).unwrap_or_default())
    });
}

fn bench_estimate(c: &mut Criterion) {
    c.bench_function("estimate 10 vs 10, 1000 trials", |b| {
        b.iter(|| estimate(black_box(10), black_box(10), 1_000, 7))
    });
}

criterion_group!(benches, bench_simulate, bench_exact, bench_estimate);
criterion_main!(benches);
