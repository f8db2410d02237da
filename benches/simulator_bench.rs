//! Simulator throughput benchmarks for both damage models.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use dotsim::burn::{simulate_burn_with, Item, TraceMode};
use dotsim::data::BurnScenario;
use dotsim::poison::simulate_poison;

fn bench_poison(c: &mut Criterion) {
    let mut group = c.benchmark_group("poison");
    for initial in [10i64, 1_000, 100_000] {
        group.throughput(Throughput::Elements(initial as u64));
        group.bench_with_input(format!("full_decay_{initial}"), &initial, |b, &initial| {
            b.iter(|| black_box(simulate_poison(initial, initial)));
        });
    }
    group.finish();
}

fn bench_burn(c: &mut Criterion) {
    let reference = BurnScenario::reference();
    let many_items: Vec<Item> = (0..32)
        .map(|i| Item::new(format!("item-{i}"), i % 5, 0.5 + f64::from(i) * 0.25))
        .collect();

    let mut group = c.benchmark_group("burn");
    group.sample_size(100);

    group.bench_function("reference_40s", |b| {
        b.iter(|| black_box(simulate_burn_with(&reference.items, reference.duration, TraceMode::Off)));
    });

    group.bench_function("reference_40s_traced", |b| {
        b.iter(|| {
            black_box(simulate_burn_with(
                &reference.items,
                reference.duration,
                TraceMode::Events,
            ))
        });
    });

    // Long run: 20k ticks across 32 items.
    group.throughput(Throughput::Elements(20_000));
    group.bench_function("32_items_10000s", |b| {
        b.iter(|| black_box(simulate_burn_with(&many_items, 10_000.0, TraceMode::Off)));
    });

    group.finish();
}

criterion_group!(benches, bench_poison, bench_burn);
criterion_main!(benches);
