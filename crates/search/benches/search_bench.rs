//! Benchmarks for combo generation and the cross-core search.

use arkgrid_core::{CoreConfig, GemType, GridProblem, Inventory, Rarity, SearchConfig, Solver};
use arkgrid_search::{generate_combos, rank_combos, GridOptimizer};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn stocked_inventory(per_type: usize) -> Inventory {
    let mut inventory = Inventory::new();
    for (i, gem) in GemType::ALL.iter().enumerate() {
        inventory.set_gems(*gem, (0..per_type).map(|k| ((i * 7 + k * 3) % 21) as u32).collect());
    }
    inventory
}

fn generation_benchmark(c: &mut Criterion) {
    let sorted = stocked_inventory(6).sorted();
    let config = SearchConfig::default();

    c.bench_function("generate_and_rank_ancient", |b| {
        b.iter(|| {
            let combos = generate_combos(black_box(&sorted), 17);
            black_box(rank_combos(combos, &config))
        })
    });
}

fn search_benchmark(c: &mut Criterion) {
    let problem = GridProblem::new(stocked_inventory(6))
        .with_cores([CoreConfig::new(Rarity::Ancient); 3]);

    let mut group = c.benchmark_group("three_core_search");
    group.sample_size(10);
    for threads in [1usize, 0] {
        let optimizer = GridOptimizer::new(SearchConfig::new().with_threads(threads));
        group.bench_with_input(BenchmarkId::from_parameter(threads), &problem, |b, p| {
            b.iter(|| optimizer.solve(black_box(p)))
        });
    }
    group.finish();
}

criterion_group!(benches, generation_benchmark, search_benchmark);
criterion_main!(benches);
