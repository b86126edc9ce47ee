use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use samegame_core::*;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        group.bench_with_input(
            BenchmarkId::from_parameter(difficulty.colors()),
            &difficulty,
            |b, &difficulty| {
                let config = GameConfig::new((15, 20), difficulty);
                b.iter(|| black_box(RandomGridGenerator::new(42).generate(black_box(config))))
            },
        );
    }

    group.finish();
}

fn bench_advisor_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("advisor_game");

    for size in [(6, 9), (15, 20), (30, 40)] {
        let config = GameConfig::new(size, Difficulty::Medium);
        let engine = PlayEngine::generate(config, RandomGridGenerator::new(408)).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size.0, size.1)),
            &engine,
            |b, engine| {
                b.iter(|| {
                    let mut engine = engine.clone();
                    while let Some(hint) = engine.next_best_move() {
                        let _ = engine.process_click(hint, &mut NoFeedback);
                    }
                    black_box(engine.points())
                })
            },
        );
    }

    group.finish();
}

fn bench_find_best_move(c: &mut Criterion) {
    let config = GameConfig::new((30, 40), Difficulty::Hard);
    let grid = RandomGridGenerator::new(7).generate(config).unwrap();

    c.bench_function("find_best_move_30x40", |b| {
        b.iter(|| black_box(find_best_move(black_box(&grid))))
    });
}

criterion_group!(benches, bench_generate, bench_advisor_game, bench_find_best_move);
criterion_main!(benches);
