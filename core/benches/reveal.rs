use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweeper_core::*;

fn bench_open_board(c: &mut Criterion) {
    let config = GameConfig::new(Coord::MAX, Coord::MAX, 0).unwrap();

    c.bench_function("reveal/open_255x255", |b| {
        b.iter_batched(
            || GameEngine::new(config, 0).unwrap(),
            |mut engine| black_box(engine.reveal((127, 127)).unwrap()),
            BatchSize::LargeInput,
        )
    });
}

fn bench_sweep(c: &mut Criterion) {
    let config = GameConfig::new(16, 30, 99).unwrap();

    c.bench_function("reveal/sweep_expert", |b| {
        b.iter_batched(
            || GameEngine::new(config, 42).unwrap(),
            |mut engine| {
                for row in 0..16 {
                    for col in 0..30 {
                        if engine.has_mine_at((row, col)) == Ok(false) {
                            black_box(engine.reveal((row, col)).unwrap());
                        }
                    }
                }
                engine
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_placement(c: &mut Criterion) {
    let dense = GameConfig::new(30, 30, 800).unwrap();

    for (name, placement) in [
        ("placement/shuffle_dense", Placement::Shuffle),
        ("placement/rejection_dense", Placement::Rejection),
    ] {
        let mut generator = RandomMineGenerator::with_placement(1, placement);
        c.bench_function(name, |b| b.iter(|| black_box(generator.generate(dense))));
    }
}

criterion_group!(benches, bench_open_board, bench_sweep, bench_placement);
criterion_main!(benches);
