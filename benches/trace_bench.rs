use circuit_boards::get_valid_boards;
use circuit_tracer::{CircuitBoard, CircuitTracer, StorageMode};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn open_board(n: usize) -> CircuitBoard {
    let mut text = format!("{n} {n}\n");
    for row in 0..n {
        let line = (0..n)
            .map(|col| match (row, col) {
                (0, 0) => "S",
                (r, c) if r == n - 1 && c == n - 1 => "E",
                _ => "1",
            })
            .collect::<Vec<_>>()
            .join(" ");
        text.push_str(&line);
        text.push('\n');
    }
    text.parse().expect("Generated board is valid")
}

fn fixture_bench(c: &mut Criterion) {
    let boards = get_valid_boards()
        .into_iter()
        .map(|(text, _)| text.parse::<CircuitBoard>().expect("Fixture is valid"))
        .collect::<Vec<_>>();
    for mode in [StorageMode::Stack, StorageMode::Queue] {
        let tracer = CircuitTracer::new(mode);
        c.bench_function(format!("fixtures, {mode}").as_str(), |b| {
            b.iter(|| {
                for board in &boards {
                    black_box(tracer.trace(board));
                }
            })
        });
    }
}

fn open_bench(c: &mut Criterion) {
    let board = open_board(4);
    for mode in [StorageMode::Stack, StorageMode::Queue] {
        for bound_by_best in [true, false] {
            let mut tracer = CircuitTracer::new(mode);
            tracer.bound_by_best = bound_by_best;
            let bound_str = if bound_by_best { " (bounded)" } else { "" };
            c.bench_function(format!("open 4x4, {mode}{bound_str}").as_str(), |b| {
                b.iter(|| black_box(tracer.trace(&board)))
            });
        }
    }
}

criterion_group!(benches, fixture_bench, open_bench);
criterion_main!(benches);
