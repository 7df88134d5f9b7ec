use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use quince_chess::engines::engine_negamax::NegamaxEngine;
use quince_chess::engines::engine_trait::Engine;
use quince_chess::game_state::GameState;
use quince_chess::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [u64],
}

const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: STARTPOS_FEN,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "castling_midgame",
        fen: "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
        expected_nodes: &[26],
    },
];

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES {
        let game = GameState::from_fen(case.fen).expect("benchmark FEN should parse");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft(&game, depth).expect("perft should run");
            assert_eq!(
                warmup as u64, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let bench_name = format!("{}_d{}", case.name, depth);
            let bench_game = game.clone();

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(black_box(&bench_game), black_box(depth))
                            .expect("perft benchmark run should succeed");
                        assert_eq!(count as u64, *expected);
                        black_box(count)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_negamax_choose(c: &mut Criterion) {
    let mut group = c.benchmark_group("negamax_choose");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    let game = GameState::from_fen(STARTPOS_FEN).expect("benchmark FEN should parse");
    for depth in [2u8, 3u8] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("startpos_d{depth}")),
            &depth,
            |b, &depth| {
                b.iter(|| {
                    let mut engine = NegamaxEngine::new(depth);
                    let chosen = engine
                        .choose_move(black_box(&game))
                        .expect("search benchmark run should succeed");
                    assert!(chosen.is_some());
                    black_box(chosen)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(search_benches, bench_perft, bench_negamax_choose);
criterion_main!(search_benches);
