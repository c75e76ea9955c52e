use criterion::{black_box, criterion_group, criterion_main, Criterion};
use negamax_ponder::agent::ai::{search_fixed_depth, MaterialHeuristic};
use negamax_ponder::game_repr::Position;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_perft_depth_3(c: &mut Criterion) {
    let mut pos = Position::default();
    c.bench_function("perft depth 3", |b| b.iter(|| black_box(pos.perft(3))));
}

fn bench_perft_kiwipete_2(c: &mut Criterion) {
    let mut pos = Position::from_fen(KIWIPETE).unwrap();
    c.bench_function("perft kiwipete depth 2", |b| b.iter(|| black_box(pos.perft(2))));
}

fn bench_search_depth_3(c: &mut Criterion) {
    let mut pos = Position::default();
    c.bench_function("search depth 3", |b| {
        b.iter(|| black_box(search_fixed_depth(&mut pos, &MaterialHeuristic, 3)))
    });
}

criterion_group!(benches, bench_perft_depth_3, bench_perft_kiwipete_2, bench_search_depth_3);
criterion_main!(benches);
