//! 图算法基准测试

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graphalgo::{
    BellmanFord, CapacityMatrix, Connectivity, Dijkstra, Direction, EdmondsKarp, FordFulkerson,
    GraphStore, Traversal,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 随机稀疏矩阵，非零项取值 [1, 100)
fn random_matrix(n: usize, density: f64, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|u| {
            (0..n)
                .map(|v| {
                    if u != v && rng.gen_bool(density) {
                        rng.gen_range(1..100) as f64
                    } else {
                        0.0
                    }
                })
                .collect()
        })
        .collect()
}

fn random_store(n: usize) -> GraphStore<usize> {
    let matrix = random_matrix(n, 0.1, n as u64)
        .into_iter()
        .map(|row| row.into_iter().map(|w| if w > 0.0 { 1.0 } else { 0.0 }).collect())
        .collect();
    GraphStore::new((0..n).collect(), matrix).unwrap()
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    for n in [100, 500] {
        let graph = random_store(n).graph();
        group.bench_with_input(BenchmarkId::new("bfs", n), &graph, |b, g| {
            b.iter(|| Traversal::new(g).bfs(black_box(&0)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("dfs", n), &graph, |b, g| {
            b.iter(|| Traversal::new(g).dfs(black_box(&0)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("components", n), &graph, |b, g| {
            b.iter(|| Connectivity::new(g).connected_components())
        });
    }
    group.finish();
}

fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");
    for n in [100, 300] {
        let store = GraphStore::new((0..n).collect(), random_matrix(n, 0.1, 7)).unwrap();
        let graph = store.weighted(Direction::Directed);
        group.bench_with_input(BenchmarkId::new("dijkstra", n), &graph, |b, g| {
            b.iter(|| Dijkstra::new(g).run(black_box(&0)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("bellman_ford", n), &graph, |b, g| {
            b.iter(|| BellmanFord::from_graph(g).run(black_box(&0)).unwrap())
        });
    }
    group.finish();
}

fn bench_max_flow(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_flow");
    for n in [50, 150] {
        let capacity = CapacityMatrix::new(random_matrix(n, 0.15, 42)).unwrap();
        group.bench_with_input(BenchmarkId::new("ford_fulkerson", n), &capacity, |b, m| {
            b.iter(|| FordFulkerson::new(m).max_flow(0, n - 1).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("edmonds_karp", n), &capacity, |b, m| {
            b.iter(|| EdmondsKarp::new(m).max_flow(0, n - 1).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_traversal, bench_shortest_path, bench_max_flow);
criterion_main!(benches);
