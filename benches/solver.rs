use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use rand::{rngs::StdRng, Rng, SeedableRng};
use waygraph::{Graph, Vec2};

/// A width x height lattice with jittered node positions, connected to the
/// right and downward neighbors. Key of (x, y) is "x_y".
fn lattice(width: usize, height: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(4);
    let mut graph = Graph::new();

    for y in 0..height {
        for x in 0..width {
            let jitter = Vec2::new(rng.gen_range(-3.0..3.0), rng.gen_range(-3.0..3.0));
            let pos = Vec2::new(x as f32 * 10.0, y as f32 * 10.0) + jitter;
            graph.add_node(format!("{}_{}", x, y), pos);
        }
    }
    for y in 0..height {
        for x in 0..width {
            let key = format!("{}_{}", x, y);
            if x + 1 < width {
                graph.connect(&key, &format!("{}_{}", x + 1, y));
            }
            if y + 1 < height {
                graph.connect(&key, &format!("{}_{}", x, y + 1));
            }
        }
    }
    graph
}

fn criterion_benchmark(c: &mut Criterion) {
    let graph = lattice(32, 32);
    let origin = graph.node_id("0_0").unwrap();
    let target = graph.node_id("31_31").unwrap();

    c.bench_function("find_path 32x32 corner to corner", |b| {
        b.iter(|| graph.find_path(origin, target).unwrap())
    });

    c.bench_function("move node and invalidate 32x32", |b| {
        b.iter_batched(
            || graph.clone(),
            |mut graph| graph.set_node_position("16_16", Vec2::new(0.0, 0.0)),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
