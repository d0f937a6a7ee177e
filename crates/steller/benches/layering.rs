use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use steller::{Direction, EdgeLabel, LayoutGraph, NodeLabel, compute_layering};

/// A dense layered DAG with skewed fan-in and the occasional three-layer edge, so the
/// normalizer has segments to build.
fn layered_dag(layers: usize, width: usize) -> LayoutGraph {
    let mut g = LayoutGraph::new();
    for layer in 0..layers {
        for slot in 0..width {
            g.add_node(format!("n{layer}_{slot}"), NodeLabel::default());
        }
    }
    for layer in 1..layers {
        for slot in 0..width {
            let target = format!("n{layer}_{slot}");
            g.add_edge(
                format!("n{}_{slot}", layer - 1),
                target.clone(),
                EdgeLabel::default(),
            );
            g.add_edge(
                format!("n{}_{}", layer - 1, (slot * 7 + 3) % width),
                target.clone(),
                EdgeLabel::default(),
            );
            if layer >= 3 && slot % 5 == 0 {
                g.add_edge(format!("n{}_{slot}", layer - 3), target, EdgeLabel::default());
            }
        }
    }
    g
}

fn bench_compute_layering(c: &mut Criterion) {
    let base = layered_dag(24, 32);

    for direction in [Direction::FromSource, Direction::FromSink] {
        c.bench_function(&format!("compute_layering/{direction}"), |b| {
            b.iter(|| {
                let mut g = base.clone();
                black_box(compute_layering(&mut g, direction).unwrap())
            })
        });
    }
}

criterion_group!(benches, bench_compute_layering);
criterion_main!(benches);
