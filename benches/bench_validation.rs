use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use flowedit::{can_connect, validate_flow, EdgeStyle, FlowEdge, FlowNode, Position};

fn build_chain(node_count: usize) -> (Vec<FlowNode>, Vec<FlowEdge>) {
    let nodes: Vec<FlowNode> = (0..node_count)
        .map(|i| {
            FlowNode::text(
                format!("n{}", i),
                Position::new(0.0, (i as f64) * 120.0),
                format!("message {}", i),
            )
        })
        .collect();

    let mut edges = Vec::new();
    if node_count > 1 {
        for i in 0..(node_count - 1) {
            edges.push(FlowEdge {
                id: format!("e{}", i),
                source: format!("n{}", i),
                target: format!("n{}", i + 1),
                style: EdgeStyle::Smoothstep,
            });
        }
    }

    (nodes, edges)
}

fn bench_validate_flow(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_flow");
    for size in [10, 100, 1000] {
        let (nodes, edges) = build_chain(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| validate_flow(black_box(&nodes), black_box(&edges)));
        });
    }
    group.finish();
}

fn bench_can_connect(c: &mut Criterion) {
    let mut group = c.benchmark_group("can_connect");
    for size in [10, 100, 1000] {
        let (_, edges) = build_chain(size);
        // Tail node has a free outgoing slot.
        let tail = format!("n{}", size - 1);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| can_connect(black_box(&tail), black_box("n0"), black_box(&edges)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_validate_flow, bench_can_connect);
criterion_main!(benches);
