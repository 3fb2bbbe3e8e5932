use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;
use waypath_lib::{
    build_graph, find_bounded_simple_route, find_coverage_route, load_topology, plan_route, Graph,
    Journey, NoProgress, NodeId, RouteRequest, DEFAULT_HOP_CUTOFF,
};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/europe_topology.json")
}

static GRAPH: Lazy<Graph> = Lazy::new(|| {
    let topology = load_topology(&fixture_path()).expect("fixture loads");
    build_graph(&topology).expect("fixture is valid")
});
static STRICT_REQUEST: Lazy<RouteRequest> =
    Lazy::new(|| RouteRequest::strict(["Lisbon", "Berlin", "Rome", "London"]));
static LOOSE_REQUEST: Lazy<RouteRequest> =
    Lazy::new(|| RouteRequest::loose(["Lisbon", "Berlin", "Rome", "Prague", "London"]));

fn benchmark_routing(c: &mut Criterion) {
    let graph = &*GRAPH;

    c.bench_function("strict_lisbon_london", |b| {
        let request = &*STRICT_REQUEST;
        b.iter(|| {
            let route = plan_route(graph, request).expect("route exists");
            black_box(route.hop_count())
        });
    });

    c.bench_function("loose_lisbon_london", |b| {
        let request = &*LOOSE_REQUEST;
        b.iter(|| {
            let route = plan_route(graph, request).expect("route exists");
            black_box(route.hop_count())
        });
    });

    c.bench_function("coverage_london_zurich", |b| {
        let journey = Journey::resolve(graph, &["London", "Paris", "Zurich"]).expect("journey");
        b.iter(|| {
            let route = find_coverage_route(graph, &journey).expect("weighted graph");
            black_box(route.map(|route| route.hop_count()))
        });
    });

    c.bench_function("simple_london_berlin_lisbon", |b| {
        let journey = Journey::resolve(graph, &["London", "Berlin", "Lisbon"]).expect("journey");
        let targets: Vec<NodeId> = graph.node_ids().collect();
        b.iter(|| {
            let route = find_bounded_simple_route(
                graph,
                &journey,
                &targets,
                DEFAULT_HOP_CUTOFF,
                &mut NoProgress,
            );
            black_box(route.map(|route| route.hop_count()))
        });
    });
}

criterion_group!(benches, benchmark_routing);
criterion_main!(benches);
