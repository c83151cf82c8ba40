mod common;

use common::{petgraph_random, undigraph_random, RandomEdges, RANDOM_SEED};
use fastrand::Rng;
use petgraph::stable_graph::{NodeIndex, StableUnGraph};
use undigraph::UndirectedGraph;

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn undigraph_insert_remove<const N: usize>(density: f32) {
    let mut rng = Rng::with_seed(RANDOM_SEED);

    let mut graph = UndirectedGraph::new();

    let mut vertices = (0..N)
        .map(|_| graph.insert_vertex(rng.u32(0..100)))
        .collect::<Vec<_>>();

    let mut edges = RandomEdges::new(N, density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        graph
            .insert_edge(vertices[u], vertices[v], rng.f32())
            .unwrap();
    }

    for _ in 0..(N / 4) {
        let u = vertices.swap_remove(rng.usize(..vertices.len()));
        graph.remove_vertex(u).unwrap();
    }

    let mut edges = RandomEdges::new(N / 4, density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        if let Ok(Some(e)) = graph.edge_between(vertices[u], vertices[v]) {
            graph.remove_edge(e).unwrap();
        }
    }

    let mut edges = RandomEdges::new(N - (N / 4), density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        graph
            .insert_edge(vertices[u], vertices[v], rng.f32())
            .unwrap();
    }
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn petgraph_stable_add_remove<const N: usize>(density: f32) {
    let mut rng = Rng::with_seed(RANDOM_SEED);

    let mut graph = StableUnGraph::<_, _>::with_capacity(0, 0);

    let mut vertices = (0..N)
        .map(|_| graph.add_node(rng.u32(0..100)))
        .collect::<Vec<_>>();

    let mut edges = RandomEdges::new(N, density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        graph.add_edge(vertices[u], vertices[v], rng.f32());
    }

    for _ in 0..(N / 4) {
        let u = vertices.swap_remove(rng.usize(..vertices.len()));
        graph.remove_node(u);
    }

    let mut edges = RandomEdges::new(N / 4, density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        if let Some(e) = graph.find_edge(vertices[u], vertices[v]) {
            graph.remove_edge(e);
        }
    }

    let mut edges = RandomEdges::new(N - (N / 4), density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        graph.add_edge(vertices[u], vertices[v], rng.f32());
    }
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5])]
fn undigraph_are_adjacent<const N: usize>(bencher: divan::Bencher, density: f32) {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let (graph, vertices) = undigraph_random(N, density, &mut rng);

    bencher.bench_local(|| {
        let u = vertices[rng.usize(..N)];
        let v = vertices[rng.usize(..N)];
        graph.are_adjacent(u, v).unwrap()
    });
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5])]
fn petgraph_stable_contains_edge<const N: usize>(bencher: divan::Bencher, density: f32) {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let graph = petgraph_random(N, density, &mut rng);

    bencher.bench_local(|| {
        let u = NodeIndex::new(rng.usize(..N));
        let v = NodeIndex::new(rng.usize(..N));
        graph.contains_edge(u, v)
    });
}
