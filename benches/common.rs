#![allow(dead_code)]

use fastrand::Rng;
use petgraph::stable_graph::{NodeIndex, StableUnGraph};
use undigraph::{UndirectedGraph, VertexId};

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_bound: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_bound,
            p,
        }
    }

    // Samples the lower triangle of the adjacency matrix with geometric skips.
    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n {
            Some((*v, *w))
        } else {
            None
        }
    }
}

pub fn undigraph_random(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> (UndirectedGraph<u32, f32>, Vec<VertexId>) {
    let mut graph = UndirectedGraph::with_capacity(vertex_count, 0);

    let vertices = (0..vertex_count)
        .map(|_| graph.insert_vertex(rng.u32(0..100)))
        .collect::<Vec<_>>();

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph
            .insert_edge(vertices[u], vertices[v], rng.f32())
            .unwrap();
    }

    (graph, vertices)
}

pub fn petgraph_random(vertex_count: usize, density: f32, rng: &mut Rng) -> StableUnGraph<u32, f32> {
    let mut graph = StableUnGraph::with_capacity(vertex_count, 0);

    for _ in 0..vertex_count {
        graph.add_node(rng.u32(0..100));
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), rng.f32());
    }

    graph
}
