use proptest::{
    collection::vec,
    prelude::any,
    strategy::{Just, Strategy},
};

use crate::storage::UndirectedGraph;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyParams {
    max_size: usize,
    allow_loops: bool,
    edge_factor: usize,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 32,
            allow_loops: false,
            edge_factor: 2,
        }
    }
}

impl StrategyParams {
    /// Maximum number of vertices.
    pub fn max_size(self, max_size: usize) -> Self {
        Self {
            max_size: max_size.max(1),
            ..self
        }
    }

    pub fn allow_loops(self) -> Self {
        Self {
            allow_loops: true,
            ..self
        }
    }

    /// Maximum number of edges relative to the number of vertices.
    pub fn edge_factor(self, edge_factor: usize) -> Self {
        Self {
            edge_factor,
            ..self
        }
    }
}

pub fn graph<V, E>(
    vertex: V,
    edge: E,
) -> impl Strategy<Value = UndirectedGraph<V::Value, E::Value>>
where
    V: Strategy + Clone,
    E: Strategy + Clone,
{
    graph_with_params(vertex, edge, StrategyParams::default())
}

/// Generates graphs with vertex and edge payloads drawn from the given
/// strategies. Parallel edges may appear, self-loops only if enabled.
///
/// The graphs are built by plain insertions and then a random subset of
/// vertices is removed, so that the handles have holes and non-zero
/// generations.
pub fn graph_with_params<V, E>(
    vertex: V,
    edge: E,
    params: StrategyParams,
) -> impl Strategy<Value = UndirectedGraph<V::Value, E::Value>>
where
    V: Strategy + Clone,
    E: Strategy + Clone,
{
    (1..=params.max_size)
        .prop_flat_map(move |n| {
            (
                vec(vertex.clone(), n),
                vec((0..n, 0..n, edge.clone()), 0..=n * params.edge_factor),
                vec(any::<bool>(), n),
                Just(params.allow_loops),
            )
        })
        .prop_map(|(vertices, edges, removed, allow_loops)| {
            let mut graph = UndirectedGraph::with_capacity(vertices.len(), edges.len());

            let ids = vertices
                .into_iter()
                .map(|vertex| graph.insert_vertex(vertex))
                .collect::<Vec<_>>();

            for (u, v, edge) in edges {
                if u == v && !allow_loops {
                    continue;
                }

                graph
                    .insert_edge(ids[u], ids[v], edge)
                    .expect("endpoints are live");
            }

            // Keep at least one vertex in the graph.
            for (id, _) in ids.iter().zip(removed).skip(1).filter(|(_, r)| *r) {
                graph.remove_vertex(*id).expect("vertex is live");
            }

            graph
        })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::infra::testing::check_consistency;

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_generated_graph_is_consistent(graph in graph_with_params(any::<u8>(), any::<u8>(), StrategyParams::default().allow_loops())) {
            check_consistency(&graph).unwrap();
            prop_assert!(graph.vertex_count() >= 1);
        }
    }
}
