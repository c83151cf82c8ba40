use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::{
    core::id::{EdgeId, VertexId},
    storage::UndirectedGraph,
};

pub fn create_complete<V, E>(vertex_count: usize) -> UndirectedGraph<V, E>
where
    V: Default,
    E: Default,
{
    let mut graph = UndirectedGraph::with_capacity(
        vertex_count,
        vertex_count * vertex_count.saturating_sub(1) / 2,
    );

    let vertices = (0..vertex_count)
        .map(|_| graph.insert_vertex(V::default()))
        .collect::<Vec<_>>();

    for (i, u) in vertices.iter().enumerate() {
        for v in vertices[i + 1..].iter() {
            graph
                .insert_edge(*u, *v, E::default())
                .unwrap_or_else(|_| unreachable!("endpoints are live"));
        }
    }

    graph
}

pub fn create_path<V, E>(vertex_count: usize) -> UndirectedGraph<V, E>
where
    V: Default,
    E: Default,
{
    if vertex_count == 0 {
        return UndirectedGraph::new();
    }

    let mut graph = UndirectedGraph::with_capacity(vertex_count, vertex_count - 1);
    let mut src = graph.insert_vertex(V::default());

    for _ in 1..vertex_count {
        let dst = graph.insert_vertex(V::default());
        graph
            .insert_edge(src, dst, E::default())
            .unwrap_or_else(|_| unreachable!("endpoints are live"));
        src = dst;
    }

    graph
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertices iterator count ({0}) is not equal to vertex count ({1})")]
    VerticesVertexCountMismatch(usize, usize),
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("vertex id {0} is enumerated more than once")]
    DuplicateVertexId(VertexId),
    #[error("edge id {0} is enumerated more than once")]
    DuplicateEdgeId(EdgeId),
    #[error("enumerated vertex {0} cannot be accessed")]
    InaccessibleVertex(VertexId),
    #[error("enumerated edge {0} cannot be accessed")]
    InaccessibleEdge(EdgeId),
    #[error("edge {0} refers to vertex {1} that does not exist")]
    DanglingEndpoint(EdgeId, VertexId),
    #[error("edge {0} is not reported as incident on its endpoint {1}")]
    MissingIncidence(EdgeId, VertexId),
    #[error("edge {0} is reported as incident on vertex {1}, which is not its endpoint")]
    FalseIncidence(EdgeId, VertexId),
    #[error("sum of degrees ({0}) is not equal to doubled edge count ({1})")]
    HandshakingLemma(usize, usize),
}

pub fn check_consistency<V, E>(graph: &UndirectedGraph<V, E>) -> Result<(), ConsistencyCheckError> {
    fn cmp<F>(actual: usize, expected: usize, error: F) -> Result<(), ConsistencyCheckError>
    where
        F: FnOnce(usize, usize) -> ConsistencyCheckError,
    {
        if actual == expected {
            Ok(())
        } else {
            Err(error(actual, expected))
        }
    }

    cmp(
        graph.vertices().count(),
        graph.vertex_count(),
        ConsistencyCheckError::VerticesVertexCountMismatch,
    )?;
    cmp(
        graph.edges().count(),
        graph.edge_count(),
        ConsistencyCheckError::EdgesEdgeCountMismatch,
    )?;

    let mut seen_vertices = FxHashSet::default();
    for vertex in graph.vertex_ids() {
        if !seen_vertices.insert(vertex) {
            return Err(ConsistencyCheckError::DuplicateVertexId(vertex));
        }

        if graph.vertex(vertex).is_none() {
            return Err(ConsistencyCheckError::InaccessibleVertex(vertex));
        }
    }

    let mut seen_edges = FxHashSet::default();
    for edge in graph.edges() {
        if !seen_edges.insert(edge.id) {
            return Err(ConsistencyCheckError::DuplicateEdgeId(edge.id));
        }

        if graph.end_vertices(edge.id) != Ok(edge.endpoints()) {
            return Err(ConsistencyCheckError::InaccessibleEdge(edge.id));
        }

        for endpoint in [edge.start, edge.end] {
            let mut incident = match graph.incident_edges(endpoint) {
                Ok(incident) => incident,
                Err(_) => {
                    return Err(ConsistencyCheckError::DanglingEndpoint(edge.id, endpoint));
                }
            };

            if !incident.any(|id| id == edge.id) {
                return Err(ConsistencyCheckError::MissingIncidence(edge.id, endpoint));
            }
        }
    }

    let mut deg_sum = 0;
    for vertex in graph.vertex_ids() {
        let incident = graph
            .incident_edges(vertex)
            .map_err(|_| ConsistencyCheckError::InaccessibleVertex(vertex))?;

        for edge in incident {
            if graph.opposite(vertex, edge).is_err() {
                return Err(ConsistencyCheckError::FalseIncidence(edge, vertex));
            }
        }

        deg_sum += graph
            .degree(vertex)
            .map_err(|_| ConsistencyCheckError::InaccessibleVertex(vertex))?;
    }

    cmp(
        deg_sum,
        2 * graph.edge_count(),
        ConsistencyCheckError::HandshakingLemma,
    )?;

    Ok(())
}
