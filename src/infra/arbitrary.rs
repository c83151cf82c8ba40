use std::fmt;

use arbitrary::Arbitrary;
use thiserror::Error;

use crate::{
    core::{
        error::{AddEdgeError, Error, ReplaceEdgeError, ReplaceVertexError},
        id::{EdgeId, IdType, VertexId},
    },
    storage::UndirectedGraph,
};

use super::testing::{check_consistency, ConsistencyCheckError};

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }
}

/// A mutation of a graph. Vertices and edges are referred to by an index into
/// the list of all handles issued so far, including those of already removed
/// elements, so stale handles get exercised as well.
#[derive(Debug, Arbitrary, Clone)]
pub enum MutOp<V, E> {
    InsertVertex(V),
    RemoveVertex(Index),
    InsertEdge(Index, Index, E),
    RemoveEdge(Index),
    ReplaceVertex(Index, V),
    ReplaceEdge(Index, E),
    Clear,
    ClearEdges,
}

#[derive(Debug, PartialEq)]
pub enum MutOpResult<V, E> {
    InsertVertex(VertexId),
    RemoveVertex(Result<V, Error>),
    InsertEdge(Result<EdgeId, AddEdgeError<E>>),
    RemoveEdge(Result<E, Error>),
    ReplaceVertex(Result<V, ReplaceVertexError<V>>),
    ReplaceEdge(Result<E, ReplaceEdgeError<E>>),
    Clear,
    ClearEdges,
}

impl<V, E> MutOpResult<V, E> {
    pub fn is_rejected(&self) -> bool {
        match self {
            MutOpResult::RemoveVertex(result) => result.is_err(),
            MutOpResult::InsertEdge(result) => result.is_err(),
            MutOpResult::RemoveEdge(result) => result.is_err(),
            MutOpResult::ReplaceVertex(result) => result.is_err(),
            MutOpResult::ReplaceEdge(result) => result.is_err(),
            MutOpResult::InsertVertex(_) | MutOpResult::Clear | MutOpResult::ClearEdges => false,
        }
    }
}

/// All handles issued by a graph during a sequence of operations.
#[derive(Debug, Clone, Default)]
pub struct IssuedIds {
    pub vertices: Vec<VertexId>,
    pub edges: Vec<EdgeId>,
}

impl IssuedIds {
    fn vertex(&self, index: Index) -> VertexId {
        index
            .get(self.vertices.len())
            .map(|i| self.vertices[i])
            .unwrap_or_else(VertexId::sentinel)
    }

    fn edge(&self, index: Index) -> EdgeId {
        index
            .get(self.edges.len())
            .map(|i| self.edges[i])
            .unwrap_or_else(EdgeId::sentinel)
    }
}

impl<V, E> MutOp<V, E> {
    pub fn apply(
        self,
        graph: &mut UndirectedGraph<V, E>,
        issued: &mut IssuedIds,
    ) -> MutOpResult<V, E> {
        match self {
            MutOp::InsertVertex(vertex) => {
                let id = graph.insert_vertex(vertex);
                issued.vertices.push(id);
                MutOpResult::InsertVertex(id)
            }
            MutOp::RemoveVertex(index) => {
                MutOpResult::RemoveVertex(graph.remove_vertex(issued.vertex(index)))
            }
            MutOp::InsertEdge(src, dst, edge) => {
                let result = graph.insert_edge(issued.vertex(src), issued.vertex(dst), edge);
                if let Ok(id) = result {
                    issued.edges.push(id);
                }
                MutOpResult::InsertEdge(result)
            }
            MutOp::RemoveEdge(index) => {
                MutOpResult::RemoveEdge(graph.remove_edge(issued.edge(index)))
            }
            MutOp::ReplaceVertex(index, vertex) => MutOpResult::ReplaceVertex(
                graph.replace_vertex_payload(issued.vertex(index), vertex),
            ),
            MutOp::ReplaceEdge(index, edge) => {
                MutOpResult::ReplaceEdge(graph.replace_edge_payload(issued.edge(index), edge))
            }
            MutOp::Clear => {
                graph.clear();
                MutOpResult::Clear
            }
            MutOp::ClearEdges => {
                graph.clear_edges();
                MutOpResult::ClearEdges
            }
        }
    }
}

/// Everything observable about a graph: handles, endpoints and payloads in
/// enumeration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<V, E> {
    vertices: Vec<(VertexId, V)>,
    edges: Vec<(EdgeId, (VertexId, VertexId), E)>,
}

impl<V: Clone, E: Clone> Snapshot<V, E> {
    pub fn of(graph: &UndirectedGraph<V, E>) -> Self {
        Self {
            vertices: graph
                .vertices()
                .map(|vertex| (vertex.id, vertex.attr.clone()))
                .collect(),
            edges: graph
                .edges()
                .map(|edge| (edge.id, edge.endpoints(), edge.attr.clone()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReplayError {
    #[error("after operation #{0}: {1}")]
    Inconsistent(usize, ConsistencyCheckError),
    #[error("operation #{0} was rejected but changed the graph")]
    RejectedButChanged(usize),
}

#[derive(Arbitrary, Clone)]
pub struct MutOpsSeq<V, E>(pub Vec<MutOp<V, E>>);

impl<V, E> IntoIterator for MutOpsSeq<V, E> {
    type Item = MutOp<V, E>;
    type IntoIter = std::vec::IntoIter<MutOp<V, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<V, E> MutOpsSeq<V, E>
where
    V: Clone + PartialEq,
    E: Clone + PartialEq,
{
    /// Applies all operations in order and checks the consistency of the graph
    /// after each of them. Rejected operations must leave the graph intact,
    /// including the payloads.
    pub fn replay(self, graph: &mut UndirectedGraph<V, E>) -> Result<IssuedIds, ReplayError> {
        let mut issued = IssuedIds::default();

        for (i, op) in self.into_iter().enumerate() {
            let before = Snapshot::of(graph);
            let result = op.apply(graph, &mut issued);

            if result.is_rejected() && before != Snapshot::of(graph) {
                return Err(ReplayError::RejectedButChanged(i));
            }

            check_consistency(graph).map_err(|error| ReplayError::Inconsistent(i, error))?;
        }

        Ok(issued)
    }
}

impl<V: fmt::Debug, E: fmt::Debug> fmt::Debug for MutOpsSeq<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    MutOp::{:?},", op)?;
        }

        writeln!(f, "])")?;
        writeln!(f, ".replay(&mut graph);")?;
        writeln!(f)?;
        writeln!(f, "// use `cargo test fuzz_replay_mut_ops_seq`")
    }
}
