//! An undirected graph container backed by an edge list.
//!
//! [`UndirectedGraph`] stores payloads of arbitrary types on vertices and
//! edges and hands out [`VertexId`] and [`EdgeId`] handles for them. Handles
//! are stable: they keep referring to the same element until it is removed,
//! and using them afterwards is reported as an [`Error`] instead of silently
//! referring to something else.
//!
//! ```
//! use undigraph::{Error, UndirectedGraph};
//!
//! let mut graph = UndirectedGraph::new();
//!
//! let v1 = graph.insert_vertex(1);
//! let v2 = graph.insert_vertex(2);
//! let v3 = graph.insert_vertex(3);
//!
//! let e1 = graph.insert_edge(v1, v2, "e1").unwrap();
//! graph.insert_edge(v2, v3, "e2").unwrap();
//!
//! // Removing a vertex removes all its incident edges too.
//! assert_eq!(graph.remove_vertex(v2), Ok(2));
//! assert_eq!(graph.vertex_count(), 2);
//! assert_eq!(graph.edge_count(), 0);
//!
//! assert_eq!(graph.remove_edge(e1), Err(Error::EdgeNotFound(e1)));
//! ```

pub mod core;
pub mod infra;
pub mod storage;

pub use crate::core::{
    id::{EdgeId, VertexId},
    EdgeRef, Error, VertexRef,
};
pub use storage::UndirectedGraph;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::core::{id::IdType, EdgeRef, VertexRef};
}
