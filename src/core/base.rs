use super::id::{EdgeId, VertexId};

/// A vertex together with its handle, as yielded by
/// [`vertices`](crate::UndirectedGraph::vertices).
#[derive(Debug, PartialEq, Eq)]
pub struct VertexRef<'a, V> {
    pub id: VertexId,
    pub attr: &'a V,
}

/// An edge together with its handle and endpoints, as yielded by
/// [`edges`](crate::UndirectedGraph::edges).
///
/// The endpoints keep the order in which they were given when the edge was
/// inserted.
#[derive(Debug, PartialEq, Eq)]
pub struct EdgeRef<'a, E> {
    pub id: EdgeId,
    pub attr: &'a E,
    pub start: VertexId,
    pub end: VertexId,
}

impl<'a, V> Clone for VertexRef<'a, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, V> Copy for VertexRef<'a, V> {}

impl<'a, E> Clone for EdgeRef<'a, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, E> Copy for EdgeRef<'a, E> {}

impl<'a, E> EdgeRef<'a, E> {
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.start, self.end)
    }

    pub fn is_loop(&self) -> bool {
        self.start == self.end
    }
}
