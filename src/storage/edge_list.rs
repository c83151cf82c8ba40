use std::{iter::FusedIterator, mem};

use crate::core::{
    error::{
        AddEdgeError, AddEdgeErrorKind, AddVertexError, Error, ReplaceEdgeError,
        ReplaceVertexError,
    },
    id::{EdgeId, VertexId},
    EdgeRef, VertexRef,
};

use super::arena::{self, Arena};

/// Undirected graph stored as a list of vertices and a list of edges.
///
/// Vertices and edges are identified by [`VertexId`] and [`EdgeId`] handles
/// that stay valid until the element is removed, no matter what else is
/// inserted or removed in the meantime. Using a handle of a removed element is
/// detected and reported as an error, it never refers to a different element.
///
/// Self-loops and parallel edges are allowed. Vertices, edges and incident
/// edges are always enumerated in the order of insertion.
///
/// Incidence queries scan the whole edge list, so they take time proportional
/// to the number of edges in the graph.
///
/// # Examples
///
/// ```
/// use undigraph::UndirectedGraph;
///
/// let mut graph = UndirectedGraph::new();
///
/// let prague = graph.insert_vertex("Prague");
/// let vienna = graph.insert_vertex("Vienna");
/// let berlin = graph.insert_vertex("Berlin");
///
/// let road = graph.insert_edge(prague, vienna, 330).unwrap();
/// graph.insert_edge(prague, berlin, 350).unwrap();
///
/// assert_eq!(graph.opposite(prague, road), Ok(vienna));
/// assert_eq!(graph.are_adjacent(vienna, berlin), Ok(false));
///
/// assert_eq!(graph.remove_vertex(prague), Ok("Prague"));
/// assert_eq!(graph.edge_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct UndirectedGraph<V, E> {
    vertices: Arena<VertexId, V>,
    edges: Arena<EdgeId, Edge<E>>,
}

#[derive(Debug, Clone)]
struct Edge<E> {
    attr: E,
    endpoints: [VertexId; 2],
}

impl<E> Edge<E> {
    fn is_incident(&self, vertex: VertexId) -> bool {
        self.endpoints[0] == vertex || self.endpoints[1] == vertex
    }

    fn connects(&self, u: VertexId, v: VertexId) -> bool {
        let [start, end] = self.endpoints;
        (start == u && end == v) || (start == v && end == u)
    }

    // Assumes that the vertex is incident. For a self-loop, it is the vertex
    // itself.
    fn opposite(&self, vertex: VertexId) -> VertexId {
        if self.endpoints[0] == vertex {
            self.endpoints[1]
        } else {
            self.endpoints[0]
        }
    }

    fn is_loop(&self) -> bool {
        self.endpoints[0] == self.endpoints[1]
    }
}

impl<V, E> UndirectedGraph<V, E> {
    pub fn new() -> Self {
        Self {
            vertices: Arena::new(),
            edges: Arena::new(),
        }
    }

    pub fn with_capacity(vertex_count: usize, edge_count: usize) -> Self {
        Self {
            vertices: Arena::with_capacity(vertex_count),
            edges: Arena::with_capacity(edge_count),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains(id)
    }

    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.contains(id)
    }

    pub fn vertex(&self, id: VertexId) -> Option<&V> {
        self.vertices.get(id)
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut V> {
        self.vertices.get_mut(id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&E> {
        self.edges.get(id).map(|edge| &edge.attr)
    }

    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut E> {
        self.edges.get_mut(id).map(|edge| &mut edge.attr)
    }

    /// Returns the handle of the first vertex (in insertion order) holding the
    /// given payload.
    pub fn find_vertex(&self, vertex: &V) -> Option<VertexId>
    where
        V: PartialEq,
    {
        self.vertices
            .iter()
            .find_map(|(id, attr)| (attr == vertex).then_some(id))
    }

    pub fn try_insert_vertex(&mut self, vertex: V) -> Result<VertexId, AddVertexError<V>> {
        self.vertices.try_insert(vertex).map_err(AddVertexError::new)
    }

    /// Inserts a new vertex as the last one in the order of vertices.
    ///
    /// # Panics
    ///
    /// Panics if the graph exhausted its capacity. See
    /// [`try_insert_vertex`](UndirectedGraph::try_insert_vertex) for a
    /// non-panicking version.
    pub fn insert_vertex(&mut self, vertex: V) -> VertexId {
        match self.try_insert_vertex(vertex) {
            Ok(id) => id,
            Err(error) => panic!("{error}"),
        }
    }

    /// Inserts a new edge between `src` and `dst` as the last one in the order
    /// of edges.
    ///
    /// Both endpoints must be live vertices of this graph, otherwise the edge
    /// is rejected and its payload is handed back in the error. The same pair
    /// of vertices can be connected by any number of edges, and `src` can be
    /// equal to `dst`.
    pub fn insert_edge(
        &mut self,
        src: VertexId,
        dst: VertexId,
        edge: E,
    ) -> Result<EdgeId, AddEdgeError<E>> {
        let kind = if !self.vertices.contains(src) {
            Some(AddEdgeErrorKind::SourceAbsent)
        } else if !self.vertices.contains(dst) {
            Some(AddEdgeErrorKind::DestinationAbsent)
        } else {
            None
        };

        if let Some(kind) = kind {
            #[cfg(feature = "logging")]
            log::debug!("rejected edge between {src} and {dst}: {kind}");
            return Err(AddEdgeError::new(edge, kind));
        }

        self.edges
            .try_insert(Edge {
                attr: edge,
                endpoints: [src, dst],
            })
            .map_err(|edge| AddEdgeError::new(edge.attr, AddEdgeErrorKind::CapacityOverflow))
    }

    /// Removes the vertex together with all edges incident on it and returns
    /// its payload.
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<V, Error> {
        if !self.vertices.contains(id) {
            #[cfg(feature = "logging")]
            log::debug!("cannot remove vertex {id}: not found");
            return Err(Error::VertexNotFound(id));
        }

        // Remove all edges connected to this vertex in any position before the
        // vertex itself, so that no edge ever refers to a removed vertex.
        let _removed = self.edges.retain(|_, edge| !edge.is_incident(id));

        #[cfg(feature = "logging")]
        log::trace!("removing vertex {id} with {_removed} incident edge(s)");

        self.vertices.remove(id).ok_or(Error::VertexNotFound(id))
    }

    pub fn remove_edge(&mut self, id: EdgeId) -> Result<E, Error> {
        match self.edges.remove(id) {
            Some(edge) => Ok(edge.attr),
            None => {
                #[cfg(feature = "logging")]
                log::debug!("cannot remove edge {id}: not found");
                Err(Error::EdgeNotFound(id))
            }
        }
    }

    /// Overwrites the payload of the vertex and returns the previous one. If
    /// the vertex does not exist, the new payload is handed back in the error.
    pub fn replace_vertex_payload(
        &mut self,
        id: VertexId,
        vertex: V,
    ) -> Result<V, ReplaceVertexError<V>> {
        match self.vertices.get_mut(id) {
            Some(slot) => Ok(mem::replace(slot, vertex)),
            None => Err(ReplaceVertexError(vertex)),
        }
    }

    /// Overwrites the payload of the edge and returns the previous one. If the
    /// edge does not exist, the new payload is handed back in the error.
    pub fn replace_edge_payload(&mut self, id: EdgeId, edge: E) -> Result<E, ReplaceEdgeError<E>> {
        match self.edges.get_mut(id) {
            Some(slot) => Ok(mem::replace(&mut slot.attr, edge)),
            None => Err(ReplaceEdgeError(edge)),
        }
    }

    /// Removes all vertices and edges. All handles issued so far become
    /// invalid.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
    }

    /// Removes all edges and keeps the vertices.
    pub fn clear_edges(&mut self) {
        self.edges.clear();
    }

    pub fn vertices(&self) -> VerticesIter<'_, V> {
        VerticesIter {
            inner: self.vertices.iter(),
        }
    }

    pub fn vertex_ids(&self) -> VertexIds<'_, V> {
        VertexIds {
            inner: self.vertices.iter(),
        }
    }

    pub fn edges(&self) -> EdgesIter<'_, E> {
        EdgesIter {
            inner: self.edges.iter(),
        }
    }

    pub fn edge_ids(&self) -> EdgeIds<'_, E> {
        EdgeIds {
            inner: self.edges.iter(),
        }
    }

    /// Returns all edges that have the vertex as one of their endpoints, in
    /// the order of edge insertion. A self-loop is reported once.
    pub fn incident_edges(&self, id: VertexId) -> Result<IncidentEdges<'_, E>, Error> {
        self.check_vertex(id)?;

        Ok(IncidentEdges {
            vertex: id,
            inner: self.edges.iter(),
        })
    }

    /// Returns pairs of the neighbor and the edge leading to it, following
    /// [`incident_edges`](UndirectedGraph::incident_edges).
    pub fn neighbors(&self, id: VertexId) -> Result<NeighborsIter<'_, E>, Error> {
        self.incident_edges(id)
            .map(|incident| NeighborsIter { incident })
    }

    /// Number of edge endpoints at the vertex. A self-loop contributes two.
    pub fn degree(&self, id: VertexId) -> Result<usize, Error> {
        let mut incident = self.incident_edges(id)?;
        let mut degree = 0;

        while let Some((_, edge)) = incident.next_incident() {
            degree += 1 + edge.is_loop() as usize;
        }

        Ok(degree)
    }

    /// Returns the endpoint of the edge that is not the given vertex. For a
    /// self-loop, this is the vertex itself.
    pub fn opposite(&self, vertex: VertexId, edge: EdgeId) -> Result<VertexId, Error> {
        self.check_vertex(vertex)?;
        let [start, end] = self.endpoints_of(edge)?;

        if start == vertex {
            Ok(end)
        } else if end == vertex {
            Ok(start)
        } else {
            Err(Error::NotIncident { vertex, edge })
        }
    }

    /// Returns the endpoints of the edge in the order given at its insertion.
    pub fn end_vertices(&self, id: EdgeId) -> Result<(VertexId, VertexId), Error> {
        self.endpoints_of(id).map(|[start, end]| (start, end))
    }

    /// Returns `true` if there is an edge between the two vertices. A vertex
    /// is adjacent to itself only if there is a self-loop on it.
    pub fn are_adjacent(&self, u: VertexId, v: VertexId) -> Result<bool, Error> {
        self.check_vertex(v)?;
        Ok(self.neighbors(u)?.any(|(neighbor, _)| neighbor == v))
    }

    /// Returns all edges connecting the two vertices, in either orientation.
    pub fn edges_between(&self, u: VertexId, v: VertexId) -> Result<EdgesBetween<'_, E>, Error> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        Ok(EdgesBetween {
            u,
            v,
            inner: self.edges.iter(),
        })
    }

    /// Returns the first edge (in insertion order) connecting the two
    /// vertices, if any.
    pub fn edge_between(&self, u: VertexId, v: VertexId) -> Result<Option<EdgeId>, Error> {
        Ok(self.edges_between(u, v)?.next())
    }

    fn check_vertex(&self, id: VertexId) -> Result<(), Error> {
        if self.vertices.contains(id) {
            Ok(())
        } else {
            Err(Error::VertexNotFound(id))
        }
    }

    fn endpoints_of(&self, id: EdgeId) -> Result<[VertexId; 2], Error> {
        self.edges
            .get(id)
            .map(|edge| edge.endpoints)
            .ok_or(Error::EdgeNotFound(id))
    }
}

impl<V, E> Default for UndirectedGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct VerticesIter<'a, V> {
    inner: arena::Iter<'a, VertexId, V>,
}

impl<'a, V> Iterator for VerticesIter<'a, V> {
    type Item = VertexRef<'a, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(id, attr)| VertexRef { id, attr })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, V> ExactSizeIterator for VerticesIter<'a, V> {}

impl<'a, V> FusedIterator for VerticesIter<'a, V> {}

#[derive(Debug)]
pub struct VertexIds<'a, V> {
    inner: arena::Iter<'a, VertexId, V>,
}

impl<'a, V> Iterator for VertexIds<'a, V> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(id, _)| id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, V> ExactSizeIterator for VertexIds<'a, V> {}

impl<'a, V> FusedIterator for VertexIds<'a, V> {}

#[derive(Debug)]
pub struct EdgesIter<'a, E> {
    inner: arena::Iter<'a, EdgeId, Edge<E>>,
}

impl<'a, E> Iterator for EdgesIter<'a, E> {
    type Item = EdgeRef<'a, E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(id, edge)| EdgeRef {
            id,
            attr: &edge.attr,
            start: edge.endpoints[0],
            end: edge.endpoints[1],
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, E> ExactSizeIterator for EdgesIter<'a, E> {}

impl<'a, E> FusedIterator for EdgesIter<'a, E> {}

#[derive(Debug)]
pub struct EdgeIds<'a, E> {
    inner: arena::Iter<'a, EdgeId, Edge<E>>,
}

impl<'a, E> Iterator for EdgeIds<'a, E> {
    type Item = EdgeId;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(id, _)| id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, E> ExactSizeIterator for EdgeIds<'a, E> {}

impl<'a, E> FusedIterator for EdgeIds<'a, E> {}

#[derive(Debug)]
pub struct IncidentEdges<'a, E> {
    vertex: VertexId,
    inner: arena::Iter<'a, EdgeId, Edge<E>>,
}

impl<'a, E> IncidentEdges<'a, E> {
    fn next_incident(&mut self) -> Option<(EdgeId, &'a Edge<E>)> {
        let vertex = self.vertex;
        self.inner.find(|(_, edge)| edge.is_incident(vertex))
    }
}

impl<'a, E> Iterator for IncidentEdges<'a, E> {
    type Item = EdgeId;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_incident().map(|(id, _)| id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, E> FusedIterator for IncidentEdges<'a, E> {}

#[derive(Debug)]
pub struct NeighborsIter<'a, E> {
    incident: IncidentEdges<'a, E>,
}

impl<'a, E> Iterator for NeighborsIter<'a, E> {
    type Item = (VertexId, EdgeId);

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.incident.vertex;
        self.incident
            .next_incident()
            .map(|(id, edge)| (edge.opposite(vertex), id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.incident.size_hint()
    }
}

impl<'a, E> FusedIterator for NeighborsIter<'a, E> {}

#[derive(Debug)]
pub struct EdgesBetween<'a, E> {
    u: VertexId,
    v: VertexId,
    inner: arena::Iter<'a, EdgeId, Edge<E>>,
}

impl<'a, E> Iterator for EdgesBetween<'a, E> {
    type Item = EdgeId;

    fn next(&mut self) -> Option<Self::Item> {
        let (u, v) = (self.u, self.v);
        self.inner
            .find(|(_, edge)| edge.connects(u, v))
            .map(|(id, _)| id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, E> FusedIterator for EdgesBetween<'a, E> {}
