use crate::graph::*;

/// The insertion protocol shared by all graph representations.
///
/// Both insertion operations are fallible in exactly one way: the input fails
/// validation. Rejection is reported by `false` with no state change and
/// nothing logged; callers own all recovery decisions. Inserting an element
/// that is already present is a success, since storage is set-based.
pub trait GrowableGraph {
    fn new() -> Self;

    /// Validates `label` as a vertex and inserts it.
    fn add_vertex(&mut self, label: &str) -> bool;

    /// Decodes an edge from `encoded` (first/last character are the
    /// endpoints) and inserts it.
    ///
    /// The endpoints are not checked against the vertex set: an edge may
    /// reference labels never added as vertices.
    fn add_edge(&mut self, encoded: &str) -> bool;
}

/// Read access to the vertex and edge sets.
pub trait QueryableGraph {
    fn vertex_size(&self) -> usize;
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = Vertex> + '_>;
    fn contains_vertex(&self, v: &Vertex) -> bool;

    fn edge_size(&self) -> usize;
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_>;
    fn contains_edge(&self, e: &Edge) -> bool;

    /// Edges incident to `v`, loops included once.
    fn edges_on_vertex(&self, v: &Vertex) -> Box<dyn Iterator<Item = Edge> + '_>;

    /// The degree of `v`. A self-loop contributes 2.
    fn degree(&self, v: &Vertex) -> usize {
        self.edges_on_vertex(v)
            .map(|e| if e.is_loop() { 2 } else { 1 })
            .sum()
    }

    /// A deterministic rendering of both sets, sorted by label.
    fn display<'a>(&'a self) -> GraphDisplay<'a, Self>
    where
        Self: Sized,
    {
        GraphDisplay::new(self)
    }
}
