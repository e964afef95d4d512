use crate::graph::*;
use std::collections::BTreeSet;

/// A default implementation of rendering a graph textually.
///
/// Both sets are sorted by label before printing, so the output is
/// deterministic no matter which order the underlying representation iterates
/// in.
pub struct GraphDisplay<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
}

impl<'a, G> GraphDisplay<'a, G>
where
    G: QueryableGraph,
{
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }
}

impl<'a, G> std::fmt::Display for GraphDisplay<'a, G>
where
    G: QueryableGraph,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let vertices: BTreeSet<Vertex> = self.graph.iter_vertices().collect();
        let edges: BTreeSet<Edge> = self.graph.iter_edges().collect();
        write!(f, "vertices: {{")?;
        for (i, v) in vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        writeln!(f, "}}")?;
        write!(f, "edges: {{")?;
        for (i, e) in edges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", e)?;
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl<'a, G> std::fmt::Debug for GraphDisplay<'a, G>
where
    G: QueryableGraph,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}
