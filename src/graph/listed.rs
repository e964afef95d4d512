use crate::graph::*;
use ahash::RandomState;
use std::collections::HashSet;

/// The "listed" graph representation: both collections are hash sets.
///
/// Point queries and inserts are amortized $O(1)$. Iteration order is
/// unspecified; use [`QueryableGraph::display`] for a deterministic
/// rendering.
#[derive(Clone, PartialEq, Eq)]
pub struct ListedGraph {
    vertices: HashSet<Vertex, RandomState>,
    edges: HashSet<Edge, RandomState>,
}

impl ListedGraph {
    /// Builds a graph from candidate vertex labels.
    ///
    /// Candidates failing the label predicate are skipped silently. The edge
    /// set starts empty.
    pub fn from_vertices<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut g = Self::new();
        for label in labels {
            g.add_vertex(label.as_ref());
        }
        g
    }

    /// Builds a graph from candidate vertex labels and candidate edge
    /// encodings, skipping invalid candidates of either kind silently.
    ///
    /// Each encoding goes through [`GrowableGraph::add_edge`], so an edge is
    /// kept iff both its endpoint characters are valid labels, whether or not
    /// they were listed as vertices.
    pub fn from_vertices_and_edges<I, J, S, T>(labels: I, encodings: J) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        J: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut g = Self::from_vertices(labels);
        for encoded in encodings {
            g.add_edge(encoded.as_ref());
        }
        g
    }
}

impl Default for ListedGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ListedGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ListedGraph {{")?;
        write!(f, "{}", self.display())?;
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl GrowableGraph for ListedGraph {
    fn new() -> Self {
        Self {
            vertices: HashSet::with_hasher(RandomState::new()),
            edges: HashSet::with_hasher(RandomState::new()),
        }
    }

    fn add_vertex(&mut self, label: &str) -> bool {
        match Vertex::parse(label) {
            Some(v) => {
                self.vertices.insert(v);
                true
            }
            None => false,
        }
    }

    fn add_edge(&mut self, encoded: &str) -> bool {
        match Edge::parse(encoded) {
            Some(e) => {
                self.edges.insert(e);
                true
            }
            None => false,
        }
    }
}

impl QueryableGraph for ListedGraph {
    fn vertex_size(&self) -> usize {
        self.vertices.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = Vertex> + '_> {
        Box::new(self.vertices.iter().copied())
    }

    fn contains_vertex(&self, v: &Vertex) -> bool {
        self.vertices.contains(v)
    }

    fn edge_size(&self) -> usize {
        self.edges.len()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        Box::new(self.edges.iter().copied())
    }

    fn contains_edge(&self, e: &Edge) -> bool {
        self.edges.contains(e)
    }

    fn edges_on_vertex(&self, v: &Vertex) -> Box<dyn Iterator<Item = Edge> + '_> {
        let v = *v;
        Box::new(self.edges.iter().filter(move |e| e.touches(&v)).copied())
    }
}
