//! An undirected in-memory graph over single-character vertex labels.
//!
//! Vertices are identified by exactly one non-blank character.
//! Edges are undirected and are decoded from strings:
//! the first and the last character of the encoding denote the endpoints,
//! so `"ab"` connects `a` and `b`,
//! and a one-character encoding such as `"a"` is a self-loop.
//!
//! Insertion never panics and never throws:
//! an operation whose input fails validation returns `false`
//! and leaves the graph untouched.
//! Inserting an element that is already present is a success,
//! since both collections are sets.
//!
//! # Examples
//!
//! ```rust
//! use chargraph::graph::*;
//!
//! let mut g = ListedGraph::from_vertices(["a", "b", "c"]);
//! assert!(g.add_edge("ab"));
//! assert!(!g.add_vertex(""));
//! assert_eq!(g.vertex_size(), 3);
//! assert_eq!(g.edge_size(), 1);
//! ```

pub mod graph;
