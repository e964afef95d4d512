//! The data model: vertices, undirected edges, capability traits and the
//! set-backed graph representation.
//!
//! # Value types
//!
//! Vertices and edges are lightweight `Copy` values.
//! A [`Vertex`] is a validated one-character label;
//! an [`Edge`] is an unordered pair of such labels,
//! kept in canonical order so that equality and hashing are undirected.
//! The only way to obtain either is through its `parse` constructor,
//! so an invalid label or encoding is unrepresentable.
//!
//! # Capability traits
//!
//! [`GrowableGraph`] is the insertion protocol and [`QueryableGraph`] the read
//! surface. Concrete representations implement both; callers that only need
//! one capability should bound on that one.
//!
//! # Representations
//!
//! [`ListedGraph`] stores both collections as hash sets, which makes point
//! queries and inserts amortized constant time at the cost of an unspecified
//! iteration order. [`QueryableGraph::display`] provides a deterministic,
//! label-sorted rendering.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod graph_display;
pub use self::graph_display::*;
mod listed;
pub use self::listed::*;
