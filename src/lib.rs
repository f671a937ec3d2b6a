//! Topology SSSP - mutable labelled graphs with Dijkstra shortest-path trees
//!
//! This library models a dynamic network (routers and links, say) as a mutable
//! adjacency-list graph keyed by arbitrary labels, and recomputes shortest-path
//! trees over it with Dijkstra's algorithm after each topology change.
//!
//! The [`AdjacencyList`] store tracks a mutation generation, and the
//! [`SsspEngine`] tags every tree it computes with that generation so queries
//! against a tree that predates a mutation fail fast instead of answering
//! from stale data.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra,
    engine::{EngineConfig, NegativeWeightPolicy, SsspEngine},
    ShortestPathAlgorithm, ShortestPathTree,
};
/// Re-export main types for convenient use
pub use graph::{AdjacencyList, Edge, Graph, Label, MutableGraph, Weight};
/// Float weights are wrapped for a total order
pub use ordered_float::OrderedFloat;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("No path from {from} to {to}")]
    Unreachable { from: String, to: String },

    #[error("Graph contains negative edge weights")]
    NegativeWeight,

    #[error("No shortest-path tree has been computed yet")]
    NotComputed,

    #[error("Shortest-path tree was computed from a different graph")]
    GraphMismatch,

    #[error("Shortest-path tree is stale: computed at generation {tree}, graph is at generation {graph}")]
    StaleTree { tree: u64, graph: u64 },
}

impl Error {
    pub(crate) fn unknown_vertex<V: std::fmt::Debug>(vertex: &V) -> Self {
        Error::UnknownVertex(format!("{:?}", vertex))
    }

    pub(crate) fn unreachable<V: std::fmt::Debug>(from: &V, to: &V) -> Self {
        Error::Unreachable {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
