use crate::graph::traits::{Graph, Label, MutableGraph, Weight};
use crate::{Error, Result};
use log::debug;
use std::collections::HashMap;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An outgoing edge stored in its source vertex's adjacency list
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge<V, W> {
    pub target: V,
    pub weight: W,
}

/// A directed graph implementation using adjacency lists keyed by vertex label
///
/// Undirected edges are stored as a pair of directed edges. Each ordered pair
/// holds at most one weight; inserting it again overwrites.
#[derive(Debug)]
pub struct AdjacencyList<V, W = i32>
where
    V: Label,
    W: Weight,
{
    /// Outgoing edges for each vertex: label -> [(target, weight)]
    adjacency: HashMap<V, Vec<Edge<V, W>>>,

    /// Number of directed edges across all lists
    edge_count: usize,

    /// Set once any weight other than `W::one()` is inserted
    weighted: bool,

    /// Set once any negative weight is inserted
    negative_weights: bool,

    /// Bumped on every structural change
    generation: u64,

    /// Distinguishes this store from others, clones included
    store_id: Uuid,
}

impl<V, W> AdjacencyList<V, W>
where
    V: Label,
    W: Weight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyList {
            adjacency: HashMap::new(),
            edge_count: 0,
            weighted: false,
            negative_weights: false,
            generation: 0,
            store_id: Uuid::new_v4(),
        }
    }

    /// Creates a new empty graph with room for `vertices` labels
    pub fn with_capacity(vertices: usize) -> Self {
        AdjacencyList {
            adjacency: HashMap::with_capacity(vertices),
            ..Self::new()
        }
    }

    /// Builds a graph from undirected pairs, each with the default weight
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new();
        for (a, b) in edges {
            graph.add_edge(a, b);
        }
        graph
    }

    /// Iterates over every vertex label, in no particular order
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    /// The adjacency list of `vertex`, if it exists
    pub fn edges(&self, vertex: &V) -> Option<&[Edge<V, W>]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// True if any weight other than the default has ever been inserted.
    ///
    /// Never reset by removal; see [`Self::contains_non_default_weight`] for
    /// the current state.
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Scans the current edges for a weight other than the default
    pub fn contains_non_default_weight(&self) -> bool {
        self.all_edges().any(|edge| edge.weight != W::one())
    }

    fn all_edges(&self) -> impl Iterator<Item = &Edge<V, W>> + '_ {
        self.adjacency.values().flatten()
    }

    fn record_weight(&mut self, weight: W) {
        if weight != W::one() {
            self.weighted = true;
        }
        if weight < W::zero() {
            self.negative_weights = true;
        }
    }
}

impl<V, W> Clone for AdjacencyList<V, W>
where
    V: Label,
    W: Weight,
{
    /// Copies the topology under a new store id, so trees computed on the
    /// original are not mistaken for trees of the copy
    fn clone(&self) -> Self {
        AdjacencyList {
            adjacency: self.adjacency.clone(),
            edge_count: self.edge_count,
            weighted: self.weighted,
            negative_weights: self.negative_weights,
            generation: self.generation,
            store_id: Uuid::new_v4(),
        }
    }
}

impl<V, W> Default for AdjacencyList<V, W>
where
    V: Label,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> Graph<V, W> for AdjacencyList<V, W>
where
    V: Label,
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_> {
        match self.adjacency.get(vertex) {
            Some(edges) => Box::new(edges.iter().map(|edge| (&edge.target, edge.weight))),
            None => Box::new(std::iter::empty()),
        }
    }

    fn edge_weight(&self, from: &V, to: &V) -> Option<W> {
        self.adjacency
            .get(from)?
            .iter()
            .find(|edge| edge.target == *to)
            .map(|edge| edge.weight)
    }

    fn store_id(&self) -> Uuid {
        self.store_id
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn has_negative_weights(&self) -> bool {
        self.negative_weights
    }

    fn contains_negative_weight(&self) -> bool {
        self.all_edges().any(|edge| edge.weight < W::zero())
    }
}

impl<V, W> MutableGraph<V, W> for AdjacencyList<V, W>
where
    V: Label,
    W: Weight,
{
    fn insert_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        debug!("insert vertex {:?}", vertex);
        self.adjacency.insert(vertex, Vec::new());
        self.generation += 1;
        true
    }

    fn remove_vertex(&mut self, vertex: &V) -> Result<()> {
        let outgoing = self
            .adjacency
            .remove(vertex)
            .ok_or_else(|| Error::unknown_vertex(vertex))?;
        self.edge_count -= outgoing.len();

        // Purge incoming references so no list points at a missing vertex
        for edges in self.adjacency.values_mut() {
            let before = edges.len();
            edges.retain(|edge| edge.target != *vertex);
            self.edge_count -= before - edges.len();
        }

        debug!("remove vertex {:?} ({} outgoing edges)", vertex, outgoing.len());
        self.generation += 1;
        Ok(())
    }

    fn insert_directed_edge(&mut self, from: V, to: V, weight: W) {
        self.insert_vertex(to.clone());
        self.record_weight(weight);

        let edges = self.adjacency.entry(from.clone()).or_default();
        match edges.iter().position(|edge| edge.target == to) {
            Some(index) => edges[index].weight = weight,
            None => {
                edges.push(Edge { target: to.clone(), weight });
                self.edge_count += 1;
            }
        }

        debug!("insert edge {:?} -> {:?} ({:?})", from, to, weight);
        self.generation += 1;
    }

    fn remove_directed_edge(&mut self, from: &V, to: &V) -> Result<bool> {
        if !self.adjacency.contains_key(to) {
            return Err(Error::unknown_vertex(to));
        }
        let edges = self
            .adjacency
            .get_mut(from)
            .ok_or_else(|| Error::unknown_vertex(from))?;

        let Some(position) = edges.iter().position(|edge| edge.target == *to) else {
            return Ok(false);
        };
        edges.swap_remove(position);
        self.edge_count -= 1;

        debug!("remove edge {:?} -> {:?}", from, to);
        self.generation += 1;
        Ok(true)
    }
}

impl<V, W> FromIterator<(V, V, W)> for AdjacencyList<V, W>
where
    V: Label,
    W: Weight,
{
    /// Collects directed `(from, to, weight)` triples
    fn from_iter<I: IntoIterator<Item = (V, V, W)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<V, W> Extend<(V, V, W)> for AdjacencyList<V, W>
where
    V: Label,
    W: Weight,
{
    fn extend<I: IntoIterator<Item = (V, V, W)>>(&mut self, iter: I) {
        for (from, to, weight) in iter {
            self.insert_directed_edge(from, to, weight);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_keeps_one_edge_per_pair() {
        let mut graph: AdjacencyList<&str> = AdjacencyList::new();
        graph.insert_directed_edge("a", "b", 4);
        graph.insert_directed_edge("a", "b", 7);

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges(&"a").map(<[_]>::len), Some(1));
        assert_eq!(graph.edge_weight(&"a", &"b"), Some(7));
    }

    #[test]
    fn edge_count_tracks_vertex_purge() {
        let mut graph: AdjacencyList<u32> = AdjacencyList::from_edges([(1, 2), (2, 3), (3, 1)]);
        assert_eq!(graph.edge_count(), 6);

        graph.remove_vertex(&2).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge_count(), graph.all_edges().count());
    }

    #[test]
    fn clone_gets_fresh_store_id() {
        let graph: AdjacencyList<u32> = AdjacencyList::from_edges([(1, 2)]);
        let copy = graph.clone();

        assert_ne!(graph.store_id(), copy.store_id());
        assert_eq!(graph.generation(), copy.generation());
        assert_eq!(copy.edge_weight(&1, &2), Some(1));
    }

    #[test]
    fn idempotent_vertex_insert_keeps_generation() {
        let mut graph: AdjacencyList<u32> = AdjacencyList::new();
        assert!(graph.insert_vertex(1));
        let generation = graph.generation();
        assert!(!graph.insert_vertex(1));
        assert_eq!(graph.generation(), generation);
    }
}
