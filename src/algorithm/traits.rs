use std::collections::HashMap;
use uuid::Uuid;

use crate::graph::{Graph, Label, Weight};
use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Distance and predecessor recorded for one reachable vertex
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TreeEntry<V, W> {
    pub distance: W,
    pub parent: Option<V>,
}

/// Shortest-path tree rooted at `source`
///
/// Only reachable vertices have an entry. The tree remembers which store it
/// was computed from and that store's generation at the time.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(bound(
        serialize = "V: Serialize + std::hash::Hash + Eq, W: Serialize",
        deserialize = "V: Deserialize<'de> + std::hash::Hash + Eq, W: Deserialize<'de>"
    ))
)]
pub struct ShortestPathTree<V, W> {
    source: V,
    store_id: Uuid,
    generation: u64,
    entries: HashMap<V, TreeEntry<V, W>>,
}

impl<V, W> ShortestPathTree<V, W>
where
    V: Label,
    W: Weight,
{
    pub(crate) fn new(
        source: V,
        store_id: Uuid,
        generation: u64,
        entries: HashMap<V, TreeEntry<V, W>>,
    ) -> Self {
        ShortestPathTree {
            source,
            store_id,
            generation,
            entries,
        }
    }

    pub fn source(&self) -> &V {
        &self.source
    }

    /// Id of the store this tree was computed from
    pub fn store_id(&self) -> Uuid {
        self.store_id
    }

    /// Generation of the graph this tree was computed from
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of reachable vertices, the source included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.entries.contains_key(vertex)
    }

    /// Shortest distance from the source, `None` when unreachable
    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.entries.get(vertex).map(|entry| entry.distance)
    }

    /// Predecessor on the shortest path, `None` for the source and unreachable vertices
    pub fn parent(&self, vertex: &V) -> Option<&V> {
        self.entries.get(vertex)?.parent.as_ref()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&V, &TreeEntry<V, W>)> + '_ {
        self.entries.iter()
    }

    /// Walks parent pointers back from `target` and returns the path source..=target
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        let mut path = Vec::new();
        self.write_path(target, &mut path).then_some(path)
    }

    /// Fills `path` with source..=target. Returns false, leaving `path` empty,
    /// when `target` is unreachable.
    pub(crate) fn write_path(&self, target: &V, path: &mut Vec<V>) -> bool {
        path.clear();
        if !self.is_reachable(target) {
            return false;
        }

        let mut current = Some(target);
        while let Some(vertex) = current {
            path.push(vertex.clone());
            current = self.parent(vertex);
        }
        path.reverse();
        true
    }
}

impl<V, W> PartialEq for ShortestPathTree<V, W>
where
    V: Label,
    W: Weight,
{
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.store_id == other.store_id
            && self.generation == other.generation
            && self.entries == other.entries
    }
}

impl<V, W> Eq for ShortestPathTree<V, W>
where
    V: Label,
    W: Weight,
{
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: Label,
    W: Weight,
    G: Graph<V, W>,
{
    /// Compute shortest paths from a source vertex to all reachable vertices
    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathTree<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, tree: &ShortestPathTree<V, W>, target: &V) -> Option<Vec<V>> {
        tree.path_to(target)
    }
}
