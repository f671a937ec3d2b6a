use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{Float, One, Zero};
use ordered_float::OrderedFloat;
use uuid::Uuid;

use crate::Result;

/// Vertex label: any comparable, hashable value (router ids, names, ...)
pub trait Label: Clone + Debug + Eq + Hash + Ord {}

impl<T> Label for T where T: Clone + Debug + Eq + Hash + Ord {}

/// Edge weight: totally ordered, additive with a zero and a unit value.
///
/// `one()` is the weight given to edges inserted without an explicit weight.
/// Floating point weights go through [`OrderedFloat`].
pub trait Weight: Copy + Debug + Ord + Zero + One {
    /// Sum of two weights, `None` when it is not representable
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }
            }
        )*
    };
}

integer_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Float sums saturate to infinity instead of overflowing
impl<F> Weight for OrderedFloat<F>
where
    F: Float + Debug,
{
    fn checked_sum(self, other: Self) -> Option<Self> {
        Some(self + other)
    }
}

/// Trait representing a weighted directed graph keyed by labels
pub trait Graph<V, W>: Debug
where
    V: Label,
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of directed edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if the vertex exists in the graph
    fn contains_vertex(&self, vertex: &V) -> bool;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_>;

    /// Returns true if there's an edge from `from` to `to`
    fn has_edge(&self, from: &V, to: &V) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: &V, to: &V) -> Option<W>;

    /// Identity of this store instance; clones get a fresh one
    fn store_id(&self) -> Uuid;

    /// Mutation counter, bumped by every structural change
    fn generation(&self) -> u64;

    /// True if a negative weight has ever been inserted, even if since removed
    fn has_negative_weights(&self) -> bool;

    /// True if an edge currently in the graph carries a negative weight
    fn contains_negative_weight(&self) -> bool;
}

/// Trait for mutable graph operations
///
/// Edge insertion creates missing endpoints. Removal is stricter: referring to
/// a vertex that does not exist is an error, while removing an absent edge
/// between existing vertices is a no-op reported as `Ok(false)`.
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: Label,
    W: Weight,
{
    /// Adds a vertex with no edges. Returns false if it was already present.
    fn insert_vertex(&mut self, vertex: V) -> bool;

    /// Removes a vertex together with every edge into or out of it
    fn remove_vertex(&mut self, vertex: &V) -> Result<()>;

    /// Adds or overwrites the directed edge `from -> to`
    fn insert_directed_edge(&mut self, from: V, to: V, weight: W);

    /// Removes the directed edge `from -> to`. Returns whether an edge was removed.
    fn remove_directed_edge(&mut self, from: &V, to: &V) -> Result<bool>;

    /// Adds or overwrites the edge in both directions
    fn insert_edge(&mut self, a: V, b: V, weight: W) {
        self.insert_directed_edge(a.clone(), b.clone(), weight);
        self.insert_directed_edge(b, a, weight);
    }

    /// Removes the edge in both directions. Returns whether anything was removed.
    fn remove_edge(&mut self, a: &V, b: &V) -> Result<bool> {
        let forward = self.remove_directed_edge(a, b)?;
        let backward = self.remove_directed_edge(b, a)?;
        Ok(forward || backward)
    }

    /// Undirected edge with the default weight
    fn add_edge(&mut self, a: V, b: V) {
        self.insert_edge(a, b, W::one());
    }

    /// Directed edge with the default weight
    fn add_directed_edge(&mut self, from: V, to: V) {
        self.insert_directed_edge(from, to, W::one());
    }
}
