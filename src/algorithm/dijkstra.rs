use std::collections::{HashMap, HashSet};
use log::{debug, trace};

use crate::graph::{Graph, Label, Weight};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathTree, TreeEntry};
use crate::data_structures::BinaryHeapWrapper;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
///
/// Edge weights are not checked here. With a negative weight the distances
/// are meaningless, although the tree stays acyclic. An edge whose sum would
/// overflow `W` is not relaxed, so a vertex only reachable that way is reported
/// unreachable.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// One-shot query: distance and path from `from` to `to`
    pub fn shortest_path<V, W, G>(&self, graph: &G, from: &V, to: &V) -> Result<(W, Vec<V>)>
    where
        V: Label,
        W: Weight,
        G: Graph<V, W>,
    {
        if !graph.contains_vertex(to) {
            return Err(Error::unknown_vertex(to));
        }
        let tree = self.compute_shortest_paths(graph, from)?;

        let distance = tree.distance(to).ok_or_else(|| Error::unreachable(from, to))?;
        let path = tree.path_to(to).ok_or_else(|| Error::unreachable(from, to))?;
        Ok((distance, path))
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for Dijkstra
where
    V: Label,
    W: Weight,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathTree<V, W>> {
        if !graph.contains_vertex(source) {
            return Err(Error::unknown_vertex(source));
        }

        debug!(
            "dijkstra from {:?} over {} vertices, {} edges",
            source,
            graph.vertex_count(),
            graph.edge_count()
        );

        // Absent entries are at infinite distance
        let mut entries: HashMap<V, TreeEntry<V, W>> = HashMap::new();
        let mut finalized: HashSet<V> = HashSet::with_capacity(graph.vertex_count());

        entries.insert(
            source.clone(),
            TreeEntry {
                distance: W::zero(),
                parent: None,
            },
        );

        let mut queue = BinaryHeapWrapper::with_capacity(graph.vertex_count());
        queue.push(source.clone(), W::zero());

        // Main Dijkstra loop
        while let Some((u, dist_u)) = queue.pop() {
            // Superseded entry for a vertex that was already settled
            if !finalized.insert(u.clone()) {
                continue;
            }

            // Relax all outgoing edges
            for (v, weight) in graph.outgoing_edges(&u) {
                // Parents only ever point at settled vertices, keeping the tree acyclic
                if finalized.contains(v) {
                    continue;
                }
                let Some(new_dist) = dist_u.checked_sum(weight) else {
                    trace!("distance via {:?} -> {:?} overflows, edge skipped", u, v);
                    continue;
                };

                let should_update = match entries.get(v) {
                    None => true,
                    Some(entry) => new_dist < entry.distance,
                };

                if should_update {
                    trace!("relax {:?} -> {:?}: {:?}", u, v, new_dist);
                    entries.insert(
                        v.clone(),
                        TreeEntry {
                            distance: new_dist,
                            parent: Some(u.clone()),
                        },
                    );
                    queue.push(v.clone(), new_dist);
                }
            }
        }

        debug!("dijkstra from {:?} reached {} vertices", source, entries.len());

        Ok(ShortestPathTree::new(
            source.clone(),
            graph.store_id(),
            graph.generation(),
            entries,
        ))
    }
}
