use log::{debug, warn};

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathTree};
use crate::graph::{Graph, Label, Weight};
use crate::{Error, Result};

/// What `run` does when the graph carries negative edge weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegativeWeightPolicy {
    /// Log a warning and run anyway; distances are undefined
    #[default]
    Warn,
    /// Refuse with `Error::NegativeWeight`
    Reject,
}

/// Engine settings
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Handling of negative edge weights
    pub negative_weights: NegativeWeightPolicy,
    /// Whether queries fail on a tree computed before the latest mutation
    pub stale_check: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            negative_weights: NegativeWeightPolicy::Warn,
            stale_check: true,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the negative weight policy
    pub fn with_negative_weights(mut self, policy: NegativeWeightPolicy) -> Self {
        self.negative_weights = policy;
        self
    }

    /// Enable or disable the stale tree check on queries
    pub fn with_stale_check(mut self, enabled: bool) -> Self {
        self.stale_check = enabled;
        self
    }
}

/// Holds the shortest-path tree of the last `run` and answers queries from it
///
/// The engine starts with no tree; every `find_path` fails with
/// `Error::NotComputed` until the first successful `run`. Each run replaces the
/// tree entirely. Mutating the graph afterwards makes the tree stale.
///
/// Queries must pass the graph the tree was computed from. Each tree records
/// its store's id, so passing another store (a clone included) fails with
/// `Error::GraphMismatch` instead of answering from the wrong topology.
#[derive(Debug)]
pub struct SsspEngine<V, W>
where
    V: Label,
    W: Weight,
{
    config: EngineConfig,
    algorithm: Dijkstra,
    tree: Option<ShortestPathTree<V, W>>,
}

impl<V, W> SsspEngine<V, W>
where
    V: Label,
    W: Weight,
{
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        SsspEngine {
            config,
            algorithm: Dijkstra::new(),
            tree: None,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The tree from the last successful run
    pub fn tree(&self) -> Option<&ShortestPathTree<V, W>> {
        self.tree.as_ref()
    }

    /// Source of the last successful run
    pub fn source(&self) -> Option<&V> {
        self.tree.as_ref().map(ShortestPathTree::source)
    }

    /// True when there is a tree and `graph` is not the exact state it was computed from
    pub fn is_stale<G: Graph<V, W>>(&self, graph: &G) -> bool {
        self.tree.as_ref().is_some_and(|tree| {
            tree.store_id() != graph.store_id() || tree.generation() != graph.generation()
        })
    }

    /// Computes the shortest-path tree from `source`, replacing the current one.
    ///
    /// On error the previous tree is kept.
    pub fn run<G: Graph<V, W>>(&mut self, graph: &G, source: &V) -> Result<&ShortestPathTree<V, W>> {
        if !graph.contains_vertex(source) {
            return Err(Error::unknown_vertex(source));
        }
        // The sticky flag is O(1); only scan the edges when it is set
        if graph.has_negative_weights() && graph.contains_negative_weight() {
            match self.config.negative_weights {
                NegativeWeightPolicy::Reject => return Err(Error::NegativeWeight),
                NegativeWeightPolicy::Warn => {
                    warn!("running from {:?} over negative edge weights, distances are undefined", source)
                }
            }
        }

        let tree = self.algorithm.compute_shortest_paths(graph, source)?;
        debug!(
            "engine tree from {:?} at generation {}: {} reachable",
            source,
            tree.generation(),
            tree.len()
        );
        Ok(&*self.tree.insert(tree))
    }

    /// Re-runs the last source if the graph changed since. Returns whether it ran.
    pub fn refresh<G: Graph<V, W>>(&mut self, graph: &G) -> Result<bool> {
        let source = match &self.tree {
            None => return Err(Error::NotComputed),
            Some(tree)
                if tree.store_id() == graph.store_id()
                    && tree.generation() == graph.generation() =>
            {
                return Ok(false)
            }
            Some(tree) => tree.source().clone(),
        };
        self.run(graph, &source)?;
        Ok(true)
    }

    /// Distance from the last run's source to `dest`.
    ///
    /// If `path` is given it is cleared and, on success, filled with the vertices
    /// from the source to `dest` inclusive. It is left empty on any error.
    pub fn find_path<G: Graph<V, W>>(
        &self,
        graph: &G,
        dest: &V,
        mut path: Option<&mut Vec<V>>,
    ) -> Result<W> {
        if let Some(buffer) = path.as_deref_mut() {
            buffer.clear();
        }

        let tree = self.tree.as_ref().ok_or(Error::NotComputed)?;
        if !graph.contains_vertex(dest) {
            return Err(Error::unknown_vertex(dest));
        }
        if tree.store_id() != graph.store_id() {
            return Err(Error::GraphMismatch);
        }
        if self.config.stale_check && tree.generation() != graph.generation() {
            warn!(
                "query for {:?} against stale tree (generation {} vs {})",
                dest,
                tree.generation(),
                graph.generation()
            );
            return Err(Error::StaleTree {
                tree: tree.generation(),
                graph: graph.generation(),
            });
        }

        let distance = tree
            .distance(dest)
            .ok_or_else(|| Error::unreachable(tree.source(), dest))?;
        if let Some(buffer) = path {
            tree.write_path(dest, buffer);
        }
        Ok(distance)
    }

    /// Distance only, see [`Self::find_path`]
    pub fn distance<G: Graph<V, W>>(&self, graph: &G, dest: &V) -> Result<W> {
        self.find_path(graph, dest, None)
    }
}

impl<V, W> Default for SsspEngine<V, W>
where
    V: Label,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}
