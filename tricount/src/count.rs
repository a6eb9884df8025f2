//! The parallel counting phase.
//!
//! Work items are independent: each reads the immutable graph and yields a
//! shared-neighbor count. The counts are summed with the configured
//! [`Reduction`], and the sum is divided by the adjacency discipline's
//! multiplicity once, after every item has finished.

use std::sync::atomic::{AtomicU64, Ordering};

use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::config::{Adjacency, EngineConfig, IntersectionKind, Reduction};
use crate::edgeio::EdgeList;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::idmap::IdMap;
use crate::intersect::{Adaptive, EdgeSetProbe, Intersect};
use crate::orient::{self, WorkItem};

/// Result of a counting run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Census {
    /// Sum of per-item counts before division.
    pub raw: u64,
    /// Times each triangle contributes to `raw`.
    pub multiplicity: u64,
    pub triangles: u64,
    /// Number of work items (one per undirected edge).
    pub items: usize,
    /// Sum of pivot list lengths over all items.
    pub pivot_work: usize,
}

/// Sums `intersect` over `items` on the current rayon pool.
pub fn reduce<I: Intersect>(
    graph: &Graph,
    items: &[WorkItem],
    intersect: &I,
    reduction: Reduction,
) -> u64 {
    match reduction {
        Reduction::Atomic => {
            let total = AtomicU64::new(0);
            items.par_iter().for_each(|&item| {
                let shared = intersect.shared(graph, item);
                if shared > 0 {
                    total.fetch_add(shared, Ordering::Relaxed);
                }
            });
            // for_each returns only after every item ran
            total.into_inner()
        }
        Reduction::Buffer => {
            let mut counts = Vec::with_capacity(items.len());
            items
                .par_iter()
                .map(|&item| intersect.shared(graph, item))
                .collect_into_vec(&mut counts);
            counts.par_iter().sum()
        }
    }
}

/// A configured triangle counter.
pub struct Engine {
    config: EngineConfig,
    pool: Option<ThreadPool>,
}

impl Engine {
    /// Validates `config` and sets up the worker pool.
    pub fn new(config: EngineConfig) -> Result<Self> {
        if config.skew == 0 {
            return Err(Error::IncompatibleConfig(
                "skew threshold must be positive".to_string(),
            ));
        }
        if config.intersection == IntersectionKind::EdgeSet
            && config.adjacency != Adjacency::Full
        {
            return Err(Error::IncompatibleConfig(format!(
                "{} intersection needs {} adjacency, got {}",
                IntersectionKind::EdgeSet,
                Adjacency::Full,
                config.adjacency
            )));
        }
        let pool = match config.threads {
            Some(n) => Some(ThreadPoolBuilder::new().num_threads(n).build()?),
            None => None,
        };
        Ok(Self { config, pool })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn multiplicity(&self) -> u64 {
        self.config.adjacency.multiplicity()
    }

    /// Builds a graph with this engine's adjacency discipline.
    pub fn build(&self, edges: &EdgeList) -> Result<(Graph, IdMap)> {
        Graph::from_edge_list(edges, self.config.adjacency)
    }

    /// Orients and counts. `graph` must have been built with this
    /// engine's adjacency discipline.
    pub fn count(&self, graph: &Graph) -> Result<Census> {
        if graph.adjacency() != self.config.adjacency {
            return Err(Error::IncompatibleConfig(format!(
                "engine expects {} adjacency, graph has {}",
                self.config.adjacency,
                graph.adjacency()
            )));
        }
        let items = orient::work_items(graph, self.config.orientation);
        Ok(self.count_items(graph, &items))
    }

    /// Counts over precomputed work items.
    pub fn count_items(&self, graph: &Graph, items: &[WorkItem]) -> Census {
        let raw = match self.config.intersection {
            IntersectionKind::Adaptive => self.run(graph, items, &Adaptive::new(self.config.skew)),
            IntersectionKind::EdgeSet => self.run(graph, items, &EdgeSetProbe::new(graph)),
        };
        let multiplicity = self.multiplicity();
        debug_assert_eq!(raw % multiplicity, 0);
        Census {
            raw,
            multiplicity,
            triangles: raw / multiplicity,
            items: items.len(),
            pivot_work: orient::pivot_work(graph, items),
        }
    }

    fn run<I: Intersect>(&self, graph: &Graph, items: &[WorkItem], intersect: &I) -> u64 {
        let reduction = self.config.reduction;
        match &self.pool {
            Some(pool) => pool.install(|| reduce(graph, items, intersect, reduction)),
            None => reduce(graph, items, intersect, reduction),
        }
    }
}

/// Counts the triangles of a cleaned edge list with the given settings.
pub fn count_triangles(edges: &EdgeList, config: EngineConfig) -> Result<Census> {
    let engine = Engine::new(config)?;
    let (graph, _) = engine.build(edges)?;
    engine.count(&graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Orientation;

    fn census(pairs: Vec<(i64, i64)>, config: EngineConfig) -> Census {
        count_triangles(&EdgeList::from_pairs(pairs), config).unwrap()
    }

    #[test]
    fn boundary_cases() {
        let config = EngineConfig::default();
        assert_eq!(census(vec![], config).triangles, 0);
        assert_eq!(census(vec![(0, 1)], config).triangles, 0);
        assert_eq!(census(vec![(0, 1), (1, 2)], config).triangles, 0);
        assert_eq!(census(vec![(0, 1), (1, 2), (0, 2)], config).triangles, 1);
    }

    #[test]
    fn raw_sum_carries_multiplicity() {
        let k4 = vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
        let full = census(k4.clone(), EngineConfig::default());
        assert_eq!((full.raw, full.multiplicity, full.triangles), (12, 3, 4));

        let forward = EngineConfig {
            adjacency: Adjacency::Forward,
            orientation: Orientation::Id,
            ..EngineConfig::default()
        };
        let fwd = census(k4, forward);
        assert_eq!((fwd.raw, fwd.multiplicity, fwd.triangles), (4, 1, 4));
        assert_eq!(fwd.items, 6);
    }

    #[test]
    fn reductions_agree() {
        let pairs = vec![(0, 1), (1, 2), (2, 0), (2, 3), (3, 0), (3, 4), (4, 2)];
        let atomic = census(pairs.clone(), EngineConfig::default());
        let buffer = census(
            pairs,
            EngineConfig {
                reduction: Reduction::Buffer,
                threads: Some(2),
                ..EngineConfig::default()
            },
        );
        assert_eq!(atomic.raw, buffer.raw);
        assert_eq!(atomic.triangles, 3);
    }

    #[test]
    fn rejects_edgeset_probe_on_forward_lists() {
        let config = EngineConfig {
            adjacency: Adjacency::Forward,
            intersection: IntersectionKind::EdgeSet,
            ..EngineConfig::default()
        };
        assert!(matches!(Engine::new(config), Err(Error::IncompatibleConfig(_))));
    }

    #[test]
    fn rejects_zero_skew() {
        let config = EngineConfig {
            skew: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(Engine::new(config), Err(Error::IncompatibleConfig(_))));
    }

    #[test]
    fn rejects_graph_with_other_discipline() {
        let engine = Engine::new(EngineConfig::default()).unwrap();
        let (graph, _) = Graph::from_pairs(vec![(0, 1)], Adjacency::Forward).unwrap();
        assert!(matches!(engine.count(&graph), Err(Error::IncompatibleConfig(_))));
    }
}
