//! Shared-neighbor counting for a single work item.
//!
//! The adaptive strategy picks, per item, between a linear merge of the
//! two sorted lists and binary-searching the elements of the shorter list
//! in the longer one. Merging costs `O(sw + su)`; searching costs
//! `O(min · log max)`, which wins once the lists differ in length by more
//! than the skew threshold.

use crate::edgeset::CanonicalEdgeSet;
use crate::graph::{Graph, Vertex};
use crate::orient::WorkItem;

/// Per-item counting policy. Implementations only read the graph, so one
/// instance is shared by every worker.
pub trait Intersect: Sync {
    /// Number of vertices adjacent to both endpoints of `item`, under the
    /// graph's adjacency discipline.
    fn shared(&self, graph: &Graph, item: WorkItem) -> u64;
}

/// Which branch the adaptive strategy takes for a pair of list lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Walk both lists in lockstep.
    Merge,
    /// Iterate the pivot's list, binary-search the other's.
    SearchFromPivot,
    /// Iterate the other endpoint's list, binary-search the pivot's.
    SearchFromOther,
}

/// Branch selection for lengths `sw` (pivot) and `su` (other endpoint)
/// under skew threshold `skew`.
pub fn choose(sw: usize, su: usize, skew: usize) -> Strategy {
    if sw.saturating_mul(skew) < su {
        Strategy::SearchFromPivot
    } else if su.saturating_mul(skew) < sw {
        Strategy::SearchFromOther
    } else {
        Strategy::Merge
    }
}

/// Size of the intersection of two strictly ascending lists, by merging.
pub fn merge_count(a: &[Vertex], b: &[Vertex]) -> u64 {
    let (mut i, mut j) = (0, 0);
    let mut count = 0;
    while i < a.len() && j < b.len() {
        if a[i] < b[j] {
            i += 1;
        } else if a[i] > b[j] {
            j += 1;
        } else {
            count += 1;
            i += 1;
            j += 1;
        }
    }
    count
}

/// Size of the intersection of two strictly ascending lists, by searching
/// `long` for each element of `short`. Since `short` is ascending too,
/// each search starts where the previous one stopped.
pub fn search_count(short: &[Vertex], long: &[Vertex]) -> u64 {
    let mut rest = long;
    let mut count = 0;
    for v in short {
        if rest.is_empty() {
            break;
        }
        match rest.binary_search(v) {
            Ok(p) => {
                count += 1;
                rest = &rest[p + 1..];
            }
            Err(p) => rest = &rest[p..],
        }
    }
    count
}

/// Merge or search, depending on how lopsided the two lists are.
#[derive(Clone, Copy, Debug)]
pub struct Adaptive {
    pub skew: usize,
}

impl Adaptive {
    pub fn new(skew: usize) -> Self {
        Self { skew }
    }

    pub fn strategy(&self, graph: &Graph, item: WorkItem) -> Strategy {
        choose(graph.degree(item.pivot), graph.degree(item.other), self.skew)
    }
}

impl Intersect for Adaptive {
    #[inline]
    fn shared(&self, graph: &Graph, item: WorkItem) -> u64 {
        let w = graph.neighbors(item.pivot);
        let u = graph.neighbors(item.other);
        match choose(w.len(), u.len(), self.skew) {
            Strategy::SearchFromPivot => search_count(w, u),
            Strategy::SearchFromOther => search_count(u, w),
            Strategy::Merge => merge_count(w, u),
        }
    }
}

/// Membership probing: for each `v` in the pivot's list, asks the edge set
/// whether `(other, v)` is an edge.
///
/// This equals the list intersection only when lists hold every neighbor,
/// so the engine refuses to pair it with forward adjacency.
pub struct EdgeSetProbe {
    edges: CanonicalEdgeSet<Vertex>,
}

impl EdgeSetProbe {
    pub fn new(graph: &Graph) -> Self {
        Self {
            edges: graph.edges().collect(),
        }
    }
}

impl Intersect for EdgeSetProbe {
    fn shared(&self, graph: &Graph, item: WorkItem) -> u64 {
        graph
            .neighbors(item.pivot)
            .iter()
            .filter(|&&v| self.edges.contains(item.other, v))
            .count() as u64
    }
}
