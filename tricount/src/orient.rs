//! Edge orientation: every undirected edge becomes exactly one work item.

use crate::config::Orientation;
use crate::graph::{Graph, Vertex};

/// One oriented edge. `pivot`'s adjacency list drives the item's work;
/// `other` is the far endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WorkItem {
    pub pivot: Vertex,
    pub other: Vertex,
}

impl Orientation {
    /// Orients the edge `{a, b}`.
    pub fn orient(self, graph: &Graph, a: Vertex, b: Vertex) -> WorkItem {
        let a_first = match self {
            Orientation::Degree => (graph.degree(a), a) <= (graph.degree(b), b),
            Orientation::Id => a <= b,
        };
        if a_first {
            WorkItem { pivot: a, other: b }
        } else {
            WorkItem { pivot: b, other: a }
        }
    }
}

/// One work item per undirected edge of `graph`, in ascending order of
/// the edge's smaller endpoint.
pub fn work_items(graph: &Graph, orientation: Orientation) -> Vec<WorkItem> {
    let mut items = Vec::with_capacity(graph.nedges());
    items.extend(graph.edges().map(|(u, v)| orientation.orient(graph, u, v)));
    items
}

/// Upper bound on intersection work: the sum over items of the pivot's
/// list length.
pub fn pivot_work(graph: &Graph, items: &[WorkItem]) -> usize {
    items.iter().map(|item| graph.degree(item.pivot)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Adjacency;

    fn star(leaves: i64) -> Graph {
        Graph::from_pairs((1..=leaves).map(|l| (0, l)), Adjacency::Full)
            .unwrap()
            .0
    }

    #[test]
    fn degree_orientation_pivots_on_leaves() {
        let g = star(5);
        let items = work_items(&g, Orientation::Degree);
        assert_eq!(items.len(), 5);
        assert!(items.iter().all(|item| item.other == 0 && item.pivot != 0));
        assert_eq!(pivot_work(&g, &items), 5);
    }

    #[test]
    fn id_orientation_pivots_on_smaller_id() {
        let g = star(5);
        let items = work_items(&g, Orientation::Id);
        assert!(items.iter().all(|item| item.pivot == 0));
        assert_eq!(pivot_work(&g, &items), 25);
    }

    #[test]
    fn degree_ties_break_on_id() {
        let (g, _) = Graph::from_pairs(vec![(0, 1)], Adjacency::Full).unwrap();
        assert_eq!(
            Orientation::Degree.orient(&g, 1, 0),
            WorkItem { pivot: 0, other: 1 }
        );
    }

    #[test]
    fn one_item_per_edge() {
        for &adjacency in &[Adjacency::Full, Adjacency::Forward] {
            let (g, _) = Graph::from_pairs(vec![(0, 1), (1, 2), (2, 0), (2, 3)], adjacency).unwrap();
            for &orientation in &[Orientation::Degree, Orientation::Id] {
                assert_eq!(work_items(&g, orientation).len(), 4);
            }
        }
    }
}
