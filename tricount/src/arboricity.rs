//! Degree-based arboricity bound.

use crate::graph::Graph;

/// `ceil(nedges / max_degree)`, or 0 for a graph without edges.
pub fn estimate(graph: &Graph) -> u64 {
    bound(graph.nedges(), graph.max_degree())
}

/// The bound itself, guarded against a zero maximum degree.
pub fn bound(nedges: usize, max_degree: usize) -> u64 {
    if max_degree == 0 {
        return 0;
    }
    ((nedges + max_degree - 1) / max_degree) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Adjacency;

    #[test]
    fn zero_degree_is_zero() {
        assert_eq!(bound(0, 0), 0);
        let (g, _) = Graph::from_pairs(Vec::new(), Adjacency::Full).unwrap();
        assert_eq!(estimate(&g), 0);
    }

    #[test]
    fn rounds_up() {
        assert_eq!(bound(7, 3), 3);
        assert_eq!(bound(6, 3), 2);
        assert_eq!(bound(1, 1), 1);
    }

    #[test]
    fn same_bound_for_both_disciplines() {
        // K4: 6 edges, max degree 3
        let k4 = vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
        for &adjacency in &[Adjacency::Full, Adjacency::Forward] {
            let (g, _) = Graph::from_pairs(k4.clone(), adjacency).unwrap();
            assert_eq!(estimate(&g), 2);
        }
    }
}
