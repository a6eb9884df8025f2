//! Bijection between input labels and dense vertex ids in `[0, n)`.
//!
//! The map is an explicit value built once from an [`EdgeList`] and passed
//! by reference to whoever needs to translate ids back into labels.

use std::convert::TryFrom;

use itertools::{Itertools, MinMaxResult};
use rustc_hash::FxHashMap;

use crate::edgeio::{EdgeList, Label};
use crate::error::{Error, Result};
use crate::graph::{Vertex, MAX_VERTICES};

#[derive(Clone, Debug)]
enum Repr {
    /// Labels already are `0..n`.
    Identity(usize),
    /// Labels numbered in order of first appearance.
    Table {
        labels: Vec<Label>,
        index: FxHashMap<Label, Vertex>,
    },
}

/// Dense-id mapping for one graph.
#[derive(Clone, Debug)]
pub struct IdMap {
    repr: Repr,
}

impl IdMap {
    /// Chooses a mapping for the labels of `edges`.
    ///
    /// If the source declared a vertex count and every label fits under it,
    /// or if the distinct labels are exactly `0..n`, the identity is used
    /// and isolated vertices keep their ids. Otherwise labels are numbered
    /// by first appearance, endpoints of each edge left to right.
    ///
    /// Fails with [`Error::TooManyVertices`] past [`MAX_VERTICES`].
    pub fn compact(edges: &EdgeList) -> Result<Self> {
        if let Some(n) = edges.nvertices {
            let fits = edges
                .edges
                .iter()
                .all(|&(a, b)| in_range(a, n) && in_range(b, n));
            if fits {
                check_count(n)?;
                return Ok(Self::identity(n));
            }
        }

        let mut labels = Vec::new();
        let mut index = FxHashMap::default();
        for &(a, b) in &edges.edges {
            for label in [a, b].iter().copied() {
                if !index.contains_key(&label) {
                    index.insert(label, next_vertex(labels.len())?);
                    labels.push(label);
                }
            }
        }

        let n = labels.len();
        let contiguous = match labels.iter().copied().minmax() {
            MinMaxResult::NoElements => true,
            MinMaxResult::OneElement(x) => x == 0,
            MinMaxResult::MinMax(lo, hi) => lo == 0 && in_range(hi, n),
        };
        if contiguous {
            Ok(Self::identity(n))
        } else {
            Ok(Self {
                repr: Repr::Table { labels, index },
            })
        }
    }

    pub fn identity(n: usize) -> Self {
        Self {
            repr: Repr::Identity(n),
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self.repr, Repr::Identity(_))
    }

    /// Number of dense vertices.
    pub fn len(&self) -> usize {
        match &self.repr {
            Repr::Identity(n) => *n,
            Repr::Table { labels, .. } => labels.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn vertex(&self, label: Label) -> Option<Vertex> {
        match &self.repr {
            Repr::Identity(n) if in_range(label, *n) => Some(label as Vertex),
            Repr::Identity(_) => None,
            Repr::Table { index, .. } => index.get(&label).copied(),
        }
    }

    pub fn label(&self, v: Vertex) -> Option<Label> {
        match &self.repr {
            Repr::Identity(n) if (v as usize) < *n => Some(Label::from(v)),
            Repr::Identity(_) => None,
            Repr::Table { labels, .. } => labels.get(v as usize).copied(),
        }
    }

    /// Rewrites every edge in dense ids. Every label of `edges` is mapped,
    /// since the map was built from them.
    pub(crate) fn translate(&self, edges: &EdgeList) -> Vec<(Vertex, Vertex)> {
        edges
            .edges
            .iter()
            .filter_map(|&(a, b)| Some((self.vertex(a)?, self.vertex(b)?)))
            .collect()
    }
}

fn check_count(n: usize) -> Result<()> {
    if n > MAX_VERTICES {
        return Err(Error::TooManyVertices(n));
    }
    Ok(())
}

/// Id for the vertex after the first `assigned` ones.
fn next_vertex(assigned: usize) -> Result<Vertex> {
    check_count(assigned + 1)?;
    Vertex::try_from(assigned).map_err(|_| Error::TooManyVertices(assigned + 1))
}

fn in_range(label: Label, n: usize) -> bool {
    label >= 0 && (label as u64) < n as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contiguous_labels_use_identity() {
        let el = EdgeList::from_pairs(vec![(2, 0), (1, 2)]);
        let map = IdMap::compact(&el).unwrap();
        assert!(map.is_identity());
        assert_eq!(map.len(), 3);
        assert_eq!(map.vertex(2), Some(2));
        assert_eq!(map.vertex(3), None);
        assert_eq!(map.label(1), Some(1));
    }

    #[test]
    fn sparse_labels_compact_in_first_seen_order() {
        let el = EdgeList::from_pairs(vec![(100, -7), (5, 100), (-7, 42)]);
        let map = IdMap::compact(&el).unwrap();
        assert!(!map.is_identity());
        assert_eq!(map.len(), 4);
        assert_eq!(map.vertex(100), Some(0));
        assert_eq!(map.vertex(-7), Some(1));
        assert_eq!(map.vertex(5), Some(2));
        assert_eq!(map.vertex(42), Some(3));
        for v in 0..4 {
            assert_eq!(map.vertex(map.label(v).unwrap()), Some(v));
        }
        assert_eq!(map.translate(&el), vec![(0, 1), (2, 0), (1, 3)]);
    }

    #[test]
    fn declared_vertex_count_keeps_isolated_vertices() {
        let mut el = EdgeList::from_pairs(vec![(0, 3)]);
        el.nvertices = Some(6);
        let map = IdMap::compact(&el).unwrap();
        assert!(map.is_identity());
        assert_eq!(map.len(), 6);
    }

    #[test]
    fn empty_edge_list_maps_nothing() {
        let map = IdMap::compact(&EdgeList::default()).unwrap();
        assert!(map.is_empty());
        assert_eq!(map.label(0), None);
    }

    #[test]
    fn vertex_count_is_bounded_by_id_width() {
        let el = EdgeList {
            nvertices: Some(MAX_VERTICES + 1),
            ..EdgeList::default()
        };
        assert!(matches!(
            IdMap::compact(&el),
            Err(Error::TooManyVertices(n)) if n == MAX_VERTICES + 1
        ));

        assert_eq!(next_vertex(0).unwrap(), 0);
        assert_eq!(next_vertex(MAX_VERTICES - 1).unwrap(), Vertex::MAX - 1);
        assert!(matches!(
            next_vertex(MAX_VERTICES),
            Err(Error::TooManyVertices(_))
        ));
    }
}
