//! Membership testing for undirected edges.
//!
//! Every undirected pair is stored once as `(min, max)`, so `(a, b)` and
//! `(b, a)` hit the same slot and no custom pair hash is needed.

use std::hash::Hash;

use rustc_hash::FxHashSet;

/// Orders an unordered pair as `(min, max)`.
#[inline]
pub fn canonical<T: Ord>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// A set of undirected edges keyed by their canonical pair.
#[derive(Clone, Debug)]
pub struct CanonicalEdgeSet<T: Eq + Hash> {
    pairs: FxHashSet<(T, T)>,
}

impl<T: Copy + Ord + Hash> Default for CanonicalEdgeSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Ord + Hash> CanonicalEdgeSet<T> {
    pub fn new() -> Self {
        Self {
            pairs: FxHashSet::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns `true` if the edge was not present yet.
    pub fn insert(&mut self, a: T, b: T) -> bool {
        self.pairs.insert(canonical(a, b))
    }

    #[inline]
    pub fn contains(&self, a: T, b: T) -> bool {
        self.pairs.contains(&canonical(a, b))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Canonical pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.pairs.iter().copied()
    }
}

impl<T: Copy + Ord + Hash> std::iter::FromIterator<(T, T)> for CanonicalEdgeSet<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (a, b) in iter {
            set.insert(a, b);
        }
        set
    }
}
