//! Compact graph data structure.

use itertools::Itertools;
use rayon::iter::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator};
use rayon::slice::ParallelSlice;

use crate::config::Adjacency;
use crate::edgeio::{EdgeList, Label};
use crate::error::Result;
use crate::idmap::IdMap;

pub type Vertex = u32;

/// Largest vertex count a [`Graph`] can hold: ids are `u32` and the offsets
/// array needs one slot past the last vertex.
pub const MAX_VERTICES: usize = Vertex::MAX as usize;

/// A compact, immutable adjacency list intended for sparse graphs.
///
/// The space of vertices is a contiguous range of u32 ints
/// from [0, nvertices). Under [`Adjacency::Full`] every edge appears in
/// both endpoints' lists; under [`Adjacency::Forward`] only in the list of
/// its smaller endpoint.
pub struct Graph {
    offsets: Vec<usize>,
    neighbors: Vec<Vertex>,
    adjacency: Adjacency,
}

impl Graph {
    /// `offsets.len()` should be one greater than the number of vertices
    /// with `neighbors[offsets[i]..offsets[i+1]]` being the edges incident
    /// from `i`, which should be strictly ascending, and bidirectional for
    /// full adjacency or strictly greater than `i` for forward adjacency.
    fn new(offsets: Vec<usize>, neighbors: Vec<Vertex>, adjacency: Adjacency) -> Self {
        assert!(offsets.len() <= MAX_VERTICES + 1);
        debug_assert!(offsets.par_windows(2).enumerate().all(|(i, s)| {
            let i = i as Vertex;
            let list = &neighbors[s[0]..s[1]];
            s[0] <= s[1]
                && list.iter().tuple_windows().all(|(a, b)| a < b)
                && list.iter().copied().all(|j| {
                    (j as usize) + 1 < offsets.len()
                        && match adjacency {
                            Adjacency::Full => neighbors
                                [offsets[j as usize]..offsets[1 + j as usize]]
                                .binary_search(&i)
                                .is_ok(),
                            Adjacency::Forward => j > i,
                        }
                })
        }));
        Self {
            offsets,
            neighbors,
            adjacency,
        }
    }

    /// Builds the adjacency structure for a cleaned edge list, along with
    /// the label mapping used to make its ids dense.
    pub fn from_edge_list(edges: &EdgeList, adjacency: Adjacency) -> Result<(Self, IdMap)> {
        let ids = IdMap::compact(edges)?;
        let dense = ids.translate(edges);
        Ok((build(ids.len(), &dense, adjacency), ids))
    }

    /// Convenience constructor over raw label pairs; duplicates and
    /// self-loops are cleaned up first.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (Label, Label)>,
        adjacency: Adjacency,
    ) -> Result<(Self, IdMap)> {
        Self::from_edge_list(&EdgeList::from_pairs(pairs), adjacency)
    }

    pub fn neighbors(&self, v: Vertex) -> &[Vertex] {
        let v = v as usize;
        let lo = self.offsets[v];
        let hi = self.offsets[v + 1];
        &self.neighbors[lo..hi]
    }

    /// Length of `v`'s adjacency list under this graph's discipline.
    pub fn degree(&self, v: Vertex) -> usize {
        let v = v as usize;
        let lo = self.offsets[v];
        let hi = self.offsets[v + 1];
        hi - lo
    }

    /// Undirected degree of every vertex, regardless of discipline.
    pub fn degrees(&self) -> Vec<usize> {
        match self.adjacency {
            Adjacency::Full => (0..self.nvertices())
                .map(|v| self.degree(v as Vertex))
                .collect(),
            Adjacency::Forward => {
                let mut degrees = vec![0usize; self.nvertices()];
                for (u, v) in self.edges() {
                    degrees[u as usize] += 1;
                    degrees[v as usize] += 1;
                }
                degrees
            }
        }
    }

    pub fn max_degree(&self) -> usize {
        self.degrees().into_iter().max().unwrap_or(0)
    }

    pub fn adjacency(&self) -> Adjacency {
        self.adjacency
    }

    pub fn nvertices(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn nedges(&self) -> usize {
        match self.adjacency {
            Adjacency::Full => self.neighbors.len() / 2,
            Adjacency::Forward => self.neighbors.len(),
        }
    }

    /// Each undirected edge once, as `(u, v)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        (0..self.nvertices() as Vertex).flat_map(move |u| {
            self.neighbors(u)
                .iter()
                .copied()
                .filter(move |&v| u < v)
                .map(move |v| (u, v))
        })
    }

    /// Whether `u` and `v` are adjacent, by binary search.
    pub fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        let (lo, hi) = if u < v { (u, v) } else { (v, u) };
        if hi as usize >= self.nvertices() {
            return false;
        }
        self.neighbors(lo).binary_search(&hi).is_ok()
    }

    /// Checks the adjacency invariants: every list strictly ascending,
    /// in range, free of self entries.
    pub fn is_well_formed(&self) -> bool {
        let n = self.nvertices();
        (0..n as Vertex).all(|v| {
            let list = self.neighbors(v);
            list.iter().tuple_windows().all(|(a, b)| a < b)
                && list.iter().all(|&u| u != v && (u as usize) < n)
        })
    }
}

/// Counting-sort construction over dense, simple edges.
fn build(nvertices: usize, edges: &[(Vertex, Vertex)], adjacency: Adjacency) -> Graph {
    let mut offsets = vec![0usize; nvertices + 1];
    for &(a, b) in edges {
        match adjacency {
            Adjacency::Full => {
                offsets[1 + a as usize] += 1;
                offsets[1 + b as usize] += 1;
            }
            Adjacency::Forward => offsets[1 + a.min(b) as usize] += 1,
        }
    }
    let mut cumsum = 0;
    for offset in offsets.iter_mut() {
        cumsum += *offset;
        *offset = cumsum;
    }

    let mut cursor = offsets.clone();
    let mut neighbors = vec![0 as Vertex; cumsum];
    for &(a, b) in edges {
        match adjacency {
            Adjacency::Full => {
                neighbors[cursor[a as usize]] = b;
                cursor[a as usize] += 1;
                neighbors[cursor[b as usize]] = a;
                cursor[b as usize] += 1;
            }
            Adjacency::Forward => {
                let (lo, hi) = (a.min(b), a.max(b));
                neighbors[cursor[lo as usize]] = hi;
                cursor[lo as usize] += 1;
            }
        }
    }

    {
        // fight the borrow checker
        let mut head_and_tail = neighbors.split_at_mut(0);
        let mut neighbor_lists = Vec::with_capacity(nvertices);
        for s in offsets.windows(2) {
            head_and_tail = head_and_tail.1.split_at_mut(s[1] - s[0]);
            neighbor_lists.push(head_and_tail.0);
        }
        neighbor_lists
            .par_iter_mut()
            .for_each(|s| s.sort_unstable());
    }

    Graph::new(offsets, neighbors, adjacency)
}
