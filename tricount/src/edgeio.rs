//! Edge-list reader.
//!
//! Input is one edge per line, two whitespace-separated integers. The
//! result is a simple edge list: self-loops dropped, each undirected pair
//! kept once at its first occurrence, and first-seen order preserved.

use std::io::BufRead;
use std::path::Path;

use bstr::ByteSlice;
use serde_json::json;

use crate::edgeset::CanonicalEdgeSet;
use crate::error::Result;
use crate::scanner::{self, Scanner};

/// A vertex label as it appears in the input, before compaction.
pub type Label = i64;

/// Counters describing what ingestion kept and what it threw away.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub edges: usize,
    pub self_loops: usize,
    pub duplicates: usize,
    pub malformed: usize,
}

/// A deduplicated, self-loop-free edge list in first-seen order.
#[derive(Clone, Debug, Default)]
pub struct EdgeList {
    pub edges: Vec<(Label, Label)>,
    /// Number of vertices declared by the source, if it declares one
    /// (CSR dumps do). Labels are then known to lie in `[0, n)`.
    pub nvertices: Option<usize>,
    pub stats: IngestStats,
}

impl EdgeList {
    /// Builds an edge list from raw pairs, applying the same cleanup as
    /// the file readers.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Label, Label)>) -> Self {
        let mut dedup = Dedup::default();
        for (a, b) in pairs {
            dedup.push(a, b);
        }
        dedup.finish(None)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Working state shared by the edge-list and CSR readers.
#[derive(Default)]
pub(crate) struct Dedup {
    seen: CanonicalEdgeSet<Label>,
    edges: Vec<(Label, Label)>,
    stats: IngestStats,
}

impl Dedup {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: CanonicalEdgeSet::with_capacity(capacity),
            edges: Vec::with_capacity(capacity),
            stats: IngestStats::default(),
        }
    }

    pub(crate) fn push(&mut self, a: Label, b: Label) {
        if a == b {
            self.stats.self_loops += 1;
        } else if self.seen.insert(a, b) {
            self.edges.push((a, b));
        } else {
            self.stats.duplicates += 1;
        }
    }

    pub(crate) fn malformed(&mut self) {
        self.stats.malformed += 1;
    }

    pub(crate) fn finish(mut self, nvertices: Option<usize>) -> EdgeList {
        self.stats.edges = self.edges.len();
        EdgeList {
            edges: self.edges,
            nvertices,
            stats: self.stats,
        }
    }
}

/// Parses the first two words of a line as an edge. Extra trailing words
/// (weights, timestamps) are ignored.
fn parse_edge(line: &[u8]) -> Option<(Label, Label)> {
    let mut ws = scanner::words(line);
    let a = scanner::parse_int(ws.next()?)?;
    let b = scanner::parse_int(ws.next()?)?;
    Some((a, b))
}

/// Reads an edge-list file.
pub fn read(path: impl AsRef<Path>) -> Result<EdgeList> {
    read_from(Scanner::open(path)?)
}

/// Reads an edge list from an already-open scanner.
///
/// Blank lines are skipped quietly. Lines that do not start with two
/// integers are skipped with a diagnostic on stderr; they never abort the
/// read.
pub fn read_from<R: BufRead>(scanner: Scanner<R>) -> Result<EdgeList> {
    let dedup = scanner.fold(Dedup::default(), |mut dedup, lineno, line| {
        if line.trim().is_empty() {
            return dedup;
        }
        match parse_edge(line) {
            Some((a, b)) => dedup.push(a, b),
            None => {
                eprintln!(
                    "{}",
                    json!({
                        "malformed_line": lineno,
                        "text": line.to_str_lossy(),
                    })
                );
                dedup.malformed();
            }
        }
        dedup
    })?;
    Ok(dedup.finish(None))
}
