//! Compressed-sparse-row dump reader.
//!
//! Layout (whitespace-separated, line breaks are insignificant after the
//! header):
//!
//! ```text
//! <arbitrary header line>
//! <vertex_count> <edge_count>
//! <offset_0> ... <offset_{vertex_count-1}>
//! <target_0> ... <target_{edge_count-1}>
//! ```
//!
//! Vertex `i` owns `targets[offsets[i]..offsets[i+1]]`, and the last
//! vertex's range ends at `edge_count`. Unlike edge lists, a CSR dump
//! cannot be repaired line by line, so any structural problem is fatal.

use std::io::BufRead;
use std::path::Path;

use bstr::ByteSlice;

use crate::edgeio::{Dedup, EdgeList, Label};
use crate::error::{Error, Result};
use crate::scanner::{self, Scanner};

// Header counts are untrusted until the arrays arrive.
const MAX_RESERVE: usize = 1 << 20;

/// The raw arrays of a CSR dump.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Csr {
    pub offsets: Vec<usize>,
    pub targets: Vec<Label>,
}

impl Csr {
    pub fn nvertices(&self) -> usize {
        self.offsets.len()
    }

    /// Checks offsets and targets against each other.
    pub fn validate(&self) -> Result<()> {
        let nedges = self.targets.len();
        let nvertices = self.nvertices();
        if let Some(i) = (1..nvertices).find(|&i| self.offsets[i - 1] > self.offsets[i]) {
            return Err(Error::MalformedCsr(format!(
                "offsets decrease at vertex {}: {} > {}",
                i,
                self.offsets[i - 1],
                self.offsets[i]
            )));
        }
        if let Some(&last) = self.offsets.last() {
            if last > nedges {
                return Err(Error::MalformedCsr(format!(
                    "offset {} exceeds edge count {}",
                    last, nedges
                )));
            }
        }
        if let Some(&t) = self
            .targets
            .iter()
            .find(|&&t| t < 0 || t as u64 >= nvertices as u64)
        {
            return Err(Error::MalformedCsr(format!(
                "target {} outside [0, {})",
                t, nvertices
            )));
        }
        Ok(())
    }

    /// Target range owned by vertex `i`.
    fn range(&self, i: usize) -> std::ops::Range<usize> {
        let lo = self.offsets[i];
        let hi = self
            .offsets
            .get(i + 1)
            .copied()
            .unwrap_or_else(|| self.targets.len());
        lo..hi
    }

    /// Expands the arrays into an explicit, deduplicated edge list. Both
    /// directions of a symmetric dump collapse to one edge.
    pub fn expand(&self) -> Result<EdgeList> {
        self.validate()?;
        let mut dedup = Dedup::with_capacity(self.targets.len() / 2);
        for i in 0..self.nvertices() {
            for &t in &self.targets[self.range(i)] {
                dedup.push(i as Label, t);
            }
        }
        Ok(dedup.finish(Some(self.nvertices())))
    }
}

/// Incremental decoder fed one word at a time.
#[derive(Default)]
struct Decoder {
    nvertices: Option<usize>,
    nedges: Option<usize>,
    csr: Csr,
}

impl Decoder {
    fn count(word: &[u8], what: &str) -> Result<usize> {
        scanner::parse_int(word)
            .filter(|&x| x >= 0)
            .map(|x| x as usize)
            .ok_or_else(|| {
                Error::MalformedCsr(format!("bad {}: {:?}", what, word.to_str_lossy()))
            })
    }

    fn feed(&mut self, word: &[u8]) -> Result<()> {
        match (self.nvertices, self.nedges) {
            (None, _) => {
                let n = Self::count(word, "vertex count")?;
                self.nvertices = Some(n);
                self.csr.offsets.reserve(n.min(MAX_RESERVE));
            }
            (Some(_), None) => {
                let m = Self::count(word, "edge count")?;
                self.nedges = Some(m);
                self.csr.targets.reserve(m.min(MAX_RESERVE));
            }
            (Some(n), Some(m)) => {
                if self.csr.offsets.len() < n {
                    let offset = Self::count(word, "offset")?;
                    self.csr.offsets.push(offset);
                } else if self.csr.targets.len() < m {
                    let target = scanner::parse_int(word).ok_or_else(|| {
                        Error::MalformedCsr(format!("bad target: {:?}", word.to_str_lossy()))
                    })?;
                    self.csr.targets.push(target);
                }
                // anything past the target array is ignored
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Csr> {
        let (n, m) = match (self.nvertices, self.nedges) {
            (Some(n), Some(m)) => (n, m),
            _ => {
                return Err(Error::MalformedCsr(
                    "missing vertex/edge count line".to_string(),
                ))
            }
        };
        if self.csr.offsets.len() != n || self.csr.targets.len() != m {
            return Err(Error::MalformedCsr(format!(
                "truncated arrays: {} of {} offsets, {} of {} targets",
                self.csr.offsets.len(),
                n,
                self.csr.targets.len(),
                m
            )));
        }
        Ok(self.csr)
    }
}

/// Decodes the raw arrays from a scanner without expanding them.
pub fn decode<R: BufRead>(scanner: Scanner<R>) -> Result<Csr> {
    let decoder = scanner.try_fold(Decoder::default(), |mut decoder, lineno, line| {
        if lineno > 1 {
            for word in scanner::words(line) {
                decoder.feed(word)?;
            }
        }
        Ok(decoder)
    })?;
    decoder.finish()
}

/// Reads a CSR dump and expands it into an edge list.
pub fn read(path: impl AsRef<Path>) -> Result<EdgeList> {
    decode(Scanner::open(path)?)?.expand()
}
