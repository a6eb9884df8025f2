//! # `tricount` - crate for parallel triangle counting
//!
//! Reads newline-delimited edge lists or CSR dumps, builds a sorted,
//! immutable adjacency structure, and counts triangles with a
//! degree-oriented, skew-adaptive list intersection run over rayon.
//!
//! ```no_run
//! use tricount::{count_triangles, edgeio, EngineConfig};
//!
//! let edges = edgeio::read("graph.txt")?;
//! let census = count_triangles(&edges, EngineConfig::default())?;
//! println!("{}", census.triangles);
//! # Ok::<(), tricount::Error>(())
//! ```

use std::collections::HashMap;

use ordered_float::NotNan;

pub mod arboricity;
pub mod config;
pub mod count;
pub mod csr;
pub mod edgeio;
pub mod edgeset;
pub mod error;
pub mod graph;
pub mod idmap;
pub mod intersect;
pub mod orient;
pub mod relabel;
mod scanner;

pub use config::{Adjacency, EngineConfig, IntersectionKind, Orientation, Reduction};
pub use count::{count_triangles, Census, Engine};
pub use edgeio::{EdgeList, IngestStats, Label};
pub use error::{Error, Result};
pub use graph::{Graph, Vertex};
pub use idmap::IdMap;
pub use scanner::Scanner;

const NSTAT_PERCENTILES: usize = 10;
const STAT_PERCENTILES: [f64; NSTAT_PERCENTILES] =
    [0.0, 0.001, 0.01, 0.05, 0.10, 0.50, 0.90, 0.95, 0.99, 1.0];

/// Mean and fixed percentiles of a sample, used for degree distributions.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryStats {
    mean: f64,
    percentiles: [f64; NSTAT_PERCENTILES],
}

impl SummaryStats {
    /// `None` for an empty sample; NaNs are skipped.
    pub fn from(it: impl Iterator<Item = f64>) -> Option<Self> {
        let mut v: Vec<NotNan<f64>> = it.filter_map(|f| NotNan::new(f).ok()).collect();
        if v.is_empty() {
            return None;
        }
        v.sort_unstable();
        let mut stats = SummaryStats {
            mean: v.iter().map(|f| f.into_inner()).sum::<f64>() / v.len() as f64,
            percentiles: Default::default(),
        };
        STAT_PERCENTILES
            .iter()
            .copied()
            .map(|f| v[((v.len() - 1) as f64 * f) as usize].into_inner())
            .zip(stats.percentiles.iter_mut())
            .for_each(|(val, p)| *p = val);
        Some(stats)
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn max(&self) -> f64 {
        self.percentiles[NSTAT_PERCENTILES - 1]
    }

    pub fn to_map(&self) -> HashMap<String, f64> {
        let mut map: HashMap<_, _> = STAT_PERCENTILES
            .iter()
            .map(|f| format!("p{:.3}", f))
            .zip(self.percentiles.iter().copied())
            .collect();
        map.insert("mean".to_string(), self.mean);
        map
    }
}
