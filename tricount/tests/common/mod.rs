#![allow(dead_code)]

use rand::Rng;
use rand_pcg::Lcg64Xsh32;

use tricount::{Adjacency, EngineConfig, IntersectionKind, Label, Orientation, Reduction};

pub fn rng(stream: u64) -> Lcg64Xsh32 {
    Lcg64Xsh32::new(0xcafef00dd15ea5e5, stream)
}

/// Each of the `n choose 2` pairs kept with probability `p`.
pub fn random_graph<R: Rng>(rng: &mut R, n: usize, p: f64) -> Vec<(Label, Label)> {
    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(p) {
                // shuffle endpoint order so both directions show up
                if rng.gen_bool(0.5) {
                    edges.push((i as Label, j as Label));
                } else {
                    edges.push((j as Label, i as Label));
                }
            }
        }
    }
    edges
}

/// Triangles by checking every vertex triple.
pub fn brute_force(n: usize, edges: &[(Label, Label)]) -> u64 {
    let mut adj = vec![vec![false; n]; n];
    for &(a, b) in edges {
        let (a, b) = (a as usize, b as usize);
        if a != b {
            adj[a][b] = true;
            adj[b][a] = true;
        }
    }
    let mut count = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            if !adj[i][j] {
                continue;
            }
            for k in (j + 1)..n {
                if adj[i][k] && adj[j][k] {
                    count += 1;
                }
            }
        }
    }
    count
}

pub fn complete(n: usize) -> Vec<(Label, Label)> {
    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            edges.push((i as Label, j as Label));
        }
    }
    edges
}

pub fn cycle(n: usize) -> Vec<(Label, Label)> {
    (0..n)
        .map(|i| (i as Label, ((i + 1) % n) as Label))
        .collect()
}

/// Hub 0 joined to every vertex of the cycle 1..=n.
pub fn wheel(n: usize) -> Vec<(Label, Label)> {
    let mut edges: Vec<_> = (1..=n).map(|i| (0, i as Label)).collect();
    edges.extend((1..=n).map(|i| (i as Label, (i % n + 1) as Label)));
    edges
}

pub fn star(leaves: usize) -> Vec<(Label, Label)> {
    (1..=leaves).map(|i| (0, i as Label)).collect()
}

/// Every configuration the engine accepts, with the default skew.
pub fn all_configs() -> Vec<EngineConfig> {
    let mut configs = Vec::new();
    for &adjacency in &[Adjacency::Full, Adjacency::Forward] {
        for &orientation in &[Orientation::Degree, Orientation::Id] {
            for &reduction in &[Reduction::Atomic, Reduction::Buffer] {
                for &intersection in &[IntersectionKind::Adaptive, IntersectionKind::EdgeSet] {
                    if intersection == IntersectionKind::EdgeSet && adjacency != Adjacency::Full {
                        continue;
                    }
                    configs.push(EngineConfig {
                        adjacency,
                        orientation,
                        reduction,
                        intersection,
                        ..EngineConfig::default()
                    });
                }
            }
        }
    }
    configs
}
