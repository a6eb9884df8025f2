//! Counts triangles in a simple undirected graph stored as an edge list
//! or a CSR dump, printing the count alone on stdout.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use serde_json::json;
use structopt::StructOpt;

use tricount::{
    csr, edgeio, orient, Adjacency, Engine, EngineConfig, IntersectionKind, Orientation,
    Reduction, SummaryStats,
};

/// Reads an edge list with two integer vertex labels per line, or a CSR
/// dump with `--csr`.
///
/// Diagnostics and phase timings go to stderr as JSON lines.
#[derive(Debug, StructOpt)]
#[structopt(name = "triangles", about = "Count triangles in an undirected graph.")]
struct Opt {
    /// Input graph file.
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Input is a CSR dump rather than an edge list.
    #[structopt(long)]
    csr: bool,

    /// Adjacency discipline: full or forward.
    #[structopt(long, default_value = "full")]
    adjacency: Adjacency,

    /// Work item orientation: degree or id.
    #[structopt(long, default_value = "degree")]
    orientation: Orientation,

    /// Reduction of per-edge counts: atomic or buffer.
    #[structopt(long, default_value = "atomic")]
    reduction: Reduction,

    /// Intersection strategy: adaptive or edgeset.
    #[structopt(long, default_value = "adaptive")]
    intersection: IntersectionKind,

    /// Skew ratio past which sorted lists are binary-searched instead of merged.
    #[structopt(long, default_value = "100")]
    skew: usize,

    /// Worker threads (defaults to one per core).
    #[structopt(long)]
    threads: Option<usize>,

    /// Suppress the summary and timing diagnostics.
    #[structopt(long)]
    quiet: bool,
}

fn main() {
    let opt = Opt::from_args();
    if let Err(e) = run(&opt) {
        eprintln!("{}", json!({ "error": e.to_string() }));
        process::exit(1);
    }
}

fn run(opt: &Opt) -> tricount::Result<()> {
    let engine = Engine::new(EngineConfig {
        adjacency: opt.adjacency,
        orientation: opt.orientation,
        reduction: opt.reduction,
        intersection: opt.intersection,
        skew: opt.skew,
        threads: opt.threads,
    })?;

    let parse_start = Instant::now();
    let edges = if opt.csr {
        csr::read(&opt.input)?
    } else {
        edgeio::read(&opt.input)?
    };
    let parse_time = format!("{:.0?}", Instant::now().duration_since(parse_start));

    let build_start = Instant::now();
    let (graph, ids) = engine.build(&edges)?;
    let build_time = format!("{:.0?}", Instant::now().duration_since(build_start));

    let orient_start = Instant::now();
    let items = orient::work_items(&graph, engine.config().orientation);
    let orient_time = format!("{:.0?}", Instant::now().duration_since(orient_start));

    let count_start = Instant::now();
    let census = engine.count_items(&graph, &items);
    let count_time = format!("{:.0?}", Instant::now().duration_since(count_start));

    println!("{}", census.triangles);

    if !opt.quiet {
        let degrees = graph.degrees();
        let degree_stats = SummaryStats::from(degrees.iter().map(|&d| d as f64));
        eprintln!(
            "{}",
            json!({
                "ingested_edges": edges.stats.edges,
                "self_loops_dropped": edges.stats.self_loops,
                "duplicates_dropped": edges.stats.duplicates,
                "malformed_lines": edges.stats.malformed,
                "relabeled": !ids.is_identity(),
            })
        );
        eprintln!(
            "{}",
            json!({
                "nvertices": graph.nvertices(),
                "nedges": graph.nedges(),
                "max_degree": degrees.iter().copied().max().unwrap_or(0),
                "degrees": degree_stats.map(|s| s.to_map()),
            })
        );
        eprintln!(
            "{}",
            json!({
                "adjacency": engine.config().adjacency.name(),
                "orientation": engine.config().orientation.name(),
                "reduction": engine.config().reduction.name(),
                "intersection": engine.config().intersection.name(),
                "nthreads": opt.threads.unwrap_or_else(rayon_threads),
                "items": census.items,
                "pivot_work": census.pivot_work,
                "raw": census.raw,
                "multiplicity": census.multiplicity,
                "triangles": census.triangles,
            })
        );
        eprintln!(
            "{}",
            json!({
                "parse_time": parse_time,
                "build_time": build_time,
                "orient_time": orient_time,
                "count_time": count_time,
            })
        );
    }
    Ok(())
}

fn rayon_threads() -> usize {
    rayon::current_num_threads()
}
