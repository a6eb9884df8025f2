//! Prints the degree-based arboricity bound `ceil(edges / max_degree)`
//! of a graph stored as an edge list or a CSR dump.

use std::path::PathBuf;
use std::process;

use serde_json::json;
use structopt::StructOpt;

use tricount::{arboricity, csr, edgeio, Adjacency, Graph};

#[derive(Debug, StructOpt)]
#[structopt(name = "arboricity", about = "Estimate graph arboricity from degrees.")]
struct Opt {
    /// Input graph file.
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Input is a CSR dump rather than an edge list.
    #[structopt(long)]
    csr: bool,
}

fn main() {
    let opt = Opt::from_args();
    match estimate(&opt) {
        Ok(bound) => println!("{}", bound),
        Err(e) => {
            eprintln!("{}", json!({ "error": e.to_string() }));
            process::exit(1);
        }
    }
}

fn estimate(opt: &Opt) -> tricount::Result<u64> {
    let edges = if opt.csr {
        csr::read(&opt.input)?
    } else {
        edgeio::read(&opt.input)?
    };
    let (graph, _) = Graph::from_edge_list(&edges, Adjacency::Full)?;
    Ok(arboricity::estimate(&graph))
}
