//! Rewrites an edge list whose endpoints are arbitrary string labels into
//! one with dense integer ids, assigned in order of first appearance.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use serde_json::json;
use structopt::StructOpt;

use tricount::relabel;

#[derive(Debug, StructOpt)]
#[structopt(name = "relabel", about = "Relabel an edge list to dense integer ids.")]
struct Opt {
    /// Edge list with two whitespace-separated labels per line.
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Where to write the relabeled edge list.
    #[structopt(parse(from_os_str))]
    output: PathBuf,
}

fn main() {
    let opt = Opt::from_args();
    let relabel_start = Instant::now();
    match relabel::relabel(&opt.input, &opt.output) {
        Ok(stats) => eprintln!(
            "{}",
            json!({
                "edges": stats.edges,
                "labels": stats.labels,
                "malformed_lines": stats.malformed,
                "relabel_time": format!("{:.0?}", Instant::now().duration_since(relabel_start)),
            })
        ),
        Err(e) => {
            eprintln!("{}", json!({ "error": e.to_string() }));
            process::exit(1);
        }
    }
}
