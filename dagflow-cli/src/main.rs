//! dagflow binary: run a graph described in JSON and print the resulting node state.

use std::path::PathBuf;

use clap::Parser;
use dagflow_cli::{init_tracing, run_files, OutputSelection};

#[derive(Parser, Debug)]
#[command(name = "dagflow")]
#[command(about = "Run a data-flow DAG from JSON and print node state")]
struct Args {
    /// Graph descriptor: {"nodes": [{"id", "state"}], "edges": [{"src", "dst", "keys"}]}
    #[arg(short, long, value_name = "FILE")]
    graph: PathBuf,

    /// Run config: root_inputs, overwrites, enable_list / disable_list
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Only report these nodes (repeatable)
    #[arg(short, long = "node", value_name = "ID")]
    nodes: Vec<String>,

    /// Include leaf outputs
    #[arg(long)]
    leaves: bool,

    /// Include islands of the working set
    #[arg(long)]
    islands: bool,

    /// Include the level partition
    #[arg(long)]
    levels: bool,

    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let selection = OutputSelection {
        nodes: args.nodes,
        leaves: args.leaves,
        islands: args.islands,
        levels: args.levels,
    };

    let report = run_files(&args.graph, args.config.as_deref(), &selection)
        .and_then(|report| report.to_json_pretty());
    match report {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
