use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Graph, tree, scanner and nested-lookup toolkit.", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,

    /// Suppress the verbose log file (algo-toolkit.log).
    #[clap(short, long, global = true)]
    pub quiet: bool,

    /// Print results as JSON instead of plain text.
    #[clap(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run every component on a fixed sample input.
    Demo {
        /// Also write the sample document to this JSON file and read it back.
        #[clap(long)]
        write: Option<PathBuf>,
    },

    /// Build an undirected graph and query it.
    ///
    /// Example: algo-toolkit graph --edge a:b:2 --edge b:c --from a --to c
    Graph {
        /// Edge as U:V or U:V:WEIGHT (weight defaults to 1). Repeatable.
        #[clap(long = "edge", required = true)]
        edges: Vec<String>,

        /// Start vertex for a shortest-path query.
        #[clap(long, requires = "to")]
        from: Option<String>,

        /// End vertex for a shortest-path query.
        #[clap(long, requires = "from")]
        to: Option<String>,

        /// Start vertex for a depth-first traversal.
        #[clap(long)]
        dfs: Option<String>,
    },

    /// Insert integers into a binary search tree, in the given order.
    Tree {
        /// Values to insert; the first one becomes the root.
        #[clap(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Value to search for after all inserts.
        #[clap(long, allow_negative_numbers = true)]
        find: Option<i64>,
    },

    /// Apply regex patterns to a text, each continuing where the last stopped.
    Scan {
        /// Text to scan.
        text: String,

        /// Regular expression. Repeatable; applied in order.
        #[clap(short, long = "pattern", required = true)]
        patterns: Vec<String>,
    },

    /// Resolve a dotted key (e.g. a.b.c) inside a JSON document.
    Lookup {
        /// JSON file to read.
        file: PathBuf,

        /// Dotted path to resolve.
        key: String,

        /// JSON value printed when the path does not resolve (default: null).
        #[clap(long)]
        default: Option<String>,
    },
}
