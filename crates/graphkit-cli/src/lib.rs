//! graphkit command-line tools.
//!
//! Four independent programs over the same text graph format:
//!
//! - `dijkstra -f <file> -i <vertex>` - shortest distances from a vertex
//! - `kosaraju -f <file>` - strongly connected components
//! - `kruskal -f <file> [-s]` - minimum spanning forest cost or edges
//! - `prim -f <file> -i <vertex> [-s]` - minimum spanning tree cost and edges
//!
//! Every program also takes `-o <file>` to redirect results.
//!
//! # Examples
//!
//! ```bash
//! # Distances from vertex 1
//! dijkstra -f graph.txt -i 1
//!
//! # MST edges written to a file
//! prim -f graph.txt -i 1 -s -o mst.txt
//! ```

use std::process::ExitCode;

use clap::error::ErrorKind;
use colored::Colorize;

pub mod commands;
pub mod error;
pub mod logging;
pub mod output;

pub use commands::{run, CommonArgs, Program, RunOptions};
pub use error::{CliError, CliResult};

/// Entry point shared by the binaries.
///
/// Usage errors print the error and full help to stderr and exit 1;
/// `--help` and `--version` exit 0. Run errors print `Error: <message>`
/// and exit 1.
pub fn main_with<P: Program>() -> ExitCode {
    let args = match P::try_parse() {
        Ok(args) => args,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = e.print();
                    ExitCode::SUCCESS
                }
                _ => {
                    let _ = e.print();
                    eprintln!();
                    eprintln!("{}", P::command().render_help());
                    ExitCode::FAILURE
                }
            };
        }
    };

    let common = args.common();
    logging::setup_logging(common.verbose, common.quiet);

    match run::<P>(&args.options()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
