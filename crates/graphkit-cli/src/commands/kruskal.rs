//! `kruskal` - minimum spanning forest from sorted edges.

use std::io::Write;

use clap::Parser;

use super::{CommonArgs, Program, RunOptions};
use crate::error::CliResult;
use crate::output::{write_cost, write_edges};

/// Minimum spanning forest cost (or edges with -s) via Kruskal's algorithm
#[derive(Parser, Debug)]
#[command(name = "kruskal", version, long_about = None)]
pub struct KruskalArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Start vertex; accepted for compatibility and ignored
    #[arg(short = 'i', long = "initial", value_name = "VERTEX")]
    pub initial: Option<String>,

    /// Print the forest's edges instead of its cost
    #[arg(short = 's', long = "solution")]
    pub solution: bool,
}

impl Program for KruskalArgs {
    const NAME: &'static str = "kruskal";

    fn common(&self) -> &CommonArgs {
        &self.common
    }

    fn options(&self) -> RunOptions {
        RunOptions {
            input: self.common.file.clone(),
            output: self.common.output.clone(),
            start: None,
            show_solution: self.solution,
        }
    }

    fn execute(options: &RunOptions, out: &mut dyn Write) -> CliResult<()> {
        let edges = graphkit::loader::read_edge_list(options.open_input()?)?;
        let forest = graphkit::kruskal(edges);
        if options.show_solution {
            write_edges(out, &forest)?;
        } else {
            write_cost(out, &forest)?;
        }
        Ok(())
    }
}
