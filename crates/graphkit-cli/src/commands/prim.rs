//! `prim` - minimum spanning tree grown from a start vertex.

use std::io::Write;

use clap::Parser;

use super::{CommonArgs, Program, RunOptions};
use crate::error::CliResult;
use crate::output::{write_cost, write_edges};

/// Minimum spanning tree cost via Prim's algorithm, optionally with its edges
#[derive(Parser, Debug)]
#[command(name = "prim", version, long_about = None)]
pub struct PrimArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Start vertex
    #[arg(short = 'i', long = "initial", value_name = "VERTEX")]
    pub initial: u32,

    /// Also print the tree's edges after the cost
    #[arg(short = 's', long = "solution")]
    pub solution: bool,
}

impl Program for PrimArgs {
    const NAME: &'static str = "prim";

    fn common(&self) -> &CommonArgs {
        &self.common
    }

    fn options(&self) -> RunOptions {
        RunOptions {
            input: self.common.file.clone(),
            output: self.common.output.clone(),
            start: Some(self.initial),
            show_solution: self.solution,
        }
    }

    fn execute(options: &RunOptions, out: &mut dyn Write) -> CliResult<()> {
        let start = options.required_start()?;
        let graph = graphkit::loader::read_undirected(options.open_input()?)?;
        let forest = graphkit::prim(&graph, start)?;
        write_cost(out, &forest)?;
        if options.show_solution {
            write_edges(out, &forest)?;
        }
        Ok(())
    }
}
