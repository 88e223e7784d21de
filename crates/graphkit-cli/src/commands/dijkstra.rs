//! `dijkstra` - single-source shortest paths.

use std::io::Write;

use clap::Parser;

use super::{CommonArgs, Program, RunOptions};
use crate::error::CliResult;
use crate::output::write_distances;

/// Shortest distances from a start vertex over a weighted, undirected graph
#[derive(Parser, Debug)]
#[command(name = "dijkstra", version, long_about = None)]
pub struct DijkstraArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Start vertex
    #[arg(short = 'i', long = "initial", value_name = "VERTEX")]
    pub initial: u32,

    /// Accepted for compatibility with the MST tools; has no effect
    #[arg(short = 's', long = "solution", hide = true)]
    pub solution: bool,
}

impl Program for DijkstraArgs {
    const NAME: &'static str = "dijkstra";

    fn common(&self) -> &CommonArgs {
        &self.common
    }

    fn options(&self) -> RunOptions {
        RunOptions {
            input: self.common.file.clone(),
            output: self.common.output.clone(),
            start: Some(self.initial),
            show_solution: false,
        }
    }

    fn execute(options: &RunOptions, out: &mut dyn Write) -> CliResult<()> {
        let start = options.required_start()?;
        let graph = graphkit::loader::read_undirected(options.open_input()?)?;
        let paths = graphkit::dijkstra(&graph, start)?;
        write_distances(out, &paths)?;
        Ok(())
    }
}
