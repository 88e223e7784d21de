//! `kosaraju` - strongly connected components.

use std::io::Write;

use clap::Parser;

use super::{CommonArgs, Program, RunOptions};
use crate::error::CliResult;
use crate::output::write_components;

/// Strongly connected components of a directed graph, one per line
#[derive(Parser, Debug)]
#[command(name = "kosaraju", version, long_about = None)]
pub struct KosarajuArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

impl Program for KosarajuArgs {
    const NAME: &'static str = "kosaraju";

    fn common(&self) -> &CommonArgs {
        &self.common
    }

    fn options(&self) -> RunOptions {
        RunOptions {
            input: self.common.file.clone(),
            output: self.common.output.clone(),
            start: None,
            show_solution: false,
        }
    }

    fn execute(options: &RunOptions, out: &mut dyn Write) -> CliResult<()> {
        let graph = graphkit::loader::read_directed(options.open_input()?)?;
        let scc = graphkit::kosaraju(&graph);
        write_components(out, &scc)?;
        Ok(())
    }
}
