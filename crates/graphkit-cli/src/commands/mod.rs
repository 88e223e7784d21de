//! Program implementations.
//!
//! Each program is a clap `Parser` that converts into [`RunOptions`] and
//! renders its engine's result into a writer.

pub mod dijkstra;
pub mod kosaraju;
pub mod kruskal;
pub mod prim;

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;

use clap::{Args, Parser};
use tracing::info;

use crate::error::{CliError, CliResult};
use crate::output::open_output;

/// Flags every program accepts.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// File containing the input graph
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: PathBuf,

    /// Write results to FILE instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Typed run configuration handed to a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Input graph file.
    pub input: PathBuf,
    /// Result file; stdout when absent or not creatable.
    pub output: Option<PathBuf>,
    /// Start vertex for Dijkstra and Prim.
    pub start: Option<u32>,
    /// List spanning-tree edges.
    pub show_solution: bool,
}

impl RunOptions {
    /// Options reading `input` with everything else at its default.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            start: None,
            show_solution: false,
        }
    }

    /// Set the start vertex.
    pub fn with_start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the result file.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Request the edge listing.
    pub fn with_solution(mut self) -> Self {
        self.show_solution = true;
        self
    }

    pub(crate) fn required_start(&self) -> CliResult<graphkit::VertexId> {
        self.start
            .map(graphkit::VertexId)
            .ok_or(CliError::MissingOption("-i <VERTEX>"))
    }

    pub(crate) fn open_input(&self) -> CliResult<BufReader<File>> {
        Ok(BufReader::new(graphkit::loader::open_input(&self.input)?))
    }
}

/// One of the command-line programs.
pub trait Program: Parser {
    /// Binary name used in logs.
    const NAME: &'static str;

    /// Flags shared by all programs.
    fn common(&self) -> &CommonArgs;

    /// Per-program flags folded into run options.
    fn options(&self) -> RunOptions;

    /// Load the input, run the engine and render the result into `out`.
    fn execute(options: &RunOptions, out: &mut dyn Write) -> CliResult<()>;
}

/// Execute `P` with its output routed to the configured sink.
///
/// The sink is opened only once the result is rendered, so a failed run
/// leaves an existing output file untouched.
pub fn run<P: Program>(options: &RunOptions) -> CliResult<()> {
    info!(program = P::NAME, input = %options.input.display(), "starting");
    let mut rendered = Vec::new();
    P::execute(options, &mut rendered)?;

    let mut out = open_output(options.output.as_deref());
    out.write_all(&rendered)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_options_builder() {
        let options = RunOptions::new("g.txt")
            .with_start(3)
            .with_output("out.txt")
            .with_solution();

        assert_eq!(options.input, PathBuf::from("g.txt"));
        assert_eq!(options.output, Some(PathBuf::from("out.txt")));
        assert_eq!(options.start, Some(3));
        assert!(options.show_solution);
    }

    #[test]
    fn test_required_start() {
        assert!(matches!(
            RunOptions::new("g.txt").required_start(),
            Err(CliError::MissingOption(_))
        ));
        assert_eq!(
            RunOptions::new("g.txt").with_start(2).required_start().unwrap(),
            graphkit::VertexId(2)
        );
    }

    #[test]
    fn test_missing_input_file() {
        let err = RunOptions::new("/no/such/graph.txt").open_input().unwrap_err();
        assert!(matches!(
            err,
            CliError::Graph(graphkit::GraphError::Open { .. })
        ));
    }
}
