//! `dijkstra` binary.

use std::process::ExitCode;

use graphkit_cli::commands::dijkstra::DijkstraArgs;

fn main() -> ExitCode {
    graphkit_cli::main_with::<DijkstraArgs>()
}
