//! `kruskal` binary.

use std::process::ExitCode;

use graphkit_cli::commands::kruskal::KruskalArgs;

fn main() -> ExitCode {
    graphkit_cli::main_with::<KruskalArgs>()
}
