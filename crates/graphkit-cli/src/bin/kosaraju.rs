//! `kosaraju` binary.

use std::process::ExitCode;

use graphkit_cli::commands::kosaraju::KosarajuArgs;

fn main() -> ExitCode {
    graphkit_cli::main_with::<KosarajuArgs>()
}
