//! `prim` binary.

use std::process::ExitCode;

use graphkit_cli::commands::prim::PrimArgs;

fn main() -> ExitCode {
    graphkit_cli::main_with::<PrimArgs>()
}
