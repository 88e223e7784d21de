//! Output sink selection and result rendering.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use colored::Colorize;
use graphkit::{ShortestPaths, SpanningForest, StronglyConnectedComponents};
use tracing::warn;

/// Open the result sink: the `-o` file if it can be created, stdout
/// otherwise.
///
/// A file that cannot be created is reported on stderr and the run goes on
/// writing to stdout.
pub fn open_output(path: Option<&Path>) -> Box<dyn Write> {
    if let Some(path) = path {
        match File::create(path) {
            Ok(file) => return Box::new(BufWriter::new(file)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "falling back to stdout");
                eprintln!(
                    "{} cannot open output file {}: {}",
                    "Warning:".yellow(),
                    path.display(),
                    e
                );
            }
        }
    }
    Box::new(BufWriter::new(io::stdout().lock()))
}

/// `v:d` for every vertex on one line; unreachable vertices show -1.
pub fn write_distances(out: &mut dyn Write, paths: &ShortestPaths) -> io::Result<()> {
    let line: Vec<String> = paths.iter().map(|(v, d)| format!("{}:{}", v, d)).collect();
    writeln!(out, "{}", line.join(" "))
}

/// One component per line, members separated by spaces.
pub fn write_components(out: &mut dyn Write, scc: &StronglyConnectedComponents) -> io::Result<()> {
    for component in scc.iter() {
        let line: Vec<String> = component.iter().map(ToString::to_string).collect();
        writeln!(out, "{}", line.join(" "))?;
    }
    Ok(())
}

/// Total cost on its own line.
pub fn write_cost(out: &mut dyn Write, forest: &SpanningForest) -> io::Result<()> {
    writeln!(out, "{}", forest.total_cost)
}

/// `(u,v)` tuples on one line.
pub fn write_edges(out: &mut dyn Write, forest: &SpanningForest) -> io::Result<()> {
    let line: Vec<String> = forest
        .edges
        .iter()
        .map(|(a, b)| format!("({},{})", a, b))
        .collect();
    writeln!(out, "{}", line.join(" "))
}
