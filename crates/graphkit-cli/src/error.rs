//! Error types for the graphkit command-line tools.

use thiserror::Error;

/// CLI result type alias.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type.
#[derive(Error, Debug)]
pub enum CliError {
    /// Loading the graph or running an engine failed.
    #[error("{0}")]
    Graph(#[from] graphkit::GraphError),

    /// IO error while writing results.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A required option was not supplied.
    #[error("Missing required option: {0}")]
    MissingOption(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_error_message_passes_through() {
        let err: CliError = graphkit::GraphError::MissingHeader.into();
        assert_eq!(err.to_string(), "Failed to read vertex and edge counts");
    }

    #[test]
    fn test_missing_option_message() {
        let err = CliError::MissingOption("-i <VERTEX>");
        assert_eq!(err.to_string(), "Missing required option: -i <VERTEX>");
    }
}
