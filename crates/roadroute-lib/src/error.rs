use thiserror::Error;

/// Convenient result alias for the roadroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the road segment dataset contains no records.
    #[error("road network has no segments")]
    EmptyNetwork,

    /// Raised when the network cannot support cost computation (zero maximum
    /// speed limit or segment length).
    #[error("degenerate road network: {detail}")]
    DegenerateNetwork { detail: String },

    /// Raised when a dataset line is missing fields or fails to parse.
    #[error("malformed record in {dataset} at line {line}: {message}")]
    MalformedRecord {
        dataset: String,
        line: usize,
        message: String,
    },

    /// Raised when a location name appears in neither dataset.
    #[error("unknown location: {name}{}", format_suggestions(.suggestions))]
    UnknownLocation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no route could be found between two locations.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
