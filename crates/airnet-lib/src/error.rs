use thiserror::Error;

/// Convenient result alias for the airnet library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an airport name could not be found in the network.
    #[error("unknown airport name: {name}{}", format_suggestions(.suggestions))]
    UnknownAirport {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when registering an airport whose name is already taken.
    #[error("duplicate airport name: {name}")]
    DuplicateAirport { name: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
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
