//! Error types for cssmix.
//!
//! Merging itself is total and never fails. Errors only surface when an
//! input has to be decoded from an external representation first.

/// Result type alias for cssmix operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while preparing style inputs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input text was not valid JSON.
    #[error("Failed to decode style input from JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a JSON decoding error.
    pub fn json(source: serde_json::Error) -> Self {
        Self::Json { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::json(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_error_display() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::from(source);

        assert!(err.to_string().starts_with("Failed to decode style input from JSON"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
