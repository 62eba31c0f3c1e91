//! Error types for Aircheck.

use thiserror::Error;

/// Result type alias using Aircheck's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Aircheck.
#[derive(Error, Debug)]
pub enum Error {
    /// The other side of the transport pair is gone.
    #[error("transport unavailable: {0}")]
    Transport(String),

    /// A transcript or configuration document failed to parse.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Transport("command channel closed".into());
        assert_eq!(err.to_string(), "transport unavailable: command channel closed");
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json")
            .err()
            .map(Error::from);
        assert!(matches!(parse_err, Some(Error::Json(_))));
    }
}
