/// Custom error type for the markpost library
///
/// Every fallible operation in the crate returns this enum. The exporter never
/// hands it to the action dispatcher; it is folded into the failure outcome.
#[derive(Debug, thiserror::Error)]
pub enum MarkpostError {
    /// I/O errors (bookmark files, store file, sockets)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport-level HTTP errors (connection refused, DNS, timeouts)
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The receiver answered with a non-success status
    #[error("Network response was not ok (status {0})")]
    UnsuccessfulResponse(u16),

    /// Firefox places database errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Browser detection and bookmark source errors
    #[error("Browser error: {0}")]
    Browser(String),

    /// YAML parsing/serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// HTML parsing errors
    #[error("HTML parse error: {0}")]
    HtmlParse(String),

    /// JSON errors
    #[error("JSON error: {0}")]
    Json(String),

    /// The export failed and was already reported through badge and alert
    #[error("Bookmarks were not sent")]
    NotSent,

    /// Generic error for cases that don't fit other categories
    #[error("{0}")]
    Other(String),
}

/// Result type alias using MarkpostError
pub type Result<T> = std::result::Result<T, MarkpostError>;

impl From<String> for MarkpostError {
    fn from(s: String) -> Self {
        MarkpostError::Other(s)
    }
}

impl From<&str> for MarkpostError {
    fn from(s: &str) -> Self {
        MarkpostError::Other(s.to_string())
    }
}

impl From<serde_yaml::Error> for MarkpostError {
    fn from(err: serde_yaml::Error) -> Self {
        MarkpostError::Yaml(err.to_string())
    }
}

impl From<serde_json::Error> for MarkpostError {
    fn from(err: serde_json::Error) -> Self {
        MarkpostError::Json(err.to_string())
    }
}

impl From<simd_json::Error> for MarkpostError {
    fn from(err: simd_json::Error) -> Self {
        MarkpostError::Json(err.to_string())
    }
}

impl From<tl::ParseError> for MarkpostError {
    fn from(err: tl::ParseError) -> Self {
        MarkpostError::HtmlParse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsuccessful_response_message() {
        let err = MarkpostError::UnsuccessfulResponse(500);
        assert_eq!(err.to_string(), "Network response was not ok (status 500)");
    }

    #[test]
    fn test_string_conversions() {
        let from_str: MarkpostError = "boom".into();
        let from_string: MarkpostError = String::from("boom").into();
        assert_eq!(from_str.to_string(), "boom");
        assert_eq!(from_string.to_string(), "boom");
    }
}
