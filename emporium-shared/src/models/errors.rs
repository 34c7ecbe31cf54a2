use serde::{Deserialize, Serialize};

/// Error body shape some backend endpoints return.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// The main error message.
    pub message: String,

    /// Optional additional details about the error.
    #[serde(default)]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response with just a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{}: {details}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_and_without_details() {
        assert_eq!(ErrorResponse::new("nope").to_string(), "nope");
        let detailed = ErrorResponse {
            message: "nope".into(),
            details: Some("still nope".into()),
        };
        assert_eq!(detailed.to_string(), "nope: still nope");
    }

    #[test]
    fn parses_backend_error_body() {
        let parsed: ErrorResponse =
            serde_json::from_str(r#"{"message":"Category already exists."}"#).unwrap();
        assert_eq!(parsed.message, "Category already exists.");
        assert!(parsed.details.is_none());
    }
}
