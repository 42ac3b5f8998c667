//! Error taxonomy of the client
//!
//! Nothing here is fatal: every error ends up as a notification and the
//! screen stays usable.

use serde::Deserialize;
use thiserror::Error;

pub const GENERIC_FETCH_MESSAGE: &str = "Something went wrong. Please try again.";
pub const GENERIC_EXPORT_MESSAGE: &str = "Failed to generate the document.";

/// Failures of a request against the backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// A required identifier is absent; the request was never sent
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}")]
    Status { status: u16, message: Option<String> },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Text for the user: the backend's own explanation when it sent one
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Status {
                message: Some(m), ..
            } if !m.trim().is_empty() => m.clone(),
            FetchError::MissingParameter(_) => "Nothing to load yet.".to_string(),
            _ => GENERIC_FETCH_MESSAGE.to_string(),
        }
    }

    /// Input errors are soft: they are skipped instead of reported
    pub fn is_input_error(&self) -> bool {
        matches!(self, FetchError::MissingParameter(_))
    }
}

#[derive(Deserialize)]
struct BackendErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Pulls `message` (or `error`) out of a JSON error body
pub fn backend_message(body: &str) -> Option<String> {
    let parsed: BackendErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .or(parsed.error)
        .filter(|m| !m.trim().is_empty())
}

/// Failures of the capture → encode → deliver pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    /// The region to capture has not been mounted yet
    #[error("export region not found")]
    NotFound,
    #[error("an export is already running")]
    Busy,
    #[error("capture failed: {0}")]
    Capture(String),
    #[error("encoding failed: {0}")]
    Encode(String),
    #[error("download failed: {0}")]
    Delivery(String),
}

impl ExportError {
    pub fn user_message(&self) -> String {
        match self {
            ExportError::NotFound => "Data not found.".to_string(),
            ExportError::Busy => "Export already in progress.".to_string(),
            _ => GENERIC_EXPORT_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_preferred() {
        let err = FetchError::Status {
            status: 401,
            message: backend_message(r#"{"message":"Invalid password"}"#),
        };
        assert_eq!(err.user_message(), "Invalid password");
    }

    #[test]
    fn test_error_field_fallback() {
        assert_eq!(
            backend_message(r#"{"error":"Restaurant not found"}"#).as_deref(),
            Some("Restaurant not found")
        );
        assert_eq!(backend_message("<html>502</html>"), None);
        assert_eq!(backend_message(r#"{"message":"  "}"#), None);
    }

    #[test]
    fn test_generic_message_without_backend_text() {
        let err = FetchError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message(), GENERIC_FETCH_MESSAGE);
        assert_eq!(
            FetchError::Network("offline".into()).user_message(),
            GENERIC_FETCH_MESSAGE
        );
    }

    #[test]
    fn test_export_messages_are_distinct_from_network() {
        assert_eq!(ExportError::NotFound.user_message(), "Data not found.");
        assert_eq!(
            ExportError::Encode("bad image".into()).user_message(),
            GENERIC_EXPORT_MESSAGE
        );
        assert_ne!(GENERIC_EXPORT_MESSAGE, GENERIC_FETCH_MESSAGE);
    }
}
