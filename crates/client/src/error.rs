//! Error handling for the remote collection client.

use thiserror::Error;

/// Shown when the server rejects a request without a usable message.
const FALLBACK_MESSAGE: &str = "The library service could not complete the request.";

/// Failures surfaced by the remote collection client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed: connection refused, DNS failure, or a
    /// response body that could not be decoded.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status, optionally carrying a
    /// `message` field in a JSON body.
    #[error("request rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },
}

impl ApiError {
    /// Create a rejection from a status code and optional server message.
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        Self::Rejected { status, message }
    }

    /// The server-provided message, when one was present.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } => Some(message),
            _ => None,
        }
    }

    /// What the user should see: the server's message verbatim when present,
    /// else a generic fallback.
    pub fn user_message(&self) -> String {
        self.server_message()
            .map(str::to_owned)
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
    }
}
