//! Error Types
//!
//! Remote failures (`ApiError`) and client-side form failures (`FormError`).

use serde::Deserialize;
use thiserror::Error;

/// Failure of a call to the backend API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced an HTTP response
    #[error("Network error: {0}")]
    Network(String),

    /// 401 from the backend
    #[error("{0}")]
    Unauthorized(String),

    /// Any other 4xx, usually a validation or not-found message
    #[error("{message}")]
    Client { status: u16, message: String },

    /// 5xx
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// 2xx whose body did not match the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
}

const UNAUTHORIZED: &str = "Unauthorized";
const REQUEST_FAILED: &str = "Request failed";
const INTERNAL_ERROR: &str = "Internal server error";

/// Error body shape used by the backend (`{status, message, timestamp, path}`)
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Classify a non-2xx response
    pub fn from_status(status: u16, body: &str) -> Self {
        let server_message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());

        match status {
            401 => ApiError::Unauthorized(
                server_message.unwrap_or_else(|| UNAUTHORIZED.to_string()),
            ),
            400..=499 => ApiError::Client {
                status,
                message: server_message.unwrap_or_else(|| REQUEST_FAILED.to_string()),
            },
            _ => ApiError::Server {
                status,
                message: server_message.unwrap_or_else(|| INTERNAL_ERROR.to_string()),
            },
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized(_) => Some(401),
            ApiError::Client { status, .. } | ApiError::Server { status, .. } => Some(*status),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Message reported by the server, if the failure carried one.
    /// Generic status texts filled in by `from_status` do not count.
    pub fn server_message(&self) -> Option<&str> {
        let message = match self {
            ApiError::Unauthorized(m) => m,
            ApiError::Client { message, .. } => message,
            _ => return None,
        };
        Some(message.as_str()).filter(|m| *m != UNAUTHORIZED && *m != REQUEST_FAILED)
    }

    /// Text for the user: the server's own message, else `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

/// Client-side validation failure; blocks the remote call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Full name is required")]
    FullNameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Project title is required")]
    ProjectTitleRequired,
    #[error("Task title is required")]
    TaskTitleRequired,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_uses_server_message() {
        let err = ApiError::from_status(409, r#"{"status":409,"message":"Email already registered"}"#);
        assert_eq!(err, ApiError::Client { status: 409, message: "Email already registered".into() });
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[test]
    fn test_from_status_classification() {
        assert!(matches!(ApiError::from_status(401, ""), ApiError::Unauthorized(m) if m == "Unauthorized"));
        assert!(matches!(ApiError::from_status(503, "<html>"), ApiError::Server { status: 503, .. }));
        assert!(ApiError::from_status(404, r#"{"message":"Project not found"}"#).is_not_found());
        assert_eq!(ApiError::Network("offline".into()).status(), None);
    }

    #[test]
    fn test_user_message_fallback() {
        let conflict = ApiError::Client { status: 409, message: "Email already registered".into() };
        assert_eq!(conflict.user_message("Registration failed"), "Email already registered");
        assert_eq!(ApiError::Network("offline".into()).user_message("Login failed"), "Login failed");
        assert_eq!(ApiError::from_status(401, "").user_message("Login failed"), "Login failed");
        assert_eq!(ApiError::from_status(404, "").server_message(), None);
    }

    #[test]
    fn test_form_error_messages() {
        assert_eq!(FormError::PasswordMismatch.to_string(), "Passwords do not match");
        assert_eq!(FormError::TaskTitleRequired.to_string(), "Task title is required");
    }
}
