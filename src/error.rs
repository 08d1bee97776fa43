//! Error handling for username-forge

use thiserror::Error;

use crate::types::CheckMethod;

/// Main error type for username-forge
#[derive(Error, Debug, Clone)]
pub enum UsernameForgeError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Network error: {message}")]
    Network {
        message: String,
        status_code: Option<u16>,
        url: Option<String>,
    },

    #[error("Rate limit exceeded: {message}")]
    RateLimit {
        message: String,
        retry_after: Option<u64>,
    },

    #[error("Access denied: {message}")]
    AccessDenied {
        message: String,
        status_code: Option<u16>,
    },

    #[error("Timeout error: {operation} timed out after {timeout_secs}s")]
    Timeout {
        operation: String,
        timeout_secs: u64,
    },

    #[error("Ambiguous authority response: {message}")]
    Ambiguous {
        message: String,
        content: Option<String>,
    },

    #[error("Progress delivery failed: {message}")]
    Progress { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl UsernameForgeError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(
        message: impl Into<String>,
        status_code: Option<u16>,
        url: Option<String>,
    ) -> Self {
        Self::Network {
            message: message.into(),
            status_code,
            url,
        }
    }

    /// Create a rate limit error
    pub fn rate_limit(message: impl Into<String>, retry_after: Option<u64>) -> Self {
        Self::RateLimit {
            message: message.into(),
            retry_after,
        }
    }

    /// Create an access denied error
    pub fn access_denied(message: impl Into<String>, status_code: Option<u16>) -> Self {
        Self::AccessDenied {
            message: message.into(),
            status_code,
        }
    }

    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, timeout_secs: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            timeout_secs,
        }
    }

    /// Create an ambiguous-response error
    pub fn ambiguous(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Ambiguous {
            message: message.into(),
            content,
        }
    }

    /// Create a progress delivery error
    pub fn progress(message: impl Into<String>) -> Self {
        Self::Progress {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Which heuristic tier the oracle degrades to when the remote check
    /// fails with this error.
    ///
    /// Timeouts skip the feature-weighted scoring and go straight to the
    /// coarse bucket heuristic; every other network-kind failure gets the
    /// smart tier first.
    pub fn fallback_method(&self) -> CheckMethod {
        match self {
            Self::Timeout { .. } => CheckMethod::BasicHeuristic,
            _ => CheckMethod::SmartHeuristic,
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your .env file or configuration", message)
            }
            Self::Network { message, status_code, .. } => {
                let status = status_code.map_or(String::new(), |c| format!(" ({})", c));
                format!("❌ Network error{}: {}\n💡 Check your internet connection", status, message)
            }
            Self::RateLimit { message, retry_after } => {
                let retry = retry_after.map_or(String::new(), |s| format!(" Retry in {}s.", s));
                format!("⏱️  Rate limit exceeded: {}{}\n💡 Wait a moment before searching again", message, retry)
            }
            Self::AccessDenied { message, .. } => {
                format!("❌ Access denied by the validation authority: {}", message)
            }
            Self::Timeout { operation, timeout_secs } => {
                format!("⏱️  Operation '{}' timed out after {}s\n💡 The authority may be slow, try again", operation, timeout_secs)
            }
            Self::Ambiguous { message, .. } => {
                format!("⚠️  Could not interpret authority response: {}", message)
            }
            Self::Progress { message } => {
                format!("⚠️  Progress update failed: {}", message)
            }
            Self::Validation { message } => {
                format!("❌ Validation error: {}\n💡 Check your input format", message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
        }
    }
}

/// Convert from common error types
impl From<reqwest::Error> for UsernameForgeError {
    fn from(err: reqwest::Error) -> Self {
        let status_code = err.status().map(|s| s.as_u16());
        let url = err.url().map(|u| u.to_string());

        if err.is_timeout() {
            Self::timeout("HTTP request", 8)
        } else if err.is_connect() {
            Self::network("Connection failed", status_code, url)
        } else if err.is_request() {
            Self::network("Request failed", status_code, url)
        } else {
            Self::network(err.to_string(), status_code, url)
        }
    }
}

impl From<serde_json::Error> for UsernameForgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::ambiguous(err.to_string(), None)
    }
}

impl From<tokio::time::error::Elapsed> for UsernameForgeError {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        Self::timeout("Operation", 8)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, UsernameForgeError>;
