//! Client Error Types
//!
//! This module provides transport/session error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Client-specific result type alias
pub type ClientResult<T> = Result<T, ClientError>;

/// Client-specific error variants
#[derive(Debug, Error)]
pub enum ClientError {
    /// A service answered with a non-success status
    #[error("Service responded with status {status}")]
    Status {
        /// HTTP status received
        status: u16,
        /// Response body, truncated, for diagnostics
        detail: String,
    },

    /// Session refresh failed; the session is gone
    #[error("Session expired and refresh failed")]
    SessionExpired {
        /// The refresh call's own failure
        #[source]
        source: Box<ClientError>,
    },

    /// Network-level failure (connect, TLS, timeout)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Request path could not be resolved against an origin
    #[error("Invalid request path `{path}`: {detail}")]
    InvalidPath { path: String, detail: String },

    /// Request body or query could not be serialized
    #[error("Failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// Response body could not be deserialized
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ClientError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Status { status, .. } => ErrorKind::from_status(*status),
            ClientError::SessionExpired { .. } => ErrorKind::Unauthorized,
            ClientError::Transport(e) if e.is_timeout() => ErrorKind::RequestTimeout,
            ClientError::Transport(_) => ErrorKind::ServiceUnavailable,
            ClientError::InvalidPath { .. } | ClientError::Encode(_) => ErrorKind::BadRequest,
            ClientError::Decode(_) => ErrorKind::InternalServerError,
        }
    }

    /// HTTP status received from a service, if this error carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for a surfaced 401 (a rejection the refresh protocol did
    /// not, or could not, recover)
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Status { status: 401, .. })
    }

    /// True when the session is gone for good (refresh itself failed)
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ClientError::SessionExpired { .. })
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            ClientError::SessionExpired { .. } => {
                AppError::unauthorized("Session expired").with_action("Sign in again")
            }
            ClientError::Transport(_) => {
                AppError::new(self.kind(), "Portal service is unreachable")
                    .with_action("Check your connection and try again")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ClientError::Transport(e) => {
                tracing::error!(error = %e, "Portal transport error");
            }
            ClientError::SessionExpired { source } => {
                tracing::warn!(source = %source, "Session refresh failed");
            }
            ClientError::Status { status, detail } if *status >= 500 => {
                tracing::error!(status, detail = %detail, "Portal service error");
            }
            ClientError::Status { status, .. } => {
                tracing::debug!(status, "Portal request rejected");
            }
            ClientError::InvalidPath { path, detail } => {
                tracing::error!(path = %path, detail = %detail, "Invalid request path");
            }
            ClientError::Encode(e) | ClientError::Decode(e) => {
                tracing::error!(error = %e, "Payload serialization failed");
            }
        }
    }
}

// Boundary conversion: log once, then hand the unified type to the app.
impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        err.log();
        err.to_app_error()
    }
}
