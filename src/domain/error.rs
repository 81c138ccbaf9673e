//! Domain error types for ReportCard.
//!
//! Infrastructure failures are mapped into these before they reach the store,
//! where they are rendered as user-facing messages.

use thiserror::Error;

/// Errors raised by the identity provider.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Not signed in")]
    NotAuthenticated,

    #[error("Token acquisition failed: {0}")]
    TokenUnavailable(String),
}

/// Errors raised while talking to the backend API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server responded with status {status}")]
    Status { status: u16 },

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

/// Errors that keep the profile from loading.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

/// Errors that keep the report collection from loading.
#[derive(Debug, Error)]
pub enum ReportSourceError {
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Failed to read reports file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid reports file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
