//! Client error definitions.

use reqwest::StatusCode;
use thiserror::Error;

use crate::request::RequestConfigError;

/// Errors that can occur while talking to the target service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Base URL or request path could not be turned into a URL.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A request strategy failed to produce its headers.
    #[error("request configuration failed: {0}")]
    RequestConfig(#[from] RequestConfigError),

    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-success status.
    #[error("service returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Json(#[from] serde_json::Error),
}
