//! Request configuration errors.

use thiserror::Error;

use crate::encoding::EncodeError;

/// Errors produced while building a request's header set.
#[derive(Debug, Error)]
pub enum RequestConfigError {
    /// A required argument was absent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The entity encoder rejected an identity.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// A header name or value cannot be sent over HTTP.
    #[error("invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },
}
