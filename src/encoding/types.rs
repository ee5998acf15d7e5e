//! Encoding error definitions.

use thiserror::Error;

/// Errors raised while encoding identities or tokenizing a chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Identity holds a character that cannot travel in a header value.
    #[error("identity {identity:?} contains a control character at byte {position}")]
    ControlCharacter { identity: String, position: usize },

    /// Chain value does not follow the `<entity><entity>` layout.
    #[error("malformed proxied entities chain: {0}")]
    MalformedChain(String),
}
