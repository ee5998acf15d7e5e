//! Per-identity encoding.

use base64::prelude::BASE64_STANDARD;
use base64::Engine;

use super::types::EncodeError;

/// Maps a single identity to its wire form inside a proxied entities chain.
///
/// Implementations must be deterministic. The chain builder concatenates
/// the results without a separator, so every encoded entry has to carry
/// its own delimiters.
pub trait EntityEncoder: Send + Sync {
    fn encode_entity(&self, identity: &str) -> Result<String, EncodeError>;
}

impl<E: EntityEncoder + ?Sized> EntityEncoder for &E {
    fn encode_entity(&self, identity: &str) -> Result<String, EncodeError> {
        (**self).encode_entity(identity)
    }
}

impl<E: EntityEncoder + ?Sized> EntityEncoder for std::sync::Arc<E> {
    fn encode_entity(&self, identity: &str) -> Result<String, EncodeError> {
        (**self).encode_entity(identity)
    }
}

/// Default encoder.
///
/// - `""` becomes `<>` (anonymous)
/// - `<` and `>` are escaped with a backslash
/// - ASCII identities are wrapped as `<identity>`
/// - anything else is base64'd and wrapped as `<<BASE64>>`
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEntityEncoder;

impl StandardEntityEncoder {
    pub fn new() -> Self {
        Self
    }

    fn sanitize(identity: &str) -> String {
        let escaped = identity.replace('<', "\\<").replace('>', "\\>");
        if escaped.is_ascii() {
            escaped
        } else {
            format!("<{}>", BASE64_STANDARD.encode(escaped.as_bytes()))
        }
    }
}

impl EntityEncoder for StandardEntityEncoder {
    fn encode_entity(&self, identity: &str) -> Result<String, EncodeError> {
        // Tab is the only control character a header value may hold.
        if let Some(position) = identity
            .bytes()
            .position(|b| b != b'\t' && b.is_ascii_control())
        {
            return Err(EncodeError::ControlCharacter {
                identity: identity.to_string(),
                position,
            });
        }

        Ok(format!("<{}>", Self::sanitize(identity)))
    }
}
