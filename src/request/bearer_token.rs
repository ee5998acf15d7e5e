//! Bearer token authorization.

use super::types::RequestConfigError;
use super::{Headers, RequestConfig};

const AUTHORIZATION_HEADER: &str = "Authorization";

/// Sends `Authorization: Bearer <token>`.
#[derive(Clone)]
pub struct BearerTokenRequestConfig {
    token: String,
}

impl BearerTokenRequestConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for BearerTokenRequestConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerTokenRequestConfig")
            .field("token", &"<redacted>")
            .finish()
    }
}

impl RequestConfig for BearerTokenRequestConfig {
    fn headers(&self) -> Result<Headers, RequestConfigError> {
        if self.token.is_empty() {
            return Err(RequestConfigError::InvalidArgument(
                "bearer token must not be empty".to_string(),
            ));
        }
        Ok(Headers::from([(
            AUTHORIZATION_HEADER.to_string(),
            format!("Bearer {}", self.token),
        )]))
    }
}
