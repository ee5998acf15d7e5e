//! Configuration validation.
//!
//! Returns every problem found, not just the first.

use thiserror::Error;
use url::Url;

use crate::config::schema::ToolkitConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("client.base_url {url:?} is invalid: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("client.timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("auth.bearer_token cannot be combined with basic credentials")]
    ConflictingCredentials,

    #[error("auth.{0} is set but its counterpart is missing")]
    IncompleteBasicAuth(&'static str),

    #[error("auth.bearer_token must not be empty")]
    EmptyBearerToken,
}

/// Check a parsed configuration.
pub fn validate_config(config: &ToolkitConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.client.base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ValidationError::InvalidBaseUrl {
            url: config.client.base_url.clone(),
            reason: format!("unsupported scheme {}", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::InvalidBaseUrl {
            url: config.client.base_url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.client.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let auth = &config.auth;
    match (&auth.username, &auth.password) {
        (Some(_), None) => errors.push(ValidationError::IncompleteBasicAuth("username")),
        (None, Some(_)) => errors.push(ValidationError::IncompleteBasicAuth("password")),
        _ => {}
    }

    if let Some(token) = &auth.bearer_token {
        if token.is_empty() {
            errors.push(ValidationError::EmptyBearerToken);
        }
        if auth.username.is_some() || auth.password.is_some() {
            errors.push(ValidationError::ConflictingCredentials);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&ToolkitConfig::default()).is_ok());
    }

    #[test]
    fn test_bad_url() {
        let mut config = ToolkitConfig::default();
        config.client.base_url = "not a url".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_credential_conflicts() {
        let mut config = ToolkitConfig::default();
        config.auth.bearer_token = Some(String::new());
        config.auth.username = Some("user".into());

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::IncompleteBasicAuth("username"),
                ValidationError::EmptyBearerToken,
                ValidationError::ConflictingCredentials,
            ]
        );
    }

    #[test]
    fn test_entities_need_no_credentials() {
        let mut config = ToolkitConfig::default();
        config.auth.proxied_entities = vec![String::new(), "alice".into()];
        assert!(validate_config(&config).is_ok());
    }
}
