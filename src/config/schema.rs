//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::request::{
    BasicAuthRequestConfig, BearerTokenRequestConfig, ProxiedEntityRequestConfig, RequestConfig,
};

/// Root configuration for the toolkit client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ToolkitConfig {
    /// Target service settings.
    pub client: ClientSettings,

    /// Credentials and proxied identities.
    pub auth: AuthConfig,

    /// Log filter settings.
    pub logging: LoggingConfig,
}

impl ToolkitConfig {
    /// Build the request strategies described by `[auth]`.
    ///
    /// Authorization comes first so the proxied chain is always sent
    /// alongside it.
    pub fn request_configs(&self) -> Vec<Box<dyn RequestConfig>> {
        let mut configs: Vec<Box<dyn RequestConfig>> = Vec::new();

        if let Some(token) = &self.auth.bearer_token {
            configs.push(Box::new(BearerTokenRequestConfig::new(token.clone())));
        } else if let (Some(username), Some(password)) = (&self.auth.username, &self.auth.password) {
            configs.push(Box::new(BasicAuthRequestConfig::new(
                username.clone(),
                password.clone(),
            )));
        }

        if !self.auth.proxied_entities.is_empty() {
            configs.push(Box::new(ProxiedEntityRequestConfig::new(
                self.auth.proxied_entities.iter().cloned(),
            )));
        }

        configs
    }
}

/// Values that take precedence over the file, typically from the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,

    /// Replaces the configured chain when non-empty.
    pub proxied_entities: Vec<String>,

    /// Replaces any configured credentials, basic auth included.
    pub bearer_token: Option<String>,
}

impl ToolkitConfig {
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(url) = &overrides.base_url {
            self.client.base_url = url.clone();
        }
        if !overrides.proxied_entities.is_empty() {
            self.auth.proxied_entities = overrides.proxied_entities.clone();
        }
        if let Some(token) = &overrides.bearer_token {
            self.auth.bearer_token = Some(token.clone());
            self.auth.username = None;
            self.auth.password = None;
        }
    }
}

/// Target service settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Base URL requests are resolved against (e.g., "http://localhost:8080").
    pub base_url: String,

    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Authentication settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AuthConfig {
    /// Sent as `Authorization: Bearer`.
    pub bearer_token: Option<String>,

    /// Basic auth user; requires `password`.
    pub username: Option<String>,

    /// Basic auth password; requires `username`.
    pub password: Option<String>,

    /// Identities to assert, outermost end user first.
    pub proxied_entities: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` takes precedence.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "proxied_entities=info".to_string(),
        }
    }
}
