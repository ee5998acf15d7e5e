//! Request configuration for clients acting on behalf of proxied entities.
//!
//! A trusted client asserts a chain of identities through the
//! `X-ProxiedEntitiesChain` header. This crate encodes that chain, offers it
//! as one of several pluggable [`request::RequestConfig`] strategies, and
//! applies those strategies to outbound requests.

pub mod client;
pub mod config;
pub mod encoding;
pub mod observability;
pub mod request;

pub use client::{ClientError, ToolkitClient};
pub use config::ToolkitConfig;
pub use encoding::{EntityEncoder, StandardEntityEncoder};
pub use request::{ProxiedEntityRequestConfig, RequestConfig};
