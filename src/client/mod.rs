//! Outbound HTTP client.
//!
//! # Data Flow
//! ```text
//! ToolkitClient::get(path, configs)
//!     → request::merge_headers (all strategies, all-or-nothing)
//!     → request::to_header_map
//!     → reqwest GET base_url + path
//! ```
//!
//! # Design Decisions
//! - No retries; callers decide what to do with failures
//! - Header values are never logged, only their names

pub mod toolkit;
pub mod types;

pub use toolkit::ToolkitClient;
pub use types::ClientError;
