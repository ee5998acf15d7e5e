//! Proxied entity encoding subsystem.
//!
//! # Data Flow
//! ```text
//! Outbound request:
//!     identity strings
//!     → encoder.rs (escape, wrap, base64 for non-ASCII)
//!     → concatenated X-ProxiedEntitiesChain value
//!
//! Diagnostics / receiving side:
//!     X-ProxiedEntitiesChain value
//!     → chain.rs (tokenize, unescape, base64 decode)
//!     → identity strings
//! ```
//!
//! # Design Decisions
//! - Encoders are passed explicitly; there is no process-wide instance
//! - Each entry delimits itself, the chain adds no separator
//! - Values must always be legal HTTP header values

pub mod chain;
pub mod encoder;
pub mod types;

pub use chain::tokenize_chain;
pub use encoder::{EntityEncoder, StandardEntityEncoder};
pub use types::EncodeError;
