//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! encoding / request / client / config:
//!     → tracing events (debug/trace, no header values)
//!     → logging.rs subscriber (stderr, EnvFilter)
//! ```

pub mod logging;

pub use logging::init_logging;
