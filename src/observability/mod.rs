//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields (host, request_id, path)
//!     → logging.rs installs the subscriber (filter + formatter)
//!
//! HTTP requests:
//!     → tower-http TraceLayer opens one span per request
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Logs go to stderr; stdout is reserved for `invoke` output
//! - Request ID flows through every HTTP span

pub mod logging;

pub use logging::init_logging;
