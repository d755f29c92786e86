//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     trigger() → broadcast to every subscriber → server drains and exits
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → trigger()
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
