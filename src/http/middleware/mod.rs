//! Axum middleware.

pub mod canonical_host;
pub mod host_capture;

pub use canonical_host::{canonical_host_middleware, CanonicalHost};
pub use host_capture::host_capture_middleware;
