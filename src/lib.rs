//! Edge host capture library.
//!
//! Preserves the client-presented `Host` header under `x-original-host`
//! so origins behind host-rewriting proxies can recover it.

pub mod capture;
pub mod config;
pub mod edge;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use capture::{capture_host, handle, CaptureError, HOST, X_ORIGINAL_HOST};
pub use config::EdgeConfig;
pub use edge::{Event, HeaderValueDescriptor, Headers, Request};
pub use http::EdgeServer;
pub use lifecycle::Shutdown;
