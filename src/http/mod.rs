//! HTTP surface of the edge runtime host.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, tower-http layers)
//!     → request.rs (request ID, per-request span)
//!     → POST /invoke: Event JSON → capture::handle → Request JSON
//!     → anything else: middleware/host_capture.rs → echo of forwarded headers
//!     → response.rs (map capture failures to status + JSON)
//! ```

pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::EdgeServer;
