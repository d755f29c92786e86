//! Edge platform data model.
//!
//! # Data Flow
//! ```text
//! Runtime event (JSON)
//!     → event.rs (Event envelope, Request)
//!     → headers.rs (name → { value } mapping)
//!     → [edge function mutates headers in place]
//!     → Request returned to the runtime and forwarded to origin
//! ```
//!
//! # Design Decisions
//! - Wire shape `{ "<name>": { "value": "<string>" } }` is matched exactly at the serde boundary
//! - Header names are case-insensitive; stored lowercased
//! - Fields this crate does not interpret are carried through untouched

pub mod event;
pub mod headers;

pub use event::{Event, Request};
pub use headers::{HeaderValueDescriptor, Headers};
