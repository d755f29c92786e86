//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → EdgeConfig (validated, immutable)
//!     → handed to the runtime host at startup
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; an empty file is a valid config
//! - Validation separates syntactic (serde) from semantic checks
//! - The capture header names are fixed, not configurable

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    EdgeConfig, ListenerConfig, LogFormat, ObservabilityConfig, OriginConfig, TimeoutConfig,
};
