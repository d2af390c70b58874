//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize, semantic checks)
//!     → RelayConfig (immutable for the process lifetime)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no reload machinery
//! - All fields have defaults so an empty file is a valid config
//! - The downstream URL is a configuration constant, never varied
//!   per request

pub mod loader;
pub mod schema;

pub use schema::{DownstreamConfig, ListenerConfig, ObservabilityConfig, RelayConfig};
