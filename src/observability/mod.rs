//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - `RUST_LOG` wins over the configured level when set
//! - Per-request spans come from tower-http's `TraceLayer`; the one
//!   mandated log line is the downstream response text

pub mod logging;
