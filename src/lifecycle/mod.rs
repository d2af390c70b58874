//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Init logging → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C → broadcast signal → stop accepting → exit
//! ```
//!
//! No drain or teardown logic beyond Axum's graceful shutdown; the
//! relay holds no state worth flushing.

pub mod shutdown;

pub use shutdown::Shutdown;
