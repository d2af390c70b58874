//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, relay handler)
//!     → decode body: UTF-8 → JSON value (opaque, never inspected)
//!     → forward as form data to the downstream endpoint (reqwest)
//!     → downstream body relayed to the caller verbatim, status 200
//! ```
//!
//! # Design Decisions
//! - One route only: `POST /`; other methods get Axum's default 405
//! - Downstream status and headers are logged, never propagated
//! - Every failure maps to a bare 500 (error.rs); no recovery

pub mod error;
pub mod server;

pub use error::RelayError;
pub use server::{AppState, HttpServer};
