//! JSON Relay Server
//!
//! A single-endpoint HTTP relay built with Tokio and Axum. It accepts
//! `POST /`, decodes the body as JSON, forwards the decoded payload as
//! form data to a fixed downstream endpoint, logs the downstream
//! response text, and relays that text back to the caller verbatim.
//!
//! # Architecture Overview
//!
//! ```text
//!     Caller ──POST / (JSON body)──▶ ┌──────────────────────────┐
//!                                    │ http::server             │
//!                                    │   decode UTF-8 → JSON    │
//!                                    │   re-encode as form data │
//!                                    └────────────┬─────────────┘
//!                                                 │ POST (reqwest)
//!                                                 ▼
//!                                        Downstream endpoint
//!                                                 │ response text
//!                                                 ▼
//!     Caller ◀──200 + body verbatim── relay handler (logs the text)
//! ```
//!
//! Cross-cutting concerns live in their own subsystems: `config`
//! (TOML schema with defaults), `observability` (tracing setup), and
//! `lifecycle` (graceful shutdown coordination).

// Core subsystems
pub mod config;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
