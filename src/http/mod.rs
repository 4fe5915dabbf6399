//! HTTP client subsystem.
//!
//! # Data Flow
//! ```text
//! ResolvedHttpClientConfig (transport, jar, timeout)
//!     → client.rs (reqwest builder)
//!     → reqwest::Client, shared read-only through the bundle
//! ```
//!
//! # Design Decisions
//! - Transport behavior stays in reqwest; this module only applies the
//!   configured knobs to the builder
//! - The client is built once at bundle construction and cloned by
//!   reference everywhere (reqwest clients share their pool internally)

pub mod client;

pub use client::build_client;
