//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! Config (in-process value, every field optional)
//!     → schema.rs resolve() (pure defaulting)
//!     → ResolvedConfig (fully populated, immutable)
//!     → consumed once by bundle::build
//! ```
//!
//! # Design Decisions
//! - Config is an in-process value, not a file format: it carries live
//!   handles (logger dispatch, cookie jar), so nothing here is serde'd
//! - All fields have defaults to allow `Config::default()` as the minimal
//!   configuration
//! - Defaulting is pure and infallible; the resolved types make a partially
//!   populated configuration unrepresentable

pub mod schema;

pub use schema::Config;
pub use schema::HttpClientConfig;
pub use schema::ResolvedConfig;
pub use schema::ResolvedHttpClientConfig;
pub use schema::TransportConfig;
