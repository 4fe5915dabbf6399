//! Groundwork - Startup Resource Bundle for Services
//!
//! Constructs the set of shared runtime resources almost every service needs
//! at the start of its lifetime, in one linear pass:
//!
//! ```text
//! Config (in-process value, all fields optional)
//!     → config::resolve (pure defaulting, never fails)
//!     → lifecycle (cancellation pair)
//!     → env (typed environment snapshot)
//!     → clock (time-zone resolution)
//!     → http (client construction)
//!     → Bundle (immutable, shared read-only)
//! ```
//!
//! Construction is all-or-nothing: a missing environment binding or an
//! unknown time zone yields a [`BuildError`] and no bundle. After
//! construction the bundle has no internal behavior of its own; accessors
//! are read-only projections and the underlying logger, HTTP client and
//! cancellation token are safe to share across tasks.
//!
//! # Example
//!
//! ```no_run
//! use groundwork::{Bundle, Config};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Env {
//!     environment: String,
//!     version: String,
//! }
//!
//! let bundle: Bundle<Env> = Bundle::build(Config::default())?;
//! tracing::dispatcher::with_default(bundle.logger().dispatch(), || {
//!     tracing::info!(environment = %bundle.env().environment, "service starting");
//! });
//! # Ok::<(), groundwork::BuildError>(())
//! ```

// Core subsystems
pub mod bundle;
pub mod config;
pub mod env;

// Constructed resources
pub mod clock;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use bundle::{BuildError, Bundle};
pub use clock::Clock;
pub use config::{Config, HttpClientConfig, TransportConfig};
pub use lifecycle::{CancelHandle, CancelToken};
pub use observability::Logger;
