//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Config.logger (optional handle)
//!     → logging.rs (default JSON subscriber when absent)
//!     → Logger (dispatch + configured severity)
//!     → shared read-only through the bundle
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing, via the tracing crate
//! - The logger is an explicit dispatch handle, never a process-global
//!   install; callers override it by supplying their own in the config
//! - Severity directives honor RUST_LOG when present, falling back to the
//!   configured level

pub mod logging;

pub use logging::Logger;
