//! Lifecycle subsystem.
//!
//! # Data Flow
//! ```text
//! bundle::build
//!     → cancellation.rs (handle + token pair)
//!     → handle owned by the bundle, tokens cloned into tasks
//!     → cancel() latches; every token observes it, old and new
//! ```
//!
//! # Design Decisions
//! - Cancellation is latching: once triggered it can never be un-triggered,
//!   and tokens created before or after the trigger all observe it
//! - Triggering is idempotent; repeated calls are no-ops
//! - Built on a tokio watch channel, so observation works both synchronously
//!   and as an awaitable future

pub mod cancellation;

pub use cancellation::cancellation;
pub use cancellation::CancelHandle;
pub use cancellation::CancelToken;
