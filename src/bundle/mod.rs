//! Resource bundle subsystem.
//!
//! # Data Flow
//! ```text
//! Config
//!     → resolve (defaulting)
//!     → cancellation pair → env snapshot → zone → HTTP client
//!     → Bundle (immutable, "ready")
//!
//! Any failure along the way
//!     → BuildError ("all-or-nothing", no partial bundle)
//! ```
//!
//! # Design Decisions
//! - Construction is strictly linear and synchronous; there are only two
//!   states, under-construction and ready, with no way back
//! - Errors are returned, not panicked: the caller decides whether a failed
//!   startup aborts the process
//! - Accessors are read-only; `now()` is the only one whose result varies

pub mod resources;
pub mod types;

pub use resources::Bundle;
pub use types::BuildError;
