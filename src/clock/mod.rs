//! Time subsystem.
//!
//! # Data Flow
//! ```text
//! zone name ("UTC", "America/Sao_Paulo", ...)
//!     → zone.rs (IANA database lookup)
//!     → Clock (zone handle)
//!     → now() reads the system clock, localized to the zone
//! ```
//!
//! # Design Decisions
//! - Zone resolution happens once at construction; unknown names are fatal
//!   to the build, not deferred to the first `now()` call
//! - The clock itself is stateless beyond the zone; reading it is the only
//!   operation in the crate whose result varies between calls

pub mod zone;

pub use zone::Clock;
pub use zone::ClockError;
