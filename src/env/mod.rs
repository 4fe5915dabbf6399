//! Typed environment snapshot subsystem.
//!
//! # Data Flow
//! ```text
//! caller-declared struct (serde Deserialize)
//!     → loader.rs (envy decode against process environment)
//!     → typed snapshot owned by the bundle
//! ```
//!
//! # Design Decisions
//! - Bindings are declarative: field names match their variable names
//!   case-insensitively, a lowercase `#[serde(rename)]` declares an
//!   explicit binding, and a prefix can scope the whole shape
//! - The set of variables is caller-defined, nothing here is hard-coded
//! - Missing or unconvertible bindings are errors, never partial snapshots

pub mod loader;

pub use loader::load;
pub use loader::load_from;
pub use loader::load_prefixed;
pub use loader::EnvError;
