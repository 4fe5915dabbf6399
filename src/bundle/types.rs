//! Bundle error definitions.

use thiserror::Error;

use crate::clock::ClockError;
use crate::env::EnvError;

/// Errors that can occur while building the resource bundle.
///
/// Every variant is startup-fatal from the bundle's point of view: no
/// partial bundle is ever returned.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The environment snapshot could not be decoded.
    #[error("failed to load environment: {0}")]
    Env(#[from] EnvError),

    /// The configured time zone is not a recognized identifier.
    #[error("failed to resolve time zone: {0}")]
    Clock(#[from] ClockError),

    /// The HTTP client could not be constructed.
    #[error("failed to construct HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_the_failing_resource() {
        let err = BuildError::from(ClockError::UnknownZone {
            name: "Atlantis/Lost".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "failed to resolve time zone: unknown time zone `Atlantis/Lost`"
        );

        let err = BuildError::from(EnvError::Missing("database_url"));
        assert!(err.to_string().contains("database_url"));
    }
}
