//! Zone resolution and zone-aware clock readings.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use thiserror::Error;

/// Errors that can occur while resolving a time zone.
#[derive(Debug, Error)]
pub enum ClockError {
    /// The configured name is not a recognized IANA zone identifier.
    #[error("unknown time zone `{name}`")]
    UnknownZone { name: String },
}

/// A clock bound to a named time zone.
///
/// Cheap to copy; the zone handle is an index into the compiled-in IANA
/// database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    zone: Tz,
}

impl Clock {
    /// Resolve a zone name against the IANA database.
    pub fn in_zone(name: &str) -> Result<Self, ClockError> {
        let zone = name.parse::<Tz>().map_err(|_| ClockError::UnknownZone {
            name: name.to_string(),
        })?;

        Ok(Self { zone })
    }

    /// The resolved time zone.
    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// Current instant, localized to the configured zone.
    pub fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.zone)
    }
}
