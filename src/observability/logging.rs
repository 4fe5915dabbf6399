//! Structured logger construction.

use std::fmt;
use std::io;

use tracing::{Dispatch, Level};
use tracing_subscriber::EnvFilter;

/// A structured logger handle: a tracing dispatch plus its configured
/// severity.
///
/// Nothing is installed globally. Callers route events through the handle
/// with `tracing::dispatcher::with_default`, or install it themselves via
/// `tracing::dispatcher::set_global_default` if they want process-wide
/// collection.
#[derive(Clone)]
pub struct Logger {
    dispatch: Dispatch,
    level: Level,
}

impl Logger {
    /// Wrap an existing dispatch, recording its severity.
    pub fn new(dispatch: Dispatch, level: Level) -> Self {
        Self { dispatch, level }
    }

    /// JSON-formatted records to standard output at the given severity.
    ///
    /// A `RUST_LOG` filter in the environment takes precedence over `level`
    /// for per-target directives.
    pub fn stdout_json(level: Level) -> Self {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(io::stdout)
            .finish();

        Self::new(Dispatch::new(subscriber), level)
    }

    /// The dispatch events should be routed through.
    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// The configured severity.
    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::stdout_json(Level::INFO)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("level", &self.level).finish()
    }
}
