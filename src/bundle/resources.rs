//! The resource bundle: construction and read-only accessors.

use chrono::DateTime;
use chrono_tz::Tz;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::bundle::BuildError;
use crate::clock::Clock;
use crate::config::{Config, ResolvedConfig};
use crate::env;
use crate::http;
use crate::lifecycle::{self, CancelHandle, CancelToken};
use crate::observability::Logger;

/// Immutable bundle of shared runtime resources, generic over the caller's
/// environment shape.
///
/// Built once at startup via [`Bundle::build`]; afterwards it only projects
/// its resources. The logger, HTTP client and cancellation token are safe
/// for concurrent use across tasks.
pub struct Bundle<E> {
    context: CancelToken,
    canceller: CancelHandle,
    env: E,
    logger: Logger,
    clock: Clock,
    http_client: Client,
}

impl<E: DeserializeOwned> Bundle<E> {
    /// Build the bundle from a configuration.
    ///
    /// The flow is strictly linear: resolve defaults, derive the
    /// cancellation pair, decode the environment snapshot, resolve the time
    /// zone, construct the HTTP client, assemble. Any failure returns a
    /// [`BuildError`] and no bundle.
    ///
    /// The environment shape is any struct deriving `Deserialize`; see
    /// [`crate::env`] for the binding rules.
    pub fn build(config: Config) -> Result<Self, BuildError> {
        let ResolvedConfig {
            logger,
            time_zone,
            http_client: http_config,
        } = config.resolve();

        let (canceller, context) = lifecycle::cancellation();
        let env = env::load::<E>()?;
        let clock = Clock::in_zone(&time_zone)?;
        let http_client = http::build_client(&http_config)?;

        tracing::dispatcher::with_default(logger.dispatch(), || {
            tracing::info!(
                time_zone = %clock.zone(),
                http_timeout_ms = http_config.timeout.as_millis() as u64,
                "resource bundle initialized"
            );
        });

        Ok(Self {
            context,
            canceller,
            env,
            logger,
            clock,
            http_client,
        })
    }
}

impl<E> Bundle<E> {
    /// Cancellable execution context. Clone it into tasks that should stop
    /// when [`Bundle::canceller`] fires.
    pub fn context(&self) -> &CancelToken {
        &self.context
    }

    /// Cancellation trigger for all context-derived work. Idempotent.
    pub fn canceller(&self) -> &CancelHandle {
        &self.canceller
    }

    /// The decoded environment snapshot.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// The structured logger.
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// The configured time zone.
    pub fn time_zone(&self) -> Tz {
        self.clock.zone()
    }

    /// Current instant in the configured time zone.
    pub fn now(&self) -> DateTime<Tz> {
        self.clock.now()
    }

    /// The configured HTTP client.
    pub fn http_client(&self) -> &Client {
        &self.http_client
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct NoEnv {}

    #[test]
    fn test_build_with_empty_config_uses_defaults() {
        let bundle: Bundle<NoEnv> = Bundle::build(Config::default()).unwrap();

        assert_eq!(bundle.time_zone(), Tz::UTC);
        assert_eq!(bundle.logger().level(), tracing::Level::INFO);
        assert!(!bundle.context().is_cancelled());
    }

    #[test]
    fn test_build_rejects_unknown_time_zone() {
        let config = Config {
            time_zone: "Not/A_Zone".to_string(),
            ..Config::default()
        };

        let result: Result<Bundle<NoEnv>, _> = Bundle::build(config);
        assert!(matches!(result, Err(BuildError::Clock(_))));
    }
}
