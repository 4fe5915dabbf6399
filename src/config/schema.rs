//! Configuration schema definitions and defaulting.
//!
//! Every field of [`Config`] is optional; [`Config::resolve`] fills the gaps
//! with explicit defaults and returns a [`ResolvedConfig`] whose types can no
//! longer express an absent value. Defaulting never fails and the rules are
//! independent of each other.

use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::Jar;

use crate::observability::Logger;

/// Default time zone applied when none is configured.
pub const DEFAULT_TIME_ZONE: &str = "UTC";

/// Root configuration for the resource bundle.
#[derive(Clone, Default)]
pub struct Config {
    /// Logger handle. If not provided, a JSON logger at info severity
    /// writing to standard output is constructed.
    pub logger: Option<Logger>,

    /// IANA time zone name (e.g. "America/Sao_Paulo"). Empty means UTC.
    pub time_zone: String,

    /// HTTP client configuration.
    pub http_client: HttpClientConfig,
}

impl Config {
    /// Apply defaults to every unset field.
    ///
    /// Pure and infallible; supplied values pass through unchanged.
    pub fn resolve(self) -> ResolvedConfig {
        ResolvedConfig {
            logger: self.logger.unwrap_or_default(),
            time_zone: if self.time_zone.is_empty() {
                DEFAULT_TIME_ZONE.to_string()
            } else {
                self.time_zone
            },
            http_client: self.http_client.resolve(),
        }
    }
}

/// HTTP client configuration.
#[derive(Clone, Default)]
pub struct HttpClientConfig {
    /// Transport settings. If not provided, the client's stock transport
    /// is used.
    pub transport: Option<TransportConfig>,

    /// Cookie jar. If not provided, the client keeps no cookies.
    pub cookie_jar: Option<Arc<Jar>>,

    /// Total request timeout. Absent or zero means the 10 second default.
    pub timeout: Option<Duration>,
}

impl HttpClientConfig {
    /// Default total request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Apply defaults to every unset field.
    pub fn resolve(self) -> ResolvedHttpClientConfig {
        let timeout = match self.timeout {
            Some(timeout) if !timeout.is_zero() => timeout,
            _ => Self::DEFAULT_TIMEOUT,
        };

        ResolvedHttpClientConfig {
            transport: self.transport.unwrap_or_default(),
            cookie_jar: self.cookie_jar,
            timeout,
        }
    }
}

/// Connection-level transport settings.
///
/// The defaults match the stock `reqwest` transport, so
/// `TransportConfig::default()` is the platform-standard transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Connection establishment timeout. `None` means no limit beyond the
    /// total request timeout.
    pub connect_timeout: Option<Duration>,

    /// How long an idle pooled connection is kept around.
    pub pool_idle_timeout: Option<Duration>,

    /// Maximum idle pooled connections per host.
    pub pool_max_idle_per_host: usize,

    /// Whether TCP_NODELAY is set on connections.
    pub tcp_nodelay: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            pool_idle_timeout: Some(Duration::from_secs(90)),
            pool_max_idle_per_host: usize::MAX,
            tcp_nodelay: true,
        }
    }
}

/// Fully populated configuration produced by [`Config::resolve`].
///
/// Invariants: the time zone name is non-empty and the timeout is > 0.
#[derive(Clone)]
pub struct ResolvedConfig {
    pub logger: Logger,
    pub time_zone: String,
    pub http_client: ResolvedHttpClientConfig,
}

/// Fully populated HTTP client configuration.
#[derive(Clone)]
pub struct ResolvedHttpClientConfig {
    pub transport: TransportConfig,
    /// Passed through as configured; `None` keeps the client cookie-free.
    pub cookie_jar: Option<Arc<Jar>>,
    pub timeout: Duration,
}
