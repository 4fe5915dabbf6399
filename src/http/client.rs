//! HTTP client construction from resolved configuration.

use reqwest::Client;

use crate::config::ResolvedHttpClientConfig;

/// Build a client from a resolved configuration.
///
/// Fails only if the underlying TLS backend cannot initialize, which is a
/// startup-fatal condition like every other build error.
pub fn build_client(config: &ResolvedHttpClientConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .timeout(config.timeout)
        .pool_idle_timeout(config.transport.pool_idle_timeout)
        .pool_max_idle_per_host(config.transport.pool_max_idle_per_host)
        .tcp_nodelay(config.transport.tcp_nodelay);

    if let Some(connect_timeout) = config.transport.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }

    if let Some(jar) = &config.cookie_jar {
        builder = builder.cookie_provider(jar.clone());
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HttpClientConfig, TransportConfig};
    use reqwest::cookie::Jar;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_default_config_builds() {
        let resolved = HttpClientConfig::default().resolve();
        assert!(build_client(&resolved).is_ok());
    }

    #[test]
    fn test_fully_specified_config_builds() {
        let config = HttpClientConfig {
            transport: Some(TransportConfig {
                connect_timeout: Some(Duration::from_secs(2)),
                pool_idle_timeout: Some(Duration::from_secs(30)),
                pool_max_idle_per_host: 8,
                tcp_nodelay: false,
            }),
            cookie_jar: Some(Arc::new(Jar::default())),
            timeout: Some(Duration::from_secs(5)),
        };

        let resolved = config.resolve();
        assert_eq!(resolved.timeout, Duration::from_secs(5));
        assert!(build_client(&resolved).is_ok());
    }
}
