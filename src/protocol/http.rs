// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for hackerpet hubs.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};

use crate::error::ProtocolError;
use crate::protocol::{Response, RetryPolicy, Transport};

// ============================================================================
// HttpConfig
// ============================================================================

/// Configuration for reaching a hub over HTTP.
///
/// The hub only speaks plain HTTP: any scheme given with the host is
/// stripped and `http://` is always used.
///
/// # Examples
///
/// ```
/// use hackerpet::protocol::{HttpConfig, RetryPolicy};
/// use std::time::Duration;
///
/// // Default address
/// let config = HttpConfig::default();
/// assert_eq!(config.base_url(), "http://cleverpet.local");
///
/// // With all options
/// let config = HttpConfig::new("https://192.168.1.40/")
///     .with_port(8080)
///     .with_timeout(Duration::from_secs(5))
///     .with_retry(RetryPolicy::none());
/// assert_eq!(config.base_url(), "http://192.168.1.40:8080");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    timeout: Duration,
    retry: RetryPolicy,
}

impl HttpConfig {
    /// Address the hub announces itself under on the local network.
    pub const DEFAULT_HOST: &'static str = "cleverpet.local";
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default per-attempt timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - Hostname or IP address, optionally with an `http://` or
    ///   `https://` prefix, a `:port` suffix and a trailing slash
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        let host = normalize_host(&host.into());
        let (host, port) = split_port(&host);
        Self {
            host: host.to_string(),
            port: port.unwrap_or(Self::DEFAULT_PORT),
            timeout: Self::DEFAULT_TIMEOUT,
            retry: RetryPolicy::default(),
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the per-attempt timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the retry policy.
    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the retry policy.
    #[must_use]
    pub fn retry(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        if self.port == Self::DEFAULT_PORT {
            format!("http://{}", self.host)
        } else {
            format!("http://{}:{}", self.host, self.port)
        }
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidAddress` if the host is empty or has
    /// an unparseable port, or `ProtocolError::Http` if the HTTP client
    /// cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        if self.host.is_empty() {
            return Err(ProtocolError::InvalidAddress("host is required".to_string()));
        }
        if self.host.contains(':') && !self.host.starts_with('[') {
            return Err(ProtocolError::InvalidAddress(format!(
                "invalid port in host: {}",
                self.host
            )));
        }

        let base_url = self.base_url();
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            base_url,
            client,
            retry: self.retry,
        })
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HOST)
    }
}

fn normalize_host(host: &str) -> String {
    let host = host.trim();
    let host = host
        .strip_prefix("http://")
        .or_else(|| host.strip_prefix("https://"))
        .unwrap_or(host);
    host.trim_end_matches('/').to_string()
}

/// Splits a trailing `:port` off `host`. Bracketed IPv6 literals keep their
/// inner colons.
fn split_port(host: &str) -> (&str, Option<u16>) {
    match host.rsplit_once(':') {
        Some((name, port)) if !name.contains(':') || name.ends_with(']') => port
            .parse::<u16>()
            .map_or((host, None), |port| (name, Some(port))),
        _ => (host, None),
    }
}

// ============================================================================
// HttpClient
// ============================================================================

/// HTTP client for a single hub.
///
/// Each call is one logical request; failed attempts are retried according
/// to the configured [`RetryPolicy`]. Connection errors and 5xx responses
/// are retried, 4xx responses are not.
///
/// # Examples
///
/// ```no_run
/// use hackerpet::protocol::{HttpClient, Transport};
///
/// # async fn example() -> Result<(), hackerpet::ProtocolError> {
/// let client = HttpClient::new("192.168.1.40")?;
/// let response = client.get("/local-api").await?;
/// println!("{}", response.body());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
    retry: RetryPolicy,
}

impl HttpClient {
    /// Creates a client for `host` with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self, ProtocolError> {
        HttpConfig::new(host).into_client()
    }

    /// Returns the base URL of the hub.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<Response, ProtocolError> {
        let url = self.build_url(path);
        let mut attempt = 1;

        loop {
            match self.send_once(method.clone(), &url, body.clone()).await {
                Ok(response) => return Ok(response),
                Err(err) if is_retryable(&err) && self.retry.should_retry(attempt) => {
                    let delay = self.retry.delay_for_attempt(attempt);
                    tracing::warn!(
                        url = %url,
                        attempt,
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        error = %err,
                        "HTTP request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn send_once(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
    ) -> Result<Response, ProtocolError> {
        tracing::debug!(method = %method, url = %url, body = ?body, "Sending HTTP request");

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request.send().await.map_err(ProtocolError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProtocolError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(status = status.as_u16(), body = %body, "Received HTTP response");

        Ok(Response::new(body))
    }
}

fn is_retryable(err: &ProtocolError) -> bool {
    match err {
        ProtocolError::Http(_) => true,
        ProtocolError::Status(code) => *code >= 500,
        ProtocolError::InvalidAddress(_) | ProtocolError::Transport(_) => false,
    }
}

impl Transport for HttpClient {
    async fn get(&self, path: &str) -> Result<Response, ProtocolError> {
        self.execute(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: String) -> Result<Response, ProtocolError> {
        self.execute(Method::POST, path, Some(body)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_config_default_values() {
        let config = HttpConfig::default();
        assert_eq!(config.host(), "cleverpet.local");
        assert_eq!(config.port(), 80);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.retry(), &RetryPolicy::default());
    }

    #[test]
    fn http_config_strips_scheme_and_slash() {
        for host in [
            "cleverpet.local",
            "http://cleverpet.local",
            "https://cleverpet.local/",
            " cleverpet.local// ",
        ] {
            assert_eq!(HttpConfig::new(host).host(), "cleverpet.local", "{host}");
        }
    }

    #[test]
    fn http_config_base_url() {
        assert_eq!(
            HttpConfig::new("192.168.1.40").base_url(),
            "http://192.168.1.40"
        );
        assert_eq!(
            HttpConfig::new("192.168.1.40").with_port(8080).base_url(),
            "http://192.168.1.40:8080"
        );
    }

    #[test]
    fn http_config_builder_chain() {
        let config = HttpConfig::new("hub.lan")
            .with_port(8080)
            .with_timeout(Duration::from_secs(2))
            .with_retry(RetryPolicy::none());

        assert_eq!(config.port(), 8080);
        assert_eq!(config.timeout(), Duration::from_secs(2));
        assert_eq!(config.retry().max_attempts(), 1);
    }

    #[test]
    fn http_config_embedded_port() {
        let config = HttpConfig::new("http://hub.lan:1234/");
        assert_eq!(config.host(), "hub.lan");
        assert_eq!(config.port(), 1234);
        assert_eq!(config.base_url(), "http://hub.lan:1234");

        let config = HttpConfig::new("hub.lan:1234").with_port(8080);
        assert_eq!(config.base_url(), "http://hub.lan:8080");

        let config = HttpConfig::new("[fe80::1]:8080");
        assert_eq!(config.host(), "[fe80::1]");
        assert_eq!(config.port(), 8080);
    }

    #[test]
    fn into_client_rejects_bad_port() {
        for host in ["hub.lan:abc", "hub.lan:99999"] {
            let result = HttpConfig::new(host).into_client();
            assert!(
                matches!(result, Err(ProtocolError::InvalidAddress(_))),
                "{host}"
            );
        }
    }

    #[test]
    fn into_client_requires_host() {
        let result = HttpConfig::new("http://").into_client();
        assert!(matches!(result, Err(ProtocolError::InvalidAddress(_))));
    }

    #[test]
    fn build_url() {
        let client = HttpClient::new("https://192.168.1.40").unwrap();
        assert_eq!(client.base_url(), "http://192.168.1.40");
        assert_eq!(
            client.build_url("/local-api/set_game"),
            "http://192.168.1.40/local-api/set_game"
        );
    }

    #[test]
    fn retryable_errors() {
        assert!(is_retryable(&ProtocolError::Status(500)));
        assert!(is_retryable(&ProtocolError::Status(503)));
        assert!(!is_retryable(&ProtocolError::Status(404)));
        assert!(!is_retryable(&ProtocolError::Transport("x".to_string())));
    }
}
