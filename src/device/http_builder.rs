// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP hub builder.

use std::time::Duration;

use crate::device::Hub;
use crate::error::Error;
use crate::protocol::{HttpClient, HttpConfig, RetryPolicy};
use crate::response::ParseMode;

/// Builder for creating HTTP-based hubs.
///
/// This builder can be created in two ways:
/// - `Hub::http("host")` - Simple host string
/// - `Hub::http_config(HttpConfig::new("host").with_port(8080))` - Advanced configuration
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use hackerpet::Hub;
/// use hackerpet::protocol::RetryPolicy;
/// use hackerpet::response::ParseMode;
///
/// # fn example() -> hackerpet::Result<()> {
/// let hub = Hub::http("192.168.1.40")
///     .with_timeout(Duration::from_secs(3))
///     .with_retry(RetryPolicy::new().with_max_attempts(5))
///     .with_parse_mode(ParseMode::Lenient)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpHubBuilder {
    config: HttpConfig,
    parse_mode: ParseMode,
}

impl HttpHubBuilder {
    /// Creates a new builder with the specified HTTP configuration.
    pub(crate) fn new(config: HttpConfig) -> Self {
        Self {
            config,
            parse_mode: ParseMode::default(),
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.config = self.config.with_port(port);
        self
    }

    /// Sets the per-attempt timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Sets the retry policy.
    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.config = self.config.with_retry(retry);
        self
    }

    /// Sets how descriptive status fields are parsed.
    #[must_use]
    pub fn with_parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = mode;
        self
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Builds the hub. No request is made.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be
    /// created.
    pub fn build(self) -> Result<Hub<HttpClient>, Error> {
        let client = self.config.into_client()?;
        Ok(Hub::new(client).with_parse_mode(self.parse_mode))
    }
}
