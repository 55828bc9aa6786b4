// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transports for talking to a hackerpet hub.
//!
//! The hub exposes a plain HTTP API: one `GET` for status and one `POST` per
//! setting. [`Transport`] is the seam between the typed API and the network;
//! [`HttpClient`] is the provided implementation.

#[cfg(feature = "http")]
mod http;
mod retry;

#[cfg(feature = "http")]
pub use http::{HttpClient, HttpConfig};
pub use retry::RetryPolicy;

use crate::error::{ParseError, ProtocolError};

/// Body returned by the hub.
#[derive(Debug, Clone, Default)]
pub struct Response {
    body: String,
}

impl Response {
    /// Creates a response with the given body.
    #[must_use]
    pub fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns the raw body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns whether the body is empty, as expected for settings commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the body is not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, ParseError> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }
}

/// Trait for transports able to reach a hub.
///
/// Implementations resolve `path` against the hub address, perform one
/// logical request (retrying internally if they choose), and fail with
/// [`ProtocolError`] if no successful response was obtained.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Performs a `GET` request.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails.
    async fn get(&self, path: &str) -> Result<Response, ProtocolError>;

    /// Performs a `POST` request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails.
    async fn post(&self, path: &str, body: String) -> Result<Response, ProtocolError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_json() {
        let response = Response::new(r#"{"hub_mode":"1"}"#.to_string());
        assert_eq!(response.json().unwrap()["hub_mode"], "1");
        assert!(!response.is_empty());
    }

    #[test]
    fn response_invalid_json() {
        let response = Response::new("<html>".to_string());
        assert!(matches!(response.json(), Err(ParseError::Json(_))));
    }

    #[test]
    fn response_empty() {
        assert!(Response::default().is_empty());
        assert!(Response::new("\r\n".to_string()).is_empty());
    }
}
