// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the hackerpet library.
//!
//! Failures fall into three groups: wire values that cannot be mapped onto a
//! typed value ([`ValueError`]), payloads that do not have the expected shape
//! ([`ParseError`]), and transport failures ([`ProtocolError`]). All of them
//! fold into [`Error`].

use std::fmt;

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A value could not be validated.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The hub answered with a payload that could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The request did not complete.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

/// Errors related to value validation.
///
/// # Examples
///
/// ```
/// use hackerpet::ValueError;
///
/// let err = ValueError::invalid("HubMode", "3");
/// assert_eq!(err.to_string(), "illegal value provided for HubMode: 3");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A wire value does not map to any member of an enumerated type.
    #[error("illegal value provided for {type_name}: {value}")]
    InvalidValue {
        /// Name of the type the value was meant for.
        type_name: &'static str,
        /// The offending wire value.
        value: String,
    },

    /// A caller-supplied number is outside its inclusive bounds.
    #[error("expected value {name} to be in range [{lower}, {upper}], but found {found}")]
    OutOfRange {
        /// Name of the checked value.
        name: String,
        /// Inclusive lower bound.
        lower: i64,
        /// Inclusive upper bound.
        upper: i64,
        /// The value that was provided.
        found: i64,
    },
}

impl ValueError {
    /// Creates an [`ValueError::InvalidValue`] for `type_name`.
    pub fn invalid(type_name: &'static str, value: impl fmt::Display) -> Self {
        Self::InvalidValue {
            type_name,
            value: value.to_string(),
        }
    }
}

/// Checks that `value` lies within `[lower, upper]`.
///
/// # Errors
///
/// Returns [`ValueError::OutOfRange`] if `value < lower` or `value > upper`.
///
/// # Examples
///
/// ```
/// use hackerpet::check_range;
///
/// assert!(check_range("timezone_offset", -12, 13, -12).is_ok());
/// assert!(check_range("timezone_offset", -12, 13, 13).is_ok());
/// assert!(check_range("timezone_offset", -12, 13, 14).is_err());
/// ```
pub fn check_range(
    name: &str,
    lower: i64,
    upper: i64,
    value: i64,
) -> std::result::Result<(), ValueError> {
    if value < lower || value > upper {
        return Err(ValueError::OutOfRange {
            name: name.to_string(),
            lower,
            upper,
            found: value,
        });
    }
    Ok(())
}

/// Errors related to the shape of hub payloads.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The body is not valid JSON, or not the JSON structure expected.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required field is missing from the payload.
    #[error("missing field in response: {0}")]
    MissingField(&'static str),

    /// A field holds a JSON value of the wrong kind.
    #[error("unexpected type for {field}: expected {expected}")]
    UnexpectedType {
        /// The field that was inspected.
        field: &'static str,
        /// Description of the accepted JSON kinds.
        expected: &'static str,
    },

    /// A date or time-of-day field does not match its format.
    #[error("failed to parse {field} from '{value}': {source}")]
    Time {
        /// The field that failed to parse.
        field: &'static str,
        /// The raw wire value.
        value: String,
        /// The underlying chrono error.
        source: chrono::ParseError,
    },
}

/// Errors raised by a [`Transport`](crate::protocol::Transport).
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The hub answered with a non-success status code.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// Invalid host or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Any other transport failure, reported by custom transports.
    #[error("transport failed: {0}")]
    Transport(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
