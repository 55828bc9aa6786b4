// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Daily kibble dispense limit.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::ValueError;
use crate::types::{parse_digits, wire_text};

/// Limit on the number of kibbles dispensed per day.
///
/// A limit of `0`, or no limit at all, means unlimited.
///
/// # Examples
///
/// ```
/// use hackerpet::types::MaxKibbles;
///
/// let limited = MaxKibbles::new(Some(40));
/// assert_eq!(limited.value(), 40);
/// assert_eq!(limited.to_string(), "limit: 40");
///
/// assert_eq!(MaxKibbles::new(None), MaxKibbles::new(Some(0)));
/// assert!(MaxKibbles::new(Some(0)).is_unlimited());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct MaxKibbles(u32);

impl MaxKibbles {
    /// No daily limit.
    pub const UNLIMITED: Self = Self(0);

    /// Creates a limit; `None` and `Some(0)` both mean unlimited.
    #[must_use]
    pub fn new(limit: Option<u32>) -> Self {
        Self(limit.unwrap_or(0))
    }

    /// Parses the wire value: a digit string, a non-negative integer, or
    /// `null` for unlimited.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidValue` for any other JSON value.
    pub fn from_wire(value: &Value) -> Result<Self, ValueError> {
        let limit = match value {
            Value::Null => Some(0),
            Value::String(s) => parse_digits(s),
            Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
            _ => None,
        };
        limit
            .map(Self)
            .ok_or_else(|| ValueError::invalid("MaxKibbles", wire_text(value)))
    }

    /// Returns the number sent to the hub, `0` when unlimited.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns the limit, or `None` when unlimited.
    #[must_use]
    pub const fn limit(&self) -> Option<u32> {
        if self.0 == 0 { None } else { Some(self.0) }
    }

    /// Returns whether no daily limit applies.
    #[must_use]
    pub const fn is_unlimited(&self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for MaxKibbles {
    fn from(limit: u32) -> Self {
        Self(limit)
    }
}

impl fmt::Display for MaxKibbles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.limit() {
            None => f.write_str("no limit"),
            Some(limit) => write!(f, "limit: {limit}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unlimited_forms() {
        assert!(MaxKibbles::new(None).is_unlimited());
        assert!(MaxKibbles::new(Some(0)).is_unlimited());
        assert_eq!(MaxKibbles::default(), MaxKibbles::UNLIMITED);
        assert_eq!(MaxKibbles::UNLIMITED.value(), 0);
        assert_eq!(MaxKibbles::UNLIMITED.limit(), None);
        assert_eq!(MaxKibbles::UNLIMITED.to_string(), "no limit");
    }

    #[test]
    fn from_wire_accepts_strings_numbers_and_null() {
        assert_eq!(MaxKibbles::from_wire(&json!("0")).unwrap(), MaxKibbles::UNLIMITED);
        assert_eq!(MaxKibbles::from_wire(&json!("25")).unwrap().limit(), Some(25));
        assert_eq!(MaxKibbles::from_wire(&json!(60)).unwrap().value(), 60);
        assert_eq!(MaxKibbles::from_wire(&json!(null)).unwrap(), MaxKibbles::UNLIMITED);
    }

    #[test]
    fn from_wire_rejects_garbage() {
        for value in [json!("-3"), json!(-3), json!(2.5), json!("lots"), json!(true)] {
            let err = MaxKibbles::from_wire(&value).unwrap_err();
            assert!(matches!(
                err,
                ValueError::InvalidValue {
                    type_name: "MaxKibbles",
                    ..
                }
            ));
        }
    }
}
