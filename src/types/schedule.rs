// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Weekly activity schedule used in [`HubMode::Scheduled`](crate::types::HubMode).
//!
//! On the wire each bound is a 24-hour `"HH:MM"` string. The firmware is
//! strict about the payload shape, so [`Schedule::to_wire_payload`] always
//! emits the same four keys, in the same order, without whitespace.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::Serialize;
use serde_json::Value;

use crate::error::ParseError;

/// Wire format of a schedule bound.
const HM_FORMAT: &str = "%H:%M";

/// Activity windows for weekdays and weekends.
///
/// Bounds are kept at minute precision; seconds are dropped on construction.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use hackerpet::types::Schedule;
///
/// let hm = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
/// let schedule = Schedule::new(hm(7, 30), hm(18, 0), hm(9, 0), hm(16, 0));
///
/// assert_eq!(
///     schedule.to_wire_payload(),
///     r#"{"weekday_from":"07:30","weekday_to":"18:00","weekend_from":"09:00","weekend_to":"16:00"}"#
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Schedule {
    weekday_from: NaiveTime,
    weekday_to: NaiveTime,
    weekend_from: NaiveTime,
    weekend_to: NaiveTime,
}

impl Schedule {
    /// Creates a schedule from four times of day.
    #[must_use]
    pub fn new(
        weekday_from: NaiveTime,
        weekday_to: NaiveTime,
        weekend_from: NaiveTime,
        weekend_to: NaiveTime,
    ) -> Self {
        Self {
            weekday_from: truncate_to_minute(weekday_from),
            weekday_to: truncate_to_minute(weekday_to),
            weekend_from: truncate_to_minute(weekend_from),
            weekend_to: truncate_to_minute(weekend_to),
        }
    }

    /// Parses the four schedule fields of a hub payload.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if a key is absent,
    /// `ParseError::UnexpectedType` if it is not a string, and
    /// `ParseError::Time` if it is not a valid `"HH:MM"` time.
    pub fn from_wire(payload: &Value) -> Result<Self, ParseError> {
        Ok(Self::new(
            parse_bound(payload, "weekday_from")?,
            parse_bound(payload, "weekday_to")?,
            parse_bound(payload, "weekend_from")?,
            parse_bound(payload, "weekend_to")?,
        ))
    }

    /// Start of the weekday window.
    #[must_use]
    pub const fn weekday_from(&self) -> NaiveTime {
        self.weekday_from
    }

    /// End of the weekday window.
    #[must_use]
    pub const fn weekday_to(&self) -> NaiveTime {
        self.weekday_to
    }

    /// Start of the weekend window.
    #[must_use]
    pub const fn weekend_from(&self) -> NaiveTime {
        self.weekend_from
    }

    /// End of the weekend window.
    #[must_use]
    pub const fn weekend_to(&self) -> NaiveTime {
        self.weekend_to
    }

    /// Returns the compact JSON body expected by `set_schedule`.
    #[must_use]
    pub fn to_wire_payload(&self) -> String {
        serde_json::json!({
            "weekday_from": format_hm(self.weekday_from),
            "weekday_to": format_hm(self.weekday_to),
            "weekend_from": format_hm(self.weekend_from),
            "weekend_to": format_hm(self.weekend_to),
        })
        .to_string()
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "schedule: weekdays {} - {}; weekends {} - {}",
            format_hm(self.weekday_from),
            format_hm(self.weekday_to),
            format_hm(self.weekend_from),
            format_hm(self.weekend_to),
        )
    }
}

fn format_hm(time: NaiveTime) -> String {
    time.format(HM_FORMAT).to_string()
}

fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}

fn parse_bound(payload: &Value, field: &'static str) -> Result<NaiveTime, ParseError> {
    let raw = payload
        .get(field)
        .ok_or(ParseError::MissingField(field))?
        .as_str()
        .ok_or(ParseError::UnexpectedType {
            field,
            expected: "string",
        })?;
    NaiveTime::parse_from_str(raw, HM_FORMAT).map_err(|source| ParseError::Time {
        field,
        value: raw.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn wire_payload_is_compact_and_ordered() {
        let schedule = Schedule::new(hm(9, 0), hm(16, 0), hm(9, 5), hm(23, 59));
        assert_eq!(
            schedule.to_wire_payload(),
            r#"{"weekday_from":"09:00","weekday_to":"16:00","weekend_from":"09:05","weekend_to":"23:59"}"#
        );
    }

    #[test]
    fn wire_round_trip() {
        let schedule = Schedule::new(hm(6, 15), hm(20, 45), hm(0, 0), hm(12, 30));
        let payload: Value = serde_json::from_str(&schedule.to_wire_payload()).unwrap();
        assert_eq!(Schedule::from_wire(&payload).unwrap(), schedule);
    }

    #[test]
    fn seconds_are_dropped() {
        let with_seconds = NaiveTime::from_hms_opt(8, 10, 42).unwrap();
        let schedule = Schedule::new(with_seconds, hm(9, 0), hm(9, 0), hm(9, 0));
        assert_eq!(schedule.weekday_from(), hm(8, 10));
    }

    #[test]
    fn from_wire_errors() {
        let missing = json!({"weekday_from": "09:00", "weekday_to": "16:00", "weekend_from": "09:00"});
        assert!(matches!(
            Schedule::from_wire(&missing),
            Err(ParseError::MissingField("weekend_to"))
        ));

        let bad_time = json!({
            "weekday_from": "25:00",
            "weekday_to": "16:00",
            "weekend_from": "09:00",
            "weekend_to": "16:00"
        });
        assert!(matches!(
            Schedule::from_wire(&bad_time),
            Err(ParseError::Time {
                field: "weekday_from",
                ..
            })
        ));

        let wrong_type = json!({
            "weekday_from": 900,
            "weekday_to": "16:00",
            "weekend_from": "09:00",
            "weekend_to": "16:00"
        });
        assert!(matches!(
            Schedule::from_wire(&wrong_type),
            Err(ParseError::UnexpectedType { .. })
        ));
    }

    #[test]
    fn display() {
        let schedule = Schedule::new(hm(9, 0), hm(16, 0), hm(10, 0), hm(14, 0));
        assert_eq!(
            schedule.to_string(),
            "schedule: weekdays 09:00 - 16:00; weekends 10:00 - 14:00"
        );
    }
}
