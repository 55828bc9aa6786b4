// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status snapshot parsing.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, ParseError, ValueError};
use crate::types::{
    Game, GameState, HubMode, HubState, HubStatus, MaxKibbles, Schedule, parse_digits, wire_text,
};

/// Format of the `time` field, e.g. `"Sat Jul 30 15:23:41 2022"`.
const TIME_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// How descriptive fields (`status`, `dst_on`, `kibbles_eaten_today`) are
/// handled when their value is not recognized.
///
/// Core fields are always parsed strictly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Unrecognized values fail the whole parse.
    #[default]
    Strict,
    /// Unrecognized values become `None` and are logged as warnings.
    Lenient,
}

/// Wire view of the status payload. Every value is optional here so that a
/// missing field is reported by name rather than as a serde error.
#[derive(Debug, Deserialize)]
struct RawStatus {
    time: Option<String>,
    hub_mode: Option<String>,
    game_id_playing: Option<String>,
    game_id_queued: Option<String>,
    hub_state: Option<String>,
    timezone: Option<Value>,
    status: Option<Value>,
    dst_on: Option<Value>,
    kibbles_eaten_today: Option<Value>,
}

/// Snapshot of the hub status returned by `GET /local-api`.
///
/// All fields are derived once, at construction, from a single payload.
///
/// # Examples
///
/// ```
/// use hackerpet::response::Status;
/// use hackerpet::types::{Game, GameState, HubMode, HubState};
///
/// let body = r#"{
///     "timezone": "-5.000000",
///     "hub_mode": "1",
///     "game_id_queued": "9",
///     "game_id_playing": "9",
///     "hub_state": "Active",
///     "time": "Sat Jul 30 15:23:41 2022",
///     "max_kibbles": "0"
/// }"#;
///
/// let status = Status::from_json(body).unwrap();
/// assert_eq!(status.hub_mode(), HubMode::StayOn);
/// assert_eq!(status.game(), GameState::Playing(Game::Game9));
/// assert_eq!(status.hub_state(), HubState::Active);
/// assert_eq!(status.timezone_offset(), -5);
/// assert!(status.max_kibbles().is_unlimited());
/// assert!(status.schedule().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    time: NaiveDateTime,
    hub_mode: HubMode,
    game: GameState,
    hub_state: HubState,
    max_kibbles: MaxKibbles,
    timezone_offset: i32,
    schedule: Option<Schedule>,
    hub_status: Option<HubStatus>,
    dst_on: Option<bool>,
    kibbles_eaten_today: Option<u32>,
}

impl Status {
    /// Parses a status from a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if `body` is not JSON, otherwise the same
    /// errors as [`from_raw`](Self::from_raw).
    pub fn from_json(body: &str) -> Result<Self, Error> {
        let payload: Value = serde_json::from_str(body).map_err(ParseError::Json)?;
        Self::from_raw(&payload)
    }

    /// Parses a status from a decoded payload, strictly.
    ///
    /// # Errors
    ///
    /// Returns the first failure encountered:
    /// - `ParseError` if the payload is not an object, a required field is
    ///   missing or has the wrong JSON type, or `time` does not match
    ///   `"%a %b %d %H:%M:%S %Y"`
    /// - `ValueError::InvalidValue` if a field holds an unrecognized value
    pub fn from_raw(payload: &Value) -> Result<Self, Error> {
        Self::from_raw_with(payload, ParseMode::Strict)
    }

    /// Parses a status from a decoded payload with the given [`ParseMode`].
    ///
    /// # Errors
    ///
    /// Same as [`from_raw`](Self::from_raw); in [`ParseMode::Lenient`]
    /// descriptive fields never cause a failure.
    pub fn from_raw_with(payload: &Value, mode: ParseMode) -> Result<Self, Error> {
        if !payload.is_object() {
            return Err(ParseError::UnexpectedType {
                field: "payload",
                expected: "object",
            }
            .into());
        }
        let raw = RawStatus::deserialize(payload).map_err(ParseError::Json)?;

        let time_str = required(raw.time.as_deref(), "time")?;
        let time = NaiveDateTime::parse_from_str(time_str, TIME_FORMAT).map_err(|source| {
            ParseError::Time {
                field: "time",
                value: time_str.to_string(),
                source,
            }
        })?;

        let hub_mode = HubMode::from_digit_string(required(raw.hub_mode.as_deref(), "hub_mode")?)?;

        let playing =
            Game::from_digit_string(required(raw.game_id_playing.as_deref(), "game_id_playing")?)?;
        let queued =
            Game::from_digit_string(required(raw.game_id_queued.as_deref(), "game_id_queued")?)?;
        let game = GameState::from_games(playing, queued);

        let hub_state =
            HubState::from_exact_string(required(raw.hub_state.as_deref(), "hub_state")?)?;

        // null is unlimited, an absent key is missing
        let max_kibbles =
            MaxKibbles::from_wire(required(payload.get("max_kibbles"), "max_kibbles")?)?;

        let timezone_offset = parse_timezone(required(raw.timezone.as_ref(), "timezone")?)?;

        let schedule = if hub_mode == HubMode::Scheduled {
            Some(Schedule::from_wire(payload)?)
        } else {
            None
        };

        let hub_status = descriptive(
            raw.status.as_ref().map(parse_message),
            "status",
            mode,
        )?;
        let dst_on = descriptive(raw.dst_on.as_ref().map(parse_flag), "dst_on", mode)?;
        let kibbles_eaten_today = descriptive(
            raw.kibbles_eaten_today.as_ref().map(parse_count),
            "kibbles_eaten_today",
            mode,
        )?;

        tracing::debug!(
            hub_mode = %hub_mode,
            game = %game,
            hub_state = %hub_state,
            "Parsed hub status"
        );

        Ok(Self {
            time,
            hub_mode,
            game,
            hub_state,
            max_kibbles,
            timezone_offset,
            schedule,
            hub_status,
            dst_on,
            kibbles_eaten_today,
        })
    }

    /// Device-local time at which the status was captured.
    #[must_use]
    pub const fn time(&self) -> NaiveDateTime {
        self.time
    }

    /// Current hub mode.
    #[must_use]
    pub const fn hub_mode(&self) -> HubMode {
        self.hub_mode
    }

    /// Game being played, or the pending switch between two games.
    #[must_use]
    pub const fn game(&self) -> GameState {
        self.game
    }

    /// Whether the hub is dispensing.
    #[must_use]
    pub const fn hub_state(&self) -> HubState {
        self.hub_state
    }

    /// Daily kibble limit.
    #[must_use]
    pub const fn max_kibbles(&self) -> MaxKibbles {
        self.max_kibbles
    }

    /// Timezone offset in whole hours.
    #[must_use]
    pub const fn timezone_offset(&self) -> i32 {
        self.timezone_offset
    }

    /// Active schedule; only present in [`HubMode::Scheduled`].
    #[must_use]
    pub const fn schedule(&self) -> Option<&Schedule> {
        self.schedule.as_ref()
    }

    /// Condition parsed from the status message, if the hub sent one.
    #[must_use]
    pub const fn hub_status(&self) -> Option<HubStatus> {
        self.hub_status
    }

    /// Whether daylight saving time is enabled, if reported.
    #[must_use]
    pub const fn dst_on(&self) -> Option<bool> {
        self.dst_on
    }

    /// Kibbles eaten since midnight, if reported.
    #[must_use]
    pub const fn kibbles_eaten_today(&self) -> Option<u32> {
        self.kibbles_eaten_today
    }
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ParseError> {
    value.ok_or(ParseError::MissingField(field))
}

/// Applies `mode` to a parsed descriptive field.
fn descriptive<T>(
    parsed: Option<Result<T, ValueError>>,
    field: &'static str,
    mode: ParseMode,
) -> Result<Option<T>, ValueError> {
    match (parsed, mode) {
        (None, _) => Ok(None),
        (Some(Ok(value)), _) => Ok(Some(value)),
        (Some(Err(err)), ParseMode::Strict) => Err(err),
        (Some(Err(err)), ParseMode::Lenient) => {
            tracing::warn!(field, error = %err, "Ignoring unrecognized status field");
            Ok(None)
        }
    }
}

/// Parses the timezone as a decimal number truncated toward zero.
fn parse_timezone(raw: &Value) -> Result<i32, ValueError> {
    let number = match raw {
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };
    let Some(hours) = number
        .filter(|n| n.is_finite())
        .map(f64::trunc)
        .filter(|n| (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(n))
    else {
        return Err(ValueError::invalid("f64", wire_text(raw)));
    };

    // Truncation is safe: hours is integral and within i32 bounds
    #[allow(clippy::cast_possible_truncation)]
    let offset = hours as i32;
    Ok(offset)
}

fn parse_message(raw: &Value) -> Result<HubStatus, ValueError> {
    match raw {
        Value::String(message) => HubStatus::from_message(message),
        other => Err(ValueError::invalid("HubStatus", wire_text(other))),
    }
}

fn parse_flag(raw: &Value) -> Result<bool, ValueError> {
    match raw {
        Value::Bool(flag) => Ok(*flag),
        Value::String(s) if s == "0" => Ok(false),
        Value::String(s) if s == "1" => Ok(true),
        Value::Number(n) if n.as_u64() == Some(0) => Ok(false),
        Value::Number(n) if n.as_u64() == Some(1) => Ok(true),
        _ => Err(ValueError::invalid("bool", wire_text(raw))),
    }
}

fn parse_count(raw: &Value) -> Result<u32, ValueError> {
    let count = match raw {
        Value::String(s) => parse_digits(s),
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        _ => None,
    };
    count.ok_or_else(|| ValueError::invalid("u32", wire_text(raw)))
}
