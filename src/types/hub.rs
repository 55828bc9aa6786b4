// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hub-level enumerations: operating mode, reported status and state.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValueError;
use crate::types::parse_digits;

/// Rule governing whether the hub is enabled.
///
/// | Value | Mode |
/// |-------|------|
/// | 0 | Always off |
/// | 1 | Always on |
/// | 2 | Follows the [`Schedule`](crate::types::Schedule) set on the device |
///
/// # Examples
///
/// ```
/// use hackerpet::types::HubMode;
///
/// let mode = HubMode::from_digit_string("2").unwrap();
/// assert_eq!(mode, HubMode::Scheduled);
/// assert_eq!(mode.value(), 2);
///
/// assert!(HubMode::from_digit_string("3").is_err());
/// assert!(HubMode::from_digit_string("-1").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HubMode {
    /// Hub is always off.
    StayOff,
    /// Hub is always on.
    StayOn,
    /// Hub follows the schedule stored on the device.
    Scheduled,
}

impl HubMode {
    /// Parses the decimal-digit wire form of a hub mode.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidValue` if `s` is not made of digits only
    /// or names no mode.
    pub fn from_digit_string(s: &str) -> Result<Self, ValueError> {
        parse_digits(s)
            .and_then(|v| u8::try_from(v).ok())
            .and_then(|v| Self::try_from(v).ok())
            .ok_or_else(|| ValueError::invalid("HubMode", s))
    }

    /// Returns the integer discriminant sent to the hub.
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self {
            Self::StayOff => 0,
            Self::StayOn => 1,
            Self::Scheduled => 2,
        }
    }
}

impl TryFrom<u8> for HubMode {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::StayOff),
            1 => Ok(Self::StayOn),
            2 => Ok(Self::Scheduled),
            _ => Err(ValueError::invalid("HubMode", value)),
        }
    }
}

impl FromStr for HubMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_digit_string(s)
    }
}

impl fmt::Display for HubMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::StayOff => "stay off",
            Self::StayOn => "stay on",
            Self::Scheduled => "scheduled",
        };
        f.write_str(name)
    }
}

/// Condition of the hub, as reported in its free-text status message.
///
/// # Examples
///
/// ```
/// use hackerpet::types::HubStatus;
///
/// let status = HubStatus::from_message("Out of food, please refill.").unwrap();
/// assert_eq!(status, HubStatus::Empty);
///
/// assert!(HubStatus::from_message("everything is great").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HubStatus {
    /// Food is in the hub and the player can play.
    Playing,
    /// No food in the hub.
    Empty,
    /// The platter is jammed.
    PlatterJammed,
    /// The pod (singulator) is jammed.
    PodJammed,
    /// The dome has been removed.
    DomeRemoved,
}

impl HubStatus {
    /// Message fragments, checked in order.
    const MESSAGES: [(&'static str, Self); 5] = [
        ("Your hub is working", Self::Playing),
        ("Out of food", Self::Empty),
        ("Platter is jammed", Self::PlatterJammed),
        ("Singulator is jammed", Self::PodJammed),
        ("Dome is removed", Self::DomeRemoved),
    ];

    /// Maps a status message to a status. The first known fragment found in
    /// `message` wins.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidValue` if no known fragment occurs in
    /// `message`.
    pub fn from_message(message: &str) -> Result<Self, ValueError> {
        Self::MESSAGES
            .iter()
            .find(|(fragment, _)| message.contains(fragment))
            .map(|(_, status)| *status)
            .ok_or_else(|| ValueError::invalid("HubStatus", message))
    }

    /// Returns whether the hub needs attention before it can serve food.
    #[must_use]
    pub const fn is_fault(&self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for HubStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Playing => "playing",
            Self::Empty => "out of food",
            Self::PlatterJammed => "platter jammed",
            Self::PodJammed => "pod jammed",
            Self::DomeRemoved => "dome removed",
        };
        f.write_str(text)
    }
}

/// Whether the hub is dispensing, as determined by its [`HubMode`].
///
/// # Examples
///
/// ```
/// use hackerpet::types::HubState;
///
/// assert_eq!(HubState::from_exact_string("Active").unwrap(), HubState::Active);
/// assert!(HubState::from_exact_string("active").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HubState {
    /// The hub is not dispensing food.
    Standby,
    /// The hub dispenses food if any is present.
    Active,
}

impl HubState {
    /// Parses the exact wire form, `"Standby"` or `"Active"`.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidValue` for any other string.
    pub fn from_exact_string(s: &str) -> Result<Self, ValueError> {
        match s {
            "Standby" => Ok(Self::Standby),
            "Active" => Ok(Self::Active),
            _ => Err(ValueError::invalid("HubState", s)),
        }
    }

    /// Returns the wire form of this state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standby => "Standby",
            Self::Active => "Active",
        }
    }
}

impl FromStr for HubState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_exact_string(s)
    }
}

impl fmt::Display for HubState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
