// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hub configuration commands: mode, schedule, clock.

use crate::command::{Command, single_field};
use crate::error::{ValueError, check_range};
use crate::types::{HubMode, Schedule};

/// Command to change the hub mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HubModeCommand(HubMode);

impl HubModeCommand {
    /// Creates a command switching to `mode`.
    #[must_use]
    pub const fn new(mode: HubMode) -> Self {
        Self(mode)
    }
}

impl Command for HubModeCommand {
    fn name(&self) -> &'static str {
        "hub_mode"
    }

    fn payload(&self) -> String {
        single_field("hub_mode", self.0.value())
    }
}

/// Command to store the weekday/weekend schedule.
///
/// The schedule is only followed while the hub is in
/// [`HubMode::Scheduled`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleCommand(Schedule);

impl ScheduleCommand {
    /// Creates a command storing `schedule`.
    #[must_use]
    pub const fn new(schedule: Schedule) -> Self {
        Self(schedule)
    }
}

impl Command for ScheduleCommand {
    fn name(&self) -> &'static str {
        "schedule"
    }

    fn payload(&self) -> String {
        self.0.to_wire_payload()
    }
}

/// Command to enable or disable daylight saving time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DstCommand(bool);

impl DstCommand {
    /// Creates a command turning DST on or off.
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self(enabled)
    }
}

impl From<bool> for DstCommand {
    fn from(enabled: bool) -> Self {
        Self(enabled)
    }
}

impl Command for DstCommand {
    fn name(&self) -> &'static str {
        "dst"
    }

    fn payload(&self) -> String {
        single_field("dst_on", u8::from(self.0))
    }
}

/// Command to set the timezone offset, in whole hours from UTC.
///
/// # Examples
///
/// ```
/// use hackerpet::command::{Command, TimezoneCommand};
///
/// let cmd = TimezoneCommand::new(-5).unwrap();
/// assert_eq!(cmd.payload(), r#"{"timezone_offset":-5}"#);
///
/// assert!(TimezoneCommand::new(14).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneCommand(i32);

impl TimezoneCommand {
    /// Lowest offset accepted by the hub.
    pub const MIN_OFFSET: i32 = -12;
    /// Highest offset accepted by the hub.
    pub const MAX_OFFSET: i32 = 13;

    /// Creates a command setting the offset to `offset` hours.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `offset` is outside [-12, 13].
    pub fn new(offset: i32) -> Result<Self, ValueError> {
        check_range(
            "timezone_offset",
            i64::from(Self::MIN_OFFSET),
            i64::from(Self::MAX_OFFSET),
            i64::from(offset),
        )?;
        Ok(Self(offset))
    }

    /// Returns the offset in hours.
    #[must_use]
    pub const fn offset(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for TimezoneCommand {
    type Error = ValueError;

    fn try_from(offset: i32) -> Result<Self, Self::Error> {
        Self::new(offset)
    }
}

impl Command for TimezoneCommand {
    fn name(&self) -> &'static str {
        "timezone"
    }

    fn payload(&self) -> String {
        single_field("timezone_offset", self.0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;

    #[test]
    fn hub_mode_command() {
        let cmd = HubModeCommand::new(HubMode::Scheduled);
        assert_eq!(cmd.path(), "/local-api/set_hub_mode");
        assert_eq!(cmd.payload(), r#"{"hub_mode":2}"#);
    }

    #[test]
    fn schedule_command() {
        let hm = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        let schedule = Schedule::new(hm(8, 0), hm(17, 30), hm(10, 0), hm(15, 0));
        let cmd = ScheduleCommand::new(schedule);
        assert_eq!(cmd.path(), "/local-api/set_schedule");
        assert_eq!(cmd.payload(), schedule.to_wire_payload());
    }

    #[test]
    fn dst_command() {
        assert_eq!(DstCommand::new(true).path(), "/local-api/set_dst");
        assert_eq!(DstCommand::new(true).payload(), r#"{"dst_on":1}"#);
        assert_eq!(DstCommand::from(false).payload(), r#"{"dst_on":0}"#);
    }

    #[test]
    fn timezone_bounds_are_inclusive() {
        assert_eq!(TimezoneCommand::new(-12).unwrap().offset(), -12);
        assert_eq!(TimezoneCommand::new(13).unwrap().offset(), 13);
        assert!(TimezoneCommand::new(-13).is_err());
        assert!(matches!(
            TimezoneCommand::try_from(14),
            Err(ValueError::OutOfRange { found: 14, .. })
        ));
    }

    #[test]
    fn timezone_command() {
        let cmd = TimezoneCommand::new(-5).unwrap();
        assert_eq!(cmd.path(), "/local-api/set_timezone");
        assert_eq!(cmd.payload(), r#"{"timezone_offset":-5}"#);
    }
}
