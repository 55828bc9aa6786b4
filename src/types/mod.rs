// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for hackerpet hub status and settings.
//!
//! The hub reports every field as a string, including the ones that are
//! logically integers. Each type here validates its wire form at
//! construction time and rejects anything it does not recognize.
//!
//! # Types
//!
//! - [`HubMode`] - Rule deciding when the hub is enabled (off, on, scheduled)
//! - [`HubStatus`] - Condition reported in the hub's status message
//! - [`Game`] - Game level (0-11)
//! - [`GameTransitioning`] / [`GameState`] - Current game, or a pending switch
//! - [`HubState`] - Whether the hub is currently dispensing
//! - [`MaxKibbles`] - Daily dispense limit
//! - [`Schedule`] - Weekday/weekend activity windows

mod game;
mod hub;
mod kibbles;
mod schedule;

pub use game::{Game, GameState, GameTransitioning};
pub use hub::{HubMode, HubState, HubStatus};
pub use kibbles::MaxKibbles;
pub use schedule::Schedule;

/// Parses a string made only of ASCII decimal digits.
///
/// Signs, decimal points, whitespace and the empty string are rejected
/// up front instead of being left to `str::parse`.
pub(crate) fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Renders a JSON wire value for error messages, without quotes for strings.
pub(crate) fn wire_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
