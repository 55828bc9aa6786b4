// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! hackerpet settings commands.
//!
//! Each command maps to one `POST /local-api/set_<name>` endpoint with a
//! small JSON body. The hub answers every command with an empty 200.
//!
//! # Available Commands
//!
//! | Command Type | Endpoint | Body |
//! |-------------|----------|------|
//! | [`GameCommand`] | `set_game` | `{"game":9}` |
//! | [`MaxKibblesCommand`] | `set_max_kibbles` | `{"max_kibbles":40}` |
//! | [`DstCommand`] | `set_dst` | `{"dst_on":1}` |
//! | [`TimezoneCommand`] | `set_timezone` | `{"timezone_offset":-5}` |
//! | [`HubModeCommand`] | `set_hub_mode` | `{"hub_mode":2}` |
//! | [`ScheduleCommand`] | `set_schedule` | [`Schedule::to_wire_payload`](crate::types::Schedule::to_wire_payload) |
//!
//! # Examples
//!
//! ```
//! use hackerpet::command::{Command, GameCommand};
//! use hackerpet::types::Game;
//!
//! let cmd = GameCommand::new(Game::Game4);
//! assert_eq!(cmd.path(), "/local-api/set_game");
//! assert_eq!(cmd.payload(), r#"{"game":4}"#);
//! ```

mod game;
mod hub;

pub use game::{GameCommand, MaxKibblesCommand};
pub use hub::{DstCommand, HubModeCommand, ScheduleCommand, TimezoneCommand};

/// Path of the hub's local API; `GET` on it returns the status.
pub const API_PATH: &str = "/local-api";

/// A settings command that can be sent to a hub.
pub trait Command {
    /// Returns the setting name, e.g. `"game"` for `set_game`.
    fn name(&self) -> &'static str;

    /// Returns the exact JSON body sent with the command.
    fn payload(&self) -> String;

    /// Returns the endpoint path, `/local-api/set_<name>`.
    fn path(&self) -> String {
        format!("{API_PATH}/set_{}", self.name())
    }
}

/// Builds a compact `{"<key>":<value>}` body.
fn single_field(key: &str, value: impl Into<serde_json::Value>) -> String {
    let mut body = serde_json::Map::new();
    body.insert(key.to_string(), value.into());
    serde_json::Value::Object(body).to_string()
}
