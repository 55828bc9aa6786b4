// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Game and feeding commands.

use crate::command::{Command, single_field};
use crate::types::{Game, MaxKibbles};

/// Command to select the game level.
///
/// The new level is queued and starts after the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameCommand(Game);

impl GameCommand {
    /// Creates a command selecting `game`.
    #[must_use]
    pub const fn new(game: Game) -> Self {
        Self(game)
    }

    /// Returns the selected game.
    #[must_use]
    pub const fn game(&self) -> Game {
        self.0
    }
}

impl Command for GameCommand {
    fn name(&self) -> &'static str {
        "game"
    }

    fn payload(&self) -> String {
        single_field("game", self.0.value())
    }
}

/// Command to set the daily kibble limit.
///
/// # Examples
///
/// ```
/// use hackerpet::command::{Command, MaxKibblesCommand};
/// use hackerpet::types::MaxKibbles;
///
/// let cmd = MaxKibblesCommand::new(MaxKibbles::UNLIMITED);
/// assert_eq!(cmd.payload(), r#"{"max_kibbles":0}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxKibblesCommand(MaxKibbles);

impl MaxKibblesCommand {
    /// Creates a command applying `limit`.
    #[must_use]
    pub const fn new(limit: MaxKibbles) -> Self {
        Self(limit)
    }
}

impl Command for MaxKibblesCommand {
    fn name(&self) -> &'static str {
        "max_kibbles"
    }

    fn payload(&self) -> String {
        single_field("max_kibbles", self.0.value())
    }
}
