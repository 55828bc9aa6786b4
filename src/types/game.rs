// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Game levels and the transition between two of them.
//!
//! The hub reports both the game being played and the game queued to play
//! next. Once a new level is selected it stays queued until the current
//! round finishes; [`GameState`] captures either situation.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValueError;
use crate::types::parse_digits;

/// Game level played on the hub.
///
/// | Value | Description |
/// |-------|-------------|
/// | 0 | Eating the food |
/// | 1 | Exploring the Touchpads |
/// | 2 | Engaging Consistently |
/// | 3 | Avoiding Unlit Touchpads |
/// | 4 | Learning the Lights |
/// | 5 | Mastering the Lights |
/// | 6 | Responding Quickly |
/// | 7 | Learning Brightness |
/// | 8 | Learning Double Sequences |
/// | 9 | Learning Longer Sequences |
/// | 10 | Matching Two Colors |
/// | 11 | Matching More Colors |
///
/// # Examples
///
/// ```
/// use hackerpet::types::Game;
///
/// let game = Game::from_digit_string("9").unwrap();
/// assert_eq!(game, Game::Game9);
/// assert_eq!(game.to_string(), "Learning Longer Sequences");
///
/// assert!(Game::from_digit_string("12").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Game {
    /// Eating the food.
    Game0,
    /// Exploring the Touchpads.
    Game1,
    /// Engaging Consistently.
    Game2,
    /// Avoiding Unlit Touchpads.
    Game3,
    /// Learning the Lights.
    Game4,
    /// Mastering the Lights.
    Game5,
    /// Responding Quickly.
    Game6,
    /// Learning Brightness.
    Game7,
    /// Learning Double Sequences.
    Game8,
    /// Learning Longer Sequences.
    Game9,
    /// Matching Two Colors.
    Game10,
    /// Matching More Colors.
    Game11,
}

impl Game {
    /// All game levels, in order.
    pub const ALL: [Self; 12] = [
        Self::Game0,
        Self::Game1,
        Self::Game2,
        Self::Game3,
        Self::Game4,
        Self::Game5,
        Self::Game6,
        Self::Game7,
        Self::Game8,
        Self::Game9,
        Self::Game10,
        Self::Game11,
    ];

    /// Parses the decimal-digit wire form of a game level.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidValue` if `s` is not made of digits only
    /// or is outside 0-11.
    pub fn from_digit_string(s: &str) -> Result<Self, ValueError> {
        parse_digits(s)
            .and_then(|v| usize::try_from(v).ok())
            .and_then(|v| Self::ALL.get(v).copied())
            .ok_or_else(|| ValueError::invalid("Game", s))
    }

    /// Returns the level number sent to the hub.
    #[must_use]
    pub const fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the human-readable name of the level.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Game0 => "Eating the food",
            Self::Game1 => "Exploring the Touchpads",
            Self::Game2 => "Engaging Consistently",
            Self::Game3 => "Avoiding Unlit Touchpads",
            Self::Game4 => "Learning the Lights",
            Self::Game5 => "Mastering the Lights",
            Self::Game6 => "Responding Quickly",
            Self::Game7 => "Learning Brightness",
            Self::Game8 => "Learning Double Sequences",
            Self::Game9 => "Learning Longer Sequences",
            Self::Game10 => "Matching Two Colors",
            Self::Game11 => "Matching More Colors",
        }
    }
}

impl TryFrom<u8> for Game {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| ValueError::invalid("Game", value))
    }
}

impl FromStr for Game {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_digit_string(s)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A pending switch from one game level to another.
///
/// Only exists while the two games differ.
///
/// # Examples
///
/// ```
/// use hackerpet::types::{Game, GameTransitioning};
///
/// let switch = GameTransitioning::new(Game::Game9, Game::Game10).unwrap();
/// assert_eq!(switch.value(), 10);
///
/// assert!(GameTransitioning::new(Game::Game9, Game::Game9).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameTransitioning {
    prev: Game,
    next: Game,
}

impl GameTransitioning {
    /// Creates a transition, or `None` if `prev` and `next` are the same.
    #[must_use]
    pub fn new(prev: Game, next: Game) -> Option<Self> {
        (prev != next).then_some(Self { prev, next })
    }

    /// The game still being played.
    #[must_use]
    pub const fn prev(&self) -> Game {
        self.prev
    }

    /// The game queued to be played next.
    #[must_use]
    pub const fn next(&self) -> Game {
        self.next
    }

    /// The level number of the queued game.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.next.value()
    }
}

impl fmt::Display for GameTransitioning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "game transitioning: {} -> {}", self.prev, self.next)
    }
}

/// The game field of a hub status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GameState {
    /// A single game is being played.
    Playing(Game),
    /// A different game is queued behind the one being played.
    Transitioning(GameTransitioning),
}

impl GameState {
    /// Builds the state from the playing and queued games.
    #[must_use]
    pub fn from_games(playing: Game, queued: Game) -> Self {
        GameTransitioning::new(playing, queued).map_or(Self::Playing(playing), Self::Transitioning)
    }

    /// Returns the game that is, or is about to be, played.
    #[must_use]
    pub const fn current(&self) -> Game {
        match self {
            Self::Playing(game) => *game,
            Self::Transitioning(t) => t.next(),
        }
    }

    /// Returns the level number of [`current`](Self::current).
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.current().value()
    }

    /// Returns whether a switch is pending.
    #[must_use]
    pub const fn is_transitioning(&self) -> bool {
        matches!(self, Self::Transitioning(_))
    }
}

impl From<Game> for GameState {
    fn from(game: Game) -> Self {
        Self::Playing(game)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing(game) => game.fmt(f),
            Self::Transitioning(t) => t.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_every_level_parses() {
        for n in 0u8..=11 {
            let game = Game::from_digit_string(&n.to_string()).unwrap();
            assert_eq!(game.value(), n);
            assert_eq!(Game::try_from(n).unwrap(), game);
        }
    }

    #[test]
    fn game_invalid_values() {
        for s in ["12", "-1", "abc", "", "9.0", " 9", "4294967296"] {
            assert_eq!(
                Game::from_digit_string(s).unwrap_err(),
                ValueError::invalid("Game", s)
            );
        }
        assert!(Game::try_from(12).is_err());
    }

    #[test]
    fn game_descriptions() {
        assert_eq!(Game::Game0.to_string(), "Eating the food");
        assert_eq!(Game::Game4.description(), "Learning the Lights");
        assert_eq!(Game::Game11.to_string(), "Matching More Colors");
    }

    #[test]
    fn transitioning_requires_different_games() {
        assert!(GameTransitioning::new(Game::Game3, Game::Game3).is_none());

        let t = GameTransitioning::new(Game::Game9, Game::Game10).unwrap();
        assert_eq!(t.prev(), Game::Game9);
        assert_eq!(t.next(), Game::Game10);
        assert_eq!(t.value(), 10);
        assert_eq!(
            t.to_string(),
            "game transitioning: Learning Longer Sequences -> Matching Two Colors"
        );
    }

    #[test]
    fn game_state_from_games() {
        let same = GameState::from_games(Game::Game9, Game::Game9);
        assert_eq!(same, GameState::Playing(Game::Game9));
        assert!(!same.is_transitioning());

        let switching = GameState::from_games(Game::Game9, Game::Game10);
        assert!(switching.is_transitioning());
        assert_eq!(switching.current(), Game::Game10);
        assert_eq!(switching.value(), 10);
    }
}
