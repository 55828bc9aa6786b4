// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! hackerpet - A Rust client for the hackerpet hub local API.
//!
//! The hub, a pet-feeding game console, serves a small JSON API on the
//! local network. This crate turns its all-string status payload into
//! validated domain types and sends typed settings commands.
//!
//! # Supported Features
//!
//! - **Status**: game level, hub mode, dispensing state, kibble limit,
//!   timezone, schedule and fault reporting
//! - **Settings**: game, kibble limit, daylight saving time, timezone,
//!   hub mode, schedule
//!
//! # Quick Start
//!
//! ```no_run
//! use hackerpet::{Hub, HubMode, MaxKibbles};
//!
//! #[tokio::main]
//! async fn main() -> hackerpet::Result<()> {
//!     let hub = Hub::http("cleverpet.local").build()?;
//!
//!     let status = hub.status().await?;
//!     println!("{} ({})", status.game(), status.max_kibbles());
//!
//!     hub.set_max_kibbles(MaxKibbles::new(Some(40))).await?;
//!     hub.set_hub_mode(HubMode::StayOn).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Parsing Without a Hub
//!
//! ```
//! use hackerpet::{Status, HubState};
//!
//! let status = Status::from_json(r#"{
//!     "time": "Sat Jul 30 15:23:41 2022", "timezone": "1.000000",
//!     "hub_mode": "0", "hub_state": "Standby", "max_kibbles": "25",
//!     "game_id_playing": "3", "game_id_queued": "4"
//! }"#)?;
//!
//! assert_eq!(status.hub_state(), HubState::Standby);
//! assert!(status.game().is_transitioning());
//! # Ok::<(), hackerpet::Error>(())
//! ```

pub mod command;
mod device;
pub mod error;
pub mod protocol;
pub mod response;
pub mod types;

pub use command::{
    Command, DstCommand, GameCommand, HubModeCommand, MaxKibblesCommand, ScheduleCommand,
    TimezoneCommand,
};
pub use device::Hub;
#[cfg(feature = "http")]
pub use device::HttpHubBuilder;
pub use error::{Error, ParseError, ProtocolError, Result, ValueError, check_range};
#[cfg(feature = "http")]
pub use protocol::{HttpClient, HttpConfig};
pub use protocol::{Response, RetryPolicy, Transport};
pub use response::{ParseMode, Status};
pub use types::{
    Game, GameState, GameTransitioning, HubMode, HubState, HubStatus, MaxKibbles, Schedule,
};
