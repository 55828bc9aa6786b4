// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level client for a hackerpet hub.
//!
//! [`Hub`] pairs a [`Transport`] with the typed status parser and settings
//! commands. Each method performs exactly one logical request.
//!
//! ```no_run
//! use hackerpet::Hub;
//! use hackerpet::types::Game;
//!
//! # async fn example() -> hackerpet::Result<()> {
//! let hub = Hub::http("cleverpet.local").build()?;
//!
//! let status = hub.status().await?;
//! println!("playing: {}", status.game());
//!
//! hub.set_game(Game::Game5).await?;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "http")]
mod http_builder;

#[cfg(feature = "http")]
pub use http_builder::HttpHubBuilder;

use crate::command::{
    API_PATH, Command, DstCommand, GameCommand, HubModeCommand, MaxKibblesCommand,
    ScheduleCommand, TimezoneCommand,
};
use crate::error::Error;
#[cfg(feature = "http")]
use crate::protocol::HttpConfig;
use crate::protocol::Transport;
use crate::response::{ParseMode, Status};
use crate::types::{Game, HubMode, MaxKibbles, Schedule};

/// A hackerpet hub reachable through a transport `T`.
///
/// # Creating a Hub
///
/// ```no_run
/// use hackerpet::Hub;
/// use hackerpet::protocol::HttpConfig;
///
/// # fn example() -> hackerpet::Result<()> {
/// // Default address, http://cleverpet.local
/// let hub = Hub::http(HttpConfig::DEFAULT_HOST).build()?;
///
/// // Advanced configuration
/// let hub = Hub::http_config(HttpConfig::new("192.168.1.40").with_port(8080)).build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Hub<T: Transport> {
    transport: T,
    parse_mode: ParseMode,
}

#[cfg(feature = "http")]
impl Hub<crate::protocol::HttpClient> {
    /// Starts building an HTTP hub for `host`.
    #[must_use]
    pub fn http(host: impl Into<String>) -> HttpHubBuilder {
        HttpHubBuilder::new(HttpConfig::new(host))
    }

    /// Starts building an HTTP hub from a full configuration.
    #[must_use]
    pub fn http_config(config: HttpConfig) -> HttpHubBuilder {
        HttpHubBuilder::new(config)
    }
}

impl<T: Transport> Hub<T> {
    /// Creates a hub over an existing transport, parsing status strictly.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            parse_mode: ParseMode::Strict,
        }
    }

    /// Sets how descriptive status fields are parsed.
    #[must_use]
    pub fn with_parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = mode;
        self
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches and parses the current status.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the request fails, otherwise any error
    /// from [`Status::from_raw`].
    pub async fn status(&self) -> Result<Status, Error> {
        let response = self.transport.get(API_PATH).await?;
        let payload = response.json()?;
        Status::from_raw_with(&payload, self.parse_mode)
    }

    /// Sends a settings command.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the request fails.
    pub async fn send<C: Command>(&self, command: &C) -> Result<(), Error> {
        let path = command.path();
        let response = self.transport.post(&path, command.payload()).await?;
        if !response.is_empty() {
            tracing::debug!(path = %path, body = %response.body(), "Ignoring unexpected response body");
        }
        Ok(())
    }

    /// Selects the game level. It takes effect after the current round.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the request fails.
    pub async fn set_game(&self, game: Game) -> Result<(), Error> {
        self.send(&GameCommand::new(game)).await
    }

    /// Sets the daily kibble limit.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the request fails.
    pub async fn set_max_kibbles(&self, limit: MaxKibbles) -> Result<(), Error> {
        self.send(&MaxKibblesCommand::new(limit)).await
    }

    /// Enables or disables daylight saving time.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the request fails.
    pub async fn set_dst(&self, enabled: bool) -> Result<(), Error> {
        self.send(&DstCommand::new(enabled)).await
    }

    /// Sets the timezone offset in hours.
    ///
    /// The offset is checked before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `offset` is outside [-12, 13],
    /// or `Error::Protocol` if the request fails.
    pub async fn set_timezone(&self, offset: i32) -> Result<(), Error> {
        let command = TimezoneCommand::new(offset)?;
        self.send(&command).await
    }

    /// Sets the hub mode.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the request fails.
    pub async fn set_hub_mode(&self, mode: HubMode) -> Result<(), Error> {
        self.send(&HubModeCommand::new(mode)).await
    }

    /// Stores the weekday/weekend schedule, followed in
    /// [`HubMode::Scheduled`].
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the request fails.
    pub async fn set_schedule(&self, schedule: &Schedule) -> Result<(), Error> {
        self.send(&ScheduleCommand::new(*schedule)).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use parking_lot::Mutex;

    use super::*;
    use crate::error::{ParseError, ProtocolError, ValueError};
    use crate::protocol::Response;
    use crate::types::{GameState, HubStatus};

    /// In-memory transport recording every request.
    #[derive(Default)]
    struct MockTransport {
        requests: Mutex<Vec<(String, Option<String>)>>,
        replies: Mutex<VecDeque<Result<Response, ProtocolError>>>,
    }

    impl MockTransport {
        fn replying(body: &str) -> Self {
            let mock = Self::default();
            mock.replies
                .lock()
                .push_back(Ok(Response::new(body.to_string())));
            mock
        }

        fn failing(err: ProtocolError) -> Self {
            let mock = Self::default();
            mock.replies.lock().push_back(Err(err));
            mock
        }

        fn requests(&self) -> Vec<(String, Option<String>)> {
            self.requests.lock().clone()
        }

        fn next_reply(&self) -> Result<Response, ProtocolError> {
            self.replies.lock().pop_front().unwrap_or(Ok(Response::default()))
        }
    }

    impl Transport for MockTransport {
        async fn get(&self, path: &str) -> Result<Response, ProtocolError> {
            self.requests.lock().push((path.to_string(), None));
            self.next_reply()
        }

        async fn post(&self, path: &str, body: String) -> Result<Response, ProtocolError> {
            self.requests.lock().push((path.to_string(), Some(body)));
            self.next_reply()
        }
    }

    const STATUS_BODY: &str = r#"{"timezone":"-5.000000","dst_on":"1","hub_mode":"1",
        "weekend_from":"09:00","weekend_to":"16:00","weekday_from":"09:00","weekday_to":"16:00",
        "status":"Robot says hi","game_id_queued":"9","game_id_playing":"9",
        "hub_state":"Active","time":"Sat Jul 30 15:23:41 2022","max_kibbles":"0",
        "kibbles_eaten_today":"0"}"#;

    #[tokio::test]
    async fn status_gets_local_api() {
        let hub = Hub::new(MockTransport::replying(STATUS_BODY)).with_parse_mode(ParseMode::Lenient);
        let status = hub.status().await.unwrap();

        assert_eq!(status.game(), GameState::Playing(Game::Game9));
        assert_eq!(hub.transport().requests(), vec![("/local-api".to_string(), None)]);
    }

    #[tokio::test]
    async fn status_is_strict_by_default() {
        let hub = Hub::new(MockTransport::replying(STATUS_BODY));
        let err = hub.status().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Value(ValueError::InvalidValue {
                type_name: "HubStatus",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn status_lenient_drops_unknown_message() {
        let hub = Hub::new(MockTransport::replying(STATUS_BODY)).with_parse_mode(ParseMode::Lenient);
        let status = hub.status().await.unwrap();
        assert_eq!(status.hub_status(), None::<HubStatus>);
        assert_eq!(status.dst_on(), Some(true));
    }

    #[tokio::test]
    async fn status_non_json_body() {
        let hub = Hub::new(MockTransport::replying("<html></html>"));
        let err = hub.status().await.unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::Json(_))));
    }

    #[tokio::test]
    async fn transport_failure_is_propagated() {
        let hub = Hub::new(MockTransport::failing(ProtocolError::Transport(
            "unreachable".to_string(),
        )));
        let err = hub.status().await.unwrap_err();
        assert!(matches!(err, Error::Protocol(ProtocolError::Transport(_))));
    }

    #[tokio::test]
    async fn setters_post_expected_bodies() {
        let hub = Hub::new(MockTransport::default());
        hub.set_game(Game::Game10).await.unwrap();
        hub.set_max_kibbles(MaxKibbles::new(Some(20))).await.unwrap();
        hub.set_dst(false).await.unwrap();
        hub.set_timezone(-8).await.unwrap();
        hub.set_hub_mode(HubMode::StayOff).await.unwrap();

        let posted: Vec<(String, Option<String>)> = [
            ("/local-api/set_game", r#"{"game":10}"#),
            ("/local-api/set_max_kibbles", r#"{"max_kibbles":20}"#),
            ("/local-api/set_dst", r#"{"dst_on":0}"#),
            ("/local-api/set_timezone", r#"{"timezone_offset":-8}"#),
            ("/local-api/set_hub_mode", r#"{"hub_mode":0}"#),
        ]
        .into_iter()
        .map(|(path, body)| (path.to_string(), Some(body.to_string())))
        .collect();
        assert_eq!(hub.transport().requests(), posted);
    }

    #[tokio::test]
    async fn set_schedule_posts_wire_payload() {
        let hm = |h, m| chrono::NaiveTime::from_hms_opt(h, m, 0).unwrap();
        let schedule = Schedule::new(hm(7, 0), hm(19, 0), hm(8, 30), hm(20, 0));

        let hub = Hub::new(MockTransport::default());
        hub.set_schedule(&schedule).await.unwrap();

        assert_eq!(
            hub.transport().requests(),
            vec![(
                "/local-api/set_schedule".to_string(),
                Some(schedule.to_wire_payload())
            )]
        );
    }

    #[tokio::test]
    async fn set_timezone_out_of_range_sends_nothing() {
        let hub = Hub::new(MockTransport::default());
        let err = hub.set_timezone(14).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Value(ValueError::OutOfRange { found: 14, .. })
        ));
        assert!(hub.transport().requests().is_empty());
    }
}
