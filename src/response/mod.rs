// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for hackerpet JSON payloads.
//!
//! The status endpoint is the only one with a body; settings endpoints
//! answer with an empty 200.

mod status;

pub use status::{ParseMode, Status};
