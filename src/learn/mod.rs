// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Infrared learning.
//!
//! A [`LearnSession`] arms capture on a slot, polls the device once per
//! second until a code starting with `FE` comes back, and always disarms the
//! slot exactly once before finishing:
//!
//! ```text
//! Idle -> Armed -> Polling -> Captured | TimedOut | Stopped
//!            \-> Failed (arming faulted, nothing to disarm)
//! ```
//!
//! The session never touches the controller state. Use
//! [`Controller::learn_command`](crate::controller::Controller::learn_command)
//! to run one with the single-session guard and user notices.

mod session;

pub use session::{DEFAULT_LEARN_TIMEOUT, LearnOutcome, LearnSession, LearnState, POLL_CADENCE};
