// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Learning session state machine.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{self, Instant};

use crate::error::ProtocolError;
use crate::protocol::DeviceClient;
use crate::types::{INFRARED_PREFIX, LearnSlot};

/// Delay between two capture polls.
pub const POLL_CADENCE: Duration = Duration::from_secs(1);

/// Time allowed to press a remote key when none is given.
pub const DEFAULT_LEARN_TIMEOUT: Duration = Duration::from_secs(10);

/// Deadline used when a timeout does not fit in an [`Instant`].
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Where a session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LearnState {
    /// Not started.
    Idle,
    /// Capture requested from the device.
    Armed,
    /// Waiting for a capture.
    Polling,
    /// A code was captured.
    Captured,
    /// No code arrived in time.
    TimedOut,
    /// Stopped on request.
    Stopped,
    /// Arming the device faulted.
    Failed,
}

impl LearnState {
    /// Returns `true` for the states a session ends in.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Captured | Self::TimedOut | Self::Stopped | Self::Failed
        )
    }
}

/// Result of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LearnOutcome {
    /// The captured infrared code.
    Captured(String),
    /// The timeout elapsed without a capture.
    TimedOut,
    /// The session was stopped before a capture.
    Stopped,
    /// Capture could not be armed.
    Failed(ProtocolError),
}

impl LearnOutcome {
    /// Returns the terminal state matching this outcome.
    #[must_use]
    pub fn state(&self) -> LearnState {
        match self {
            Self::Captured(_) => LearnState::Captured,
            Self::TimedOut => LearnState::TimedOut,
            Self::Stopped => LearnState::Stopped,
            Self::Failed(_) => LearnState::Failed,
        }
    }
}

/// One bounded infrared capture on a slot.
///
/// The timeout covers the polling phase and starts once the device has
/// been armed. It is a hard cancellation: a poll still in flight when it
/// elapses is dropped and its result ignored.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use ac_companion::learn::{LearnSession, LearnState};
/// use ac_companion::types::LearnSlot;
///
/// let session = LearnSession::new(LearnSlot::new(42).unwrap(), Duration::from_secs(5));
/// assert_eq!(session.state(), LearnState::Idle);
/// assert_eq!(session.slot().value(), 42);
/// ```
#[derive(Debug)]
pub struct LearnSession {
    slot: LearnSlot,
    timeout: Duration,
    cadence: Duration,
    state: LearnState,
}

impl LearnSession {
    /// Creates an idle session.
    #[must_use]
    pub fn new(slot: LearnSlot, timeout: Duration) -> Self {
        Self {
            slot,
            timeout,
            cadence: POLL_CADENCE,
            state: LearnState::Idle,
        }
    }

    /// Overrides the delay between polls.
    #[must_use]
    pub fn with_cadence(mut self, cadence: Duration) -> Self {
        self.cadence = cadence;
        self
    }

    /// Returns the slot.
    #[must_use]
    pub fn slot(&self) -> LearnSlot {
        self.slot
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> LearnState {
        self.state
    }

    /// Runs the session to completion.
    ///
    /// Setting `stop` to `true` ends the session with
    /// [`LearnOutcome::Stopped`]. Running a finished session starts a fresh
    /// capture on the same slot.
    pub async fn run<C: DeviceClient>(
        &mut self,
        client: &C,
        stop: &mut watch::Receiver<bool>,
    ) -> LearnOutcome {
        self.state = LearnState::Armed;
        if let Err(e) = client.learn_start(self.slot).await {
            tracing::error!(slot = %self.slot, error = %e, "Failed to start learning");
            self.state = LearnState::Failed;
            return LearnOutcome::Failed(e);
        }
        tracing::info!(slot = %self.slot, "Press the key you want to learn");

        self.state = LearnState::Polling;
        let deadline = deadline_after(self.timeout);
        let outcome = self.poll_until_done(client, stop, deadline).await;

        if let Err(e) = client.learn_stop(self.slot).await {
            tracing::warn!(slot = %self.slot, error = %e, "Failed to stop learning");
        }

        match &outcome {
            LearnOutcome::Captured(code) => {
                tracing::info!(slot = %self.slot, code = %code, "Received command");
            }
            LearnOutcome::TimedOut => {
                tracing::error!(slot = %self.slot, "Timeout. No infrared command captured");
            }
            LearnOutcome::Stopped => tracing::debug!(slot = %self.slot, "Learning stopped"),
            LearnOutcome::Failed(_) => {}
        }
        self.state = outcome.state();
        outcome
    }

    async fn poll_until_done<C: DeviceClient>(
        &self,
        client: &C,
        stop: &mut watch::Receiver<bool>,
        deadline: Instant,
    ) -> LearnOutcome {
        loop {
            if Instant::now() >= deadline {
                return LearnOutcome::TimedOut;
            }

            let polled = tokio::select! {
                biased;
                () = stop_requested(stop) => return LearnOutcome::Stopped,
                polled = time::timeout_at(deadline, client.learn_poll(self.slot)) => polled,
            };

            match polled {
                Err(_elapsed) => return LearnOutcome::TimedOut,
                Ok(Ok(response)) => match response.first_str() {
                    Some(code) if code.starts_with(INFRARED_PREFIX) => {
                        return LearnOutcome::Captured(code.to_string());
                    }
                    _ => tracing::debug!(slot = %self.slot, response = %response, "No capture yet"),
                },
                Ok(Err(e)) => {
                    tracing::debug!(slot = %self.slot, error = %e, "Learning poll failed");
                }
            }

            let wake = deadline_after(self.cadence).min(deadline);
            tokio::select! {
                biased;
                () = stop_requested(stop) => return LearnOutcome::Stopped,
                () = time::sleep_until(wake) => {}
            }
        }
    }
}

/// Returns `now + wait`, saturating to a far-future instant.
fn deadline_after(wait: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(wait)
        .or_else(|| now.checked_add(FAR_FUTURE))
        .unwrap_or(now)
}

/// Resolves once `stop` holds `true`; never resolves if the sender is gone.
async fn stop_requested(stop: &mut watch::Receiver<bool>) {
    if stop.wait_for(|stopped| *stopped).await.is_err() {
        std::future::pending::<()>().await;
    }
}
