// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Guarded infrared learning.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::error::Error;
use crate::event::Notice;
use crate::learn::{LearnOutcome, LearnSession};
use crate::protocol::DeviceClient;
use crate::types::LearnSlot;

use super::Controller;

impl<C: DeviceClient> Controller<C> {
    /// Learns an infrared code on `slot`, waiting at most `timeout`.
    ///
    /// A captured code is published as a notice, and so is a timeout. A
    /// fault while arming marks the device unavailable.
    ///
    /// # Errors
    ///
    /// Returns `Error::SessionBusy` if a session is already running on this
    /// controller.
    pub async fn learn_command(
        &self,
        slot: LearnSlot,
        timeout: Duration,
    ) -> Result<LearnOutcome, Error> {
        let Some(_active) = ActiveSession::claim(&self.learning) else {
            tracing::warn!(device = %self.id, %slot, "Learning session already active");
            return Err(Error::SessionBusy);
        };

        self.learn_stop.send_replace(false);
        let mut stop = self.learn_stop.subscribe();

        let mut session = LearnSession::new(slot, timeout);
        let outcome = session.run(self.client.as_ref(), &mut stop).await;

        match &outcome {
            LearnOutcome::Captured(code) => self.notify(Notice::CommandLearned(code.clone())),
            LearnOutcome::TimedOut => self.notify(Notice::NoCommandCaptured),
            LearnOutcome::Failed(e) => self.mark_unavailable(&Error::Protocol(e.clone())),
            LearnOutcome::Stopped => {}
        }
        Ok(outcome)
    }

    /// Asks the running learning session to stop.
    ///
    /// Returns `false` if no session is running.
    pub fn stop_learning(&self) -> bool {
        if !self.is_learning() {
            return false;
        }
        tracing::debug!(device = %self.id, "Stopping learning session");
        self.learn_stop.send_replace(true);
        true
    }

    /// Returns `true` while a learning session runs.
    #[must_use]
    pub fn is_learning(&self) -> bool {
        self.learning.load(Ordering::Acquire)
    }
}

/// Marks a session as running until dropped.
struct ActiveSession<'a>(&'a AtomicBool);

impl<'a> ActiveSession<'a> {
    fn claim(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for ActiveSession<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
