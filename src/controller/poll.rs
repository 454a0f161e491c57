// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status polling.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::error::Error;
use crate::event::ClimateEvent;
use crate::protocol::DeviceClient;
use crate::state::DeviceSnapshot;
use crate::telemetry::StatusReport;

use super::Controller;

impl<C: DeviceClient> Controller<C> {
    /// Polls the device once and merges the result.
    ///
    /// A fault or an undecodable status marks the device unavailable and
    /// keeps the previous snapshot. Nothing is retried before the next poll.
    ///
    /// Returns `true` if the poll succeeded.
    pub async fn update(&self) -> bool {
        let merged = match self.client.status().await {
            Ok(status) => {
                tracing::debug!(device = %self.id, status = ?status, "Got new state");
                StatusReport::parse(&status).and_then(|report| {
                    let mut state = self.state.lock();
                    let snapshot = DeviceSnapshot::merge(state.last_snapshot(), report)?;
                    Ok(state.apply_snapshot(snapshot))
                })
            }
            Err(e) => Err(Error::Protocol(e)),
        };

        match merged {
            Ok(recovered) => {
                if recovered {
                    tracing::info!(device = %self.id, "Device available");
                    self.events.publish(ClimateEvent::available(self.id));
                }
                self.publish_state(None);
                true
            }
            Err(e) => {
                tracing::error!(device = %self.id, error = %e, "Got exception while fetching the state");
                self.mark_unavailable(&e);
                false
            }
        }
    }

    /// Spawns the periodic poll, first tick immediately.
    ///
    /// The task ends once the controller is dropped everywhere else, or when
    /// the returned handle is aborted.
    pub fn spawn_poll_loop(self: &Arc<Self>) -> JoinHandle<()>
    where
        C: 'static,
    {
        let controller = Arc::downgrade(self);
        let period = self.poll_interval;

        tokio::spawn(async move {
            let mut ticker = time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let Some(controller) = controller.upgrade() else {
                    break;
                };
                controller.update().await;
            }
        })
    }
}
