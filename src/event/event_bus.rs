// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Broadcast channel for climate events.

use tokio::sync::broadcast;

use super::{ClimateEvent, DeviceId, Notice};

const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Fans climate events out to any number of subscribers.
///
/// Cloning the bus shares the underlying channel, so a registry and all of
/// its controllers can publish on the same bus. A subscriber that falls
/// more than the capacity behind loses the oldest events and sees
/// `RecvError::Lagged`.
///
/// Notices published while nobody listens are written to the log instead,
/// so a learned code is never lost silently.
///
/// # Examples
///
/// ```
/// use ac_companion::event::{ClimateEvent, DeviceId, EventBus, Notice};
///
/// let bus = EventBus::new();
/// let mut rx = bus.subscribe();
///
/// let id = DeviceId::new();
/// bus.notify(id, Notice::NoCommandCaptured);
///
/// let event = rx.try_recv().unwrap();
/// assert_eq!(event.device_id(), id);
/// assert_eq!(event.notice(), Some(&Notice::NoCommandCaptured));
/// ```
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ClimateEvent>,
}

impl EventBus {
    /// Creates a bus with room for 256 pending events per subscriber.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Creates a bus buffering at most `capacity` events per subscriber.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribes to events published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ClimateEvent> {
        self.sender.subscribe()
    }

    /// Publishes an event.
    pub fn publish(&self, event: ClimateEvent) {
        if let Err(broadcast::error::SendError(event)) = self.sender.send(event) {
            if let ClimateEvent::Notice { device_id, notice } = &event {
                tracing::info!(
                    device = %device_id,
                    title = notice.title(),
                    message = %notice.message(),
                    "Notice without subscriber"
                );
            } else {
                tracing::trace!(device = %event.device_id(), "Event dropped, no subscriber");
            }
        }
    }

    /// Publishes a user-visible notice for `device_id`.
    pub fn notify(&self, device_id: DeviceId, notice: Notice) {
        self.publish(ClimateEvent::Notice { device_id, notice });
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
