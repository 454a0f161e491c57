// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Climate controller for one companion binding.
//!
//! A [`Controller`] owns the [`ControllerState`] of one device and is the
//! only writer to it. User intents, status polls and sensor readings all go
//! through it:
//!
//! - setters edit the state, compose a configuration and send it
//! - [`update`](Controller::update) polls the device and merges the result
//! - sensor events update the current temperature without any device call
//! - [`learn_command`](Controller::learn_command) runs a guarded learning
//!   session
//!
//! The state lock is never held while a device call is in flight. Results
//! are applied once the call completes, so the last completed call wins.
//!
//! # Examples
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use ac_companion::controller::Controller;
//! use ac_companion::manager::CompanionConfig;
//! use ac_companion::types::HvacMode;
//!
//! let config = CompanionConfig::new(host, token, "sensor.living_room");
//! let controller = Arc::new(Controller::connect(client, &config).await?);
//! let _poller = controller.spawn_poll_loop();
//!
//! controller.update().await;
//! controller.set_hvac_mode(HvacMode::Cool).await?;
//! ```

mod dispatch;
mod learning;
mod poll;
mod sensor;
mod setters;

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::{broadcast, watch};

use crate::error::Error;
use crate::event::{ClimateEvent, DeviceId, EventBus, Notice};
use crate::manager::CompanionConfig;
use crate::protocol::{DeviceClient, DeviceInfo};
use crate::state::{ClimateAttributes, ControllerState, StateChange};
use crate::types::TemperatureRange;

/// Climate controller driving one air conditioner companion.
pub struct Controller<C: DeviceClient> {
    id: DeviceId,
    client: Arc<C>,
    state: Mutex<ControllerState>,
    range: TemperatureRange,
    unique_id: String,
    name: String,
    target_sensor: String,
    power_sensor: Option<String>,
    poll_interval: Duration,
    events: EventBus,
    learning: AtomicBool,
    learn_stop: watch::Sender<bool>,
}

impl<C: DeviceClient> Controller<C> {
    /// Performs the initial handshake and builds the controller.
    ///
    /// The controller starts unavailable; the first successful
    /// [`update`](Self::update) makes it available and learns the model token.
    ///
    /// # Errors
    ///
    /// - `Error::Value` if the configuration is invalid
    /// - `Error::NotReady` if the device does not answer the handshake
    pub async fn connect(client: C, config: &CompanionConfig) -> Result<Self, Error> {
        config.validate()?;
        let range = config.temperature_range()?;

        let token_hint: String = config.token.chars().take(5).collect();
        tracing::info!(host = %config.host, token = %token_hint, "Initializing companion");

        let info = client.info().await.map_err(|e| {
            tracing::error!(host = %config.host, error = %e, "Device unavailable or token incorrect");
            Error::NotReady(e)
        })?;
        tracing::info!(
            model = %info.model,
            firmware = %info.firmware_version,
            hardware = %info.hardware_version,
            "Companion detected"
        );

        let (learn_stop, _) = watch::channel(false);
        Ok(Self {
            id: DeviceId::new(),
            client: Arc::new(client),
            state: Mutex::new(ControllerState::new()),
            range,
            unique_id: unique_id(&info),
            name: config.name.clone(),
            target_sensor: config.target_sensor.clone(),
            power_sensor: config.power_sensor.clone(),
            poll_interval: config.poll_interval(),
            events: EventBus::new(),
            learning: AtomicBool::new(false),
            learn_stop,
        })
    }

    /// Publishes this controller's events on `events` instead of its own bus.
    #[must_use]
    pub fn with_event_bus(mut self, events: EventBus) -> Self {
        self.events = events;
        self
    }

    /// Returns the binding identifier.
    #[must_use]
    pub fn id(&self) -> DeviceId {
        self.id
    }

    /// Returns the unique id, `"{model}-{mac}"`.
    #[must_use]
    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the entity id of the temperature sensor.
    #[must_use]
    pub fn target_sensor(&self) -> &str {
        &self.target_sensor
    }

    /// Returns the entity id of the power sensor, if configured.
    #[must_use]
    pub fn power_sensor(&self) -> Option<&str> {
        self.power_sensor.as_deref()
    }

    /// Returns the accepted target temperature range.
    #[must_use]
    pub fn temperature_range(&self) -> TemperatureRange {
        self.range
    }

    /// Returns the interval used by [`spawn_poll_loop`](Self::spawn_poll_loop).
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Returns `true` if the last device call succeeded.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.state.lock().is_available()
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn state(&self) -> ControllerState {
        self.state.lock().clone()
    }

    /// Renders the observable attributes.
    #[must_use]
    pub fn attributes(&self) -> ClimateAttributes {
        let state = self.state.lock();
        ClimateAttributes::from_state(&state, self.range, &self.unique_id, &self.name)
    }

    /// Subscribes to this controller's events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ClimateEvent> {
        self.events.subscribe()
    }

    // ========== Internal helpers ==========

    /// Marks the device unavailable after a failed call.
    fn mark_unavailable(&self, reason: &Error) {
        let was_available = self.state.lock().mark_unavailable();
        if was_available {
            tracing::warn!(device = %self.id, error = %reason, "Device unavailable");
            self.events
                .publish(ClimateEvent::unavailable(self.id, reason.to_string()));
        }
    }

    /// Applies a user edit and publishes it if anything changed.
    fn apply_change(&self, change: StateChange) -> bool {
        let changed = self.state.lock().apply(&change);
        if changed {
            self.publish_state(Some(change));
        }
        changed
    }

    fn publish_state(&self, change: Option<StateChange>) {
        let attributes = Box::new(self.attributes());
        self.events.publish(ClimateEvent::StateUpdated {
            device_id: self.id,
            change,
            attributes,
        });
    }

    fn notify(&self, notice: Notice) {
        self.events.notify(self.id, notice);
    }
}

impl<C: DeviceClient> fmt::Debug for Controller<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("id", &self.id)
            .field("unique_id", &self.unique_id)
            .field("name", &self.name)
            .field("range", &self.range)
            .finish_non_exhaustive()
    }
}

fn unique_id(info: &DeviceInfo) -> String {
    format!("{}-{}", info.model, info.mac_address)
}
