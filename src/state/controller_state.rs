// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Controller state tracking.

use chrono::{DateTime, Utc};

use crate::types::{FanMode, HvacMode, ModelToken, OperationMode, SwingMode};

use super::{DeviceSnapshot, StateChange};

/// Authoritative record of one companion binding.
///
/// It combines the last polled [`DeviceSnapshot`] with the edits made by
/// user intents. Poll results always overwrite the edited fields.
///
/// Invariants:
///
/// - `last_on_operation` is never off; the type has no off value.
/// - Once the model token is known it is never replaced.
/// - `available` becomes `true` only through [`apply_snapshot`](Self::apply_snapshot).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControllerState {
    available: bool,
    last_snapshot: Option<DeviceSnapshot>,
    power_on: bool,
    hvac_mode: Option<HvacMode>,
    last_on_operation: Option<OperationMode>,
    target_temperature: Option<f64>,
    fan_mode: Option<FanMode>,
    swing_mode: Option<SwingMode>,
    model: Option<ModelToken>,
    current_temperature: Option<f64>,
    current_temperature_at: Option<DateTime<Utc>>,
    external_power: Option<bool>,
}

impl ControllerState {
    /// Creates an empty, unavailable state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Accessors ==========

    /// Returns `true` if the last device call succeeded.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Returns the last successfully polled snapshot.
    #[must_use]
    pub fn last_snapshot(&self) -> Option<&DeviceSnapshot> {
        self.last_snapshot.as_ref()
    }

    /// Returns `true` if the unit is believed to be on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.power_on
    }

    /// Returns the current HVAC mode.
    #[must_use]
    pub fn hvac_mode(&self) -> Option<HvacMode> {
        self.hvac_mode
    }

    /// Returns the most recent operation mode used while on.
    #[must_use]
    pub fn last_on_operation(&self) -> Option<OperationMode> {
        self.last_on_operation
    }

    /// Returns the target temperature.
    #[must_use]
    pub fn target_temperature(&self) -> Option<f64> {
        self.target_temperature
    }

    /// Returns the fan mode.
    #[must_use]
    pub fn fan_mode(&self) -> Option<FanMode> {
        self.fan_mode
    }

    /// Returns the swing mode.
    #[must_use]
    pub fn swing_mode(&self) -> Option<SwingMode> {
        self.swing_mode
    }

    /// Returns the model token, once learned.
    #[must_use]
    pub fn model(&self) -> Option<&ModelToken> {
        self.model.as_ref()
    }

    /// Returns the temperature reported by the external sensor.
    #[must_use]
    pub fn current_temperature(&self) -> Option<f64> {
        self.current_temperature
    }

    /// Returns the reading of the external power sensor.
    #[must_use]
    pub fn external_power(&self) -> Option<bool> {
        self.external_power
    }

    // ========== Poll results ==========

    /// Merges a fresh snapshot and marks the device available.
    ///
    /// Returns `true` if the device was previously unavailable.
    pub fn apply_snapshot(&mut self, snapshot: DeviceSnapshot) -> bool {
        let recovered = !self.available;
        self.available = true;

        self.power_on = snapshot.power_on;
        self.last_on_operation = Some(snapshot.operation_mode);
        self.hvac_mode = Some(if snapshot.power_on {
            HvacMode::from(snapshot.operation_mode)
        } else {
            HvacMode::Off
        });
        self.target_temperature = Some(snapshot.target_temperature);
        self.fan_mode = Some(FanMode::from(snapshot.fan_speed));
        self.swing_mode = Some(SwingMode::from(snapshot.swing));
        if self.model.is_none() {
            self.model = Some(snapshot.model.clone());
        }
        self.last_snapshot = Some(snapshot);

        recovered
    }

    /// Marks the device unavailable, keeping the last snapshot.
    ///
    /// Returns `true` if the device was previously available.
    pub fn mark_unavailable(&mut self) -> bool {
        std::mem::replace(&mut self.available, false)
    }

    // ========== Local edits ==========

    /// Applies a user edit and returns whether anything changed.
    pub fn apply(&mut self, change: &StateChange) -> bool {
        let before = self.clone();
        match change {
            StateChange::Power(true) => self.power_on = true,
            StateChange::Power(false) => {
                self.power_on = false;
                self.hvac_mode = Some(HvacMode::Off);
            }
            StateChange::HvacMode(mode) => {
                self.hvac_mode = Some(*mode);
                match mode.operation() {
                    Some(op) => {
                        self.power_on = true;
                        self.last_on_operation = Some(op);
                    }
                    None => self.power_on = false,
                }
            }
            StateChange::TargetTemperature(value) => self.target_temperature = Some(*value),
            StateChange::FanMode(mode) => self.fan_mode = Some(*mode),
            StateChange::SwingMode(mode) => self.swing_mode = Some(*mode),
            StateChange::Batch(changes) => {
                for c in changes {
                    self.apply(c);
                }
            }
        }
        *self != before
    }

    // ========== Sensors ==========

    /// Records an external temperature reading.
    ///
    /// Readings observed before the last applied one are dropped. Returns
    /// `true` if the reading was applied.
    pub fn apply_sensor_temperature(&mut self, celsius: f64, observed_at: DateTime<Utc>) -> bool {
        if self
            .current_temperature_at
            .is_some_and(|last| observed_at < last)
        {
            return false;
        }
        self.current_temperature = Some(celsius);
        self.current_temperature_at = Some(observed_at);
        true
    }

    /// Records the external power sensor reading.
    pub fn set_external_power(&mut self, on: bool) {
        self.external_power = Some(on);
    }
}
