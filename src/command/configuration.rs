// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Composition of the configuration command.

use crate::error::Error;
use crate::state::ControllerState;
use crate::types::{FanSpeed, HvacMode, Led, ModelToken, OperationMode, Power, SwingPosition};

use super::Command;

/// The complete configuration accepted by the device in one call.
///
/// The LED is always switched off by composed configurations.
///
/// # Examples
///
/// ```
/// use ac_companion::command::ConfigurationCommand;
/// use ac_companion::state::{ControllerState, StateChange};
/// use ac_companion::types::{FanMode, HvacMode, SwingMode};
/// use ac_companion::Error;
///
/// let mut state = ControllerState::new();
/// state.apply(&StateChange::Batch(vec![
///     StateChange::HvacMode(HvacMode::Cool),
///     StateChange::TargetTemperature(22.7),
///     StateChange::FanMode(FanMode::Auto),
///     StateChange::SwingMode(SwingMode::Off),
/// ]));
///
/// // Nothing has been polled, so the model token is unknown.
/// assert!(matches!(
///     ConfigurationCommand::compose(&state),
///     Err(Error::ModelUnknown)
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationCommand {
    /// Model token of the air conditioner.
    pub model: ModelToken,
    /// Power.
    pub power: Power,
    /// Operation mode.
    pub mode: OperationMode,
    /// Target temperature in whole degrees.
    pub temperature: u8,
    /// Fan speed.
    pub fan_speed: FanSpeed,
    /// Swing position.
    pub swing: SwingPosition,
    /// LED state.
    pub led: Led,
}

impl ConfigurationCommand {
    /// Composes the configuration from the controller state.
    ///
    /// While the unit is on, the current HVAC mode is used. While it is off,
    /// or when no operating mode is selected, the last-on operation is used so
    /// that switching back on resumes it.
    ///
    /// # Errors
    ///
    /// - `Error::ModelUnknown` if the model token has not been learned yet
    /// - `Error::StateUnknown` if a required field has never been set
    pub fn compose(state: &ControllerState) -> Result<Self, Error> {
        let model = state.model().cloned().ok_or(Error::ModelUnknown)?;

        let current = if state.is_on() {
            state.hvac_mode().and_then(HvacMode::operation)
        } else {
            None
        };
        let mode = current
            .or(state.last_on_operation())
            .ok_or(Error::StateUnknown("operation mode"))?;

        let temperature = state
            .target_temperature()
            .ok_or(Error::StateUnknown("target temperature"))?;
        let fan_speed = state
            .fan_mode()
            .map(FanSpeed::from)
            .ok_or(Error::StateUnknown("fan mode"))?;
        let swing = state
            .swing_mode()
            .map(SwingPosition::from)
            .ok_or(Error::StateUnknown("swing mode"))?;

        Ok(Self {
            model,
            power: Power::from(state.is_on()),
            mode,
            temperature: device_degrees(temperature),
            fan_speed,
            swing,
            led: Led::Off,
        })
    }
}

/// Truncates a temperature to the device's whole-degree resolution.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn device_degrees(celsius: f64) -> u8 {
    celsius.trunc().clamp(0.0, f64::from(u8::MAX)) as u8
}

impl Command for ConfigurationCommand {
    fn method(&self) -> &'static str {
        "send_configuration"
    }

    fn params(&self) -> serde_json::Value {
        serde_json::json!([
            self.model.as_str(),
            self.power.code(),
            self.mode.code(),
            self.temperature,
            self.fan_speed.code(),
            self.swing.code(),
            self.led.code(),
        ])
    }
}
