// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Attributes exposed to the host platform.

use serde::Serialize;

use crate::types::{FanMode, HvacMode, ModelToken, SwingMode, TemperatureRange};

use super::ControllerState;

/// Everything a host needs to render the climate entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimateAttributes {
    /// Unique id, `"{model}-{mac}"`.
    pub unique_id: String,
    /// Display name.
    pub name: String,
    /// Whether the last device call succeeded.
    pub available: bool,
    /// Temperature from the external sensor.
    pub current_temperature: Option<f64>,
    /// Target temperature.
    pub target_temperature: Option<f64>,
    /// Lowest accepted target temperature.
    pub min_temp: f64,
    /// Highest accepted target temperature.
    pub max_temp: f64,
    /// Target temperature step.
    pub target_temperature_step: f64,
    /// Current HVAC mode.
    pub hvac_mode: Option<HvacMode>,
    /// Selectable HVAC modes.
    pub hvac_modes: Vec<HvacMode>,
    /// Mode the unit resumes when switched back on.
    pub last_on_operation: Option<HvacMode>,
    /// Current fan mode.
    pub fan_mode: Option<FanMode>,
    /// Selectable fan modes.
    pub fan_modes: Vec<FanMode>,
    /// Current swing mode.
    pub swing_mode: Option<SwingMode>,
    /// Selectable swing modes.
    pub swing_modes: Vec<SwingMode>,
    /// Model token reported by the device.
    pub ac_model: Option<ModelToken>,
    /// Power drawn by the air conditioner, in Watts.
    pub load_power: Option<f64>,
    /// Whether the companion's LED is lit.
    pub led: Option<bool>,
    /// Reading of the external power sensor.
    pub power_sensor_on: Option<bool>,
}

impl ClimateAttributes {
    /// Renders the attributes of a controller state.
    #[must_use]
    pub fn from_state(
        state: &ControllerState,
        range: TemperatureRange,
        unique_id: &str,
        name: &str,
    ) -> Self {
        let snapshot = state.last_snapshot();
        Self {
            unique_id: unique_id.to_string(),
            name: name.to_string(),
            available: state.is_available(),
            current_temperature: state.current_temperature(),
            target_temperature: state.target_temperature(),
            min_temp: range.min(),
            max_temp: range.max(),
            target_temperature_step: TemperatureRange::STEP,
            hvac_mode: state.hvac_mode(),
            hvac_modes: HvacMode::ALL.to_vec(),
            last_on_operation: state.last_on_operation().map(HvacMode::from),
            fan_mode: state.fan_mode(),
            fan_modes: FanMode::ALL.to_vec(),
            swing_mode: state.swing_mode(),
            swing_modes: SwingMode::ALL.to_vec(),
            ac_model: state.model().cloned(),
            load_power: snapshot.map(|s| s.load_power_watts),
            led: snapshot.map(|s| s.led_on),
            power_sensor_on: state.external_power(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StateChange;

    #[test]
    fn renders_empty_state() {
        let state = ControllerState::new();
        let attrs = ClimateAttributes::from_state(&state, TemperatureRange::default(), "id", "AC");

        assert!(!attrs.available);
        assert_eq!(attrs.min_temp, 16.0);
        assert_eq!(attrs.hvac_modes.len(), 6);
        assert!(attrs.load_power.is_none());
    }

    #[test]
    fn serializes_modes_as_host_names() {
        let mut state = ControllerState::new();
        state.apply(&StateChange::HvacMode(HvacMode::FanOnly));
        let attrs = ClimateAttributes::from_state(&state, TemperatureRange::default(), "id", "AC");

        let json = serde_json::to_value(&attrs).unwrap();
        assert_eq!(json["hvac_mode"], "fan_only");
        assert_eq!(json["last_on_operation"], "fan_only");
        assert_eq!(json["fan_modes"][3], "auto");
    }
}
