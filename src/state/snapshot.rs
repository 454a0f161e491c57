// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Immutable result of one successful poll.

use serde::Serialize;

use crate::error::ParseError;
use crate::telemetry::StatusReport;
use crate::types::{FanSpeed, Led, ModelToken, OperationMode, SwingPosition};

/// Device state as last reported by the companion.
///
/// A snapshot is never mutated: each poll builds a new one. Fields missing
/// from a partial report are carried over from the previous snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceSnapshot {
    /// Model token of the air conditioner.
    pub model: ModelToken,
    /// Whether the air conditioner is on.
    pub power_on: bool,
    /// Operation mode (kept by the device while off).
    pub operation_mode: OperationMode,
    /// Fan speed.
    pub fan_speed: FanSpeed,
    /// Swing position.
    pub swing: SwingPosition,
    /// Whether the companion's LED is lit.
    pub led_on: bool,
    /// Target temperature in degrees Celsius.
    pub target_temperature: f64,
    /// Power drawn by the air conditioner, in Watts.
    pub load_power_watts: f64,
}

impl DeviceSnapshot {
    /// Builds the next snapshot from a report and the previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the report lacks a field and
    /// there is no previous snapshot to take it from.
    pub fn merge(previous: Option<&Self>, report: StatusReport) -> Result<Self, ParseError> {
        macro_rules! pick {
            ($report:expr, $field:ident, $name:literal) => {
                match $report {
                    Some(value) => value,
                    None => previous
                        .map(|p| p.$field.clone())
                        .ok_or(ParseError::MissingField($name))?,
                }
            };
        }

        Ok(Self {
            model: pick!(report.model, model, "model"),
            power_on: pick!(report.power.map(bool::from), power_on, "power"),
            operation_mode: pick!(report.operation_mode, operation_mode, "operation mode"),
            fan_speed: pick!(report.fan_speed, fan_speed, "fan speed"),
            swing: pick!(report.swing, swing, "swing"),
            led_on: pick!(report.led.map(Led::is_on), led_on, "led"),
            target_temperature: pick!(
                report.target_temperature,
                target_temperature,
                "target temperature"
            ),
            load_power_watts: pick!(report.load_power, load_power_watts, "load power"),
        })
    }
}
