// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parser for the companion's model-and-state payload.

use crate::error::{Error, ParseError, ValueError};
use crate::protocol::StatusResponse;
use crate::types::{FanSpeed, Led, ModelToken, OperationMode, Power, SwingPosition};

/// Decoded status report from one poll.
///
/// The state string is positional; fields past its end are reported as `None`
/// so they can be carried over from the previous snapshot. A field that is
/// present but holds an unknown code is an error, never a default.
///
/// # Examples
///
/// ```
/// use ac_companion::protocol::StatusResponse;
/// use ac_companion::telemetry::StatusReport;
/// use ac_companion::types::{OperationMode, Power};
///
/// let raw = StatusResponse::new(vec![
///     "010500978022222102".to_string(),
///     "010201190280222221".to_string(),
///     "2".to_string(),
/// ]);
/// let report = StatusReport::parse(&raw).unwrap();
///
/// assert_eq!(report.power, Some(Power::Off));
/// assert_eq!(report.operation_mode, Some(OperationMode::Auto));
/// assert_eq!(report.target_temperature, Some(25.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusReport {
    /// Model token of the air conditioner.
    pub model: Option<ModelToken>,
    /// Power state.
    pub power: Option<Power>,
    /// Operation mode (reported even while off).
    pub operation_mode: Option<OperationMode>,
    /// Fan speed.
    pub fan_speed: Option<FanSpeed>,
    /// Swing position.
    pub swing: Option<SwingPosition>,
    /// Target temperature in degrees Celsius.
    pub target_temperature: Option<f64>,
    /// LED state.
    pub led: Option<Led>,
    /// Power drawn by the air conditioner, in Watts.
    pub load_power: Option<f64>,
}

// Character offsets inside the state string.
const POWER: usize = 2;
const MODE: usize = 3;
const FAN: usize = 4;
const SWING: usize = 5;
const TEMPERATURE: usize = 6;
const LED: usize = 8;

impl StatusReport {
    /// Decodes a raw status payload.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnrecognizedDeviceValue` (wrapped in [`Error::Value`])
    /// for unknown codes, or `ParseError::InvalidValue` for a load power that
    /// is not a number.
    pub fn parse(raw: &StatusResponse) -> Result<Self, Error> {
        let model = match raw.field(0) {
            Some(hex) if !hex.is_empty() => Some(ModelToken::new(hex)?),
            _ => None,
        };

        let state = raw.field(1).unwrap_or_default();
        let digit = |offset: usize| state.get(offset..=offset);

        let target_temperature = state
            .get(TEMPERATURE..TEMPERATURE + 2)
            .map(|hex| {
                u8::from_str_radix(hex, 16).map(f64::from).map_err(|_| {
                    ValueError::UnrecognizedDeviceValue {
                        field: "target temperature",
                        value: hex.to_string(),
                    }
                })
            })
            .transpose()?;

        let load_power = raw
            .field(2)
            .map(|value| {
                value
                    .trim()
                    .parse::<f64>()
                    .map_err(|e| ParseError::InvalidValue {
                        field: "load power",
                        message: e.to_string(),
                    })
            })
            .transpose()?;

        Ok(Self {
            model,
            power: digit(POWER).map(Power::from_code).transpose()?,
            operation_mode: digit(MODE).map(OperationMode::from_code).transpose()?,
            fan_speed: digit(FAN).map(FanSpeed::from_code).transpose()?,
            swing: digit(SWING).map(SwingPosition::from_code).transpose()?,
            target_temperature,
            led: digit(LED).map(Led::from_code).transpose()?,
            load_power,
        })
    }
}
