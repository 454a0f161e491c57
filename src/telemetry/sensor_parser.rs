// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parser for external sensor state-change notifications.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::ParseError;

/// States a host reports for a sensor that has no reading.
const NO_READING: [&str; 2] = ["unknown", "unavailable"];

/// A state-change notification from an external sensor entity.
///
/// # Examples
///
/// ```
/// use ac_companion::telemetry::SensorEvent;
///
/// let event = SensorEvent::new("68").with_unit("°F");
/// assert_eq!(event.temperature_celsius().unwrap(), Some(20.0));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SensorEvent {
    /// Raw sensor state as reported by the host.
    pub state: Option<String>,
    /// Unit of measurement, if any.
    #[serde(default, rename = "unit_of_measurement")]
    pub unit: Option<String>,
    /// When the host observed the change.
    #[serde(default = "Utc::now")]
    pub observed_at: DateTime<Utc>,
}

impl SensorEvent {
    /// Creates an event observed now.
    #[must_use]
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: Some(state.into()),
            unit: None,
            observed_at: Utc::now(),
        }
    }

    /// Sets the unit of measurement.
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Sets the observation time.
    #[must_use]
    pub fn observed_at(mut self, at: DateTime<Utc>) -> Self {
        self.observed_at = at;
        self
    }

    fn reading(&self) -> Option<&str> {
        self.state
            .as_deref()
            .filter(|state| !NO_READING.contains(state))
    }

    /// Returns the temperature in degrees Celsius.
    ///
    /// Returns `Ok(None)` when the sensor has no reading.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidValue` if the state is not a number or the
    /// unit is not a temperature unit.
    pub fn temperature_celsius(&self) -> Result<Option<f64>, ParseError> {
        let Some(raw) = self.reading() else {
            return Ok(None);
        };

        let value: f64 = raw.trim().parse().map_err(|_| ParseError::InvalidValue {
            field: "temperature",
            message: format!("could not convert string to float: {raw:?}"),
        })?;

        let celsius = match self.unit.as_deref() {
            None | Some("°C" | "C") => value,
            Some("°F" | "F") => (value - 32.0) * 5.0 / 9.0,
            Some("K") => value - 273.15,
            Some(other) => {
                return Err(ParseError::InvalidValue {
                    field: "temperature",
                    message: format!("{other} is not a recognized temperature unit"),
                });
            }
        };

        Ok(Some(celsius))
    }

    /// Returns the reading of a power sensor: `Some(true)` for `"on"`.
    #[must_use]
    pub fn power_on(&self) -> Option<bool> {
        self.reading().map(|state| state.eq_ignore_ascii_case("on"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celsius_is_default_unit() {
        let event = SensorEvent::new("23.5");
        assert_eq!(event.temperature_celsius().unwrap(), Some(23.5));
    }

    #[test]
    fn unavailable_has_no_reading() {
        assert_eq!(
            SensorEvent::new("unavailable").temperature_celsius().unwrap(),
            None
        );
        assert_eq!(SensorEvent::new("unknown").power_on(), None);
    }

    #[test]
    fn garbage_is_rejected() {
        let err = SensorEvent::new("warm").temperature_celsius().unwrap_err();
        assert!(matches!(err, ParseError::InvalidValue { field: "temperature", .. }));
    }

    #[test]
    fn unknown_unit_is_rejected() {
        let event = SensorEvent::new("20").with_unit("%");
        assert!(event.temperature_celsius().is_err());
    }

    #[test]
    fn kelvin_is_converted() {
        let event = SensorEvent::new("300.15").with_unit("K");
        let celsius = event.temperature_celsius().unwrap().unwrap();
        assert!((celsius - 27.0).abs() < 1e-9);
    }

    #[test]
    fn power_sensor_states() {
        assert_eq!(SensorEvent::new("on").power_on(), Some(true));
        assert_eq!(SensorEvent::new("off").power_on(), Some(false));
    }

    #[test]
    fn deserialize_host_state() {
        let json = r#"{"state":"21","unit_of_measurement":"°C","observed_at":"2024-01-15T10:30:00Z"}"#;
        let event: SensorEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.temperature_celsius().unwrap(), Some(21.0));
        assert_eq!(event.observed_at.to_rfc3339(), "2024-01-15T10:30:00+00:00");
    }
}
