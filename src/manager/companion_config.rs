// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Configuration of one companion binding.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;
use crate::types::TemperatureRange;

/// Name given to bindings configured without one.
pub const DEFAULT_NAME: &str = "Xiaomi AC Companion";

/// Length of a device token in characters.
pub const TOKEN_LENGTH: usize = 32;

const DEFAULT_MIN_TEMP: f64 = 16.0;
const DEFAULT_MAX_TEMP: f64 = 30.0;
const DEFAULT_POLL_INTERVAL_SECS: u64 = 15;

/// Configuration for a companion binding.
///
/// Deserializes from the host's configuration entry; only `host`, `token`
/// and `target_sensor` are required.
///
/// # Examples
///
/// ```
/// use ac_companion::manager::CompanionConfig;
///
/// let config: CompanionConfig = serde_json::from_str(
///     r#"{
///         "host": "192.168.1.40",
///         "token": "0123456789abcdef0123456789abcdef",
///         "target_sensor": "sensor.living_room_temperature"
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.name, "Xiaomi AC Companion");
/// assert_eq!(config.poll_interval().as_secs(), 15);
/// assert!(config.validate().is_ok());
///
/// let config = CompanionConfig::new(
///     "192.168.1.40",
///     "0123456789abcdef0123456789abcdef",
///     "sensor.bedroom_temperature",
/// )
/// .with_name("Bedroom AC")
/// .with_power_sensor("binary_sensor.bedroom_ac_power")
/// .with_temperature_range(18.0, 28.0);
/// assert_eq!(config.temperature_range().unwrap().min(), 18.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanionConfig {
    /// Device host or IP address.
    pub host: String,
    /// Device token, 32 characters.
    pub token: String,
    /// Display name.
    #[serde(default = "default_name")]
    pub name: String,
    /// Entity id of the temperature sensor.
    pub target_sensor: String,
    /// Entity id of an optional power sensor.
    #[serde(default)]
    pub power_sensor: Option<String>,
    /// Lowest accepted target temperature.
    #[serde(default = "default_min_temp")]
    pub min_temp: f64,
    /// Highest accepted target temperature.
    #[serde(default = "default_max_temp")]
    pub max_temp: f64,
    /// Seconds between two status polls.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_min_temp() -> f64 {
    DEFAULT_MIN_TEMP
}

fn default_max_temp() -> f64 {
    DEFAULT_MAX_TEMP
}

fn default_poll_interval_secs() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

impl CompanionConfig {
    /// Creates a configuration with default name, range and poll interval.
    #[must_use]
    pub fn new(
        host: impl Into<String>,
        token: impl Into<String>,
        target_sensor: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            token: token.into(),
            name: default_name(),
            target_sensor: target_sensor.into(),
            power_sensor: None,
            min_temp: DEFAULT_MIN_TEMP,
            max_temp: DEFAULT_MAX_TEMP,
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the power sensor entity id.
    #[must_use]
    pub fn with_power_sensor(mut self, entity_id: impl Into<String>) -> Self {
        self.power_sensor = Some(entity_id.into());
        self
    }

    /// Sets the accepted target temperature range.
    #[must_use]
    pub fn with_temperature_range(mut self, min: f64, max: f64) -> Self {
        self.min_temp = min;
        self.max_temp = max;
        self
    }

    /// Sets the poll interval, rounded down to whole seconds.
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval_secs = interval.as_secs();
        self
    }

    /// Returns the accepted target temperature range.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidConfiguration` if `min_temp > max_temp`.
    pub fn temperature_range(&self) -> Result<TemperatureRange, ValueError> {
        TemperatureRange::new(self.min_temp, self.max_temp)
    }

    /// Returns the poll interval.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// Checks the configuration before a controller is built from it.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidConfiguration` for an empty host, a token
    /// of the wrong length, an empty temperature range or a zero poll
    /// interval.
    pub fn validate(&self) -> Result<(), ValueError> {
        if self.host.trim().is_empty() {
            return Err(ValueError::InvalidConfiguration("host is empty".into()));
        }
        if self.token.chars().count() != TOKEN_LENGTH {
            return Err(ValueError::InvalidConfiguration(format!(
                "token must be {TOKEN_LENGTH} characters"
            )));
        }
        if self.poll_interval_secs == 0 {
            return Err(ValueError::InvalidConfiguration(
                "poll interval must be at least one second".into(),
            ));
        }
        self.temperature_range().map(|_| ())
    }
}
