// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan modes, in both the climate vocabulary and the device encoding.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValueError;

/// Fan mode offered to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FanMode {
    /// Low speed.
    Low,
    /// Medium speed.
    Medium,
    /// High speed.
    High,
    /// Speed chosen by the air conditioner.
    Auto,
}

impl FanMode {
    /// Every fan mode offered to the host.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Auto];

    /// Returns the host-facing name of the fan mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for FanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FanMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "auto" => Ok(Self::Auto),
            _ => Err(ValueError::InvalidModeName {
                kind: "fan",
                name: s.to_string(),
            }),
        }
    }
}

/// Fan speed as encoded by the companion device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FanSpeed {
    /// Code 0.
    Low,
    /// Code 1.
    Medium,
    /// Code 2.
    High,
    /// Code 3.
    Auto,
}

impl FanSpeed {
    /// All device fan speeds.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Auto];

    /// Returns the numeric code used by the device.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
            Self::Auto => 3,
        }
    }

    /// Decodes a device-reported fan speed code.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnrecognizedDeviceValue` for unknown codes.
    pub fn from_code(raw: &str) -> Result<Self, ValueError> {
        match raw {
            "0" => Ok(Self::Low),
            "1" => Ok(Self::Medium),
            "2" => Ok(Self::High),
            "3" => Ok(Self::Auto),
            _ => Err(ValueError::UnrecognizedDeviceValue {
                field: "fan speed",
                value: raw.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_mode_from_str() {
        assert_eq!("high".parse::<FanMode>().unwrap(), FanMode::High);
        assert_eq!("Auto".parse::<FanMode>().unwrap(), FanMode::Auto);
        assert!("turbo".parse::<FanMode>().is_err());
    }

    #[test]
    fn fan_speed_codes() {
        assert_eq!(FanSpeed::from_code("2").unwrap(), FanSpeed::High);
        assert_eq!(FanSpeed::Auto.code(), 3);
        assert!(FanSpeed::from_code("9").is_err());
    }
}
