// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operation modes, in both the climate vocabulary and the device encoding.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValueError;

/// HVAC mode as understood by the host climate abstraction.
///
/// # Examples
///
/// ```
/// use ac_companion::types::HvacMode;
///
/// let mode: HvacMode = "fan_only".parse().unwrap();
/// assert_eq!(mode, HvacMode::FanOnly);
/// assert_eq!(HvacMode::Dry.as_str(), "dry");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HvacMode {
    /// The unit is off.
    Off,
    /// Heating.
    Heat,
    /// Cooling.
    Cool,
    /// Automatic heat/cool.
    Auto,
    /// Dehumidifying.
    Dry,
    /// Fan only, no heating or cooling.
    FanOnly,
}

impl HvacMode {
    /// Every mode offered to the host, in display order.
    pub const ALL: [Self; 6] = [
        Self::Heat,
        Self::Cool,
        Self::Auto,
        Self::Dry,
        Self::FanOnly,
        Self::Off,
    ];

    /// Returns the host-facing name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Heat => "heat",
            Self::Cool => "cool",
            Self::Auto => "auto",
            Self::Dry => "dry",
            Self::FanOnly => "fan_only",
        }
    }
}

impl fmt::Display for HvacMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HvacMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "heat" => Ok(Self::Heat),
            "cool" => Ok(Self::Cool),
            "auto" => Ok(Self::Auto),
            "dry" => Ok(Self::Dry),
            "fan_only" => Ok(Self::FanOnly),
            _ => Err(ValueError::InvalidModeName {
                kind: "hvac",
                name: s.to_string(),
            }),
        }
    }
}

/// Operation mode as encoded by the companion device.
///
/// The device has no "off" operation mode; power is a separate field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OperationMode {
    /// Heating (code 0).
    Heat,
    /// Cooling (code 1).
    Cool,
    /// Automatic (code 2).
    Auto,
    /// Dehumidify (code 3).
    Dehumidify,
    /// Ventilate (code 4).
    Ventilate,
}

impl OperationMode {
    /// All device operation modes.
    pub const ALL: [Self; 5] = [
        Self::Heat,
        Self::Cool,
        Self::Auto,
        Self::Dehumidify,
        Self::Ventilate,
    ];

    /// Returns the numeric code used by the device.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Heat => 0,
            Self::Cool => 1,
            Self::Auto => 2,
            Self::Dehumidify => 3,
            Self::Ventilate => 4,
        }
    }

    /// Decodes a device-reported operation mode code.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnrecognizedDeviceValue` for unknown codes.
    pub fn from_code(raw: &str) -> Result<Self, ValueError> {
        match raw {
            "0" => Ok(Self::Heat),
            "1" => Ok(Self::Cool),
            "2" => Ok(Self::Auto),
            "3" => Ok(Self::Dehumidify),
            "4" => Ok(Self::Ventilate),
            _ => Err(ValueError::UnrecognizedDeviceValue {
                field: "operation mode",
                value: raw.to_string(),
            }),
        }
    }
}
