// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LED state of the companion device.

use serde::Serialize;

use crate::error::ValueError;

/// LED state as encoded by the companion device.
///
/// The device encodes this field as a character rather than a digit.
///
/// # Examples
///
/// ```
/// use ac_companion::types::Led;
///
/// assert_eq!(Led::Off.code(), "A");
/// assert_eq!(Led::from_code("0").unwrap(), Led::On);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Led {
    /// LED lit.
    On,
    /// LED dark.
    Off,
}

impl Led {
    /// Returns the code used by the device.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::On => "0",
            Self::Off => "A",
        }
    }

    /// Decodes a device-reported LED code.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnrecognizedDeviceValue` for unknown codes.
    pub fn from_code(raw: &str) -> Result<Self, ValueError> {
        match raw {
            "0" => Ok(Self::On),
            "A" | "a" => Ok(Self::Off),
            _ => Err(ValueError::UnrecognizedDeviceValue {
                field: "led",
                value: raw.to_string(),
            }),
        }
    }

    /// Returns `true` when the LED is lit.
    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn led_codes() {
        assert_eq!(Led::from_code("A").unwrap(), Led::Off);
        assert_eq!(Led::On.code(), "0");
        assert!(Led::from_code("1").is_err());
    }
}
