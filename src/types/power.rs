// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power enumeration of the companion device.

use std::fmt;

use serde::Serialize;

use crate::error::ValueError;

/// Power state as encoded by the companion device.
///
/// # Examples
///
/// ```
/// use ac_companion::types::Power;
///
/// assert_eq!(Power::On.code(), 1);
/// assert_eq!(Power::from_code("0").unwrap(), Power::Off);
/// assert!(Power::from_code("4").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Power {
    /// The air conditioner is off.
    Off,
    /// The air conditioner is on.
    On,
}

impl Power {
    /// All device power values.
    pub const ALL: [Self; 2] = [Self::Off, Self::On];

    /// Returns the numeric code used by the device.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::On => 1,
        }
    }

    /// Decodes a device-reported power code.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnrecognizedDeviceValue` for any code other than
    /// `0` or `1`.
    pub fn from_code(raw: &str) -> Result<Self, ValueError> {
        match raw {
            "0" => Ok(Self::Off),
            "1" => Ok(Self::On),
            _ => Err(ValueError::UnrecognizedDeviceValue {
                field: "power",
                value: raw.to_string(),
            }),
        }
    }

    /// Returns `true` for [`Power::On`].
    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::On => write!(f, "on"),
        }
    }
}
