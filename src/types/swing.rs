// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Swing modes, in both the climate vocabulary and the device encoding.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValueError;

/// Swing mode offered to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SwingMode {
    /// Louvres sweep.
    On,
    /// Louvres fixed.
    Off,
}

impl SwingMode {
    /// Every swing mode offered to the host.
    pub const ALL: [Self; 2] = [Self::On, Self::Off];

    /// Returns the host-facing name of the swing mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }
}

impl fmt::Display for SwingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwingMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            _ => Err(ValueError::InvalidModeName {
                kind: "swing",
                name: s.to_string(),
            }),
        }
    }
}

/// Swing position as encoded by the companion device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SwingPosition {
    /// Code 0.
    On,
    /// Code 1.
    Off,
}

impl SwingPosition {
    /// All device swing positions.
    pub const ALL: [Self; 2] = [Self::On, Self::Off];

    /// Returns the numeric code used by the device.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::On => 0,
            Self::Off => 1,
        }
    }

    /// Decodes a device-reported swing code.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnrecognizedDeviceValue` for unknown codes.
    pub fn from_code(raw: &str) -> Result<Self, ValueError> {
        match raw {
            "0" => Ok(Self::On),
            "1" => Ok(Self::Off),
            _ => Err(ValueError::UnrecognizedDeviceValue {
                field: "swing",
                value: raw.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swing_codes() {
        assert_eq!(SwingPosition::from_code("0").unwrap(), SwingPosition::On);
        assert_eq!(SwingPosition::Off.code(), 1);
        assert!(SwingPosition::from_code("7").is_err());
    }

    #[test]
    fn swing_mode_from_str() {
        assert_eq!("OFF".parse::<SwingMode>().unwrap(), SwingMode::Off);
        assert!("sideways".parse::<SwingMode>().is_err());
    }
}
