// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Translation between the climate vocabulary and the device enumerations.
//!
//! Every mapping is a pair of exhaustive `match` tables, so adding a variant
//! on either side fails to compile until both directions are updated.
//!
//! | Climate            | Device                    |
//! |--------------------|---------------------------|
//! | `HvacMode::Heat`   | `OperationMode::Heat`     |
//! | `HvacMode::Cool`   | `OperationMode::Cool`     |
//! | `HvacMode::Auto`   | `OperationMode::Auto`     |
//! | `HvacMode::Dry`    | `OperationMode::Dehumidify` |
//! | `HvacMode::FanOnly`| `OperationMode::Ventilate`|
//! | `HvacMode::Off`    | `Power::Off`              |

use crate::types::{FanMode, FanSpeed, HvacMode, OperationMode, Power, SwingMode, SwingPosition};

impl HvacMode {
    /// Returns the device operation mode for this climate mode.
    ///
    /// `Off` has no operation mode: it is expressed through [`Power::Off`].
    #[must_use]
    pub const fn operation(self) -> Option<OperationMode> {
        match self {
            Self::Off => None,
            Self::Heat => Some(OperationMode::Heat),
            Self::Cool => Some(OperationMode::Cool),
            Self::Auto => Some(OperationMode::Auto),
            Self::Dry => Some(OperationMode::Dehumidify),
            Self::FanOnly => Some(OperationMode::Ventilate),
        }
    }

    /// Returns the device power value implied by this climate mode.
    #[must_use]
    pub const fn power(self) -> Power {
        match self {
            Self::Off => Power::Off,
            _ => Power::On,
        }
    }
}

impl From<OperationMode> for HvacMode {
    fn from(mode: OperationMode) -> Self {
        match mode {
            OperationMode::Heat => Self::Heat,
            OperationMode::Cool => Self::Cool,
            OperationMode::Auto => Self::Auto,
            OperationMode::Dehumidify => Self::Dry,
            OperationMode::Ventilate => Self::FanOnly,
        }
    }
}

impl From<FanMode> for FanSpeed {
    fn from(mode: FanMode) -> Self {
        match mode {
            FanMode::Low => Self::Low,
            FanMode::Medium => Self::Medium,
            FanMode::High => Self::High,
            FanMode::Auto => Self::Auto,
        }
    }
}

impl From<FanSpeed> for FanMode {
    fn from(speed: FanSpeed) -> Self {
        match speed {
            FanSpeed::Low => Self::Low,
            FanSpeed::Medium => Self::Medium,
            FanSpeed::High => Self::High,
            FanSpeed::Auto => Self::Auto,
        }
    }
}

impl From<SwingMode> for SwingPosition {
    fn from(mode: SwingMode) -> Self {
        match mode {
            SwingMode::On => Self::On,
            SwingMode::Off => Self::Off,
        }
    }
}

impl From<SwingPosition> for SwingMode {
    fn from(position: SwingPosition) -> Self {
        match position {
            SwingPosition::On => Self::On,
            SwingPosition::Off => Self::Off,
        }
    }
}

impl From<bool> for Power {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl From<Power> for bool {
    fn from(power: Power) -> Self {
        power.is_on()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn operation_round_trip_from_device() {
        for op in OperationMode::ALL {
            assert_eq!(HvacMode::from(op).operation(), Some(op));
        }
    }

    #[test]
    fn operation_round_trip_from_climate() {
        for mode in HvacMode::ALL {
            match mode.operation() {
                Some(op) => assert_eq!(HvacMode::from(op), mode),
                None => assert_eq!(mode, HvacMode::Off),
            }
        }
    }

    #[test]
    fn operation_mapping_is_injective() {
        let devices: HashSet<_> = HvacMode::ALL.iter().filter_map(|m| m.operation()).collect();
        assert_eq!(devices.len(), HvacMode::ALL.len() - 1);

        let climates: HashSet<_> = OperationMode::ALL.iter().map(|op| HvacMode::from(*op)).collect();
        assert_eq!(climates.len(), OperationMode::ALL.len());
        assert!(!climates.contains(&HvacMode::Off));
    }

    #[test]
    fn off_is_carried_by_power() {
        assert_eq!(HvacMode::Off.power(), Power::Off);
        for mode in HvacMode::ALL.into_iter().filter(|m| *m != HvacMode::Off) {
            assert_eq!(mode.power(), Power::On);
        }
    }

    #[test]
    fn fan_round_trip_and_injective() {
        for mode in FanMode::ALL {
            assert_eq!(FanMode::from(FanSpeed::from(mode)), mode);
        }
        for speed in FanSpeed::ALL {
            assert_eq!(FanSpeed::from(FanMode::from(speed)), speed);
        }
        let speeds: HashSet<_> = FanMode::ALL.iter().map(|m| FanSpeed::from(*m)).collect();
        assert_eq!(speeds.len(), FanMode::ALL.len());
    }

    #[test]
    fn swing_round_trip_and_injective() {
        for mode in SwingMode::ALL {
            assert_eq!(SwingMode::from(SwingPosition::from(mode)), mode);
        }
        for position in SwingPosition::ALL {
            assert_eq!(SwingPosition::from(SwingMode::from(position)), position);
        }
        let positions: HashSet<_> = SwingMode::ALL.iter().map(|m| SwingPosition::from(*m)).collect();
        assert_eq!(positions.len(), SwingMode::ALL.len());
    }

    #[test]
    fn power_round_trip() {
        for power in Power::ALL {
            assert_eq!(Power::from(bool::from(power)), power);
        }
        assert_eq!(Power::from(true), Power::On);
        assert!(!bool::from(Power::Off));
    }
}
