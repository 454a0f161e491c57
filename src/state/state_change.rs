// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Local edits applied to the controller state.
//!
//! A [`StateChange`] is what a user intent does to the
//! [`ControllerState`](super::ControllerState) before the resulting
//! configuration is sent. Poll results do not go through here: they replace
//! the observed fields wholesale.
//!
//! # Examples
//!
//! ```
//! use ac_companion::state::{ControllerState, StateChange};
//! use ac_companion::types::{HvacMode, OperationMode};
//!
//! let mut state = ControllerState::new();
//! assert!(state.apply(&StateChange::HvacMode(HvacMode::Cool)));
//! assert!(state.apply(&StateChange::Power(false)));
//!
//! assert_eq!(state.hvac_mode(), Some(HvacMode::Off));
//! assert_eq!(state.last_on_operation(), Some(OperationMode::Cool));
//! ```

use serde::Serialize;

use crate::types::{FanMode, HvacMode, SwingMode};

/// A change requested by the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StateChange {
    /// Power switched through the direct on/off capability.
    ///
    /// Switching off also sets the HVAC mode to off; switching on leaves the
    /// mode to the next poll or mode change.
    Power(bool),
    /// HVAC mode selected. Any mode but off also switches the unit on and
    /// becomes the last-on operation.
    HvacMode(HvacMode),
    /// Target temperature, already validated against the configured range.
    TargetTemperature(f64),
    /// Fan mode selected.
    FanMode(FanMode),
    /// Swing mode selected.
    SwingMode(SwingMode),
    /// Several changes applied in order.
    Batch(Vec<StateChange>),
}

impl StateChange {
    /// Returns a short name for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Power(true) => "turn on",
            Self::Power(false) => "turn off",
            Self::HvacMode(_) => "hvac mode",
            Self::TargetTemperature(_) => "target temperature",
            Self::FanMode(_) => "fan mode",
            Self::SwingMode(_) => "swing mode",
            Self::Batch(_) => "batch",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names() {
        assert_eq!(StateChange::Power(true).kind(), "turn on");
        assert_eq!(StateChange::FanMode(FanMode::Low).kind(), "fan mode");
    }
}
