// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State cache of a companion binding.
//!
//! [`DeviceSnapshot`] is the immutable result of a poll. [`ControllerState`]
//! holds the latest snapshot together with the user's edits, expressed as
//! [`StateChange`]s, and [`ClimateAttributes`] renders it for the host.
//!
//! # Examples
//!
//! ```
//! use ac_companion::state::{ControllerState, StateChange};
//! use ac_companion::types::FanMode;
//!
//! let mut state = ControllerState::new();
//! state.apply(&StateChange::FanMode(FanMode::High));
//!
//! assert_eq!(state.fan_mode(), Some(FanMode::High));
//! assert!(!state.is_available());
//! ```

mod attributes;
mod controller_state;
mod snapshot;
mod state_change;

pub use attributes::ClimateAttributes;
pub use controller_state::ControllerState;
pub use snapshot::DeviceSnapshot;
pub use state_change::StateChange;
