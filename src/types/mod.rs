// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for air conditioner companion control.
//!
//! Two vocabularies live here side by side: the climate vocabulary exposed to
//! the host ([`HvacMode`], [`FanMode`], [`SwingMode`]) and the enumerations the
//! device itself reports and accepts ([`Power`], [`OperationMode`],
//! [`FanSpeed`], [`SwingPosition`], [`Led`]). The conversions between them
//! live in [`crate::mapping`].
//!
//! Constrained values validate at construction:
//!
//! - [`TemperatureRange`] - Accepted target temperatures
//! - [`LearnSlot`] - Infrared learning slot (2-1000000)
//! - [`ModelToken`] - Hex model identifier reported by the device
//! - [`CommandCode`] - Raw code classified by prefix

mod code;
mod fan;
mod led;
mod model;
mod operation;
mod power;
mod slot;
mod swing;
mod temperature;

pub use code::{CONFIGURATION_PREFIX, CommandCode, INFRARED_PREFIX};
pub use fan::{FanMode, FanSpeed};
pub use led::Led;
pub use model::ModelToken;
pub use operation::{HvacMode, OperationMode};
pub use power::Power;
pub use slot::LearnSlot;
pub use swing::{SwingMode, SwingPosition};
pub use temperature::TemperatureRange;
