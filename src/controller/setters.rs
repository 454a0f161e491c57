// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! User intents.
//!
//! Every setter returns `Ok(true)` when the device accepted the call and
//! `Ok(false)` when it faulted or answered anything else; device failures
//! never surface as errors. Edits applied before a failed send are kept
//! until the next poll reconciles them.

use crate::error::Error;
use crate::protocol::DeviceClient;
use crate::state::StateChange;
use crate::types::{FanMode, HvacMode, SwingMode};

use super::Controller;

impl<C: DeviceClient> Controller<C> {
    /// Switches the unit on through the direct on capability.
    ///
    /// The HVAC mode is left to the next poll or mode change; a following
    /// configuration resumes the last-on operation.
    pub async fn turn_on(&self) -> bool {
        let ok = self.try_send("turn on", self.client.on()).await;
        if ok {
            self.apply_change(StateChange::Power(true));
        }
        ok
    }

    /// Switches the unit off through the direct off capability.
    ///
    /// The last-on operation is kept.
    pub async fn turn_off(&self) -> bool {
        let ok = self.try_send("turn off", self.client.off()).await;
        if ok {
            self.apply_change(StateChange::Power(false));
        }
        ok
    }

    /// Sets the target temperature and/or the mode, then sends one
    /// configuration.
    ///
    /// Either part may be omitted; with both omitted the current state is
    /// sent again.
    ///
    /// # Errors
    ///
    /// - `Error::Value` if `celsius` is outside the configured range; the
    ///   state is left untouched
    /// - `Error::ModelUnknown` / `Error::StateUnknown` as for any
    ///   configuration
    pub async fn set_temperature(
        &self,
        celsius: Option<f64>,
        hvac_mode: Option<HvacMode>,
    ) -> Result<bool, Error> {
        let celsius = celsius
            .map(|value| self.range.check(value))
            .transpose()
            .inspect_err(|e| {
                tracing::warn!(device = %self.id, error = %e, "Target temperature rejected");
            })?;

        let change = match (celsius, hvac_mode) {
            (Some(value), Some(mode)) => Some(StateChange::Batch(vec![
                StateChange::TargetTemperature(value),
                StateChange::HvacMode(mode),
            ])),
            (Some(value), None) => Some(StateChange::TargetTemperature(value)),
            (None, Some(mode)) => Some(StateChange::HvacMode(mode)),
            (None, None) => None,
        };
        if let Some(change) = change {
            self.apply_change(change);
        }
        self.send_configuration().await
    }

    /// Selects an HVAC mode.
    ///
    /// Off switches the unit off first and, once the device accepted that,
    /// sends a configuration carrying the last-on operation. Any other mode
    /// switches the unit on in that mode.
    ///
    /// # Errors
    ///
    /// `Error::ModelUnknown` / `Error::StateUnknown` as for any configuration.
    pub async fn set_hvac_mode(&self, mode: HvacMode) -> Result<bool, Error> {
        if mode == HvacMode::Off {
            if !self.turn_off().await {
                return Ok(false);
            }
        } else {
            self.apply_change(StateChange::HvacMode(mode));
        }
        self.send_configuration().await
    }

    /// Selects a fan mode.
    ///
    /// # Errors
    ///
    /// `Error::ModelUnknown` / `Error::StateUnknown` as for any configuration.
    pub async fn set_fan_mode(&self, mode: FanMode) -> Result<bool, Error> {
        self.apply_change(StateChange::FanMode(mode));
        self.send_configuration().await
    }

    /// Selects a swing mode.
    ///
    /// # Errors
    ///
    /// `Error::ModelUnknown` / `Error::StateUnknown` as for any configuration.
    pub async fn set_swing_mode(&self, mode: SwingMode) -> Result<bool, Error> {
        self.apply_change(StateChange::SwingMode(mode));
        self.send_configuration().await
    }
}
