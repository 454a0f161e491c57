// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! External sensor input. No device call is ever made from here.

use crate::protocol::DeviceClient;
use crate::telemetry::SensorEvent;

use super::Controller;

impl<C: DeviceClient> Controller<C> {
    /// Applies a temperature sensor change.
    ///
    /// Readings without a value, unparseable readings and readings older
    /// than the last applied one are ignored. Returns `true` if the current
    /// temperature was updated.
    pub fn sensor_changed(&self, event: &SensorEvent) -> bool {
        let celsius = match event.temperature_celsius() {
            Ok(Some(celsius)) => celsius,
            Ok(None) => return false,
            Err(e) => {
                tracing::error!(device = %self.id, error = %e, "Unable to update from sensor");
                return false;
            }
        };

        let applied = self
            .state
            .lock()
            .apply_sensor_temperature(celsius, event.observed_at);
        if applied {
            self.publish_state(None);
        } else {
            tracing::debug!(device = %self.id, "Dropped out-of-order sensor reading");
        }
        applied
    }

    /// Records a power sensor change as an observable attribute.
    pub fn power_sensor_changed(&self, event: &SensorEvent) -> bool {
        let Some(on) = event.power_on() else {
            return false;
        };
        self.state.lock().set_external_power(on);
        self.publish_state(None);
        true
    }
}
