// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Single dispatch point for mutating device calls.

use std::future::Future;
use std::time::Duration;

use crate::command::ConfigurationCommand;
use crate::error::{Error, ProtocolError};
use crate::event::Notice;
use crate::protocol::{CommandResponse, DeviceClient};
use crate::types::CommandCode;

use super::Controller;

impl<C: DeviceClient> Controller<C> {
    /// Awaits one device call and reduces it to success or failure.
    ///
    /// Success means the response is exactly the success token. A fault or
    /// any other response marks the device unavailable.
    pub(super) async fn try_send<F>(&self, operation: &'static str, call: F) -> bool
    where
        F: Future<Output = Result<CommandResponse, ProtocolError>>,
    {
        let failure = match call.await {
            Ok(response) if response.is_success() => {
                tracing::debug!(device = %self.id, operation, response = %response, "Response received");
                return true;
            }
            Ok(response) => Error::LogicalFailure(response),
            Err(e) => Error::Protocol(e),
        };

        tracing::error!(device = %self.id, operation, error = %failure, "Device call failed");
        self.mark_unavailable(&failure);
        false
    }

    /// Composes the configuration from the current state and sends it.
    ///
    /// # Errors
    ///
    /// - `Error::ModelUnknown` if no poll has reported the model token yet;
    ///   a notice is published and nothing is sent
    /// - `Error::StateUnknown` if a field needed by the configuration was
    ///   never observed nor set
    pub(super) async fn send_configuration(&self) -> Result<bool, Error> {
        let composed = ConfigurationCommand::compose(&self.state.lock());
        let command = match composed {
            Ok(command) => command,
            Err(Error::ModelUnknown) => {
                tracing::error!(
                    device = %self.id,
                    "Model number of the air condition unknown. Configuration cannot be sent"
                );
                self.notify(Notice::ConfigurationNotSent);
                return Err(Error::ModelUnknown);
            }
            Err(e) => {
                tracing::warn!(device = %self.id, error = %e, "Configuration not composed");
                return Err(e);
            }
        };

        Ok(self
            .try_send("send configuration", self.client.send_configuration(&command))
            .await)
    }

    /// Sends a raw code `repeats` times, `delay` apart.
    ///
    /// Codes starting with `01` go out as configuration-protocol commands,
    /// codes starting with `FE` as infrared codes along with the model token.
    /// Every repetition is attempted even if an earlier one failed.
    ///
    /// Returns how many sends the device accepted.
    ///
    /// # Errors
    ///
    /// Nothing is sent when an error is returned:
    ///
    /// - `Error::Value` if the code has neither prefix
    /// - `Error::ModelUnknown` for an infrared code before the model token is
    ///   known; a notice is published
    pub async fn send_command(
        &self,
        code: &str,
        repeats: u32,
        delay: Duration,
    ) -> Result<u32, Error> {
        let code: CommandCode = code.parse().inspect_err(|e| {
            tracing::error!(device = %self.id, error = %e, "Invalid IR command");
        })?;

        let model = self.state.lock().model().cloned();
        let model = match (&code, model) {
            (CommandCode::Infrared(_), None) => {
                tracing::error!(
                    device = %self.id,
                    "Model number of the air condition unknown. IR command cannot be sent"
                );
                self.notify(Notice::IrCommandNotSent);
                return Err(Error::ModelUnknown);
            }
            (_, model) => model,
        };

        let mut accepted = 0;
        for attempt in 0..repeats {
            if attempt > 0 {
                tokio::time::sleep(delay).await;
            }

            let sent = match (&code, &model) {
                (CommandCode::Configuration(raw), _) => {
                    self.try_send("send command", self.client.send_raw_command(raw))
                        .await
                }
                (CommandCode::Infrared(raw), Some(model)) => {
                    self.try_send("send infrared code", self.client.send_ir_code(model, raw))
                        .await
                }
                (CommandCode::Infrared(_), None) => false,
            };
            if sent {
                accepted += 1;
            }
        }

        Ok(accepted)
    }
}
