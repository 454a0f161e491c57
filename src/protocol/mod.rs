// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Boundary to the companion device's RPC client.
//!
//! The encrypted transport and discovery are not part of this crate. Anything
//! able to issue the companion's RPC calls implements [`DeviceClient`]; the
//! controller only sees the decoded payloads defined here.

use std::fmt;
use std::future::Future;

use serde::Deserialize;

use crate::command::ConfigurationCommand;
use crate::error::ProtocolError;
use crate::types::{LearnSlot, ModelToken};

/// Raw result of a mutating device call.
///
/// The device acknowledges a command with the single token `["ok"]`; any other
/// payload is a logical failure even when no fault was raised.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct CommandResponse {
    body: serde_json::Value,
}

impl CommandResponse {
    /// Creates a response from the decoded `result` member of an RPC reply.
    #[must_use]
    pub fn new(body: serde_json::Value) -> Self {
        Self { body }
    }

    /// Creates the success token.
    #[must_use]
    pub fn ok() -> Self {
        Self::new(serde_json::json!(["ok"]))
    }

    /// Creates a response holding a single string, as returned while learning.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(serde_json::Value::Array(vec![serde_json::Value::String(
            message.into(),
        )]))
    }

    /// Returns the raw body.
    #[must_use]
    pub fn body(&self) -> &serde_json::Value {
        &self.body
    }

    /// Returns `true` if the body is exactly the success token.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.body
            .as_array()
            .is_some_and(|items| items.len() == 1 && items[0].as_str() == Some("ok"))
    }

    /// Returns the first string of an array body, or the body itself if it is
    /// a string.
    #[must_use]
    pub fn first_str(&self) -> Option<&str> {
        match &self.body {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Array(items) => items.first().and_then(serde_json::Value::as_str),
            _ => None,
        }
    }
}

impl fmt::Display for CommandResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.body)
    }
}

/// Identity reported by the device during the handshake.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeviceInfo {
    /// Product model, e.g. `lumi.acpartner.v3`.
    pub model: String,
    /// MAC address.
    #[serde(rename = "mac")]
    pub mac_address: String,
    /// Firmware version.
    #[serde(rename = "fw_ver")]
    pub firmware_version: String,
    /// Hardware version.
    #[serde(rename = "hw_ver")]
    pub hardware_version: String,
}

/// Raw status payload: `[model_hex, state, load_power]`.
///
/// Decode it with [`crate::telemetry::StatusReport::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct StatusResponse {
    fields: Vec<String>,
}

impl StatusResponse {
    /// Creates a status payload from its raw fields.
    #[must_use]
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Returns the raw field at `index`, if the device sent it.
    #[must_use]
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }
}

/// RPC surface of the air conditioner companion.
///
/// Every method may fail with a [`ProtocolError`], which the controller treats
/// as a device fault.
pub trait DeviceClient: Send + Sync {
    /// Reads the device identity.
    fn info(&self) -> impl Future<Output = Result<DeviceInfo, ProtocolError>> + Send;

    /// Reads the current model and state.
    fn status(&self) -> impl Future<Output = Result<StatusResponse, ProtocolError>> + Send;

    /// Switches the air conditioner on.
    fn on(&self) -> impl Future<Output = Result<CommandResponse, ProtocolError>> + Send;

    /// Switches the air conditioner off.
    fn off(&self) -> impl Future<Output = Result<CommandResponse, ProtocolError>> + Send;

    /// Sends a complete configuration in one call.
    fn send_configuration(
        &self,
        command: &ConfigurationCommand,
    ) -> impl Future<Output = Result<CommandResponse, ProtocolError>> + Send;

    /// Sends a raw configuration-protocol command.
    fn send_raw_command(
        &self,
        code: &str,
    ) -> impl Future<Output = Result<CommandResponse, ProtocolError>> + Send;

    /// Sends a learned infrared code.
    fn send_ir_code(
        &self,
        model: &ModelToken,
        code: &str,
    ) -> impl Future<Output = Result<CommandResponse, ProtocolError>> + Send;

    /// Arms infrared capture on `slot`.
    fn learn_start(
        &self,
        slot: LearnSlot,
    ) -> impl Future<Output = Result<CommandResponse, ProtocolError>> + Send;

    /// Reads the capture result for `slot`.
    fn learn_poll(
        &self,
        slot: LearnSlot,
    ) -> impl Future<Output = Result<CommandResponse, ProtocolError>> + Send;

    /// Disarms infrared capture on `slot`.
    fn learn_stop(
        &self,
        slot: LearnSlot,
    ) -> impl Future<Output = Result<CommandResponse, ProtocolError>> + Send;
}
