// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Companion command definitions.
//!
//! The companion speaks a JSON-RPC dialect: every call is a method name plus
//! an ordered parameter list. Commands that carry more than a scalar argument
//! are modelled as typed values implementing [`Command`], so a
//! [`DeviceClient`](crate::protocol::DeviceClient) implementation can encode
//! them without knowing their meaning.
//!
//! | Command Type | Method | Params |
//! |-------------|--------|--------|
//! | [`ConfigurationCommand`] | `send_configuration` | model, power, mode, temperature, fan, swing, led |
//!
//! # Examples
//!
//! ```
//! use ac_companion::command::{Command, ConfigurationCommand};
//! use ac_companion::types::{FanSpeed, Led, ModelToken, OperationMode, Power, SwingPosition};
//!
//! let cmd = ConfigurationCommand {
//!     model: ModelToken::new("0105").unwrap(),
//!     power: Power::On,
//!     mode: OperationMode::Cool,
//!     temperature: 22,
//!     fan_speed: FanSpeed::Auto,
//!     swing: SwingPosition::Off,
//!     led: Led::Off,
//! };
//!
//! assert_eq!(cmd.method(), "send_configuration");
//! assert_eq!(cmd.params()[3], 22);
//! ```

mod configuration;

pub use configuration::ConfigurationCommand;

/// A command that can be sent to the companion.
pub trait Command {
    /// Returns the RPC method name.
    fn method(&self) -> &'static str;

    /// Returns the ordered RPC parameters.
    fn params(&self) -> serde_json::Value;

    /// Returns the request body for a given request id.
    fn to_request(&self, id: u32) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "method": self.method(),
            "params": self.params(),
        })
    }
}
