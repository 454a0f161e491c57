// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! AC Companion - drive Xiaomi air conditioner companions as climate devices.
//!
//! The companion is a bridge plugged between the wall and an air conditioner.
//! It relays the air conditioner's own configuration protocol and replays
//! learned infrared codes. This crate turns it into a climate entity:
//!
//! - **State cache**: the last polled status merged with the user's edits
//! - **Mode translation**: HVAC, fan and swing modes to device codes and back
//! - **Configuration**: one ordered command carrying power, mode, temperature,
//!   fan, swing and LED, resuming the last operation when switched back on
//! - **Infrared learning**: a bounded, cancellable capture session
//! - **Raw commands**: configuration-protocol and learned infrared codes
//!
//! The encrypted transport is not part of this crate: implement
//! [`DeviceClient`] on top of one.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use ac_companion::{CompanionConfig, Controller, HvacMode, LearnSlot};
//!
//! #[tokio::main]
//! async fn main() -> ac_companion::Result<()> {
//!     let config = CompanionConfig::new(
//!         "192.168.1.40",
//!         "0123456789abcdef0123456789abcdef",
//!         "sensor.living_room_temperature",
//!     );
//!
//!     // `client` implements `DeviceClient`.
//!     let controller = Arc::new(Controller::connect(client, &config).await?);
//!     let _poller = controller.spawn_poll_loop();
//!
//!     controller.update().await;
//!     controller.set_temperature(Some(22.0), Some(HvacMode::Cool)).await?;
//!
//!     let outcome = controller
//!         .learn_command(LearnSlot::DEFAULT, Duration::from_secs(10))
//!         .await?;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```
//!
//! # Events
//!
//! Controllers publish [`ClimateEvent`]s: availability changes, state updates
//! with the rendered attributes, and user notices such as a learned code or
//! a refused configuration.
//!
//! ```ignore
//! let mut events = controller.subscribe();
//! while let Ok(event) = events.recv().await {
//!     if let Some(notice) = event.notice() {
//!         println!("{}: {}", notice.title(), notice.message());
//!     }
//! }
//! ```

pub mod command;
pub mod controller;
pub mod error;
pub mod event;
pub mod learn;
pub mod manager;
pub mod mapping;
pub mod protocol;
pub mod state;
pub mod telemetry;
pub mod types;

pub use command::{Command, ConfigurationCommand};
pub use controller::Controller;
pub use error::{Error, ParseError, ProtocolError, Result, ValueError};
pub use event::{ClimateEvent, DeviceId, EventBus, Notice};
pub use learn::{LearnOutcome, LearnSession, LearnState};
pub use manager::{CompanionConfig, CompanionRegistry, ServiceCall, ServiceReply};
pub use protocol::{CommandResponse, DeviceClient, DeviceInfo, StatusResponse};
pub use state::{ClimateAttributes, ControllerState, DeviceSnapshot, StateChange};
pub use telemetry::{SensorEvent, StatusReport};
pub use types::{
    CommandCode, FanMode, FanSpeed, HvacMode, Led, LearnSlot, ModelToken, OperationMode, Power,
    SwingMode, SwingPosition, TemperatureRange,
};
