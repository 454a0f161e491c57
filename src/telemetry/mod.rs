// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoding of incoming readings.
//!
//! Two kinds of data flow into a controller:
//!
//! - [`StatusReport`] - the companion's own model-and-state payload, fetched
//!   by every poll
//! - [`SensorEvent`] - state changes of the external temperature and power
//!   sensors bound to the climate entity
//!
//! # Examples
//!
//! ```
//! use ac_companion::protocol::StatusResponse;
//! use ac_companion::telemetry::{SensorEvent, StatusReport};
//!
//! let raw = StatusResponse::new(vec!["0105".into(), "0111".into()]);
//! let report = StatusReport::parse(&raw).unwrap();
//! assert!(report.fan_speed.is_none());
//!
//! let event = SensorEvent::new("22.5");
//! assert_eq!(event.temperature_celsius().unwrap(), Some(22.5));
//! ```

mod sensor_parser;
mod state_parser;

pub use sensor_parser::SensorEvent;
pub use state_parser::StatusReport;
