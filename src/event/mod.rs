// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event system for climate controllers.
//!
//! Controllers publish availability changes, state changes and user-visible
//! notices on an [`EventBus`], which uses tokio's broadcast channel so any
//! number of subscribers receive every event.
//!
//! # Examples
//!
//! ```
//! use ac_companion::event::{ClimateEvent, DeviceId, EventBus};
//!
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//!
//! bus.publish(ClimateEvent::available(DeviceId::new()));
//! assert!(rx.try_recv().unwrap().is_availability());
//! ```

mod climate_event;
mod device_id;
mod event_bus;

pub use climate_event::{ClimateEvent, Notice, REMOTE_NOTICE_TITLE};
pub use device_id::DeviceId;
pub use event_bus::EventBus;
