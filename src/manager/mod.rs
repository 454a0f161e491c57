// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration layer for several companion bindings.
//!
//! [`CompanionConfig`] describes one binding. The [`CompanionRegistry`] is
//! owned by the host integration: it connects controllers, shares one event
//! bus between them and fans [`ServiceCall`]s out to the targeted
//! controllers. Controllers themselves know nothing about each other.
//!
//! # Examples
//!
//! ```ignore
//! use ac_companion::manager::{CompanionConfig, CompanionRegistry, ServiceCall};
//!
//! let registry = CompanionRegistry::new();
//! let mut events = registry.subscribe();
//!
//! let config = CompanionConfig::new("192.168.1.40", token, "sensor.living_room");
//! let id = registry.connect(client, &config).await?;
//!
//! // Without targets the call reaches every registered controller.
//! registry.dispatch(&ServiceCall::send_command("FE0123456789"), None).await;
//! ```

mod companion_config;
mod registry;
mod service;

pub use companion_config::{CompanionConfig, DEFAULT_NAME, TOKEN_LENGTH};
pub use registry::CompanionRegistry;
pub use service::{DEFAULT_DELAY, DEFAULT_REPEATS, ServiceCall, ServiceReply};
