// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Climate event types.

use serde::Serialize;

use crate::state::{ClimateAttributes, StateChange};

use super::DeviceId;

/// Title under which learning notices are shown.
pub const REMOTE_NOTICE_TITLE: &str = "Xiaomi Miio Remote";

/// A message meant for the user rather than for logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Notice {
    /// An infrared code was captured.
    CommandLearned(String),
    /// The learning session timed out.
    NoCommandCaptured,
    /// A configuration could not be composed because the model is unknown.
    ConfigurationNotSent,
    /// An infrared code could not be sent because the model is unknown.
    IrCommandNotSent,
}

impl Notice {
    /// Returns the notice title.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::CommandLearned(_) | Self::NoCommandCaptured => REMOTE_NOTICE_TITLE,
            Self::ConfigurationNotSent | Self::IrCommandNotSent => "Xiaomi AC Companion",
        }
    }

    /// Returns the notice text.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::CommandLearned(code) => format!("Received command is: {code}"),
            Self::NoCommandCaptured => "Timeout. No infrared command captured".to_string(),
            Self::ConfigurationNotSent => {
                "Model number of the air condition unknown. Configuration cannot be sent."
                    .to_string()
            }
            Self::IrCommandNotSent => {
                "Model number of the air condition unknown. IR command cannot be sent.".to_string()
            }
        }
    }
}

/// Events emitted by climate controllers.
#[derive(Debug, Clone, Serialize)]
pub enum ClimateEvent {
    /// The availability flag flipped.
    AvailabilityChanged {
        /// The binding concerned.
        device_id: DeviceId,
        /// New availability.
        available: bool,
        /// Fault that caused the loss of availability, if any.
        error: Option<String>,
    },

    /// The controller state changed.
    StateUpdated {
        /// The binding concerned.
        device_id: DeviceId,
        /// The user edit, or `None` for a poll or sensor update.
        change: Option<StateChange>,
        /// Attributes after the change.
        attributes: Box<ClimateAttributes>,
    },

    /// A user-visible notice.
    Notice {
        /// The binding concerned.
        device_id: DeviceId,
        /// The notice.
        notice: Notice,
    },
}

impl ClimateEvent {
    /// Returns the device ID associated with this event.
    #[must_use]
    pub fn device_id(&self) -> DeviceId {
        match self {
            Self::AvailabilityChanged { device_id, .. }
            | Self::StateUpdated { device_id, .. }
            | Self::Notice { device_id, .. } => *device_id,
        }
    }

    /// Returns `true` if this is an availability event.
    #[must_use]
    pub fn is_availability(&self) -> bool {
        matches!(self, Self::AvailabilityChanged { .. })
    }

    /// Returns the notice, if this is a notice event.
    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Self::Notice { notice, .. } => Some(notice),
            _ => None,
        }
    }

    /// Creates an available event.
    #[must_use]
    pub fn available(device_id: DeviceId) -> Self {
        Self::AvailabilityChanged {
            device_id,
            available: true,
            error: None,
        }
    }

    /// Creates an unavailable event with the fault that caused it.
    #[must_use]
    pub fn unavailable(device_id: DeviceId, error: impl Into<String>) -> Self {
        Self::AvailabilityChanged {
            device_id,
            available: false,
            error: Some(error.into()),
        }
    }
}
