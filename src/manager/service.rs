// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host services exposed by the integration.

use std::time::Duration;

use crate::learn::{DEFAULT_LEARN_TIMEOUT, LearnOutcome};
use crate::types::LearnSlot;

/// Sends per `send_command` call when none is given.
pub const DEFAULT_REPEATS: u32 = 1;

/// Pause between repeated sends when none is given.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(400);

/// A service call addressed to one or more controllers.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use ac_companion::manager::ServiceCall;
///
/// let call = ServiceCall::send_command("FE0123").with_repeats(3);
/// assert_eq!(
///     call,
///     ServiceCall::SendCommand {
///         command: "FE0123".to_string(),
///         repeats: 3,
///         delay: Duration::from_millis(400),
///     }
/// );
/// assert_eq!(call.name(), "climate_send_command");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCall {
    /// Learn an infrared code.
    LearnCommand {
        /// Slot the code is stored in.
        slot: LearnSlot,
        /// Time allowed to press the remote key.
        timeout: Duration,
    },
    /// Send a raw or learned code.
    SendCommand {
        /// Code starting with `01` or `FE`.
        command: String,
        /// Number of sends.
        repeats: u32,
        /// Pause between sends.
        delay: Duration,
    },
}

impl ServiceCall {
    /// Learning on the default slot with the default timeout.
    #[must_use]
    pub fn learn_command() -> Self {
        Self::LearnCommand {
            slot: LearnSlot::DEFAULT,
            timeout: DEFAULT_LEARN_TIMEOUT,
        }
    }

    /// Sending `command` once.
    #[must_use]
    pub fn send_command(command: impl Into<String>) -> Self {
        Self::SendCommand {
            command: command.into(),
            repeats: DEFAULT_REPEATS,
            delay: DEFAULT_DELAY,
        }
    }

    /// Sets the learning slot. No effect on other calls.
    #[must_use]
    pub fn with_slot(mut self, value: LearnSlot) -> Self {
        if let Self::LearnCommand { slot, .. } = &mut self {
            *slot = value;
        }
        self
    }

    /// Sets the learning timeout. No effect on other calls.
    #[must_use]
    pub fn with_timeout(mut self, value: Duration) -> Self {
        if let Self::LearnCommand { timeout, .. } = &mut self {
            *timeout = value;
        }
        self
    }

    /// Sets the number of sends. No effect on other calls.
    #[must_use]
    pub fn with_repeats(mut self, value: u32) -> Self {
        if let Self::SendCommand { repeats, .. } = &mut self {
            *repeats = value;
        }
        self
    }

    /// Sets the pause between sends. No effect on other calls.
    #[must_use]
    pub fn with_delay(mut self, value: Duration) -> Self {
        if let Self::SendCommand { delay, .. } = &mut self {
            *delay = value;
        }
        self
    }

    /// Returns the service name registered with the host.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LearnCommand { .. } => "climate_learn_command",
            Self::SendCommand { .. } => "climate_send_command",
        }
    }
}

/// What a controller did with a service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceReply {
    /// Result of the learning session.
    Learned(LearnOutcome),
    /// Number of sends the device accepted.
    Sent(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn learn_defaults() {
        let call = ServiceCall::learn_command();
        assert_eq!(
            call,
            ServiceCall::LearnCommand {
                slot: LearnSlot::DEFAULT,
                timeout: Duration::from_secs(10),
            }
        );
        assert_eq!(call.name(), "climate_learn_command");
    }

    #[test]
    fn builders_only_touch_their_variant() {
        let call = ServiceCall::learn_command()
            .with_repeats(5)
            .with_timeout(Duration::from_secs(3));
        assert_eq!(
            call,
            ServiceCall::LearnCommand {
                slot: LearnSlot::DEFAULT,
                timeout: Duration::from_secs(3),
            }
        );

        let call = ServiceCall::send_command("0100").with_slot(LearnSlot::new(5).unwrap());
        assert_eq!(call, ServiceCall::send_command("0100"));
    }
}
