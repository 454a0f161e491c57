// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw command codes accepted by the send-command service.

use std::str::FromStr;

use crate::error::ValueError;

/// Prefix of codes in the device's own configuration protocol.
pub const CONFIGURATION_PREFIX: &str = "01";

/// Prefix of learned infrared codes.
pub const INFRARED_PREFIX: &str = "FE";

/// A raw command code, classified by its prefix.
///
/// # Examples
///
/// ```
/// use ac_companion::types::CommandCode;
///
/// let code: CommandCode = "FE00112233".parse().unwrap();
/// assert!(matches!(code, CommandCode::Infrared(_)));
/// assert!("9900".parse::<CommandCode>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandCode {
    /// A configuration-protocol command, sent as is.
    Configuration(String),
    /// A learned infrared code, sent together with the model token.
    Infrared(String),
}

impl CommandCode {
    /// Returns the raw code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Configuration(code) | Self::Infrared(code) => code,
        }
    }
}

impl FromStr for CommandCode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with(CONFIGURATION_PREFIX) {
            Ok(Self::Configuration(s.to_string()))
        } else if s.starts_with(INFRARED_PREFIX) {
            Ok(Self::Infrared(s.to_string()))
        } else {
            Err(ValueError::UnrecognizedCommandPrefix(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_prefix() {
        let code: CommandCode = "0180111111".parse().unwrap();
        assert_eq!(code, CommandCode::Configuration("0180111111".to_string()));
        assert_eq!(code.as_str(), "0180111111");
    }

    #[test]
    fn prefix_is_case_sensitive() {
        assert!("fe0011".parse::<CommandCode>().is_err());
    }

    #[test]
    fn empty_code_is_rejected() {
        assert!(matches!(
            "".parse::<CommandCode>(),
            Err(ValueError::UnrecognizedCommandPrefix(_))
        ));
    }
}
