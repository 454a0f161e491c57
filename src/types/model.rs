// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Air conditioner model token.

use std::fmt;

use serde::Serialize;

use crate::error::ValueError;

/// Opaque identifier of the air conditioner model behind the companion.
///
/// The device reports it as a hex string in every status payload. It is
/// passed back verbatim to commands that need it and never interpreted.
///
/// # Examples
///
/// ```
/// use ac_companion::types::ModelToken;
///
/// let token = ModelToken::new("010500978022222102").unwrap();
/// assert_eq!(token.as_str(), "010500978022222102");
/// assert!(ModelToken::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ModelToken(String);

impl ModelToken {
    /// Creates a model token from its hex representation.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidModelToken` if the string is empty or
    /// contains non-hexadecimal characters.
    pub fn new(hex: impl Into<String>) -> Result<Self, ValueError> {
        let hex = hex.into();
        if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValueError::InvalidModelToken(hex));
        }
        Ok(Self(hex))
    }

    /// Returns the token as sent to the device.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
