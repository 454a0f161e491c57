// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Storage slot for infrared learning.

use std::fmt;

use crate::error::ValueError;

/// Storage slot used by the device while learning an infrared code.
///
/// # Examples
///
/// ```
/// use ac_companion::types::LearnSlot;
///
/// assert_eq!(LearnSlot::default().value(), 30);
/// assert!(LearnSlot::new(1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LearnSlot(u32);

impl LearnSlot {
    /// Lowest usable slot.
    pub const MIN: u32 = 2;

    /// Highest usable slot.
    pub const MAX: u32 = 1_000_000;

    /// Slot used when the caller does not pick one.
    pub const DEFAULT: Self = Self(30);

    /// Creates a learning slot.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::SlotOutOfRange` if the slot is outside
    /// [`MIN`](Self::MIN)..=[`MAX`](Self::MAX).
    pub fn new(slot: u32) -> Result<Self, ValueError> {
        if !(Self::MIN..=Self::MAX).contains(&slot) {
            return Err(ValueError::SlotOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: slot,
            });
        }
        Ok(Self(slot))
    }

    /// Returns the slot number.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl Default for LearnSlot {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for LearnSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
