// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Target temperature bounds.

use crate::error::ValueError;

/// Inclusive range of accepted target temperatures, in degrees Celsius.
///
/// # Examples
///
/// ```
/// use ac_companion::types::TemperatureRange;
///
/// let range = TemperatureRange::new(16.0, 30.0).unwrap();
/// assert!(range.check(16.0).is_ok());
/// assert!(range.check(15.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureRange {
    min: f64,
    max: f64,
}

impl TemperatureRange {
    /// Step between accepted target temperatures.
    pub const STEP: f64 = 1.0;

    /// Creates a range.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidConfiguration` if `min` is greater than
    /// `max` or either bound is not finite.
    pub fn new(min: f64, max: f64) -> Result<Self, ValueError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ValueError::InvalidConfiguration(format!(
                "temperature range [{min}, {max}] is empty"
            )));
        }
        Ok(Self { min, max })
    }

    /// Returns the lower bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Validates a requested target temperature.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::TemperatureOutOfRange` if the value falls outside
    /// the range (NaN included).
    pub fn check(&self, value: f64) -> Result<f64, ValueError> {
        if (self.min..=self.max).contains(&value) {
            Ok(value)
        } else {
            Err(ValueError::TemperatureOutOfRange {
                min: self.min,
                max: self.max,
                actual: value,
            })
        }
    }
}

impl Default for TemperatureRange {
    fn default() -> Self {
        Self {
            min: 16.0,
            max: 30.0,
        }
    }
}
