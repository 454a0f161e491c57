// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `ac_companion` library.
//!
//! This module provides the error hierarchy used across the library: value
//! validation, device communication, status decoding, and the engine-level
//! conditions raised by the climate controller.

use thiserror::Error;

use crate::protocol::CommandResponse;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A value was rejected before any device call was made.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The device client reported a transport or protocol fault.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// A device status payload could not be decoded.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The device answered, but not with the success token.
    #[error("device answered {0} instead of the success token")]
    LogicalFailure(CommandResponse),

    /// The air conditioner model token has not been learned yet.
    #[error("model number of the air conditioner unknown")]
    ModelUnknown,

    /// A learning session is already running on this device.
    #[error("a learning session is already active")]
    SessionBusy,

    /// The initial handshake with the device failed.
    #[error("device unavailable or token incorrect: {0}")]
    NotReady(ProtocolError),

    /// A field required to compose a configuration has never been polled.
    #[error("device state not yet known: {0}")]
    StateUnknown(&'static str),

    /// Device was not found in the registry.
    #[error("device not found")]
    DeviceNotFound,
}

/// Errors related to value validation.
///
/// Every variant is raised before a device call is attempted.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A target temperature is outside the configured range.
    #[error("temperature {actual} is out of range [{min}, {max}]")]
    TemperatureOutOfRange {
        /// Minimum allowed temperature.
        min: f64,
        /// Maximum allowed temperature.
        max: f64,
        /// The rejected temperature.
        actual: f64,
    },

    /// A learning slot is outside the accepted range.
    #[error("learning slot {actual} is out of range [{min}, {max}]")]
    SlotOutOfRange {
        /// Minimum slot number.
        min: u32,
        /// Maximum slot number.
        max: u32,
        /// The rejected slot.
        actual: u32,
    },

    /// A command code carries neither the configuration nor the infrared prefix.
    #[error("invalid IR command: {0}")]
    UnrecognizedCommandPrefix(String),

    /// The device reported a code that has no known meaning.
    #[error("unrecognized device value {value:?} for {field}")]
    UnrecognizedDeviceValue {
        /// The status field being decoded.
        field: &'static str,
        /// The raw value reported by the device.
        value: String,
    },

    /// A mode name supplied by the host is not part of the vocabulary.
    #[error("invalid {kind} mode: {name}")]
    InvalidModeName {
        /// Which vocabulary was searched (hvac, fan, swing).
        kind: &'static str,
        /// The rejected name.
        name: String,
    },

    /// A configuration entry is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A model token is empty or not hexadecimal.
    #[error("invalid model token: {0:?}")]
    InvalidModelToken(String),
}

/// Faults raised by a device client implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Connection to the device failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// The device answered with an error payload.
    #[error("device error {code}: {message}")]
    DeviceException {
        /// Error code reported by the device.
        code: i64,
        /// Error message reported by the device.
        message: String,
    },

    /// The response could not be understood at all.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Errors related to decoding device status payloads.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing and no earlier value exists.
    #[error("missing field in status: {0}")]
    MissingField(&'static str),

    /// A field is present but not in the expected shape.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: &'static str,
        /// Description of the parsing failure.
        message: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_error_display() {
        let err = ValueError::TemperatureOutOfRange {
            min: 16.0,
            max: 30.0,
            actual: 15.0,
        };
        assert_eq!(err.to_string(), "temperature 15 is out of range [16, 30]");
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::UnrecognizedCommandPrefix("99AB".to_string());
        let err: Error = value_err.into();
        assert!(matches!(
            err,
            Error::Value(ValueError::UnrecognizedCommandPrefix(_))
        ));
    }

    #[test]
    fn unrecognized_value_display() {
        let err = ValueError::UnrecognizedDeviceValue {
            field: "fan speed",
            value: "7".to_string(),
        };
        assert_eq!(err.to_string(), "unrecognized device value \"7\" for fan speed");
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::MissingField("swing");
        assert_eq!(err.to_string(), "missing field in status: swing");
    }

    #[test]
    fn model_unknown_display() {
        assert_eq!(
            Error::ModelUnknown.to_string(),
            "model number of the air conditioner unknown"
        );
    }
}
