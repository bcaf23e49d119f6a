// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `EmberLink` library.
//!
//! This module provides a layered error hierarchy: value validation,
//! frame encoding/decoding, cloud transport, and device operations.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when
/// interacting with a cloud-connected fireplace.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// A parameter could not be encoded for the wire.
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// A received frame could not be decoded.
    #[error("malformed frame: {0}")]
    Frame(#[from] MalformedFrame),

    /// Error occurred during cloud communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred during device operations.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),

    /// The fire does not support the requested feature.
    #[error("fireplace does not support this feature")]
    FeatureNotSupported,
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// An invalid hex color string was provided.
    #[error("invalid hex color: {0}")]
    InvalidHexColor(String),

    /// A fire serial was empty or contained whitespace.
    #[error("invalid fire serial: {0:?}")]
    InvalidFireId(String),

    /// A firmware version string could not be parsed.
    #[error("invalid firmware version: {0}")]
    InvalidVersion(String),
}

/// Errors raised while encoding a parameter for the wire.
///
/// All checks run before any bytes are written, so a partial or corrupt
/// frame is never emitted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// Heat setpoint is outside the device-supported span.
    #[error("setpoint {actual} is outside the device range [{min}, {max}] tenths of \u{b0}C")]
    SetpointOutOfRange {
        /// Minimum writable setpoint in tenths of a degree Celsius.
        min: u16,
        /// Maximum writable setpoint in tenths of a degree Celsius.
        max: u16,
        /// The setpoint that was requested.
        actual: u16,
    },

    /// Sleep timer exceeds the device maximum.
    #[error("sleep timer of {actual} min exceeds the device maximum of {max} min")]
    TimerTooLong {
        /// Maximum timer duration in minutes.
        max: u16,
        /// The duration that was requested.
        actual: u16,
    },

    /// An unrecognized parameter cannot be re-encoded.
    #[error("cannot encode unrecognized parameter with tag {tag:#04x}")]
    UnknownParameter {
        /// The raw tag carried by the unrecognized parameter.
        tag: u8,
    },
}

/// Errors raised while decoding a received frame.
///
/// A malformed frame is always surfaced to the caller; the decoder never
/// truncates, pads, or returns a partially populated parameter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedFrame {
    /// The buffer ends before the fixed-size header.
    #[error("buffer of {actual} bytes is shorter than the {expected}-byte header")]
    HeaderTooShort {
        /// Header size in bytes.
        expected: usize,
        /// Bytes actually available.
        actual: usize,
    },

    /// The first byte is not the parameter frame marker.
    #[error("unexpected frame type {actual:#04x}, expected {expected:#04x}")]
    UnexpectedFrameType {
        /// The expected frame-type marker.
        expected: u8,
        /// The byte actually found.
        actual: u8,
    },

    /// The header declares more payload than the buffer holds.
    #[error("declared payload of {declared} bytes exceeds the {available} bytes remaining")]
    LengthOverrun {
        /// Payload length declared in the header.
        declared: usize,
        /// Bytes remaining after the header.
        available: usize,
    },

    /// The payload size does not match the fixed size for the tag.
    #[error("tag {tag:#04x} requires a {expected}-byte payload, got {actual}")]
    PayloadSizeMismatch {
        /// The parameter tag.
        tag: u8,
        /// Payload size required by the tag.
        expected: usize,
        /// Payload size actually declared.
        actual: usize,
    },

    /// A closed-enum or flag byte holds a value outside its set.
    #[error("invalid value {value:#04x} for field {field}")]
    InvalidFieldValue {
        /// Name of the offending field.
        field: &'static str,
        /// The raw byte found on the wire.
        value: u8,
    },
}

/// Errors related to cloud communication.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection to the cloud API failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The API rejected the bearer token.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// A bearer token could not be obtained from the provider.
    #[error("token acquisition failed: {0}")]
    Token(String),

    /// The overview envelope could not be parsed.
    #[error("invalid overview response: {0}")]
    InvalidResponse(String),
}

/// Errors related to device operations.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// Device does not support the requested feature.
    #[error("fireplace does not support {feature}")]
    UnsupportedFeature {
        /// The feature that is not supported.
        feature: String,
    },

    /// Command was rejected by the cloud API.
    #[error("command rejected: {0}")]
    CommandRejected(String),

    /// Device configuration is invalid.
    #[error("invalid device configuration: {0}")]
    InvalidConfiguration(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            min: 0,
            max: 3,
            actual: 7,
        };
        assert_eq!(err.to_string(), "value 7 is out of range [0, 3]");
    }

    #[test]
    fn error_from_encoding_error() {
        let enc = EncodingError::TimerTooLong {
            max: 180,
            actual: 240,
        };
        let err: Error = enc.into();
        assert!(matches!(
            err,
            Error::Encoding(EncodingError::TimerTooLong { actual: 240, .. })
        ));
    }

    #[test]
    fn malformed_frame_display() {
        let err = MalformedFrame::PayloadSizeMismatch {
            tag: 0x03,
            expected: 2,
            actual: 1,
        };
        assert_eq!(err.to_string(), "tag 0x03 requires a 2-byte payload, got 1");
    }

    #[test]
    fn device_error_display() {
        let err = DeviceError::UnsupportedFeature {
            feature: "flame color".to_string(),
        };
        assert_eq!(err.to_string(), "fireplace does not support flame color");
    }
}
