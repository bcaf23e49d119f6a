// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parameter encoding.

use crate::error::EncodingError;

use super::frame::{HEADER_LEN, make_header};
use super::parameter::Parameter;

/// Minimum writable heat setpoint, tenths of a degree Celsius (10.0 °C,
/// the device's 50 °F limit).
pub const SETPOINT_MIN_TENTHS: u16 = 100;

/// Maximum writable heat setpoint, tenths of a degree Celsius (32.0 °C,
/// the device's 90 °F limit).
pub const SETPOINT_MAX_TENTHS: u16 = 320;

/// Maximum sleep timer the device accepts, in minutes (three hours).
pub const SLEEP_TIMER_MAX_MIN: u16 = 180;

/// Encodes a parameter into a complete frame (header plus payload).
///
/// All range checks run before any bytes are written; a partial frame is
/// never produced. A mis-set heat setpoint is a safety-relevant bug
/// class, so out-of-range values are rejected rather than clamped.
///
/// # Errors
///
/// Returns [`EncodingError`] when a heat setpoint lies outside the
/// device span, a sleep timer exceeds the device maximum, or the
/// parameter is [`Parameter::Unknown`].
///
/// # Examples
///
/// ```
/// use emberlink::codec::{Parameter, encode_parameter};
/// use emberlink::types::Temperature;
///
/// let frame = encode_parameter(&Parameter::HeatSetpoint(Temperature::from_tenths(215)))?;
/// assert_eq!(frame, [0x50, 0x03, 0x00, 0x02, 0x00, 0xD7]);
/// # Ok::<(), emberlink::error::EncodingError>(())
/// ```
pub fn encode_parameter(param: &Parameter) -> Result<Vec<u8>, EncodingError> {
    let payload = encode_payload(param)?;
    // Known payloads are at most 4 bytes; the cast cannot truncate.
    #[allow(clippy::cast_possible_truncation)]
    let len = payload.len() as u16;
    let mut frame = Vec::with_capacity(HEADER_LEN + payload.len());
    frame.extend_from_slice(&make_header(param.tag(), len));
    frame.extend_from_slice(&payload);
    Ok(frame)
}

fn encode_payload(param: &Parameter) -> Result<Vec<u8>, EncodingError> {
    match param {
        Parameter::Mode(mode) => Ok(vec![mode.wire_value()]),
        Parameter::FlameEffect(effect) => Ok(vec![effect.wire_value()]),
        Parameter::HeatSetpoint(setpoint) => {
            let tenths = setpoint.tenths();
            if !(SETPOINT_MIN_TENTHS..=SETPOINT_MAX_TENTHS).contains(&tenths) {
                return Err(EncodingError::SetpointOutOfRange {
                    min: SETPOINT_MIN_TENTHS,
                    max: SETPOINT_MAX_TENTHS,
                    actual: tenths,
                });
            }
            Ok(tenths.to_be_bytes().to_vec())
        }
        Parameter::SleepTimer(timer) => {
            let minutes = timer.minutes();
            if minutes > SLEEP_TIMER_MAX_MIN {
                return Err(EncodingError::TimerTooLong {
                    max: SLEEP_TIMER_MAX_MIN,
                    actual: minutes,
                });
            }
            Ok(minutes.to_be_bytes().to_vec())
        }
        Parameter::FlameColor(color) => Ok(vec![
            color.red(),
            color.green(),
            color.blue(),
            color.white(),
        ]),
        Parameter::Firmware(version) => {
            Ok(vec![version.major(), version.minor(), version.patch()])
        }
        Parameter::ErrorStatus(code) => Ok(vec![code.wire_value()]),
        Parameter::HeatMode(mode) => Ok(vec![mode.wire_value()]),
        Parameter::Light(light) => Ok(vec![u8::from(light.enabled), light.level.value()]),
        Parameter::Pilot(lit) => Ok(vec![u8::from(*lit)]),
        Parameter::RoomTemperature(temp) => Ok(temp.tenths().to_be_bytes().to_vec()),
        Parameter::Unknown { tag, .. } => Err(EncodingError::UnknownParameter { tag: *tag }),
    }
}
