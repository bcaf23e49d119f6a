// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parameter decoding.

use crate::error::MalformedFrame;
use crate::types::{
    ErrorCode, FirmwareVersion, FlameEffect, HeatMode, LightLevel, LightSettings, OperatingMode,
    RgbwColor, Temperature, TimerDuration,
};

use super::frame::{HEADER_LEN, parse_header};
use super::parameter::{Parameter, payload_size, tag};

/// Decodes one parameter frame.
///
/// Unrecognized tags are not an error: they decode to
/// [`Parameter::Unknown`] carrying the raw tag and payload, so callers
/// stay compatible with firmware that introduces new parameter types.
/// Numeric fields are decoded leniently (the device may report values
/// outside the writable span); closed-enum and flag bytes outside their
/// sets fail, since this codec's encoder can never produce them.
///
/// # Errors
///
/// Returns [`MalformedFrame`] when the header is invalid, the payload
/// size does not match the tag's fixed size, or a closed-enum/flag byte
/// is out of set.
///
/// # Examples
///
/// ```
/// use emberlink::codec::{Parameter, decode_parameter};
/// use emberlink::types::Temperature;
///
/// let param = decode_parameter(&[0x50, 0x03, 0x00, 0x02, 0x00, 0xD7])?;
/// assert_eq!(param, Parameter::HeatSetpoint(Temperature::from_tenths(215)));
/// # Ok::<(), emberlink::error::MalformedFrame>(())
/// ```
pub fn decode_parameter(buffer: &[u8]) -> Result<Parameter, MalformedFrame> {
    let (tag, declared) = parse_header(buffer)?;
    let payload = &buffer[HEADER_LEN..HEADER_LEN + declared];

    let Some(expected) = payload_size(tag) else {
        return Ok(Parameter::Unknown {
            tag,
            payload: payload.to_vec(),
        });
    };
    if payload.len() != expected {
        return Err(MalformedFrame::PayloadSizeMismatch {
            tag,
            expected,
            actual: payload.len(),
        });
    }

    let param = match tag {
        tag::MODE => Parameter::Mode(
            OperatingMode::from_wire(payload[0]).ok_or(MalformedFrame::InvalidFieldValue {
                field: "operating mode",
                value: payload[0],
            })?,
        ),
        tag::FLAME_EFFECT => Parameter::FlameEffect(FlameEffect::from_wire(payload[0]).ok_or(
            MalformedFrame::InvalidFieldValue {
                field: "flame effect",
                value: payload[0],
            },
        )?),
        tag::HEAT_SETPOINT => Parameter::HeatSetpoint(Temperature::from_tenths(
            u16::from_be_bytes([payload[0], payload[1]]),
        )),
        tag::SLEEP_TIMER => Parameter::SleepTimer(TimerDuration::from_minutes(
            u16::from_be_bytes([payload[0], payload[1]]),
        )),
        tag::FLAME_COLOR => Parameter::FlameColor(RgbwColor::new(
            payload[0], payload[1], payload[2], payload[3],
        )),
        tag::FIRMWARE => {
            Parameter::Firmware(FirmwareVersion::new(payload[0], payload[1], payload[2]))
        }
        tag::ERROR_STATUS => Parameter::ErrorStatus(ErrorCode::from_wire(payload[0]).ok_or(
            MalformedFrame::InvalidFieldValue {
                field: "error code",
                value: payload[0],
            },
        )?),
        tag::HEAT_MODE => Parameter::HeatMode(HeatMode::from_wire(payload[0]).ok_or(
            MalformedFrame::InvalidFieldValue {
                field: "heat mode",
                value: payload[0],
            },
        )?),
        tag::LIGHT => Parameter::Light(LightSettings::new(
            decode_flag(payload[0], "light enabled")?,
            LightLevel::new(payload[1]).map_err(|_| MalformedFrame::InvalidFieldValue {
                field: "light level",
                value: payload[1],
            })?,
        )),
        tag::PILOT => Parameter::Pilot(decode_flag(payload[0], "pilot")?),
        tag::ROOM_TEMPERATURE => Parameter::RoomTemperature(Temperature::from_tenths(
            u16::from_be_bytes([payload[0], payload[1]]),
        )),
        // payload_size returned Some, so the tag is in the known set.
        _ => unreachable!("tag {tag:#04x} has a fixed size but no decoder"),
    };
    Ok(param)
}

fn decode_flag(byte: u8, field: &'static str) -> Result<bool, MalformedFrame> {
    match byte {
        0 => Ok(false),
        1 => Ok(true),
        value => Err(MalformedFrame::InvalidFieldValue { field, value }),
    }
}
