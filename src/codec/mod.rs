// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Binary parameter codec.
//!
//! Fireplace state travels as a set of small fixed-layout binary frames,
//! one per parameter. This module encodes and decodes single frames; the
//! [transport](crate::protocol) supplies and consumes the per-fire
//! collections of them.
//!
//! The codec is pure and stateless: encode and decode operate only on
//! their arguments and allocate fresh output, so they are safe to call
//! concurrently without locking. All I/O, retry, and timeout concerns
//! live in the transport.
//!
//! # Wire format
//!
//! ```text
//! +------+------+--------+--------+-----------------+
//! | 0x50 | tag  | len_hi | len_lo | payload[0..len] |
//! +------+------+--------+--------+-----------------+
//! ```
//!
//! Multi-byte fields are big-endian. The tag space is open: frames whose
//! tag this library does not recognize decode to [`Parameter::Unknown`]
//! with the raw payload preserved.
//!
//! # Examples
//!
//! ```
//! use emberlink::codec::{Parameter, decode_parameter, encode_parameter};
//! use emberlink::types::Temperature;
//!
//! let setpoint = Parameter::HeatSetpoint(Temperature::from_celsius(21.5));
//! let frame = encode_parameter(&setpoint)?;
//! assert_eq!(decode_parameter(&frame)?, setpoint);
//! # Ok::<(), emberlink::error::Error>(())
//! ```

mod decode;
mod encode;
mod frame;
mod parameter;

pub use decode::decode_parameter;
pub use encode::{
    SETPOINT_MAX_TENTHS, SETPOINT_MIN_TENTHS, SLEEP_TIMER_MAX_MIN, encode_parameter,
};
pub use frame::{FRAME_PARAMETER, HEADER_LEN, make_header, parse_header};
pub use parameter::{Parameter, tag};
