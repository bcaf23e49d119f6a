// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sleep timer duration.

use std::fmt;
use std::time::Duration;

/// A sleep timer duration in whole minutes.
///
/// Like [`Temperature`](super::Temperature), this is an unconstrained
/// carrier for the wire encoding; the device's three-hour cap is
/// enforced when the parameter is encoded, and a zero duration means the
/// timer is cleared.
///
/// # Examples
///
/// ```
/// use emberlink::types::TimerDuration;
/// use std::time::Duration;
///
/// let t = TimerDuration::from_minutes(90);
/// assert_eq!(t.minutes(), 90);
/// assert_eq!(t.to_string(), "1h30m");
/// assert_eq!(TimerDuration::from(Duration::from_secs(5400)), t);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimerDuration(u16);

impl TimerDuration {
    /// A cleared (inactive) timer.
    pub const OFF: Self = Self(0);

    /// Creates a timer duration from whole minutes.
    #[must_use]
    pub const fn from_minutes(minutes: u16) -> Self {
        Self(minutes)
    }

    /// Returns the duration in minutes.
    #[must_use]
    pub const fn minutes(&self) -> u16 {
        self.0
    }

    /// Returns `true` if the timer is cleared.
    #[must_use]
    pub const fn is_off(&self) -> bool {
        self.0 == 0
    }

    /// Returns the duration as a [`std::time::Duration`].
    #[must_use]
    pub const fn as_duration(&self) -> Duration {
        Duration::from_secs(self.0 as u64 * 60)
    }
}

impl fmt::Display for TimerDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            write!(f, "off")
        } else if self.0 < 60 {
            write!(f, "{}m", self.0)
        } else {
            write!(f, "{}h{:02}m", self.0 / 60, self.0 % 60)
        }
    }
}

impl From<Duration> for TimerDuration {
    /// Converts a `Duration` to whole minutes, truncating seconds and
    /// saturating at `u16::MAX` minutes.
    fn from(d: Duration) -> Self {
        let minutes = d.as_secs() / 60;
        Self(u16::try_from(minutes).unwrap_or(u16::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_roundtrip() {
        assert_eq!(TimerDuration::from_minutes(45).minutes(), 45);
    }

    #[test]
    fn off_is_zero() {
        assert!(TimerDuration::OFF.is_off());
        assert!(!TimerDuration::from_minutes(1).is_off());
        assert_eq!(TimerDuration::default(), TimerDuration::OFF);
    }

    #[test]
    fn display() {
        assert_eq!(TimerDuration::OFF.to_string(), "off");
        assert_eq!(TimerDuration::from_minutes(45).to_string(), "45m");
        assert_eq!(TimerDuration::from_minutes(60).to_string(), "1h00m");
        assert_eq!(TimerDuration::from_minutes(95).to_string(), "1h35m");
    }

    #[test]
    fn from_std_duration() {
        assert_eq!(
            TimerDuration::from(Duration::from_secs(119)).minutes(),
            1 // truncates seconds
        );
        assert_eq!(
            TimerDuration::from(Duration::from_secs(u64::MAX)).minutes(),
            u16::MAX
        );
    }

    #[test]
    fn as_duration() {
        assert_eq!(
            TimerDuration::from_minutes(2).as_duration(),
            Duration::from_secs(120)
        );
    }
}
