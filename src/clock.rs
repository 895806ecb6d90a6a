// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Wall-clock times produced from fractional hours.

use chrono::NaiveTime;
use qtty::Seconds;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 24-hour `hour:minute:second` clock reading.
///
/// Built by [`ClockTime::from_hours`], which truncates at every step. There is
/// no carry normalisation, so fractional hours outside `[0, 24)` give hours
/// that are negative or `>= 24` (and negative minutes/seconds below zero).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockTime {
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

impl ClockTime {
    #[inline]
    pub const fn new(hour: i32, minute: i32, second: i32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Splits a fractional hour value into hours, minutes and seconds.
    ///
    /// Each component is truncated toward zero, never rounded:
    /// `23.9999972` gives `23:59:59`, not `00:00:00`.
    pub fn from_hours(hours: f64) -> Self {
        let hour = hours as i32;
        let minutes = 60.0 * (hours - f64::from(hour));
        let minute = minutes as i32;
        let second = (60.0 * (minutes - f64::from(minute))) as i32;
        Self::new(hour, minute, second)
    }

    /// `true` if `self` is strictly later than `other`, comparing hour, then
    /// minute, then second.
    pub fn is_after(&self, other: &ClockTime) -> bool {
        if self.hour != other.hour {
            return self.hour > other.hour;
        }
        if self.minute != other.minute {
            return self.minute > other.minute;
        }
        self.second > other.second
    }

    /// Elapsed time since `00:00:00`.
    pub fn seconds_since_midnight(&self) -> Seconds {
        Seconds::new(f64::from(self.hour * 3_600 + self.minute * 60 + self.second))
    }

    /// `None` unless the reading lies within `00:00:00..=23:59:59`.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(
            u32::try_from(self.hour).ok()?,
            u32::try_from(self.minute).ok()?,
            u32::try_from(self.second).ok()?,
        )
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}
