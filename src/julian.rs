// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date — the continuous day count used as the time axis of every
//! solar formula in this crate.
//!
//! [`JulianDate`] stores a single [`Days`] quantity. Calendar dates enter
//! through [`JulianDate::from_calendar`], which follows the USNO
//! calendar-to-JD recipe with its truncating integer terms reproduced exactly.
//!
//! ```
//! use athan::{CalendarDate, JulianDate};
//!
//! let jd = JulianDate::from_calendar(CalendarDate::new(1, 1, 2000), 0.0);
//! assert_eq!(jd.value(), 2_451_544.5);
//! ```

use qtty::{Days, Simplify};
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::calendar::{CalendarDate, GREGORIAN_REFORM};

/// A point on the Julian Day axis.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDate {
    quantity: Days,
}

impl JulianDate {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian year expressed in days.
    pub const JULIAN_YEAR: Days = Days::new(365.25);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// JD of the day count's origin in the USNO calendar formula.
    const CALENDAR_EPOCH: f64 = 1_720_994.5;

    const SECONDS_PER_DAY: i64 = 86_400;

    /// The calendar date is always taken at 12:00:00 local time.
    const NOON_SECONDS: i64 = 12 * 3_600;

    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Converts a calendar date observed in `timezone` (signed hours) to a
    /// Julian Date.
    ///
    /// ```text
    /// JD = 1720994.5 + ⌊365.25·Y⌋ + ⌊30.6001·(M+1)⌋ + B + D
    ///      + (H·3600 + m·60 + s) / 86400 − Z / 24
    /// ```
    ///
    /// with January and February counted as months 13 and 14 of the previous
    /// year, `H:m:s = 12:00:00`, and `B = 2 + ⌊A/4⌋ − A` (`A = ⌊Y/100⌋`) only
    /// for dates after [`GREGORIAN_REFORM`], `B = 0` otherwise.
    ///
    /// All bracketed terms, the seconds term and `Z/24` are integer
    /// operations truncating toward zero, so the result always lands on a
    /// `.5` boundary and the timezone only matters once it reaches a full
    /// day. Fractional timezones are truncated to whole hours here.
    pub fn from_calendar(date: CalendarDate, timezone: f64) -> Self {
        let mut year = i64::from(date.year);
        let mut month = i64::from(date.month);
        if month <= 2 {
            month += 12;
            year -= 1;
        }

        let gregorian = if date.is_after(&GREGORIAN_REFORM) {
            let century = year / 100;
            2 + century / 4 - century
        } else {
            0
        };

        let zone = timezone as i64;
        let whole_days = (365.25 * year as f64) as i64
            + (30.6001 * (month + 1) as f64) as i64
            + gregorian
            + i64::from(date.day)
            + Self::NOON_SECONDS / Self::SECONDS_PER_DAY
            - zone / 24;

        Self::new(Self::CALENDAR_EPOCH + whole_days as f64)
    }

    /// Signed days elapsed since [`J2000`](Self::J2000).
    #[inline]
    pub fn days_since_j2000(&self) -> Days {
        *self - Self::J2000
    }

    /// Julian years since J2000.0.
    #[inline]
    pub fn julian_years(&self) -> f64 {
        (self.days_since_j2000() / Self::JULIAN_YEAR)
            .simplify()
            .value()
    }

    /// Julian centuries since J2000.0.
    #[inline]
    pub fn julian_centuries(&self) -> f64 {
        (self.days_since_j2000() / Self::JULIAN_CENTURY)
            .simplify()
            .value()
    }
}

impl std::fmt::Display for JulianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Julian Day: {}", self.quantity)
    }
}

#[cfg(feature = "serde")]
impl Serialize for JulianDate {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JulianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

impl Add<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl Sub<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl Sub for JulianDate {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

impl From<Days> for JulianDate {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl From<JulianDate> for Days {
    #[inline]
    fn from(jd: JulianDate) -> Self {
        jd.quantity
    }
}
