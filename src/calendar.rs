// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Gregorian calendar dates as supplied by the caller.

use chrono::{Datelike, NaiveDate};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A day on the civil (proleptic Gregorian) calendar.
///
/// No validity range is enforced: `month = 13` or `day = 0` are accepted and
/// flow through the Julian-date arithmetic unchanged. Use
/// [`to_naive_date`](Self::to_naive_date) when validation is wanted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarDate {
    pub day: i32,
    pub month: i32,
    pub year: i32,
}

/// Last day before the Gregorian correction applies: 1582-10-14.
pub const GREGORIAN_REFORM: CalendarDate = CalendarDate::new(14, 10, 1582);

impl CalendarDate {
    #[inline]
    pub const fn new(day: i32, month: i32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Nested year / month / day "after" test used to place a date relative
    /// to [`GREGORIAN_REFORM`].
    ///
    /// This is **not** a chronological ordering. Each field is compared on
    /// its own, so a later month or day wins even in an earlier year:
    ///
    /// ```
    /// use athan::CalendarDate;
    ///
    /// let reform = CalendarDate::new(14, 10, 1582);
    /// assert!(CalendarDate::new(15, 10, 1582).is_after(&reform));
    /// // Chronologically earlier, still reported as "after" (month 11 > 10).
    /// assert!(CalendarDate::new(1, 11, 1500).is_after(&reform));
    /// ```
    ///
    /// Around the reform boundary, where the Julian-date correction depends on
    /// it, the result agrees with the real calendar order.
    pub fn is_after(&self, other: &CalendarDate) -> bool {
        self.year > other.year || self.month > other.month || self.day > other.day
    }

    /// Converts to a `chrono::NaiveDate`, or `None` if the fields do not form
    /// a valid date.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let month = u32::try_from(self.month).ok()?;
        let day = u32::try_from(self.day).ok()?;
        NaiveDate::from_ymd_opt(self.year, month, day)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.day() as i32, date.month() as i32, date.year())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}
