// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Assembling the daily timetable.
//!
//! ```text
//! date ─▶ JulianDate ─▶ declination, equation of time ─▶ transit
//!                                  │
//!                                  └▶ altitudes ─▶ hour angles
//! transit ± hour angle / 15 ─▶ ClockTime
//! ```
//!
//! Fajr and sunrise come *before* transit, so their hour angles are
//! subtracted; Asr, Maghrib and Isha are added. Zuhr is transit plus
//! [`ZUHR_OFFSET_HOURS`].

use log::debug;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::altitude::SunAltitudes;
use crate::calendar::CalendarDate;
use crate::clock::ClockTime;
use crate::config::{AsrJuristic, CalculationMethod, Location, PrayerAngles};
use crate::error::AthanResult;
use crate::hour_angle::HourAngles;
use crate::julian::JulianDate;
use crate::solar::SolarPosition;

/// Margin between solar transit and Zuhr: 2/6 h, i.e. 20 minutes.
pub const ZUHR_OFFSET_HOURS: f64 = 2.0 / 6.0;

/// Degrees of hour angle per hour of clock time.
const DEGREES_PER_HOUR: f64 = 15.0;

/// The daily prayers plus sunrise, in the order they occur.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Prayer {
    Fajr,
    Sunrise,
    Zuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const ALL: [Prayer; 6] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Zuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Sunrise => "Sunrise",
            Prayer::Zuhr => "Zuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Prayer times as fractional local hours, before clock conversion.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrayerHours {
    /// Solar transit (local apparent noon).
    pub transit: f64,
    pub fajr: f64,
    pub sunrise: f64,
    pub zuhr: f64,
    pub asr: f64,
    pub maghrib: f64,
    pub isha: f64,
}

impl PrayerHours {
    /// Runs the full solar pipeline for one date.
    pub fn compute(
        date: CalendarDate,
        location: &Location,
        angles: &PrayerAngles,
    ) -> AthanResult<Self> {
        let jd = JulianDate::from_calendar(date, location.timezone);
        let sun = SolarPosition::at(jd);
        let transit = sun.transit(location.timezone, location.longitude);
        debug!(
            "{date}: {jd}, declination {:.6}°, equation of time {:.6} min, transit {transit:.6} h",
            sun.declination, sun.equation_of_time
        );

        let altitudes = SunAltitudes::for_prayers(
            angles,
            location.elevation,
            sun.declination,
            location.latitude,
        )?;
        let ha = HourAngles::solve(&altitudes, location.latitude, sun.declination)?;

        Ok(Self::from_transit(transit, &ha))
    }

    /// Offsets each prayer from `transit` by its hour angle.
    pub fn from_transit(transit: f64, ha: &HourAngles) -> Self {
        Self {
            transit,
            fajr: transit - ha.fajr / DEGREES_PER_HOUR,
            sunrise: transit - ha.sunrise / DEGREES_PER_HOUR,
            zuhr: transit + ZUHR_OFFSET_HOURS,
            asr: transit + ha.asr / DEGREES_PER_HOUR,
            maghrib: transit + ha.maghrib / DEGREES_PER_HOUR,
            isha: transit + ha.isha / DEGREES_PER_HOUR,
        }
    }

    pub fn get(&self, prayer: Prayer) -> f64 {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Zuhr => self.zuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }
}

/// One day's timetable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrayerTimes {
    pub fajr: ClockTime,
    pub sunrise: ClockTime,
    pub zuhr: ClockTime,
    pub asr: ClockTime,
    pub maghrib: ClockTime,
    pub isha: ClockTime,
}

impl PrayerTimes {
    pub fn get(&self, prayer: Prayer) -> ClockTime {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Zuhr => self.zuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// `(prayer, time)` pairs in day order.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, ClockTime)> + '_ {
        Prayer::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    /// `true` if every entry is strictly later than the one before it.
    ///
    /// Holds for ordinary mid-latitude days; a timezone far from the
    /// longitude can push Isha past midnight, which breaks it.
    pub fn is_chronological(&self) -> bool {
        Prayer::ALL
            .windows(2)
            .all(|pair| self.get(pair[1]).is_after(&self.get(pair[0])))
    }
}

impl From<PrayerHours> for PrayerTimes {
    fn from(hours: PrayerHours) -> Self {
        Self {
            fajr: ClockTime::from_hours(hours.fajr),
            sunrise: ClockTime::from_hours(hours.sunrise),
            zuhr: ClockTime::from_hours(hours.zuhr),
            asr: ClockTime::from_hours(hours.asr),
            maghrib: ClockTime::from_hours(hours.maghrib),
            isha: ClockTime::from_hours(hours.isha),
        }
    }
}

impl fmt::Display for PrayerTimes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (prayer, time) in self.iter() {
            writeln!(f, "{time} - {prayer}")?;
        }
        Ok(())
    }
}

/// Computes the six clock times for `date` at `location`.
///
/// ```
/// use athan::{compute_prayer_times, CalendarDate, ClockTime, Location, PrayerAngles};
///
/// let times = compute_prayer_times(
///     CalendarDate::new(21, 3, 2024),
///     &Location::MAKKAH,
///     &PrayerAngles::new(18.5, 18.5, 1.0),
/// )?;
/// assert_eq!(times.zuhr, ClockTime::new(12, 47, 52));
/// # Ok::<(), athan::AthanError>(())
/// ```
pub fn compute_prayer_times(
    date: CalendarDate,
    location: &Location,
    angles: &PrayerAngles,
) -> AthanResult<PrayerTimes> {
    PrayerHours::compute(date, location, angles).map(PrayerTimes::from)
}

/// A location and calculation convention bundled for repeated use.
///
/// Holds no state between calls; every [`compute`](Self::compute) is
/// independent.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrayerCalculator {
    pub location: Location,
    pub angles: PrayerAngles,
}

impl PrayerCalculator {
    pub const fn new(location: Location, angles: PrayerAngles) -> Self {
        Self { location, angles }
    }

    pub const fn with_method(
        location: Location,
        method: CalculationMethod,
        asr: AsrJuristic,
    ) -> Self {
        Self::new(location, method.angles(asr))
    }

    pub fn compute(&self, date: CalendarDate) -> AthanResult<PrayerTimes> {
        compute_prayer_times(date, &self.location, &self.angles)
    }

    pub fn compute_hours(&self, date: CalendarDate) -> AthanResult<PrayerHours> {
        PrayerHours::compute(date, &self.location, &self.angles)
    }
}
