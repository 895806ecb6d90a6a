// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Prayer Times
//!
//! This crate computes the five daily Islamic prayer times, plus sunrise,
//! for a location and calendar date from a low-precision solar model.
//!
//! # Pipeline
//!
//! 1. [`JulianDate::from_calendar`] — calendar date → Julian Date.
//! 2. [`sun_declination`] / [`equation_of_time`] — solar position.
//! 3. [`sun_transit_time`] — local apparent noon.
//! 4. [`SunAltitudes::for_prayers`] — altitude that marks each prayer.
//! 5. [`hour_angle`] — time from transit to that altitude, in degrees.
//! 6. [`ClockTime::from_hours`] — fractional hours → `HH:MM:SS`.
//!
//! [`compute_prayer_times`] (or [`PrayerCalculator::compute`]) runs all six.
//!
//! # Core types
//!
//! - [`CalendarDate`] / [`ClockTime`] — the input date and the output times.
//! - [`Location`] / [`PrayerAngles`] — observer and calculation convention;
//!   [`CalculationMethod`] and [`AsrJuristic`] provide the usual presets.
//! - [`PrayerTimes`] — the six clock times; [`PrayerHours`] the same values
//!   as fractional hours together with the solar transit.
//! - [`AthanError`] — the two cases with no real answer (negative elevation,
//!   an altitude the Sun never reaches).
//!
//! ```
//! use athan::{CalendarDate, CalculationMethod, AsrJuristic, Location, PrayerCalculator};
//!
//! let calc = PrayerCalculator::with_method(
//!     Location::MAKKAH,
//!     CalculationMethod::Makkah,
//!     AsrJuristic::Standard,
//! );
//! let times = calc.compute(CalendarDate::new(21, 3, 2024))?;
//! assert_eq!(times.fajr.to_string(), "05:07:34");
//! # Ok::<(), athan::AthanError>(())
//! ```
//!
//! # Features
//!
//! - `serde` — `Serialize` / `Deserialize` for configuration and result types.

mod altitude;
mod calendar;
mod clock;
mod config;
mod error;
mod hour_angle;
mod julian;
mod prayer;
mod solar;
pub mod trig;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use altitude::{SunAltitudes, ELEVATION_DIP, HORIZON_ALTITUDE};
pub use calendar::{CalendarDate, GREGORIAN_REFORM};
pub use clock::ClockTime;
pub use config::{AsrJuristic, CalculationMethod, Location, PrayerAngles};
pub use error::{AthanError, AthanResult};
pub use hour_angle::{hour_angle, HourAngles, HOUR_ANGLE_TOLERANCE};
pub use julian::JulianDate;
pub use prayer::{
    compute_prayer_times, Prayer, PrayerCalculator, PrayerHours, PrayerTimes, ZUHR_OFFSET_HOURS,
};
pub use solar::{equation_of_time, sun_declination, sun_transit_time, SolarPosition};
