// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Low-precision solar position: declination, equation of time and the
//! moment of transit.
//!
//! Both series are short empirical fits, good to a fraction of a degree
//! (declination) and a few seconds (equation of time) for dates within a few
//! centuries of J2000. That is well inside the minute-level precision prayer
//! timetables are published with.

use std::f64::consts::TAU;

use crate::julian::JulianDate;
use crate::trig::{cos_deg, sin_deg};

/// Degrees per radian as rounded in the declination fit.
const FIT_DEG_PER_RAD: f64 = 57.297;

/// Solar declination in degrees.
///
/// Three-harmonic Fourier fit over the tropical year:
///
/// ```text
/// t = 2π (JD − 2451545) / 365.25
/// δ = 0.37877 + 23.264 sin(57.297 t − 79.547)
///             + 0.3812  sin(2·57.297 t − 82.682)
///             + 0.17132 sin(3·57.297 t − 59.722)
/// ```
pub fn sun_declination(jd: JulianDate) -> f64 {
    let t = TAU * jd.julian_years();
    0.37877
        + 23.264 * sin_deg(FIT_DEG_PER_RAD * t - 79.547)
        + 0.3812 * sin_deg(2.0 * FIT_DEG_PER_RAD * t - 82.682)
        + 0.17132 * sin_deg(3.0 * FIT_DEG_PER_RAD * t - 59.722)
}

/// Equation of time (apparent − mean solar time) in minutes.
///
/// Harmonic series in the Sun's mean longitude `L0` with amplitudes that
/// drift linearly with `u`, Julian centuries since J2000. The coefficients
/// are in thousandths of a minute.
pub fn equation_of_time(jd: JulianDate) -> f64 {
    let u = jd.julian_centuries();
    let l0 = 280.46607 + 36_000.7698 * u;

    let et1000 = -(1789.0 + 237.0 * u) * sin_deg(l0) - (7146.0 - 62.0 * u) * cos_deg(l0)
        + (9934.0 - 14.0 * u) * sin_deg(2.0 * l0)
        - (29.0 + 5.0 * u) * cos_deg(2.0 * l0)
        + (74.0 + 10.0 * u) * sin_deg(3.0 * l0)
        + (320.0 - 4.0 * u) * cos_deg(3.0 * l0)
        - 212.0 * sin_deg(4.0 * l0);

    et1000 / 1000.0
}

/// Local clock time, in fractional hours, at which the Sun crosses the
/// observer's meridian.
///
/// `12 + timezone − longitude/15 − equation_of_time/60`.
#[inline]
pub fn sun_transit_time(equation_of_time: f64, timezone: f64, longitude: f64) -> f64 {
    12.0 + timezone - longitude / 15.0 - equation_of_time / 60.0
}

/// Declination and equation of time for one Julian Date.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolarPosition {
    /// Degrees north of the celestial equator.
    pub declination: f64,
    /// Minutes.
    pub equation_of_time: f64,
}

impl SolarPosition {
    pub fn at(jd: JulianDate) -> Self {
        Self {
            declination: sun_declination(jd),
            equation_of_time: equation_of_time(jd),
        }
    }

    /// Transit time for an observer at `longitude` keeping `timezone`.
    #[inline]
    pub fn transit(&self, timezone: f64, longitude: f64) -> f64 {
        sun_transit_time(self.equation_of_time, timezone, longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarDate;

    fn civil(day: i32, month: i32, year: i32) -> JulianDate {
        JulianDate::from_calendar(CalendarDate::new(day, month, year), 0.0)
    }

    #[test]
    fn test_declination_at_j2000() {
        let d = sun_declination(JulianDate::J2000);
        assert!((d - (-23.025_187_207)).abs() < 1e-6, "declination = {d}");
    }

    #[test]
    fn test_declination_near_equinox_and_solstices() {
        let march = sun_declination(civil(21, 3, 2024));
        assert!((march - 0.350_527_624).abs() < 1e-6, "march = {march}");

        let june = sun_declination(civil(21, 6, 2024));
        assert!((june - 23.444_114_623).abs() < 1e-6, "june = {june}");

        let december = sun_declination(civil(21, 12, 2024));
        assert!((december - (-23.427_201_685)).abs() < 1e-6, "december = {december}");
    }

    #[test]
    fn test_declination_stays_within_obliquity() {
        let start = civil(1, 1, 2024);
        for day in 0..366 {
            let d = sun_declination(start + qtty::Days::new(day as f64));
            assert!(d.abs() < 23.5, "day {day}: {d}");
        }
    }

    #[test]
    fn test_equation_of_time_reference_values() {
        let j2000 = equation_of_time(JulianDate::J2000);
        assert!((j2000 - (-3.305_845_234)).abs() < 1e-6, "j2000 = {j2000}");

        let march = equation_of_time(civil(21, 3, 2024));
        assert!((march - (-7.142_100_993)).abs() < 1e-6, "march = {march}");
    }

    #[test]
    fn test_equation_of_time_extremes() {
        // Early November maximum (~ +16.4 min) and mid-February minimum (~ -14.2 min).
        let november = equation_of_time(civil(3, 11, 2024));
        assert!((november - 16.492_294_532).abs() < 1e-6, "november = {november}");

        let february = equation_of_time(civil(11, 2, 2024));
        assert!((february - (-14.222_934_812)).abs() < 1e-6, "february = {february}");
    }

    #[test]
    fn test_transit_time() {
        assert_eq!(sun_transit_time(0.0, 0.0, 0.0), 12.0);
        // 15° east is one hour earlier, a positive equation of time is earlier too.
        assert_eq!(sun_transit_time(0.0, 0.0, 15.0), 11.0);
        assert!((sun_transit_time(6.0, 1.0, 0.0) - 12.9).abs() < 1e-12);
        let makkah = sun_transit_time(-7.142_100_993, 3.0, 39.8173);
        assert!((makkah - 12.464_548_35).abs() < 1e-8, "makkah = {makkah}");
    }

    #[test]
    fn test_solar_position_matches_free_functions() {
        let jd = civil(21, 3, 2024);
        let pos = SolarPosition::at(jd);
        assert_eq!(pos.declination, sun_declination(jd));
        assert_eq!(pos.equation_of_time, equation_of_time(jd));
        assert_eq!(
            pos.transit(3.0, 39.8173),
            sun_transit_time(pos.equation_of_time, 3.0, 39.8173)
        );
    }
}
