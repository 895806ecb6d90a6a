// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Hour angle at which the Sun reaches a given altitude.

use log::{trace, warn};

use crate::altitude::SunAltitudes;
use crate::error::{AthanError, AthanResult};
use crate::prayer::Prayer;
use crate::trig::{cos_deg, sin_deg};

/// How far `cos(H)` may stray outside `[-1, 1]` and still be treated as
/// rounding noise at the boundary.
pub const HOUR_ANGLE_TOLERANCE: f64 = 1e-9;

/// Hour angle, in degrees `[0°, 180°]`, between transit and the moment the
/// Sun stands at `altitude`:
///
/// ```text
/// cos H = (sin h − sin φ · sin δ) / (cos φ · cos δ)
/// ```
///
/// A `cos H` within [`HOUR_ANGLE_TOLERANCE`] beyond `±1` is clamped to the
/// boundary. Farther out the Sun never reaches `altitude` that day (polar
/// day or night, or twilight that lasts all night) and the result is
/// [`AthanError::UnreachableAltitude`] tagged with `prayer`.
pub fn hour_angle(
    prayer: Prayer,
    altitude: f64,
    latitude: f64,
    declination: f64,
) -> AthanResult<f64> {
    let cos_hour_angle = (sin_deg(altitude) - sin_deg(latitude) * sin_deg(declination))
        / (cos_deg(latitude) * cos_deg(declination));

    if cos_hour_angle.is_nan() || cos_hour_angle.abs() > 1.0 + HOUR_ANGLE_TOLERANCE {
        warn!(
            "{prayer}: sun never reaches {altitude:.4}° at latitude {latitude:.4}° \
             (declination {declination:.4}°, cos H = {cos_hour_angle:.6})"
        );
        return Err(AthanError::UnreachableAltitude {
            prayer,
            altitude,
            cos_hour_angle,
        });
    }
    if cos_hour_angle.abs() > 1.0 {
        trace!("{prayer}: clamping cos H = {cos_hour_angle:e} to the boundary");
    }

    let degrees = cos_hour_angle.clamp(-1.0, 1.0).acos().to_degrees();
    trace!("{prayer}: altitude {altitude:.4}° -> hour angle {degrees:.6}°");
    Ok(degrees)
}

/// Hour angles, in degrees, for every prayer that has an altitude.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HourAngles {
    pub fajr: f64,
    pub sunrise: f64,
    pub asr: f64,
    pub maghrib: f64,
    pub isha: f64,
}

impl HourAngles {
    /// Solves [`hour_angle`] for each altitude, stopping at the first prayer
    /// whose altitude is out of reach.
    pub fn solve(altitudes: &SunAltitudes, latitude: f64, declination: f64) -> AthanResult<Self> {
        let solve = |prayer, altitude| hour_angle(prayer, altitude, latitude, declination);
        Ok(Self {
            fajr: solve(Prayer::Fajr, altitudes.fajr)?,
            sunrise: solve(Prayer::Sunrise, altitudes.sunrise)?,
            asr: solve(Prayer::Asr, altitudes.asr)?,
            maghrib: solve(Prayer::Maghrib, altitudes.maghrib)?,
            isha: solve(Prayer::Isha, altitudes.isha)?,
        })
    }
}
