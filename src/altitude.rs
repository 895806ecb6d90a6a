// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sun altitudes that mark each prayer.
//!
//! Zuhr has no altitude: it is a fixed offset after transit.

use crate::config::PrayerAngles;
use crate::error::{AthanError, AthanResult};
use crate::trig::{acot_deg, tan_deg};

/// Altitude of the Sun's upper limb at apparent sunrise/sunset for an
/// observer at sea level: 34′ of refraction plus the 16′ solar semi-diameter.
pub const HORIZON_ALTITUDE: f64 = -0.8333;

/// Horizon dip per √metre of observer elevation, in degrees.
pub const ELEVATION_DIP: f64 = 0.0347;

/// Required sun altitudes, in degrees, one per prayer except Zuhr.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SunAltitudes {
    pub fajr: f64,
    pub sunrise: f64,
    pub asr: f64,
    pub maghrib: f64,
    pub isha: f64,
}

impl SunAltitudes {
    /// Resolves the altitude of each prayer.
    ///
    /// - Fajr / Isha: the configured depression angles, negated.
    /// - Sunrise / Maghrib: `-0.8333 - 0.0347·√elevation`.
    /// - Asr: `acot(shadow_factor + tan|δ − φ|)`, the altitude at which a
    ///   gnomon's shadow is its noon shadow plus `shadow_factor` heights.
    ///
    /// Fails with [`AthanError::NegativeElevation`] for elevations below zero
    /// (or NaN).
    pub fn for_prayers(
        angles: &PrayerAngles,
        elevation: f64,
        declination: f64,
        latitude: f64,
    ) -> AthanResult<Self> {
        if elevation.is_nan() || elevation < 0.0 {
            return Err(AthanError::NegativeElevation { elevation });
        }

        let horizon = HORIZON_ALTITUDE - ELEVATION_DIP * elevation.sqrt();
        let asr = acot_deg(angles.asr_shadow_factor + tan_deg((declination - latitude).abs()));

        Ok(Self {
            fajr: -angles.fajr_angle,
            sunrise: horizon,
            asr,
            maghrib: horizon,
            isha: -angles.isha_angle,
        })
    }
}
