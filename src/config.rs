// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Observer location and calculation conventions.
//!
//! Nothing here is validated: the values are plain caller-supplied numbers.
//! The only checked constraint (elevation ≥ 0) is enforced where it matters,
//! in [`SunAltitudes::for_prayers`](crate::SunAltitudes::for_prayers).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where the prayer times are computed for.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// Degrees, north positive.
    pub latitude: f64,
    /// Degrees, east positive.
    pub longitude: f64,
    /// Metres above the surrounding terrain / sea level, `>= 0`.
    pub elevation: f64,
    /// Offset of the local clock from UTC in hours, e.g. `3.0` or `5.5`.
    pub timezone: f64,
}

impl Location {
    pub const fn new(latitude: f64, longitude: f64, elevation: f64, timezone: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation,
            timezone,
        }
    }

    /// Masjid al-Haram, Makkah (UTC+3).
    pub const MAKKAH: Self = Self::new(21.4241, 39.8173, 277.0, 3.0);
}

/// Sun depression angles and Asr shadow factor for one calculation method.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrayerAngles {
    /// Degrees below the horizon at dawn.
    pub fajr_angle: f64,
    /// Degrees below the horizon at nightfall.
    pub isha_angle: f64,
    /// Shadow length, in object heights, added to the noon shadow at Asr.
    pub asr_shadow_factor: f64,
}

impl PrayerAngles {
    pub const fn new(fajr_angle: f64, isha_angle: f64, asr_shadow_factor: f64) -> Self {
        Self {
            fajr_angle,
            isha_angle,
            asr_shadow_factor,
        }
    }
}

impl Default for PrayerAngles {
    fn default() -> Self {
        CalculationMethod::default().angles(AsrJuristic::default())
    }
}

/// School used for the Asr shadow length.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AsrJuristic {
    /// Shafi'i, Maliki and Hanbali: shadow equals the object's height.
    #[default]
    Standard,
    /// Hanafi: shadow is twice the object's height.
    Hanafi,
}

impl AsrJuristic {
    pub const fn shadow_factor(self) -> f64 {
        match self {
            Self::Standard => 1.0,
            Self::Hanafi => 2.0,
        }
    }
}

/// Published twilight-angle conventions.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculationMethod {
    /// Muslim World League: 18° / 17°.
    MuslimWorldLeague,
    /// Islamic Society of North America: 15° / 15°.
    Isna,
    /// Egyptian General Authority of Survey: 19.5° / 17.5°.
    Egyptian,
    /// Makkah: 18.5° for both twilights.
    #[default]
    Makkah,
    /// University of Islamic Sciences, Karachi: 18° / 18°.
    Karachi,
    Custom { fajr_angle: f64, isha_angle: f64 },
}

impl CalculationMethod {
    /// `(fajr, isha)` depression angles in degrees.
    pub const fn twilight_angles(&self) -> (f64, f64) {
        match *self {
            Self::MuslimWorldLeague => (18.0, 17.0),
            Self::Isna => (15.0, 15.0),
            Self::Egyptian => (19.5, 17.5),
            Self::Makkah => (18.5, 18.5),
            Self::Karachi => (18.0, 18.0),
            Self::Custom {
                fajr_angle,
                isha_angle,
            } => (fajr_angle, isha_angle),
        }
    }

    pub const fn angles(&self, asr: AsrJuristic) -> PrayerAngles {
        let (fajr_angle, isha_angle) = self.twilight_angles();
        PrayerAngles::new(fajr_angle, isha_angle, asr.shadow_factor())
    }
}
