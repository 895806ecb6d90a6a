// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Degree-based trigonometry.
//!
//! Every solar formula in this crate is expressed in degrees, so these thin
//! wrappers convert to radians, call the `f64` primitive and (for the inverse
//! functions) convert back.

use std::f64::consts::{FRAC_PI_2, PI};

const DEG_TO_RAD: f64 = PI / 180.0;
const RAD_TO_DEG: f64 = 180.0 / PI;

/// Sine of an angle in degrees.
#[inline]
pub fn sin_deg(degrees: f64) -> f64 {
    (degrees * DEG_TO_RAD).sin()
}

/// Cosine of an angle in degrees.
#[inline]
pub fn cos_deg(degrees: f64) -> f64 {
    (degrees * DEG_TO_RAD).cos()
}

/// Tangent of an angle in degrees.
#[inline]
pub fn tan_deg(degrees: f64) -> f64 {
    (degrees * DEG_TO_RAD).tan()
}

/// Arctangent, result in degrees in `(-90°, 90°)`.
#[inline]
pub fn atan_deg(x: f64) -> f64 {
    x.atan() * RAD_TO_DEG
}

/// Arc-cotangent in degrees, range `(0°, 180°)`.
///
/// Piecewise so that the result is continuous across the sign of `x`:
///
/// | `x`     | result               |
/// |---------|----------------------|
/// | `x > 0` | `atan(1/x)`          |
/// | `x < 0` | `atan(1/x) + 180°`   |
/// | `x = 0` | `90°`                |
///
/// The zero case is an explicit branch, so `acot_deg(0.0)` never divides by
/// zero.
pub fn acot_deg(x: f64) -> f64 {
    let radians = if x > 0.0 {
        (1.0 / x).atan()
    } else if x < 0.0 {
        (1.0 / x).atan() + PI
    } else {
        FRAC_PI_2
    };
    radians * RAD_TO_DEG
}
