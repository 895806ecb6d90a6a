// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type for prayer-time computations.
//!
//! The pipeline is pure arithmetic and total over ordinary inputs. The two
//! cases where the formulas have no real answer are surfaced here instead of
//! leaking NaN into clock times:
//!
//! | Variant | Cause |
//! |---------|-------|
//! | [`NegativeElevation`](AthanError::NegativeElevation) | `√elevation` in the horizon correction |
//! | [`UnreachableAltitude`](AthanError::UnreachableAltitude) | `arccos` argument outside `[-1, 1]` (polar day/night, or twilight that never ends) |

use thiserror::Error;

use crate::prayer::Prayer;

/// Result alias used across the crate.
pub type AthanResult<T> = Result<T, AthanError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AthanError {
    /// Observer elevation must be zero or positive metres.
    #[error("elevation must be >= 0 m, got {elevation} m")]
    NegativeElevation { elevation: f64 },

    /// The sun never reaches the altitude a prayer requires on this day.
    #[error(
        "sun never reaches {altitude:.4}° for {prayer} (cos hour angle = {cos_hour_angle:.6})"
    )]
    UnreachableAltitude {
        prayer: Prayer,
        altitude: f64,
        cos_hour_angle: f64,
    },
}

impl AthanError {
    /// The prayer whose time could not be computed, if any.
    pub fn prayer(&self) -> Option<Prayer> {
        match self {
            Self::UnreachableAltitude { prayer, .. } => Some(*prayer),
            Self::NegativeElevation { .. } => None,
        }
    }
}
