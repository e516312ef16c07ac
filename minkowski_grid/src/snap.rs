// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer snapping against drawn grid lines.

/// The screen-space lattice of one axis of a drawn grid.
///
/// Snapping works in screen coordinates so that the pointer locks onto
/// the lines actually on screen, whatever diagram transform produced
/// them. A degenerate spacing leaves values unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapAxis {
    /// Screen coordinate of one grid line.
    pub origin: f64,
    /// Screen distance between adjacent grid lines. Positive and finite
    /// for any axis produced by [`TickPlan::snap_axis`].
    ///
    /// [`TickPlan::snap_axis`]: crate::TickPlan::snap_axis
    pub spacing: f64,
}

impl SnapAxis {
    /// Moves `coord` to the nearest grid line of this axis.
    #[must_use]
    pub fn snap(&self, coord: f64) -> f64 {
        if !(self.spacing > 0.0 && self.spacing.is_finite()) {
            return coord;
        }
        self.origin + ((coord - self.origin) / self.spacing).round() * self.spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snaps_to_the_nearest_line() {
        let axis = SnapAxis {
            origin: 0.0,
            spacing: 75.0,
        };
        assert_eq!(axis.snap(0.0), 0.0);
        assert_eq!(axis.snap(30.0), 0.0);
        assert_eq!(axis.snap(40.0), 75.0);
        assert_eq!(axis.snap(-30.0), 0.0);
        assert_eq!(axis.snap(-40.0), -75.0);
    }

    #[test]
    fn honors_a_shifted_origin() {
        let axis = SnapAxis {
            origin: 12.5,
            spacing: 70.0,
        };
        assert_eq!(axis.snap(12.5), 12.5);
        assert_eq!(axis.snap(50.0), 82.5);
        assert_eq!(axis.snap(-20.0), 12.5);
        assert_eq!(axis.snap(-25.0), -57.5);
    }

    #[test]
    fn degenerate_spacing_is_inert() {
        let zero = SnapAxis {
            origin: 0.0,
            spacing: 0.0,
        };
        assert_eq!(zero.snap(33.0), 33.0);

        let poisoned = SnapAxis {
            origin: 0.0,
            spacing: f64::NAN,
        };
        assert_eq!(poisoned.snap(33.0), 33.0);
    }
}
