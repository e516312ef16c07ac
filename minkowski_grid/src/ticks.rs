// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick planning for the two diagram axes.

use kurbo::Rect;
use minkowski_geom::{AffineMap, Vec2};

use crate::round::{prev_step, round_to_one_sig_fig};
use crate::snap::SnapAxis;

/// A single grid line on one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick {
    /// The axis value in diagram coordinates.
    pub value: f64,
    /// The screen coordinate the line is drawn at.
    pub screen: f64,
}

/// A planned run of evenly spaced ticks along one axis.
///
/// `start` and `end` are both integer multiples of `step`, chosen so
/// that the run covers the visible extent of the axis. `slope` and
/// `intercept` describe the affine map from axis values to screen
/// coordinates along this axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickPlan {
    /// The first tick value.
    pub start: f64,
    /// The spacing between adjacent ticks, in axis units.
    pub step: f64,
    /// The last tick value.
    pub end: f64,
    /// Screen units per axis unit.
    pub slope: f64,
    /// Screen coordinate of axis value zero.
    pub intercept: f64,
}

impl TickPlan {
    /// A plan with no ticks.
    pub const EMPTY: Self = Self {
        start: 0.0,
        step: 0.0,
        end: 0.0,
        slope: 0.0,
        intercept: 0.0,
    };

    /// Whether this plan yields no ticks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.step > 0.0 && self.step.is_finite() && self.end >= self.start)
    }

    /// Maps an axis value to its screen coordinate.
    #[must_use]
    pub fn to_screen(&self, value: f64) -> f64 {
        value * self.slope + self.intercept
    }

    /// Iterates the ticks of this plan in ascending value order.
    ///
    /// Tick values are computed by index from `start`, so the last one
    /// lands on `end` exactly rather than drifting by accumulated
    /// addition error.
    #[must_use]
    pub fn ticks(&self) -> Ticks {
        let count = if self.is_empty() {
            0
        } else {
            let steps = ((self.end - self.start) / self.step).round();
            if steps.is_finite() && steps >= 0.0 {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "`steps` is checked to be finite and non-negative"
                )]
                let steps = steps as usize;
                steps + 1
            } else {
                0
            }
        };
        Ticks {
            plan: *self,
            index: 0,
            count,
        }
    }

    /// The snapping description for this axis, if the plan is drawable.
    ///
    /// Returns [`None`] for empty plans and for plans whose grid lines
    /// coincide on screen.
    #[must_use]
    pub fn snap_axis(&self) -> Option<SnapAxis> {
        if self.is_empty() {
            return None;
        }
        let spacing = (self.step * self.slope).abs();
        if !(spacing > 0.0 && spacing.is_finite()) {
            return None;
        }
        let origin = self.to_screen(self.start).min(self.to_screen(self.end));
        Some(SnapAxis { origin, spacing })
    }
}

/// Iterator over the ticks of a [`TickPlan`].
#[derive(Clone, Debug)]
pub struct Ticks {
    plan: TickPlan,
    index: usize,
    count: usize,
}

impl Iterator for Ticks {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        if self.index >= self.count {
            return None;
        }
        let value = self.plan.start + self.index as f64 * self.plan.step;
        self.index += 1;
        Some(Tick {
            value,
            screen: self.plan.to_screen(value),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Ticks {}

/// Tick plans for both diagram axes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPlan {
    /// The space axis, drawn as vertical lines.
    pub space: TickPlan,
    /// The time axis, drawn as horizontal lines.
    pub time: TickPlan,
}

impl GridPlan {
    /// A plan with no ticks on either axis.
    pub const EMPTY: Self = Self {
        space: TickPlan::EMPTY,
        time: TickPlan::EMPTY,
    };

    /// Whether both axes are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.space.is_empty() && self.time.is_empty()
    }
}

/// Plans grid ticks for a view of the diagram.
///
/// `screen_to_world` maps screen coordinates to the diagram coordinates
/// the grid is ruled in. `screen` is the visible region, in the raster
/// convention with `y` growing downward, so its bottom edge maps to the
/// low end of the time axis. `target_spacing` is the preferred on-screen
/// distance between grid lines; the step in diagram units is rounded to
/// one significant digit, so the realised spacing can deviate by up to
/// about a third.
///
/// An axis whose rounded step comes out non-positive or non-finite is
/// returned empty. A view that mirrors an axis relative to the expected
/// orientation does exactly that, as do degenerate maps and zero-size
/// regions.
#[must_use]
pub fn plan_grid(screen_to_world: AffineMap, screen: Rect, target_spacing: f64) -> GridPlan {
    let low = screen_to_world.apply(Vec2::new(screen.x0, screen.y1));
    let high = screen_to_world.apply(Vec2::new(screen.x1, screen.y0));
    GridPlan {
        space: plan_axis(low.x, high.x, screen.x0, screen.x1, target_spacing),
        time: plan_axis(low.y, high.y, screen.y1, screen.y0, target_spacing),
    }
}

/// Plans one axis from its world extent and the screen range it spans.
fn plan_axis(
    world0: f64,
    world1: f64,
    screen0: f64,
    screen1: f64,
    target_spacing: f64,
) -> TickPlan {
    let step = round_to_one_sig_fig((world1 - world0) * target_spacing / (screen1 - screen0).abs());
    if !(step > 0.0 && step.is_finite()) {
        return TickPlan::EMPTY;
    }
    let slope = (screen1 - screen0) / (world1 - world0);
    let intercept = screen0 - world0 * slope;
    TickPlan {
        start: prev_step(world0, step),
        step,
        end: prev_step(world1, step) + step,
        slope,
        intercept,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn identity_projection_rules_space_only() {
        let plan = plan_grid(AffineMap::IDENTITY, Rect::new(0.0, 0.0, 800.0, 600.0), 75.0);

        // 800 px of 800 diagram units at a 75 px target rounds to a step
        // of 80, with the run extended one step past each edge multiple.
        assert_eq!(plan.space.step, 80.0);
        assert_eq!(plan.space.start, 0.0);
        assert_eq!(plan.space.end, 880.0);
        assert_eq!(plan.space.ticks().len(), 12);
        let first = plan.space.ticks().next().unwrap();
        assert_eq!(first.value, 0.0);
        assert_eq!(first.screen, 0.0);

        // Screen `y` grows downward, so an unflipped map runs time
        // backwards and the axis comes out empty.
        assert!(plan.time.is_empty());
        assert_eq!(plan.time.ticks().len(), 0);
        assert!(plan.time.snap_axis().is_none());
    }

    #[test]
    fn centered_flipped_view_rules_both_axes() {
        // 7 px per unit, `y` up, origin at the canvas center.
        let view = AffineMap::scale_non_uniform(7.0, -7.0).then_translate(Vec2::new(400.0, 300.0));
        let plan = plan_grid(
            view.invert().unwrap(),
            Rect::new(0.0, 0.0, 800.0, 600.0),
            75.0,
        );

        assert_eq!(plan.space.step, 10.0);
        assert_eq!(plan.space.start, -60.0);
        assert_eq!(plan.space.end, 60.0);
        assert_eq!(plan.space.ticks().len(), 13);
        assert_close(plan.space.slope, 7.0);
        assert_close(plan.space.to_screen(0.0), 400.0);

        assert_eq!(plan.time.step, 10.0);
        assert_eq!(plan.time.start, -50.0);
        assert_eq!(plan.time.end, 50.0);
        assert_eq!(plan.time.ticks().len(), 11);
        assert_close(plan.time.slope, -7.0);
        assert_close(plan.time.to_screen(0.0), 300.0);
    }

    #[test]
    fn tick_values_land_on_the_endpoints_exactly() {
        let plan = TickPlan {
            start: -60.0,
            step: 10.0,
            end: 60.0,
            slope: 7.0,
            intercept: 400.0,
        };
        let ticks: alloc::vec::Vec<Tick> = plan.ticks().collect();
        assert_eq!(ticks.len(), 13);
        assert_eq!(ticks[0].value, -60.0);
        assert_eq!(ticks[12].value, 60.0);
        assert_eq!(ticks[6].value, 0.0);
        assert_eq!(ticks[6].screen, 400.0);
    }

    #[test]
    fn snap_axis_reports_screen_spacing() {
        let view = AffineMap::scale_non_uniform(7.0, -7.0).then_translate(Vec2::new(400.0, 300.0));
        let plan = plan_grid(
            view.invert().unwrap(),
            Rect::new(0.0, 0.0, 800.0, 600.0),
            75.0,
        );

        let space = plan.space.snap_axis().unwrap();
        assert_close(space.spacing, 70.0);
        assert_close(space.origin, plan.space.to_screen(-60.0));

        // The time slope is negative, so the low screen coordinate
        // belongs to the high end of the axis.
        let time = plan.time.snap_axis().unwrap();
        assert_close(time.spacing, 70.0);
        assert_close(time.origin, plan.time.to_screen(50.0));
    }

    #[test]
    fn degenerate_views_plan_nothing() {
        let screen = Rect::new(0.0, 0.0, 800.0, 600.0);

        let collapsed = AffineMap::scale(0.0);
        assert!(plan_grid(collapsed, screen, 75.0).is_empty());

        let poisoned = AffineMap::from_coeffs([f64::NAN, 0.0, 0.0, 1.0, 0.0, 0.0]);
        assert!(plan_grid(poisoned, screen, 75.0).is_empty());

        let zero_area = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(plan_grid(AffineMap::IDENTITY, zero_area, 75.0).is_empty());
    }

    #[test]
    fn empty_plan_iterates_nothing() {
        assert!(TickPlan::EMPTY.is_empty());
        assert_eq!(TickPlan::EMPTY.ticks().count(), 0);
        assert!(TickPlan::EMPTY.snap_axis().is_none());
        assert!(GridPlan::EMPTY.is_empty());
    }
}
