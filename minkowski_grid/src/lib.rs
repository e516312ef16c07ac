// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=minkowski_grid --heading-base-level=0

//! Minkowski Grid: tick planning and label formatting for spacetime diagrams.
//!
//! Given the inverse of a view transform and the visible screen region, this
//! crate decides where grid lines go:
//!
//! - [`plan_grid`] produces a [`GridPlan`], one [`TickPlan`] per axis. The
//!   step between lines is the round number (one significant digit) closest
//!   to a preferred on-screen spacing, and the run of ticks is extended to
//!   step multiples just past the visible extent.
//! - [`TickPlan::ticks`] iterates the lines with both their axis value and
//!   their screen coordinate, so the renderer does no further math.
//! - [`format_tick`] renders an axis value as a short decimal label with
//!   stepping noise rounded away. Labels carry no unit; the diagram's
//!   renderer appends `sec` or `ls` as appropriate.
//! - [`TickPlan::snap_axis`] distils an axis into origin and spacing on
//!   screen, which is all pointer snapping needs.
//!
//! An axis that comes out mirrored, collapsed, or non-finite yields an empty
//! plan rather than an error; a diagram with no drawable grid is drawn with
//! no grid.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use minkowski_geom::{AffineMap, Vec2};
//! use minkowski_grid::{format_tick, plan_grid};
//!
//! // World → screen: 7 pixels per unit, time axis up, origin centered.
//! let view = AffineMap::scale_non_uniform(7.0, -7.0)
//!     .then_translate(Vec2::new(400.0, 300.0));
//! let screen = Rect::new(0.0, 0.0, 800.0, 600.0);
//!
//! let plan = plan_grid(view.invert().unwrap(), screen, 75.0);
//! assert_eq!(plan.space.step, 10.0);
//! for tick in plan.space.ticks() {
//!     // Draw a vertical line at `tick.screen`, labelled with the value.
//!     let label = format_tick(tick.value);
//!     # let _ = label;
//! }
//!
//! // Pointer snapping follows the drawn lines.
//! let snap = plan.space.snap_axis().unwrap();
//! assert_eq!(snap.snap(404.0), 400.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod format;
mod math;
mod round;
mod snap;
mod ticks;

pub use format::format_tick;
pub use round::{prev_step, round_to_one_sig_fig};
pub use snap::SnapAxis;
pub use ticks::{GridPlan, Tick, TickPlan, Ticks, plan_grid};
