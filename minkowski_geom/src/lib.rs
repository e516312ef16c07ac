// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=minkowski_geom --heading-base-level=0

//! Minkowski Geom: 2D affine transform algebra for spacetime diagrams.
//!
//! This crate is the math core of the Minkowski workspace. It provides:
//! - [`Vec2`], a plain 2D vector used for both world and screen coordinates.
//! - [`AffineMap`], a six-coefficient affine map with left-to-right
//!   composition and an **exact closed-form inverse** that undoes the linear
//!   part one elementary operation at a time (rotation, shear, scale), so a
//!   projection built from dozens of composed transforms inverts without
//!   drift.
//! - [`boost`] and friends, constructing Lorentz boosts in light-cone
//!   coordinates so that diagram reference frames compose like any other
//!   transform.
//!
//! Transforms are `Copy` value types; nothing here owns session state or
//! draws anything. A diagram editor composes its projection from three named
//! maps (reference frame, pan/zoom navigation, world→pixel view) and hands
//! the result to a renderer.
//!
//! ## Minimal example
//!
//! ```rust
//! use minkowski_geom::{AffineMap, Vec2, boost};
//!
//! // World → screen: 7 pixels per world unit, time axis up, centered
//! // in an 800×600 viewport.
//! let view = AffineMap::scale_non_uniform(7.0, -7.0)
//!     .then_translate(Vec2::new(400.0, 300.0));
//!
//! // A reference frame boosted with Doppler factor 2.
//! let frame = boost(2.0).unwrap();
//! let projection = frame.then(view);
//!
//! let event = Vec2::new(1.0, 1.0);
//! let on_screen = projection.apply(event);
//!
//! // Round-trip through the exact inverse.
//! let back = projection.invert().unwrap().apply(on_screen);
//! assert!((back.x - event.x).abs() < 1e-9);
//! assert!((back.y - event.y).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Composition is written in application order: `a.then(b)` maps points
//!   through `a` first. The editor's projection reads
//!   `frame.then(nav).then(view)`.
//! - [`AffineMap::invert`] returns a `Result`; a degenerate linear part is a
//!   caller error ([`SingularTransform`]), not a NaN-filled map.
//! - The coefficient layout matches [`kurbo::Affine`], and `From` impls are
//!   provided both ways for interop with rendering backends.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod affine;
mod lorentz;
mod math;
mod vec2;

pub use affine::{AffineMap, SingularTransform};
pub use lorentz::{InvalidBoostFactor, boost, boost_from_rapidity, boost_from_velocity};
pub use vec2::Vec2;
