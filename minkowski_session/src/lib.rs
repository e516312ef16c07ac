// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=minkowski_session --heading-base-level=0

//! Minkowski Session: the interactive state of a spacetime-diagram editor.
//!
//! A [`Session`] owns everything that changes while a diagram is edited: the
//! committed and previewed reference frames, pan/zoom navigation, the
//! world→pixel view, the cursor pivot, and a [`Scene`] of marked events
//! joined by worldline segments. The embedder translates its windowing
//! toolkit's input into [`PointerButton`]/[`PointerButtons`]/[`Modifiers`]
//! calls, and asks for a [`RenderPass`] once per frame. The session draws
//! nothing and keeps no process-wide state; several sessions coexist freely.
//!
//! Interactions follow the diagram editor they serve:
//!
//! - Dragging with the primary button sketches a worldline segment; the tip
//!   follows the pointer and merges into an event it is released over.
//! - Clicking selects; control-clicking links the selection to the clicked
//!   event. Middle-click re-homes the cursor pivot.
//! - The wheel zooms about the pointer, with the accumulated zoom clamped so
//!   navigation cannot collapse.
//! - A Lorentz boost is previewed about the cursor while a control scrubs,
//!   then committed; every preview starts over from the committed frame.
//! - With auto-align on, pointer positions snap to the drawn grid lattice or
//!   to event markers, whichever is nearer.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Size;
//! use minkowski_geom::Vec2;
//! use minkowski_session::{Modifiers, PointerButton, PointerButtons, Session};
//!
//! let mut session = Session::new(Size::new(800.0, 600.0));
//!
//! // Sketch a worldline segment by dragging with the primary button.
//! session.pointer_down(Vec2::new(400.0, 300.0), PointerButton::Primary, Modifiers::empty());
//! session.pointer_moved(Vec2::new(470.0, 230.0), PointerButtons::PRIMARY);
//! session.pointer_up(PointerButton::Primary);
//! assert_eq!(session.scene().event_count(), 2);
//! assert_eq!(session.scene().segment_count(), 1);
//!
//! // Preview a Lorentz boost about the cursor, then commit it.
//! session.preview_boost(2.0)?;
//! session.commit_frame();
//!
//! // Hand one frame's geometry to a renderer.
//! let pass = session.render_pass();
//! for tick in pass.grid.space.ticks() {
//!     // Draw a vertical line at `tick.screen`.
//!     # let _ = tick;
//! }
//! # Ok::<(), minkowski_geom::InvalidBoostFactor>(())
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod input;
mod scene;
mod session;

pub use input::{Modifiers, PointerButton, PointerButtons};
pub use scene::{Event, EventKey, Scene, Segment, SegmentKey};
pub use session::{Readout, RenderPass, Session};
