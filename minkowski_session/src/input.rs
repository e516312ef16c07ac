// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer and keyboard input descriptions.
//!
//! The session is headless; the embedder translates its windowing toolkit's
//! events into these types.

bitflags::bitflags! {
    /// The set of pointer buttons currently held, reported with motion.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PointerButtons: u8 {
        /// The primary button.
        const PRIMARY = 1 << 0;
        /// The middle button or wheel press.
        const MIDDLE = 1 << 1;
        /// The secondary button.
        const SECONDARY = 1 << 2;
    }
}

/// The button a press or release refers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PointerButton {
    /// Sketches worldlines, selects, and links events.
    Primary,
    /// Re-homes the cursor pivot.
    Middle,
    /// Not used by the session.
    Secondary,
}

bitflags::bitflags! {
    /// Keyboard modifiers captured with a press.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// The control key. Held at a click it links events; embedders
        /// typically also map it to the auto-align toggle.
        const CONTROL = 1 << 0;
        /// The shift key.
        const SHIFT = 1 << 1;
        /// The alt key.
        const ALT = 1 << 2;
    }
}
