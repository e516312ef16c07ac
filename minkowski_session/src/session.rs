// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The editor session: transforms, scene, and input handling in one place.

use kurbo::{Rect, Size};
use minkowski_geom::{AffineMap, InvalidBoostFactor, Vec2, boost};
use minkowski_grid::{GridPlan, SnapAxis, plan_grid};

use crate::input::{Modifiers, PointerButton, PointerButtons};
use crate::scene::{Event, EventKey, Scene, SegmentKey};

/// The pointer's position and time in the active frame, relative to the
/// cursor.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Readout {
    /// Distance along the space axis, in light-seconds.
    pub position: f64,
    /// Distance along the time axis, in seconds.
    pub time: f64,
}

/// Everything a renderer needs for one frame.
#[derive(Copy, Clone, Debug)]
pub struct RenderPass {
    /// World → screen map for this frame. Event caches are already
    /// refreshed with it.
    pub projection: AffineMap,
    /// Grid lines for both axes, in screen coordinates.
    pub grid: GridPlan,
    /// The cursor pivot's screen position.
    pub cursor_screen: Vec2,
    /// The relative readout to draw beside the pointer, if any.
    pub readout: Option<Readout>,
}

/// Bookkeeping for a primary-button press until its release.
#[derive(Clone, Copy, Debug)]
struct Press {
    /// Effective pointer position at the press.
    origin: Vec2,
    /// Whether the link modifier was down at the press.
    link: bool,
    /// Whether the pointer has travelled past the drag threshold.
    moved: bool,
    /// The segment being sketched, once `moved`.
    segment: Option<SegmentKey>,
    /// The fresh event tracking the pointer, once `moved`.
    tip: Option<EventKey>,
}

/// An interactive spacetime-diagram editing session.
///
/// The session owns all mutable editor state: the committed and previewed
/// reference frames, pan/zoom navigation, the world→pixel view, the cursor
/// pivot, the scene of events and worldline segments, and pointer
/// bookkeeping. The embedder feeds it input events and asks for a
/// [`RenderPass`] once per frame; the session never draws and holds no
/// process-wide state.
///
/// Screen coordinates throughout are raster pixels with `y` growing
/// downward. World coordinates put space on `x` and time on `y`.
#[derive(Debug)]
pub struct Session {
    committed: AffineMap,
    frame: AffineMap,
    nav: AffineMap,
    view: AffineMap,
    viewport: Size,
    pixels_per_unit: f64,
    cursor: Vec2,
    pointer: Option<Vec2>,
    scene: Scene,
    selection: Option<EventKey>,
    press: Option<Press>,
    auto_align: bool,
    snap_space: SnapAxis,
    snap_time: SnapAxis,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
}

impl Session {
    /// Default scale of the view transform, in pixels per light-second.
    pub const DEFAULT_PIXELS_PER_UNIT: f64 = 7.0;
    /// Preferred on-screen distance between grid lines, in pixels.
    pub const GRID_TARGET_SPACING: f64 = 75.0;
    /// Pick radius around an event's marker, in pixels.
    pub const HIT_RADIUS: f64 = 5.0;
    /// Radius renderers should draw event markers at, in pixels.
    pub const MARKER_RADIUS: f64 = 2.5;
    /// Pointer travel that turns a press into a drag, in pixels.
    pub const DRAG_THRESHOLD: f64 = 5.0;

    const DEFAULT_MIN_ZOOM: f64 = 1e-3;
    const DEFAULT_MAX_ZOOM: f64 = 1e3;

    /// Creates a session for the given viewport size.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        let mut session = Self {
            committed: AffineMap::IDENTITY,
            frame: AffineMap::IDENTITY,
            nav: AffineMap::IDENTITY,
            view: AffineMap::IDENTITY,
            viewport: Size::ZERO,
            pixels_per_unit: Self::DEFAULT_PIXELS_PER_UNIT,
            cursor: Vec2::ZERO,
            pointer: None,
            scene: Scene::new(),
            selection: None,
            press: None,
            auto_align: false,
            snap_space: SnapAxis {
                origin: 0.0,
                spacing: Self::GRID_TARGET_SPACING,
            },
            snap_time: SnapAxis {
                origin: 0.0,
                spacing: Self::GRID_TARGET_SPACING,
            },
            zoom: 1.0,
            min_zoom: Self::DEFAULT_MIN_ZOOM,
            max_zoom: Self::DEFAULT_MAX_ZOOM,
        };
        session.set_viewport(viewport);
        session
    }

    /// World → screen map: the active frame, then navigation, then the view.
    #[must_use]
    pub fn projection(&self) -> AffineMap {
        self.frame.then(self.nav).then(self.view)
    }

    /// The committed reference frame.
    #[must_use]
    pub const fn committed(&self) -> AffineMap {
        self.committed
    }

    /// The active reference frame, including any uncommitted boost preview.
    #[must_use]
    pub const fn frame(&self) -> AffineMap {
        self.frame
    }

    /// The pan/zoom navigation transform.
    #[must_use]
    pub const fn nav(&self) -> AffineMap {
        self.nav
    }

    /// The world → pixel view transform.
    #[must_use]
    pub const fn view(&self) -> AffineMap {
        self.view
    }

    /// The cursor pivot, in world coordinates.
    #[must_use]
    pub const fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// The last effective pointer position, if the pointer is inside the
    /// window.
    #[must_use]
    pub const fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// The selected event, if any. May be stale after scene edits.
    #[must_use]
    pub const fn selection(&self) -> Option<EventKey> {
        self.selection
    }

    /// The scene of events and segments.
    #[must_use]
    pub const fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access to the scene, for programmatic edits.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Whether pointer positions snap to grid nodes and events.
    #[must_use]
    pub const fn auto_align(&self) -> bool {
        self.auto_align
    }

    /// Sets the auto-align flag; embedders map it to the control key.
    pub fn set_auto_align(&mut self, auto_align: bool) {
        self.auto_align = auto_align;
    }

    /// The accumulated zoom applied through [`Self::zoom_about`].
    #[must_use]
    pub const fn zoom(&self) -> f64 {
        self.zoom
    }

    /// The current viewport size.
    #[must_use]
    pub const fn viewport(&self) -> Size {
        self.viewport
    }

    /// Updates the viewport size and rebuilds the view transform around its
    /// center.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.rebuild_view();
    }

    /// Changes the view scale. Non-positive or non-finite scales are
    /// ignored.
    pub fn set_pixels_per_unit(&mut self, pixels_per_unit: f64) {
        if !(pixels_per_unit > 0.0 && pixels_per_unit.is_finite()) {
            return;
        }
        self.pixels_per_unit = pixels_per_unit;
        self.rebuild_view();
    }

    fn rebuild_view(&mut self) {
        let s = self.pixels_per_unit;
        let center = Vec2::new(self.viewport.width / 2.0, self.viewport.height / 2.0);
        // Negative y-scale points the time axis up on screen.
        self.view = AffineMap::scale_non_uniform(s, -s).then_translate(center);
    }

    /// Replaces the zoom limits for subsequent zooming.
    ///
    /// Requires `0 < min_zoom <= max_zoom`, both finite; anything else is
    /// ignored.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        if !(min_zoom > 0.0 && min_zoom.is_finite() && max_zoom >= min_zoom && max_zoom.is_finite())
        {
            return;
        }
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
    }

    /// Zooms from a wheel delta, anchored at the pointer.
    ///
    /// A positive `delta_y` (wheel down) zooms out. The anchor is the
    /// effective pointer position, so with auto-align held the zoom centers
    /// on the snapped point.
    pub fn wheel_zoom(&mut self, screen: Vec2, delta_y: f64) {
        let anchor = self.effective_pointer(screen);
        self.zoom_about(anchor, 1.0 - delta_y / 1000.0);
    }

    /// Scales navigation by `factor`, keeping `anchor_screen` fixed.
    ///
    /// The accumulated zoom is clamped into the zoom limits, so navigation
    /// can never collapse from zooming alone. Non-positive or non-finite
    /// factors are ignored.
    pub fn zoom_about(&mut self, anchor_screen: Vec2, factor: f64) {
        if !(factor > 0.0 && factor.is_finite()) {
            return;
        }
        let clamped = (self.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        let effective = clamped / self.zoom;
        if effective == 1.0 {
            return;
        }
        let Ok(inverse) = self.view.invert() else {
            return;
        };
        self.zoom = clamped;
        let anchor = inverse.apply(anchor_screen);
        let modifier = AffineMap::translate(-anchor)
            .then_scale(effective, effective)
            .then_translate(anchor);
        self.nav = self.nav.then(modifier);
    }

    /// Translates navigation by a screen-space delta.
    pub fn pan_by(&mut self, delta_screen: Vec2) {
        let Ok(inverse) = self.view.invert() else {
            return;
        };
        let delta = inverse.apply(delta_screen) - inverse.apply(Vec2::ZERO);
        self.nav = self.nav.then_translate(delta);
    }

    /// Re-homes the cursor pivot to a screen position, normally the snapped
    /// pointer. A singular projection leaves the cursor unchanged.
    pub fn set_cursor_from_screen(&mut self, screen: Vec2) {
        if let Ok(inverse) = self.projection().invert() {
            self.cursor = inverse.apply(screen);
        }
    }

    /// Previews a Lorentz boost of the committed frame about the cursor.
    ///
    /// Every preview starts over from the committed frame, so scrubbing a
    /// slider replaces the previous preview instead of composing with it.
    /// The pivot `committed.apply(cursor)` is fixed by construction.
    pub fn preview_boost(&mut self, factor: f64) -> Result<(), InvalidBoostFactor> {
        let b = boost(factor)?;
        let pivot = self.committed.apply(self.cursor);
        self.frame = self
            .committed
            .then_translate(-pivot)
            .then(b)
            .then_translate(pivot);
        Ok(())
    }

    /// Makes the previewed frame the committed one.
    pub fn commit_frame(&mut self) {
        self.committed = self.frame;
    }

    /// Feeds a button press at a screen position.
    pub fn pointer_down(&mut self, screen: Vec2, button: PointerButton, modifiers: Modifiers) {
        let p = self.effective_pointer(screen);
        self.pointer = Some(p);
        match button {
            PointerButton::Primary => {
                self.press = Some(Press {
                    origin: p,
                    link: modifiers.contains(Modifiers::CONTROL),
                    moved: false,
                    segment: None,
                    tip: None,
                });
            }
            PointerButton::Middle => self.set_cursor_from_screen(p),
            PointerButton::Secondary => {}
        }
    }

    /// Feeds pointer motion, with the set of buttons still held.
    ///
    /// If a press is being tracked but the primary button is no longer
    /// held, the release happened outside the window; the press is
    /// finished as a release would finish it. Once a press travels past
    /// the drag threshold it sketches a worldline segment whose tip
    /// follows the pointer.
    pub fn pointer_moved(&mut self, screen: Vec2, buttons: PointerButtons) {
        let p = self.effective_pointer(screen);
        self.pointer = Some(p);
        if self.press.is_none() {
            return;
        }
        if !buttons.contains(PointerButtons::PRIMARY) {
            self.release_press();
            return;
        }
        let Ok(inverse) = self.projection().invert() else {
            return;
        };
        let Some(mut press) = self.press else {
            return;
        };
        if !press.moved && press.origin.distance(p) >= Self::DRAG_THRESHOLD {
            press.moved = true;
            let anchor = match self.scene.event_within(press.origin, Self::HIT_RADIUS, None) {
                Some(key) => key,
                None => self.scene.add_event(Event {
                    world: inverse.apply(press.origin),
                    projected: press.origin,
                }),
            };
            let tip = self.scene.add_event(Event {
                world: inverse.apply(p),
                projected: p,
            });
            press.segment = self.scene.add_segment(anchor, tip);
            press.tip = Some(tip);
            self.selection = Some(tip);
        }
        if let Some(tip) = press.tip
            && let Some(event) = self.scene.event_mut(tip)
        {
            event.world = inverse.apply(p);
            event.projected = p;
        }
        self.press = Some(press);
    }

    /// Feeds a button release.
    ///
    /// Releasing a drag merges the tip into an event within the hit radius,
    /// if there is one. Releasing without a drag is a click: with the link
    /// modifier and a live selection it links the selection to the clicked
    /// event (creating one under the pointer if needed); otherwise the
    /// clicked event, or nothing, becomes the selection.
    pub fn pointer_up(&mut self, button: PointerButton) {
        if button != PointerButton::Primary {
            return;
        }
        let Some(press) = self.press else {
            return;
        };
        if press.moved {
            self.release_press();
            return;
        }
        self.press = None;
        let Some(p) = self.pointer else {
            return;
        };
        let clicked = self.scene.event_within(p, Self::HIT_RADIUS, None);
        if press.link
            && let Some(selected) = self.selection
            && self.scene.event(selected).is_some()
        {
            let target = match clicked {
                Some(key) => key,
                None => {
                    let Ok(inverse) = self.projection().invert() else {
                        return;
                    };
                    self.scene.add_event(Event {
                        world: inverse.apply(p),
                        projected: p,
                    })
                }
            };
            self.scene.add_segment(selected, target);
            return;
        }
        self.selection = clicked;
    }

    /// Tells the session the pointer left the window.
    pub fn pointer_left(&mut self) {
        self.pointer = None;
    }

    /// Removes the selected event and its segments, clearing the selection.
    pub fn delete_selected(&mut self) {
        if let Some(key) = self.selection.take() {
            self.scene.remove_event(key);
        }
    }

    /// The pointer's position and time in the active frame, relative to the
    /// cursor. [`None`] without a pointer or with a degenerate view.
    #[must_use]
    pub fn pointer_readout(&self) -> Option<Readout> {
        let pointer = self.pointer?;
        let inverse = self.nav.then(self.view).invert().ok()?;
        let relative = inverse.apply(pointer) - self.frame.apply(self.cursor);
        Some(Readout {
            position: relative.x,
            time: relative.y,
        })
    }

    /// Prepares one frame: refreshes event caches, plans the grid, and
    /// updates snap memory.
    ///
    /// Grid coordinates are ruled in the active frame relative to the
    /// cursor, so the lattice follows both boosting and re-homing. A
    /// singular projection yields an empty grid and leaves event caches
    /// untouched for the frame, and snap memory only ever takes values
    /// from drawable axes.
    pub fn render_pass(&mut self) -> RenderPass {
        let projection = self.projection();
        if projection.invert().is_ok() {
            self.scene.project_events(projection);
        }
        let screen = Rect::new(0.0, 0.0, self.viewport.width, self.viewport.height);
        let grid = match self.nav.then(self.view).invert() {
            Ok(inverse) => {
                let reference = self.frame.apply(self.cursor);
                plan_grid(
                    inverse.then_translate(-reference),
                    screen,
                    Self::GRID_TARGET_SPACING,
                )
            }
            Err(_) => GridPlan::EMPTY,
        };
        if let Some(axis) = grid.space.snap_axis() {
            self.snap_space = axis;
        }
        if let Some(axis) = grid.time.snap_axis() {
            self.snap_time = axis;
        }
        RenderPass {
            projection,
            grid,
            cursor_screen: projection.apply(self.cursor),
            readout: self.pointer_readout(),
        }
    }

    /// Where the pointer effectively is: the raw position, or with
    /// auto-align on, the nearer of the snap-grid node and the closest
    /// event's projection. Events win ties.
    fn effective_pointer(&self, screen: Vec2) -> Vec2 {
        if !self.auto_align {
            return screen;
        }
        let node = Vec2::new(
            self.snap_space.snap(screen.x),
            self.snap_time.snap(screen.y),
        );
        let Some((key, distance)) = self.scene.closest_event(screen, None) else {
            return node;
        };
        let Some(event) = self.scene.event(key) else {
            return node;
        };
        if node.distance(screen) < distance {
            node
        } else {
            event.projected
        }
    }

    /// Finishes a tracked press: a finished drag merges its tip into a
    /// nearby event, a press that never became a drag just stops being
    /// tracked.
    fn release_press(&mut self) {
        let Some(press) = self.press.take() else {
            return;
        };
        if !press.moved {
            return;
        }
        let (Some(tip), Some(segment)) = (press.tip, press.segment) else {
            return;
        };
        let Some(projected) = self.scene.event(tip).map(|event| event.projected) else {
            return;
        };
        if let Some(merge) = self.scene.event_within(projected, Self::HIT_RADIUS, Some(tip))
            && self.scene.retarget_segment(segment, merge)
        {
            self.scene.remove_event(tip);
            self.selection = Some(merge);
        }
    }
}
