// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Storage for marked events and the worldline segments connecting them.

use alloc::vec::Vec;

use minkowski_geom::{AffineMap, Vec2};
use smallvec::SmallVec;

/// Raw generational slot handle shared by the key newtypes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
struct RawKey {
    index: u32,
    generation: u32,
}

/// Identifier for a marked event in a [`Scene`].
///
/// A small, copyable handle that stays stable across scene edits but becomes
/// stale when its event is removed. Stale keys never alias a different live
/// event because the slot generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct EventKey(RawKey);

/// Identifier for a worldline segment in a [`Scene`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SegmentKey(RawKey);

/// A marked spacetime event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Event {
    /// Position in diagram coordinates.
    pub world: Vec2,
    /// Cached screen position, refreshed by [`Scene::project_events`].
    pub projected: Vec2,
}

/// A straight worldline segment between two events.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Segment {
    /// The anchor endpoint.
    pub a: EventKey,
    /// The tip endpoint. Merging a sketch retargets this end.
    pub b: EventKey,
}

/// One slot of an [`Arena`].
#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Generational slot arena backing both stores of a [`Scene`].
///
/// Insertion allocates a fresh slot at generation 1. Removal frees the slot.
/// Reuse of a freed slot increments its generation, so keys into the old
/// occupant miss instead of aliasing the new one.
#[derive(Debug)]
struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> Arena<T> {
    const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    fn insert(&mut self, value: T) -> RawKey {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.generation += 1;
            slot.value = Some(value);
            return RawKey {
                index,
                generation: slot.generation,
            };
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "scenes hold far fewer than 2^32 entries"
        )]
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 1,
            value: Some(value),
        });
        RawKey {
            index,
            generation: 1,
        }
    }

    fn get(&self, key: RawKey) -> Option<&T> {
        let slot = self.slots.get(key.index as usize)?;
        if slot.generation != key.generation {
            return None;
        }
        slot.value.as_ref()
    }

    fn get_mut(&mut self, key: RawKey) -> Option<&mut T> {
        let slot = self.slots.get_mut(key.index as usize)?;
        if slot.generation != key.generation {
            return None;
        }
        slot.value.as_mut()
    }

    fn remove(&mut self, key: RawKey) -> Option<T> {
        let slot = self.slots.get_mut(key.index as usize)?;
        if slot.generation != key.generation {
            return None;
        }
        let value = slot.value.take()?;
        self.free.push(key.index);
        self.len -= 1;
        Some(value)
    }

    fn iter(&self) -> impl Iterator<Item = (RawKey, &T)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            let value = slot.value.as_ref()?;
            #[expect(
                clippy::cast_possible_truncation,
                reason = "slot indices are allocated from a u32 counter"
            )]
            let index = index as u32;
            Some((
                RawKey {
                    index,
                    generation: slot.generation,
                },
                value,
            ))
        })
    }

    fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().filter_map(|slot| slot.value.as_mut())
    }
}

/// Marked events and the worldline segments connecting them.
///
/// Removing an event also removes every segment incident to it, so segments
/// never outlive an endpoint. Lookups through stale keys return [`None`].
#[derive(Debug)]
pub struct Scene {
    events: Arena<Event>,
    segments: Arena<Segment>,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            events: Arena::new(),
            segments: Arena::new(),
        }
    }

    /// Adds an event and returns its key.
    pub fn add_event(&mut self, event: Event) -> EventKey {
        EventKey(self.events.insert(event))
    }

    /// Looks up an event.
    #[must_use]
    pub fn event(&self, key: EventKey) -> Option<&Event> {
        self.events.get(key.0)
    }

    /// Looks up an event for mutation.
    pub fn event_mut(&mut self, key: EventKey) -> Option<&mut Event> {
        self.events.get_mut(key.0)
    }

    /// Removes an event along with every segment incident to it.
    ///
    /// Returns the removed event, or [`None`] if the key was stale.
    pub fn remove_event(&mut self, key: EventKey) -> Option<Event> {
        let removed = self.events.remove(key.0)?;
        let incident: SmallVec<[SegmentKey; 4]> = self
            .segments
            .iter()
            .filter(|(_, segment)| segment.a == key || segment.b == key)
            .map(|(raw, _)| SegmentKey(raw))
            .collect();
        for segment in incident {
            self.segments.remove(segment.0);
        }
        Some(removed)
    }

    /// Adds a segment between two live events.
    ///
    /// Returns [`None`] without adding anything when either endpoint key is
    /// stale.
    pub fn add_segment(&mut self, a: EventKey, b: EventKey) -> Option<SegmentKey> {
        if self.events.get(a.0).is_none() || self.events.get(b.0).is_none() {
            return None;
        }
        Some(SegmentKey(self.segments.insert(Segment { a, b })))
    }

    /// Looks up a segment.
    #[must_use]
    pub fn segment(&self, key: SegmentKey) -> Option<&Segment> {
        self.segments.get(key.0)
    }

    /// Removes a segment.
    pub fn remove_segment(&mut self, key: SegmentKey) -> Option<Segment> {
        self.segments.remove(key.0)
    }

    /// Points a segment's `b` end at a different live event.
    ///
    /// Returns whether the retarget happened; a stale segment key or a stale
    /// target leaves the scene untouched.
    pub fn retarget_segment(&mut self, key: SegmentKey, new_b: EventKey) -> bool {
        if self.events.get(new_b.0).is_none() {
            return false;
        }
        match self.segments.get_mut(key.0) {
            Some(segment) => {
                segment.b = new_b;
                true
            }
            None => false,
        }
    }

    /// Iterates all live events with their keys.
    pub fn events(&self) -> impl Iterator<Item = (EventKey, &Event)> {
        self.events.iter().map(|(raw, event)| (EventKey(raw), event))
    }

    /// Iterates all live segments with their keys.
    pub fn segments(&self) -> impl Iterator<Item = (SegmentKey, &Segment)> {
        self.segments
            .iter()
            .map(|(raw, segment)| (SegmentKey(raw), segment))
    }

    /// The number of live events.
    #[must_use]
    pub const fn event_count(&self) -> usize {
        self.events.len
    }

    /// The number of live segments.
    #[must_use]
    pub const fn segment_count(&self) -> usize {
        self.segments.len
    }

    /// Whether the scene holds nothing at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.events.len == 0 && self.segments.len == 0
    }

    /// Refreshes every event's cached screen position.
    pub fn project_events(&mut self, projection: AffineMap) {
        for event in self.events.values_mut() {
            event.projected = projection.apply(event.world);
        }
    }

    /// The event whose cached screen position is closest to `screen`,
    /// with its distance.
    ///
    /// `except` is skipped, as are events with non-finite projections.
    /// Ties keep the event encountered first in iteration order.
    #[must_use]
    pub fn closest_event(&self, screen: Vec2, except: Option<EventKey>) -> Option<(EventKey, f64)> {
        let mut best: Option<(EventKey, f64)> = None;
        for (key, event) in self.events() {
            if Some(key) == except {
                continue;
            }
            let distance = event.projected.distance(screen);
            if !distance.is_finite() {
                continue;
            }
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((key, distance));
            }
        }
        best
    }

    /// The closest event within `radius` of `screen`, if any.
    #[must_use]
    pub fn event_within(
        &self,
        screen: Vec2,
        radius: f64,
        except: Option<EventKey>,
    ) -> Option<EventKey> {
        match self.closest_event(screen, except) {
            Some((key, distance)) if distance <= radius => Some(key),
            _ => None,
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
