// Copyright 2026 the Underclick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped hiding of elements from hit testing.

use kurbo::Point;
use smallvec::SmallVec;

use crate::types::{HitSurface, InteractionEvent};

/// A set of elements temporarily removed from hit testing, restored on drop.
///
/// Hiding the original target is the only reliable way to "see through" it to
/// the element beneath, but a hidden element must never leak past the handler
/// that hid it — that would leave the page visually correct yet unclickable.
/// Holding the hides in a guard makes restoration unconditional: it runs on
/// early returns and when dispatch propagates an error with `?`.
///
/// Restoration happens in reverse hide order.
pub struct HiddenLayers<'a, K: Copy, S: HitSurface<K>> {
    surface: &'a mut S,
    hidden: SmallVec<[K; 4]>,
}

impl<K: Copy, S: HitSurface<K>> core::fmt::Debug for HiddenLayers<'_, K, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HiddenLayers")
            .field("hidden", &self.hidden.len())
            .finish_non_exhaustive()
    }
}

impl<'a, K: Copy + Eq, S: HitSurface<K>> HiddenLayers<'a, K, S> {
    /// Wraps `surface`, taking over its mutable borrow for the scope.
    pub fn new(surface: &'a mut S) -> Self {
        Self {
            surface,
            hidden: SmallVec::new(),
        }
    }

    /// Hides `node` from hit testing until this guard drops.
    pub fn hide(&mut self, node: K) {
        self.surface.set_hit_testable(node, false);
        self.hidden.push(node);
    }

    /// Whether `node` is currently hidden by this guard.
    #[must_use]
    pub fn is_hidden(&self, node: &K) -> bool {
        self.hidden.contains(node)
    }

    /// Hit test at `point` with the hidden elements excluded.
    #[must_use]
    pub fn element_at_point(&self, point: Point) -> Option<K> {
        self.surface.element_at_point(point)
    }

    /// Shared access to the wrapped surface, e.g. for style lookups mid-scope.
    #[must_use]
    pub fn surface(&self) -> &S {
        self.surface
    }

    /// Delivers `event` on `node` through the wrapped surface.
    ///
    /// An `Err` leaves the guard intact; the hidden elements are still
    /// restored when the guard drops.
    pub fn dispatch(&mut self, node: K, event: &InteractionEvent<K>) -> Result<(), S::Error> {
        self.surface.dispatch(node, event)
    }
}

impl<K: Copy, S: HitSurface<K>> Drop for HiddenLayers<'_, K, S> {
    fn drop(&mut self) {
        for &node in self.hidden.iter().rev() {
            self.surface.set_hit_testable(node, true);
        }
    }
}
