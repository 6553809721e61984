// Copyright 2026 the Underclick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: interaction events, the hit surface seam, and verdicts.

use kurbo::Point;

/// Discrete interaction kinds eligible for interception.
///
/// These mirror the DOM event names the original emulation listens for; hover
/// and other continuous pseudo-events are out of scope.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    /// A click (press and release on the same element).
    Click,
    /// A double click.
    DoubleClick,
    /// A pointer press.
    MouseDown,
    /// A pointer release.
    MouseUp,
}

impl InteractionKind {
    /// Every interceptable kind, in the default interception order.
    pub const ALL: [Self; 4] = [Self::Click, Self::DoubleClick, Self::MouseDown, Self::MouseUp];

    /// The DOM event name for this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::DoubleClick => "dblclick",
            Self::MouseDown => "mousedown",
            Self::MouseUp => "mouseup",
        }
    }
}

bitflags::bitflags! {
    /// Modifier keys held during an interaction.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0000_0001;
        /// Control key.
        const CTRL  = 0b0000_0010;
        /// Alt / Option key.
        const ALT   = 0b0000_0100;
        /// Meta / Command key.
        const META  = 0b0000_1000;
    }
}

/// A discrete interaction event, addressed to a target node.
///
/// The generic `K` is the embedder's node key. Re-targeting an event preserves
/// everything except the target, so the element beneath observes the same
/// kind, coordinates, and modifiers the original target would have.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionEvent<K> {
    /// What kind of interaction this is.
    pub kind: InteractionKind,
    /// The node the event is addressed to.
    pub target: K,
    /// Viewport coordinates of the pointer.
    pub position: Point,
    /// Modifier keys held at the time of the event.
    pub modifiers: Modifiers,
}

impl<K: Copy> InteractionEvent<K> {
    /// Creates an event with no modifiers held.
    pub fn new(kind: InteractionKind, target: K, position: Point) -> Self {
        Self {
            kind,
            target,
            position,
            modifiers: Modifiers::empty(),
        }
    }

    /// Sets the held modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// A copy of this event with `target` rebound, all other metadata intact.
    #[must_use]
    pub fn retargeted(&self, target: K) -> Self {
        Self {
            target,
            ..self.clone()
        }
    }
}

/// The platform seam for hit testing and event delivery.
///
/// Implementations wrap whatever actually owns the rendered elements (a DOM,
/// a box tree, a scene graph). The contract:
///
/// - [`HitSurface::element_at_point`] returns the topmost hit-testable element
///   at viewport coordinates, or `None` (e.g. outside the viewport).
/// - [`HitSurface::set_hit_testable`] removes an element from (or returns it
///   to) the hit-test pass *without* altering layout — the equivalent of a
///   visibility toggle, never `display: none`.
/// - [`HitSurface::dispatch`] delivers an event synchronously on a node, so
///   any handlers on it run before the call returns. Failures from downstream
///   handlers surface as `Err` and are never swallowed here.
pub trait HitSurface<K> {
    /// Error raised by downstream handlers during [`HitSurface::dispatch`].
    type Error;

    /// The topmost hit-testable element at `point`, if any.
    fn element_at_point(&self, point: Point) -> Option<K>;

    /// Includes or excludes `node` from hit testing. Must not shift layout.
    fn set_hit_testable(&mut self, node: K, hit_testable: bool);

    /// Delivers `event` synchronously on `node`.
    fn dispatch(&mut self, node: K, event: &InteractionEvent<K>) -> Result<(), Self::Error>;
}

/// The outcome of offering an interaction to [`redirect`](crate::redirect).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict<K> {
    /// The target was interactive; platform handling proceeds untouched.
    Pass,
    /// The target was transparent. The original event's default action and
    /// propagation must be suppressed; the payload is the element an
    /// equivalent event was delivered to, or `None` when nothing hit-testable
    /// lay beneath the coordinates.
    Redirected(Option<K>),
}

impl<K> Verdict<K> {
    /// Whether the original event's default action must be suppressed.
    #[must_use]
    pub fn suppresses_default(&self) -> bool {
        matches!(self, Self::Redirected(_))
    }
}
