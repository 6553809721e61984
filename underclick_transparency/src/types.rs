// Copyright 2026 the Underclick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for transparency resolution: property values, marker classes,
//! and the lookup seams onto the embedder's tree.

use alloc::string::String;

/// The computed `pointer-events` value for an element.
///
/// Only [`PointerEvents::None`] and [`PointerEvents::All`] carry an explicit
/// claim; [`PointerEvents::Auto`] and [`PointerEvents::Other`] defer to
/// inheritance. `Other` covers the SVG-specific values (`visiblePainted` and
/// friends), which this emulation does not interpret.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerEvents {
    /// The element is transparent to pointer input.
    None,
    /// The element receives pointer input, overriding inherited transparency.
    All,
    /// No explicit claim; the native default.
    #[default]
    Auto,
    /// Any other (uninterpreted) value.
    Other,
}

/// An explicit per-node claim, before inheritance is considered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Claim {
    /// The node explicitly opts back into pointer input (`all`).
    Interactive,
    /// The node explicitly opts out of pointer input (`none`).
    Transparent,
}

/// Class names standing in for explicit `pointer-events` declarations.
///
/// Environments without native support often cannot read the property back from
/// computed style either, so embedders mark elements with classes instead. Both
/// markers are optional; an unset marker simply never matches.
///
/// Immutable per engine instance, set at construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkerClasses {
    /// Class equivalent to `pointer-events: none`.
    pub none_class: Option<String>,
    /// Class equivalent to `pointer-events: all`.
    pub all_class: Option<String>,
}

impl MarkerClasses {
    /// No marker classes configured; only computed style carries claims.
    pub const EMPTY: Self = Self {
        none_class: None,
        all_class: None,
    };
}

/// Read access to an element's computed style and classes.
///
/// The generic `K` is the embedder's node key (e.g. a `NodeId` or DOM handle).
pub trait StyleLookup<K> {
    /// The computed `pointer-events` value for `node`.
    fn computed_pointer_events(&self, node: &K) -> PointerEvents;

    /// Whether `node` carries the given class.
    fn has_class(&self, node: &K, class: &str) -> bool;
}

/// Read access to the embedder's tree structure.
///
/// The tree is owned by the embedder; this crate only walks parent links.
/// Ancestry must be acyclic.
pub trait TreeLookup<K> {
    /// The parent of `node`, or `None` past the top of the tree.
    fn parent_of(&self, node: &K) -> Option<K>;

    /// Whether `node` is the document root.
    ///
    /// The root is the walk's natural stopping point: it is always reachable
    /// and starts as neutral. A node for which this returns `false` and
    /// [`TreeLookup::parent_of`] returns `None` is detached.
    fn is_root(&self, node: &K) -> bool;
}
