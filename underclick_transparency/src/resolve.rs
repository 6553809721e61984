// Copyright 2026 the Underclick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The transparency predicate: an iterative nearest-explicit-marker walk.

use crate::types::{Claim, MarkerClasses, PointerEvents, StyleLookup, TreeLookup};

/// Returns the explicit claim `node` itself makes, ignoring ancestors.
///
/// An all-claim (marker class or computed [`PointerEvents::All`]) is checked
/// before a none-claim, so a node carrying both resolves to
/// [`Claim::Interactive`]. Returns `None` when the node makes no claim and
/// inheritance applies.
pub fn explicit_claim<K, S>(styles: &S, markers: &MarkerClasses, node: &K) -> Option<Claim>
where
    S: StyleLookup<K>,
{
    let style = styles.computed_pointer_events(node);
    let has_marker = |class: &Option<alloc::string::String>| {
        class.as_deref().is_some_and(|c| styles.has_class(node, c))
    };

    if style == PointerEvents::All || has_marker(&markers.all_class) {
        return Some(Claim::Interactive);
    }
    if style == PointerEvents::None || has_marker(&markers.none_class) {
        return Some(Claim::Transparent);
    }
    None
}

/// Decides whether `node` is pointer-transparent, including inherited state.
///
/// Walks from `node` up parent links; the nearest node with an explicit claim
/// determines the outcome. An explicit `all` at a descendant short-circuits a
/// `none` inherited from further up, and vice versa. With no explicit claim
/// anywhere up to the root the result is `false` (interactive by default,
/// matching native CSS `auto`).
///
/// The walk is iterative rather than recursive so deeply nested trees cannot
/// exhaust the stack. Evaluated fresh on every call; nothing is cached.
pub fn is_transparent<K, S, T>(styles: &S, tree: &T, markers: &MarkerClasses, node: K) -> bool
where
    K: Copy,
    S: StyleLookup<K>,
    T: TreeLookup<K>,
{
    let mut cur = node;
    loop {
        match explicit_claim(styles, markers, &cur) {
            Some(Claim::Interactive) => return false,
            Some(Claim::Transparent) => return true,
            None => {}
        }
        // The root has no ancestor to inherit non-interactivity from; a missing
        // parent (detached node) resolves the same way.
        if tree.is_root(&cur) {
            return false;
        }
        match tree.parent_of(&cur) {
            Some(p) => cur = p,
            None => return false,
        }
    }
}
