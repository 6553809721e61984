// Copyright 2026 the Underclick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interception routine: hide, hit-test beneath, redeliver, restore.

use underclick_transparency::{MarkerClasses, StyleLookup, TreeLookup, is_transparent};

use crate::guard::HiddenLayers;
use crate::types::{HitSurface, InteractionEvent, Verdict};

/// Offers an intercepted interaction for re-targeting.
///
/// If the event's target is not pointer-transparent this is a no-op returning
/// [`Verdict::Pass`]. Otherwise the target is hidden from hit testing, the
/// topmost element beneath the event's coordinates is found (descending
/// through any further transparent layers the same way), an equivalent event
/// re-bound to that element is dispatched on it synchronously, and every
/// hidden element is restored before returning — including when dispatch
/// propagates an error.
///
/// `surface` is the platform adapter; it serves style, tree, and hit-test
/// queries for the same set of elements, which is why a single object carries
/// all three traits.
///
/// ## Errors
///
/// Only downstream dispatch can fail. The error is propagated untouched, after
/// hidden-element restoration.
pub fn redirect<K, S>(
    surface: &mut S,
    markers: &MarkerClasses,
    event: &InteractionEvent<K>,
) -> Result<Verdict<K>, S::Error>
where
    K: Copy + Eq,
    S: HitSurface<K> + StyleLookup<K> + TreeLookup<K>,
{
    if !is_transparent(surface, surface, markers, event.target) {
        return Ok(Verdict::Pass);
    }

    let mut layers = HiddenLayers::new(surface);
    layers.hide(event.target);

    // Descend through stacked transparent layers. Each pass hides one more
    // element, so the loop is bounded by the number of elements under the
    // point.
    let below = loop {
        match layers.element_at_point(event.position) {
            None => break None,
            // A surface that returns an element this guard already hid is
            // violating the hit-testability contract; treat the spot as empty
            // rather than loop on it.
            Some(k) if layers.is_hidden(&k) => break None,
            Some(k) => {
                if is_transparent(layers.surface(), layers.surface(), markers, k) {
                    layers.hide(k);
                } else {
                    break Some(k);
                }
            }
        }
    };

    // Even with nothing beneath, the original target was transparent, so its
    // default action is still suppressed.
    let Some(dest) = below else {
        return Ok(Verdict::Redirected(None));
    };

    let forwarded = event.retargeted(dest);
    layers.dispatch(dest, &forwarded)?;
    Ok(Verdict::Redirected(Some(dest)))
}
