// Copyright 2026 the Underclick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform adapter seams: the capability probe and listener bookkeeping.

use underclick_redirect::InteractionKind;

/// Capability probe for native `pointer-events` support.
///
/// On a real browser platform this is a one-line style probe; in tests it is a
/// flag. The engine only consults it at construction.
pub trait Capabilities {
    /// Whether the platform honors `pointer-events` natively.
    fn supports_native_pointer_events(&self) -> bool;
}

/// Delegated listener bookkeeping on a root node.
///
/// `selector` scopes which descendants of `root` are eligible interception
/// targets; it is carried as an opaque string and never parsed here (the
/// embedder's event plumbing interprets it). `namespace` is an opaque tag
/// enabling later selective removal without disturbing unrelated listeners on
/// the same root; `None` disables that isolation.
pub trait EventHooks<K> {
    /// Registers a delegated listener under `(root, namespace)`.
    fn subscribe(
        &mut self,
        root: K,
        kinds: &[InteractionKind],
        selector: &str,
        namespace: Option<&str>,
    );

    /// Removes the listeners registered under exactly `(root, namespace)`.
    fn unsubscribe(&mut self, root: K, namespace: Option<&str>);
}
