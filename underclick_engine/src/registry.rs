// Copyright 2026 the Underclick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An explicit subscription registry keyed by `(root, namespace)`.

use alloc::string::String;
use alloc::vec::Vec;
use core::hash::Hash;
use hashbrown::HashMap;

use underclick_redirect::InteractionKind;

use crate::platform::EventHooks;

/// One delegated-listener registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subscription {
    /// Interaction kinds the listener intercepts.
    pub kinds: Vec<InteractionKind>,
    /// Target-eligibility selector, carried opaquely.
    pub selector: String,
}

/// Listener bookkeeping for delegation roots, keyed by `(root, namespace)`.
///
/// This is owned state rather than implicit module state so that several
/// engine instances can coexist deterministically: removal under one namespace
/// never disturbs registrations under another, even on the same root. Platform
/// adapters embed one of these (or mirror its semantics onto the host's own
/// event system).
///
/// Subscriptions under the `None` namespace share a single bucket; engines
/// that disable namespacing forfeit isolation from each other.
#[derive(Clone, Debug, Default)]
pub struct SubscriptionRegistry<K>
where
    K: Copy + Eq + Hash,
{
    entries: HashMap<(K, Option<String>), Vec<Subscription>>,
}

impl<K> SubscriptionRegistry<K>
where
    K: Copy + Eq + Hash,
{
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Whether anything is registered under `(root, namespace)`.
    #[must_use]
    pub fn is_subscribed(&self, root: K, namespace: Option<&str>) -> bool {
        self.entries
            .contains_key(&(root, namespace.map(String::from)))
    }

    /// Whether any subscription on `root` (any namespace) intercepts `kind`.
    ///
    /// A delivery loop consults this to decide if an interaction on `root`
    /// should be offered to the engines at all.
    #[must_use]
    pub fn wants(&self, root: K, kind: InteractionKind) -> bool {
        self.entries
            .iter()
            .filter(|((r, _), _)| *r == root)
            .any(|(_, subs)| subs.iter().any(|s| s.kinds.contains(&kind)))
    }

    /// The subscriptions registered under `(root, namespace)`.
    #[must_use]
    pub fn subscriptions(&self, root: K, namespace: Option<&str>) -> &[Subscription] {
        self.entries
            .get(&(root, namespace.map(String::from)))
            .map_or(&[], Vec::as_slice)
    }

    /// Total number of registrations across all roots and namespaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Whether the registry holds no registrations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K> EventHooks<K> for SubscriptionRegistry<K>
where
    K: Copy + Eq + Hash,
{
    fn subscribe(
        &mut self,
        root: K,
        kinds: &[InteractionKind],
        selector: &str,
        namespace: Option<&str>,
    ) {
        self.entries
            .entry((root, namespace.map(String::from)))
            .or_default()
            .push(Subscription {
                kinds: kinds.to_vec(),
                selector: String::from(selector),
            });
    }

    fn unsubscribe(&mut self, root: K, namespace: Option<&str>) {
        self.entries.remove(&(root, namespace.map(String::from)));
    }
}
