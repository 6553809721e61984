// Copyright 2026 the Underclick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The engine instance: probe, subscribe, intercept, destroy.

use underclick_redirect::{HitSurface, InteractionEvent, Verdict, redirect};
use underclick_transparency::{StyleLookup, TreeLookup, is_transparent};

use crate::options::EngineOptions;
use crate::platform::{Capabilities, EventHooks};

/// A pointer-events emulation instance bound to one delegation root.
///
/// Created with [`Engine::create`], which probes the platform and registers
/// delegated listeners when the emulation is needed. The instance owns its
/// subscription lifecycle: created → active → destroyed. Interception state is
/// never shared between instances; isolation comes from the `(root, namespace)`
/// registration key.
#[derive(Clone, Debug)]
pub struct Engine<K> {
    options: EngineOptions,
    root: K,
    enabled: bool,
}

impl<K: Copy> Engine<K> {
    /// Probes capability and activates interception if needed (or forced).
    ///
    /// Subscribes under the options' `(root, namespace)` when
    /// `force_polyfill` is set or the platform lacks native support;
    /// otherwise the instance stays dormant and [`Engine::handle`] passes
    /// everything through.
    pub fn create<P>(options: EngineOptions, platform: &mut P, root: K) -> Self
    where
        P: Capabilities + EventHooks<K>,
    {
        let enabled = options.force_polyfill || !platform.supports_native_pointer_events();
        if enabled {
            platform.subscribe(
                root,
                &options.listen_on,
                &options.selector,
                options.namespace.as_deref(),
            );
        }
        Self {
            options,
            root,
            enabled,
        }
    }

    /// Removes exactly this instance's namespaced listeners.
    ///
    /// Idempotent: destroying an already-destroyed (or never-activated)
    /// instance is a no-op.
    pub fn destroy<P: EventHooks<K>>(&mut self, platform: &mut P) {
        if self.enabled {
            platform.unsubscribe(self.root, self.options.namespace.as_deref());
            self.enabled = false;
        }
    }

    /// Whether interception is currently active.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The configuration this instance was created with.
    #[must_use]
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// The delegation root this instance is bound to.
    #[must_use]
    pub fn root(&self) -> K {
        self.root
    }

    /// Exposes the transparency resolver under this instance's marker
    /// configuration, for external inspection and testing.
    #[must_use]
    pub fn is_click_through<E>(&self, env: &E, node: K) -> bool
    where
        E: StyleLookup<K> + TreeLookup<K>,
    {
        is_transparent(env, env, &self.options.markers, node)
    }

    /// Offers an intercepted interaction to this instance.
    ///
    /// Passes everything through while dormant, and ignores kinds outside the
    /// configured `listen_on` set; otherwise defers to
    /// [`underclick_redirect::redirect`]. A [`Verdict::Redirected`] result
    /// means the caller must suppress the original event's default action and
    /// propagation.
    ///
    /// ## Errors
    ///
    /// Propagates downstream dispatch failures unchanged (hidden elements are
    /// restored first).
    pub fn handle<S>(
        &self,
        surface: &mut S,
        event: &InteractionEvent<K>,
    ) -> Result<Verdict<K>, S::Error>
    where
        K: Eq,
        S: HitSurface<K> + StyleLookup<K> + TreeLookup<K>,
    {
        if !self.enabled || !self.options.listen_on.contains(&event.kind) {
            return Ok(Verdict::Pass);
        }
        redirect(surface, &self.options.markers, event)
    }
}
