// Copyright 2026 the Underclick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration, immutable per instance.

use alloc::string::String;
use alloc::vec::Vec;

use underclick_redirect::InteractionKind;
use underclick_transparency::MarkerClasses;

/// The namespace tag engines register their listeners under by default.
pub const DEFAULT_NAMESPACE: &str = "underclick";

/// Configuration for an [`Engine`](crate::Engine), fixed at construction.
///
/// Selector strings and event-kind lists are taken as given; malformed values
/// are the caller's responsibility (the emulation is best-effort and carries
/// no validation layer).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineOptions {
    /// Activate interception even when the platform supports the property
    /// natively.
    pub force_polyfill: bool,
    /// Scopes which elements are eligible interception targets. Opaque to the
    /// engine; handed to [`EventHooks::subscribe`](crate::EventHooks::subscribe).
    pub selector: String,
    /// The interaction kinds to intercept.
    pub listen_on: Vec<InteractionKind>,
    /// Marker classes standing in for explicit `pointer-events` declarations.
    pub markers: MarkerClasses,
    /// Namespace tag for listener registration; `None` disables namespaced
    /// removal.
    pub namespace: Option<String>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            force_polyfill: false,
            selector: String::from("*"),
            listen_on: InteractionKind::ALL.to_vec(),
            markers: MarkerClasses::EMPTY,
            namespace: Some(String::from(DEFAULT_NAMESPACE)),
        }
    }
}

/// Builder for [`EngineOptions`].
///
/// ```rust
/// use underclick_engine::{EngineOptionsBuilder, InteractionKind};
///
/// let options = EngineOptionsBuilder::new()
///     .force_polyfill(true)
///     .selector(".layer")
///     .listen_on([InteractionKind::Click, InteractionKind::MouseDown])
///     .none_class("pe-none")
///     .all_class("pe-all")
///     .build();
/// assert!(options.force_polyfill);
/// assert_eq!(options.listen_on.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EngineOptionsBuilder {
    options: EngineOptions,
}

impl EngineOptionsBuilder {
    /// Starts from the defaults: every interaction kind, selector `"*"`, no
    /// marker classes, namespace [`DEFAULT_NAMESPACE`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bypasses the capability probe and always activates interception.
    #[must_use]
    pub fn force_polyfill(mut self, force: bool) -> Self {
        self.options.force_polyfill = force;
        self
    }

    /// Sets the target-eligibility selector.
    #[must_use]
    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.options.selector = selector.into();
        self
    }

    /// Replaces the set of intercepted interaction kinds.
    #[must_use]
    pub fn listen_on(mut self, kinds: impl IntoIterator<Item = InteractionKind>) -> Self {
        self.options.listen_on = kinds.into_iter().collect();
        self
    }

    /// Sets the class equivalent to `pointer-events: none`.
    #[must_use]
    pub fn none_class(mut self, class: impl Into<String>) -> Self {
        self.options.markers.none_class = Some(class.into());
        self
    }

    /// Sets the class equivalent to `pointer-events: all`.
    #[must_use]
    pub fn all_class(mut self, class: impl Into<String>) -> Self {
        self.options.markers.all_class = Some(class.into());
        self
    }

    /// Overrides the listener namespace; `None` disables namespaced removal.
    #[must_use]
    pub fn namespace(mut self, namespace: Option<String>) -> Self {
        self.options.namespace = namespace;
        self
    }

    /// Finishes the build.
    #[must_use]
    pub fn build(self) -> EngineOptions {
        self.options
    }
}
