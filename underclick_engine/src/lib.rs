// Copyright 2026 the Underclick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=underclick_engine --heading-base-level=0

//! Underclick Engine: lifecycle and subscription glue for pointer-events emulation.
//!
//! ## Overview
//!
//! This crate turns the `underclick_transparency` predicate and the
//! `underclick_redirect` routine into a managed instance: construct an
//! [`Engine`] with immutable [`EngineOptions`], and it probes the platform for
//! native `pointer-events` support, registers delegated listeners when the
//! emulation is needed (or forced), forwards intercepted interactions, and
//! tears down exactly its own listeners on destroy.
//!
//! ## Coexisting instances
//!
//! Listener registration is namespaced: each engine subscribes under its
//! configured `(root, namespace)` pair, and destroy removes only that pair.
//! [`SubscriptionRegistry`] is an explicit registry with those semantics that
//! platform adapters can embed, so several engines on one root never clobber
//! each other.
//!
//! ## Example
//!
//! ```rust
//! use underclick_engine::{
//!     Capabilities, Engine, EngineOptionsBuilder, EventHooks, SubscriptionRegistry,
//! };
//!
//! struct Platform {
//!     native: bool,
//!     hooks: SubscriptionRegistry<u32>,
//! }
//!
//! impl Capabilities for Platform {
//!     fn supports_native_pointer_events(&self) -> bool {
//!         self.native
//!     }
//! }
//!
//! impl EventHooks<u32> for Platform {
//!     fn subscribe(
//!         &mut self,
//!         root: u32,
//!         kinds: &[underclick_engine::InteractionKind],
//!         selector: &str,
//!         namespace: Option<&str>,
//!     ) {
//!         self.hooks.subscribe(root, kinds, selector, namespace);
//!     }
//!     fn unsubscribe(&mut self, root: u32, namespace: Option<&str>) {
//!         self.hooks.unsubscribe(root, namespace);
//!     }
//! }
//!
//! let mut platform = Platform {
//!     native: false,
//!     hooks: SubscriptionRegistry::new(),
//! };
//!
//! let options = EngineOptionsBuilder::new().none_class("pe-none").build();
//! let mut engine = Engine::create(options, &mut platform, 1_u32);
//! assert!(engine.is_enabled());
//! assert!(platform.hooks.is_subscribed(1, Some("underclick")));
//!
//! engine.destroy(&mut platform);
//! engine.destroy(&mut platform); // idempotent
//! assert!(!engine.is_enabled());
//! assert!(!platform.hooks.is_subscribed(1, Some("underclick")));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod engine;
mod options;
mod platform;
mod registry;

pub use engine::Engine;
pub use options::{DEFAULT_NAMESPACE, EngineOptions, EngineOptionsBuilder};
pub use platform::{Capabilities, EventHooks};
pub use registry::{Subscription, SubscriptionRegistry};

// The event and verdict vocabulary comes from the redirect crate; re-export it
// so embedders only need this crate for the public surface.
pub use underclick_redirect::{HitSurface, InteractionEvent, InteractionKind, Modifiers, Verdict};
pub use underclick_transparency::{MarkerClasses, PointerEvents, StyleLookup, TreeLookup};
