// Copyright 2026 the Underclick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=underclick_redirect --heading-base-level=0

//! Underclick Redirect: re-target interactions through pointer-transparent elements.
//!
//! ## Overview
//!
//! When an interaction (click, mousedown, …) lands on an element that
//! `underclick_transparency` resolves as pointer-transparent, the interaction
//! must instead reach whatever lies beneath it, exactly as a native
//! `pointer-events`-aware hit test would have delivered it. This crate performs
//! that re-targeting:
//!
//! 1. Hide the transparent target from hit testing (a visibility-style toggle
//!    that must not shift layout — never `display: none`).
//! 2. Query the topmost element at the event's viewport coordinates, hiding any
//!    further transparent layers encountered on the way down.
//! 3. Clone the event with its target rebound to the element found and dispatch
//!    it synchronously on that element.
//! 4. Restore every hidden element — on every exit path, including dispatch
//!    errors.
//!
//! The platform is consulted only through the [`HitSurface`] trait; this crate
//! owns no tree and performs no geometry itself.
//!
//! ## Verdict
//!
//! [`redirect`] reports what happened as a [`Verdict`]:
//!
//! - [`Verdict::Pass`] — the target was interactive; let the platform's own
//!   handling proceed.
//! - [`Verdict::Redirected`] — the target was transparent. The original event's
//!   default action and propagation must be suppressed by the caller; the
//!   payload says where (if anywhere) an equivalent event was delivered.
//!
//! ## Ordering
//!
//! The whole hide → hit-test → redispatch → restore sequence completes within
//! one synchronous call, so no other interaction can observe the intermediate
//! hidden state.
//!
//! ## Termination
//!
//! Stacked transparent layers cannot recurse forever: each step hides one more
//! element from the hit-test candidates and the tree is finite, so the descent
//! reaches a non-transparent element or runs out of elements.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod guard;
mod redirect;
mod types;

pub use guard::HiddenLayers;
pub use redirect::redirect;
pub use types::{HitSurface, InteractionEvent, InteractionKind, Modifiers, Verdict};
