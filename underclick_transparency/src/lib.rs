// Copyright 2026 the Underclick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=underclick_transparency --heading-base-level=0

//! Underclick Transparency: pointer-events transparency resolution.
//!
//! ## Overview
//!
//! This crate decides whether an element is *pointer-transparent* — invisible to
//! pointer input the way CSS `pointer-events: none` makes it — taking ancestor
//! inheritance into account. It is a pure predicate: no caching, no side effects,
//! evaluated fresh per query so style and class changes between interactions are
//! always observed.
//!
//! It does not perform hit testing and does not own a tree. Instead, feed it your
//! own tree through two small lookup traits ([`StyleLookup`] and [`TreeLookup`]),
//! the same way `understory_responder` consumes a `ParentLookup`.
//!
//! ## Resolution order
//!
//! The walk starts at the queried node and moves up parent links. The nearest
//! explicit marker wins:
//!
//! 1. An explicit *all-claim* at the current node (marker class, or computed
//!    [`PointerEvents::All`]) → **not transparent**, overriding anything inherited.
//! 2. Else an explicit *none-claim* (marker class, or computed
//!    [`PointerEvents::None`]) → **transparent**.
//! 3. Else inherit: continue at the parent. The document root, or walking off the
//!    tree entirely, resolves to **not transparent** — interactive is the default,
//!    matching native CSS `auto`.
//!
//! When a single node carries both claims (say a marker class says "none" while
//! the computed style says `all`), the all-claim wins because it is checked first.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use underclick_transparency::{
//!     MarkerClasses, PointerEvents, StyleLookup, TreeLookup, is_transparent,
//! };
//!
//! struct Dom(BTreeMap<u32, (Option<u32>, PointerEvents)>);
//!
//! impl StyleLookup<u32> for Dom {
//!     fn computed_pointer_events(&self, node: &u32) -> PointerEvents {
//!         self.0.get(node).map_or(PointerEvents::Auto, |n| n.1)
//!     }
//!     fn has_class(&self, _node: &u32, _class: &str) -> bool {
//!         false
//!     }
//! }
//!
//! impl TreeLookup<u32> for Dom {
//!     fn parent_of(&self, node: &u32) -> Option<u32> {
//!         self.0.get(node).and_then(|n| n.0)
//!     }
//!     fn is_root(&self, node: &u32) -> bool {
//!         self.0.get(node).is_some_and(|n| n.0.is_none())
//!     }
//! }
//!
//! // root (1) is auto; an overlay (2) under it is `none`; a badge (3) inside the
//! // overlay re-enables itself with `all`.
//! let dom = Dom([
//!     (1, (None, PointerEvents::Auto)),
//!     (2, (Some(1), PointerEvents::None)),
//!     (3, (Some(2), PointerEvents::All)),
//! ]
//! .into_iter()
//! .collect());
//!
//! let markers = MarkerClasses::EMPTY;
//! assert!(!is_transparent(&dom, &dom, &markers, 1));
//! assert!(is_transparent(&dom, &dom, &markers, 2));
//! assert!(!is_transparent(&dom, &dom, &markers, 3));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod resolve;
mod types;

pub use resolve::{explicit_claim, is_transparent};
pub use types::{Claim, MarkerClasses, PointerEvents, StyleLookup, TreeLookup};
