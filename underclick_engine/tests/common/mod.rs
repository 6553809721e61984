// Copyright 2026 the Underclick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small in-memory "page" shared by the integration tests: axis-aligned
//! layers with z-order hit testing, classes, computed styles, and a dispatch
//! log, plus the platform-adapter seams the engine needs.

use std::collections::BTreeMap;
use std::convert::Infallible;

use kurbo::{Point, Rect};
use underclick_engine::{
    Capabilities, EventHooks, HitSurface, InteractionEvent, InteractionKind, PointerEvents,
    StyleLookup, SubscriptionRegistry, TreeLookup,
};

pub struct Node {
    pub parent: Option<u32>,
    pub root: bool,
    pub classes: Vec<String>,
    pub style: PointerEvents,
    pub rect: Rect,
    pub z: i32,
    pub hit_testable: bool,
}

pub struct Page {
    pub nodes: BTreeMap<u32, Node>,
    pub dispatched: Vec<(u32, InteractionEvent<u32>)>,
    pub hooks: SubscriptionRegistry<u32>,
    pub native: bool,
}

pub const ROOT: u32 = 1;

impl Page {
    /// A page whose root spans 800x600 at z = 0.
    pub fn new(native: bool) -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(
            ROOT,
            Node {
                parent: None,
                root: true,
                classes: Vec::new(),
                style: PointerEvents::Auto,
                rect: Rect::new(0.0, 0.0, 800.0, 600.0),
                z: 0,
                hit_testable: true,
            },
        );
        Self {
            nodes,
            dispatched: Vec::new(),
            hooks: SubscriptionRegistry::new(),
            native,
        }
    }

    pub fn insert(&mut self, key: u32, parent: u32, rect: Rect, z: i32) -> &mut Self {
        self.nodes.insert(
            key,
            Node {
                parent: Some(parent),
                root: false,
                classes: Vec::new(),
                style: PointerEvents::Auto,
                rect,
                z,
                hit_testable: true,
            },
        );
        self
    }

    pub fn set_style(&mut self, key: u32, style: PointerEvents) -> &mut Self {
        self.nodes.get_mut(&key).expect("node exists").style = style;
        self
    }

    pub fn add_class(&mut self, key: u32, class: &str) -> &mut Self {
        self.nodes
            .get_mut(&key)
            .expect("node exists")
            .classes
            .push(class.to_string());
        self
    }

    pub fn all_restored(&self) -> bool {
        self.nodes.values().all(|n| n.hit_testable)
    }
}

impl StyleLookup<u32> for Page {
    fn computed_pointer_events(&self, node: &u32) -> PointerEvents {
        self.nodes.get(node).map_or(PointerEvents::Auto, |n| n.style)
    }

    fn has_class(&self, node: &u32, class: &str) -> bool {
        self.nodes
            .get(node)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }
}

impl TreeLookup<u32> for Page {
    fn parent_of(&self, node: &u32) -> Option<u32> {
        self.nodes.get(node).and_then(|n| n.parent)
    }

    fn is_root(&self, node: &u32) -> bool {
        self.nodes.get(node).is_some_and(|n| n.root)
    }
}

impl HitSurface<u32> for Page {
    type Error = Infallible;

    fn element_at_point(&self, point: Point) -> Option<u32> {
        self.nodes
            .iter()
            .filter(|(_, n)| n.hit_testable && n.rect.contains(point))
            .max_by_key(|(key, n)| (n.z, *key))
            .map(|(key, _)| *key)
    }

    fn set_hit_testable(&mut self, node: u32, hit_testable: bool) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.hit_testable = hit_testable;
        }
    }

    fn dispatch(&mut self, node: u32, event: &InteractionEvent<u32>) -> Result<(), Self::Error> {
        self.dispatched.push((node, event.clone()));
        Ok(())
    }
}

impl Capabilities for Page {
    fn supports_native_pointer_events(&self) -> bool {
        self.native
    }
}

impl EventHooks<u32> for Page {
    fn subscribe(
        &mut self,
        root: u32,
        kinds: &[InteractionKind],
        selector: &str,
        namespace: Option<&str>,
    ) {
        self.hooks.subscribe(root, kinds, selector, namespace);
    }

    fn unsubscribe(&mut self, root: u32, namespace: Option<&str>) {
        self.hooks.unsubscribe(root, namespace);
    }
}
