// Copyright 2026 the Underclick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click-through basics.
//!
//! Build a tiny in-memory page — a button covered by a pointer-transparent
//! overlay — and drive an `underclick_engine::Engine` through interception,
//! redirection, and teardown.
//!
//! Run:
//! - `cargo run -p underclick_demos --example click_through_basics`

use std::collections::BTreeMap;
use std::convert::Infallible;

use kurbo::{Point, Rect};
use underclick_engine::{
    Capabilities, Engine, EngineOptionsBuilder, EventHooks, HitSurface, InteractionEvent,
    InteractionKind, PointerEvents, StyleLookup, SubscriptionRegistry, TreeLookup, Verdict,
};

struct Node {
    parent: Option<&'static str>,
    style: PointerEvents,
    rect: Rect,
    z: i32,
    hit_testable: bool,
}

struct Page {
    nodes: BTreeMap<&'static str, Node>,
    hooks: SubscriptionRegistry<&'static str>,
}

impl StyleLookup<&'static str> for Page {
    fn computed_pointer_events(&self, node: &&'static str) -> PointerEvents {
        self.nodes.get(node).map_or(PointerEvents::Auto, |n| n.style)
    }

    fn has_class(&self, _node: &&'static str, _class: &str) -> bool {
        false
    }
}

impl TreeLookup<&'static str> for Page {
    fn parent_of(&self, node: &&'static str) -> Option<&'static str> {
        self.nodes.get(node).and_then(|n| n.parent)
    }

    fn is_root(&self, node: &&'static str) -> bool {
        self.nodes.get(node).is_some_and(|n| n.parent.is_none())
    }
}

impl HitSurface<&'static str> for Page {
    type Error = Infallible;

    fn element_at_point(&self, point: Point) -> Option<&'static str> {
        self.nodes
            .iter()
            .filter(|(_, n)| n.hit_testable && n.rect.contains(point))
            .max_by_key(|(_, n)| n.z)
            .map(|(name, _)| *name)
    }

    fn set_hit_testable(&mut self, node: &'static str, hit_testable: bool) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.hit_testable = hit_testable;
        }
    }

    fn dispatch(
        &mut self,
        node: &'static str,
        event: &InteractionEvent<&'static str>,
    ) -> Result<(), Self::Error> {
        println!(
            "  delivered {} at ({}, {}) to {node:?}",
            event.kind.name(),
            event.position.x,
            event.position.y
        );
        Ok(())
    }
}

impl Capabilities for Page {
    fn supports_native_pointer_events(&self) -> bool {
        false
    }
}

impl EventHooks<&'static str> for Page {
    fn subscribe(
        &mut self,
        root: &'static str,
        kinds: &[InteractionKind],
        selector: &str,
        namespace: Option<&str>,
    ) {
        self.hooks.subscribe(root, kinds, selector, namespace);
    }

    fn unsubscribe(&mut self, root: &'static str, namespace: Option<&str>) {
        self.hooks.unsubscribe(root, namespace);
    }
}

fn main() {
    // A page background, a button, and a decorative overlay covering the
    // button that should not swallow clicks.
    let nodes = BTreeMap::from([
        (
            "page",
            Node {
                parent: None,
                style: PointerEvents::Auto,
                rect: Rect::new(0.0, 0.0, 800.0, 600.0),
                z: 0,
                hit_testable: true,
            },
        ),
        (
            "button",
            Node {
                parent: Some("page"),
                style: PointerEvents::Auto,
                rect: Rect::new(20.0, 20.0, 140.0, 60.0),
                z: 1,
                hit_testable: true,
            },
        ),
        (
            "overlay",
            Node {
                parent: Some("page"),
                style: PointerEvents::None,
                rect: Rect::new(0.0, 0.0, 200.0, 100.0),
                z: 2,
                hit_testable: true,
            },
        ),
    ]);
    let mut page = Page {
        nodes,
        hooks: SubscriptionRegistry::new(),
    };

    let mut engine = Engine::create(EngineOptionsBuilder::new().build(), &mut page, "page");
    println!("engine enabled: {}", engine.is_enabled());
    println!(
        "overlay is click-through: {}",
        engine.is_click_through(&page, "overlay")
    );

    // A click lands on the overlay, directly above the button.
    let ev = InteractionEvent::new(InteractionKind::Click, "overlay", Point::new(60.0, 40.0));
    println!("click on {:?}:", ev.target);
    match engine.handle(&mut page, &ev).expect("dispatch is infallible") {
        Verdict::Pass => println!("  passed through"),
        Verdict::Redirected(Some(to)) => println!("  redirected to {to:?} (default suppressed)"),
        Verdict::Redirected(None) => println!("  nothing beneath (default suppressed)"),
    }

    // A click outside the overlay reaches the page directly.
    let ev = InteractionEvent::new(InteractionKind::Click, "page", Point::new(400.0, 300.0));
    println!("click on {:?}:", ev.target);
    match engine.handle(&mut page, &ev).expect("dispatch is infallible") {
        Verdict::Pass => println!("  passed through"),
        verdict => println!("  unexpected: {verdict:?}"),
    }

    engine.destroy(&mut page);
    println!("engine enabled after destroy: {}", engine.is_enabled());
}
