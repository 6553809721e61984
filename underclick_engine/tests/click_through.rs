// Copyright 2026 the Underclick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests: an engine bound to a small in-memory page, from capability
//! probe through redirected delivery and teardown.

mod common;

use common::{Page, ROOT};
use kurbo::{Point, Rect};
use underclick_engine::{
    DEFAULT_NAMESPACE, Engine, EngineOptionsBuilder, InteractionEvent, InteractionKind, Modifiers,
    PointerEvents, Verdict,
};

fn click(target: u32, x: f64, y: f64) -> InteractionEvent<u32> {
    InteractionEvent::new(InteractionKind::Click, target, Point::new(x, y))
}

#[test]
fn transparent_overlay_delivers_to_the_element_beneath() {
    let mut page = Page::new(false);
    page.insert(2, ROOT, Rect::new(10.0, 10.0, 110.0, 60.0), 1);
    page.insert(3, ROOT, Rect::new(0.0, 0.0, 200.0, 200.0), 2);
    page.add_class(3, "pe-none");

    let engine = Engine::create(
        EngineOptionsBuilder::new().none_class("pe-none").build(),
        &mut page,
        ROOT,
    );
    assert!(engine.is_enabled());

    let ev = click(3, 50.0, 30.0).with_modifiers(Modifiers::SHIFT);
    let verdict = engine.handle(&mut page, &ev).unwrap();

    assert_eq!(verdict, Verdict::Redirected(Some(2)));
    assert!(verdict.suppresses_default());

    let (dest, delivered) = page.dispatched.pop().expect("one redirected event");
    assert!(page.dispatched.is_empty());
    assert_eq!(dest, 2);
    assert_eq!(delivered.target, 2);
    assert_eq!(delivered.kind, InteractionKind::Click);
    assert_eq!(delivered.position, Point::new(50.0, 30.0));
    assert_eq!(delivered.modifiers, Modifiers::SHIFT);
    assert!(page.all_restored());
}

#[test]
fn interactive_targets_pass_through_untouched() {
    let mut page = Page::new(false);
    page.insert(2, ROOT, Rect::new(0.0, 0.0, 100.0, 100.0), 1);

    let engine = Engine::create(EngineOptionsBuilder::new().build(), &mut page, ROOT);
    let verdict = engine.handle(&mut page, &click(2, 5.0, 5.0)).unwrap();

    assert_eq!(verdict, Verdict::Pass);
    assert!(page.dispatched.is_empty());
}

#[test]
fn marker_classes_and_computed_styles_mix() {
    // Overlay is transparent by class; a badge inside it re-enables itself by
    // computed style and receives the click directly.
    let mut page = Page::new(false);
    page.insert(2, ROOT, Rect::new(0.0, 0.0, 300.0, 300.0), 1);
    page.add_class(2, "pe-none");
    page.insert(3, 2, Rect::new(100.0, 100.0, 150.0, 150.0), 2);
    page.set_style(3, PointerEvents::All);

    let engine = Engine::create(
        EngineOptionsBuilder::new().none_class("pe-none").build(),
        &mut page,
        ROOT,
    );

    assert!(engine.is_click_through(&page, 2));
    assert!(!engine.is_click_through(&page, 3));

    // A click addressed to the badge is not intercepted at all.
    let verdict = engine.handle(&mut page, &click(3, 120.0, 120.0)).unwrap();
    assert_eq!(verdict, Verdict::Pass);
}

#[test]
fn nearest_marker_wins_across_three_levels() {
    let mut page = Page::new(false);
    page.insert(2, ROOT, Rect::new(0.0, 0.0, 300.0, 300.0), 1);
    page.insert(3, 2, Rect::new(0.0, 0.0, 300.0, 300.0), 2);
    page.set_style(ROOT, PointerEvents::None);
    page.set_style(2, PointerEvents::All);

    let engine = Engine::create(EngineOptionsBuilder::new().build(), &mut page, ROOT);
    // root=none, mid=all, leaf=unmarked: the leaf is interactive.
    assert!(!engine.is_click_through(&page, 3));

    page.set_style(ROOT, PointerEvents::All);
    page.set_style(2, PointerEvents::None);
    // root=all, mid=none, leaf=unmarked: the leaf is transparent.
    assert!(engine.is_click_through(&page, 3));
}

#[test]
fn stacked_transparent_layers_reach_the_bottom_button() {
    let mut page = Page::new(false);
    page.insert(2, ROOT, Rect::new(0.0, 0.0, 100.0, 100.0), 1);
    page.insert(3, ROOT, Rect::new(0.0, 0.0, 100.0, 100.0), 2);
    page.insert(4, ROOT, Rect::new(0.0, 0.0, 100.0, 100.0), 3);
    page.set_style(3, PointerEvents::None);
    page.set_style(4, PointerEvents::None);

    let engine = Engine::create(EngineOptionsBuilder::new().build(), &mut page, ROOT);
    let verdict = engine.handle(&mut page, &click(4, 50.0, 50.0)).unwrap();

    assert_eq!(verdict, Verdict::Redirected(Some(2)));
    assert_eq!(page.dispatched.len(), 1);
    assert!(page.all_restored());
}

#[test]
fn no_element_beneath_still_suppresses_the_default() {
    let mut page = Page::new(false);
    // Transparent layer floating outside the root's bounds.
    page.insert(2, ROOT, Rect::new(900.0, 900.0, 950.0, 950.0), 1);
    page.set_style(2, PointerEvents::None);

    let engine = Engine::create(EngineOptionsBuilder::new().build(), &mut page, ROOT);
    let verdict = engine.handle(&mut page, &click(2, 920.0, 920.0)).unwrap();

    assert_eq!(verdict, Verdict::Redirected(None));
    assert!(verdict.suppresses_default());
    assert!(page.dispatched.is_empty());
    assert!(page.all_restored());
}

#[test]
fn kinds_outside_listen_on_pass_through() {
    let mut page = Page::new(false);
    page.insert(2, ROOT, Rect::new(0.0, 0.0, 100.0, 100.0), 1);
    page.set_style(2, PointerEvents::None);

    let engine = Engine::create(
        EngineOptionsBuilder::new()
            .listen_on([InteractionKind::Click])
            .build(),
        &mut page,
        ROOT,
    );

    let down = InteractionEvent::new(InteractionKind::MouseDown, 2, Point::new(5.0, 5.0));
    assert_eq!(engine.handle(&mut page, &down).unwrap(), Verdict::Pass);

    let verdict = engine.handle(&mut page, &click(2, 5.0, 5.0)).unwrap();
    assert_eq!(verdict, Verdict::Redirected(Some(ROOT)));
}

#[test]
fn native_support_leaves_the_engine_dormant() {
    let mut page = Page::new(true);
    page.insert(2, ROOT, Rect::new(0.0, 0.0, 100.0, 100.0), 1);
    page.set_style(2, PointerEvents::None);

    let engine = Engine::create(EngineOptionsBuilder::new().build(), &mut page, ROOT);
    assert!(!engine.is_enabled());
    assert!(page.hooks.is_empty());

    // Even a transparent target passes through; the platform handles it.
    let verdict = engine.handle(&mut page, &click(2, 5.0, 5.0)).unwrap();
    assert_eq!(verdict, Verdict::Pass);

    // Forcing bypasses the probe on the same page.
    let forced = Engine::create(
        EngineOptionsBuilder::new().force_polyfill(true).build(),
        &mut page,
        ROOT,
    );
    assert!(forced.is_enabled());
    let verdict = forced.handle(&mut page, &click(2, 5.0, 5.0)).unwrap();
    assert_eq!(verdict, Verdict::Redirected(Some(ROOT)));
}

#[test]
fn destroy_spares_unrelated_listeners_on_the_same_root() {
    use underclick_engine::EventHooks;

    let mut page = Page::new(false);

    let mut first = Engine::create(EngineOptionsBuilder::new().build(), &mut page, ROOT);
    let second = Engine::create(
        EngineOptionsBuilder::new()
            .namespace(Some("second".to_string()))
            .build(),
        &mut page,
        ROOT,
    );
    // An unrelated, non-engine listener on the same root.
    page.subscribe(ROOT, &[InteractionKind::MouseUp], "*", Some("analytics"));

    first.destroy(&mut page);
    first.destroy(&mut page);

    assert!(!first.is_enabled());
    assert!(second.is_enabled());
    assert!(!page.hooks.is_subscribed(ROOT, Some(DEFAULT_NAMESPACE)));
    assert!(page.hooks.is_subscribed(ROOT, Some("second")));
    assert!(page.hooks.is_subscribed(ROOT, Some("analytics")));
}

#[test]
fn delivery_loop_consults_the_registry() {
    let mut page = Page::new(false);
    page.insert(2, ROOT, Rect::new(0.0, 0.0, 100.0, 100.0), 1);
    page.set_style(2, PointerEvents::None);

    let engine = Engine::create(
        EngineOptionsBuilder::new()
            .listen_on([InteractionKind::Click, InteractionKind::MouseDown])
            .build(),
        &mut page,
        ROOT,
    );

    // A minimal delegation loop: offer the engine only what the registry says
    // some listener on the root wants.
    let events = [
        InteractionEvent::new(InteractionKind::DoubleClick, 2, Point::new(5.0, 5.0)),
        InteractionEvent::new(InteractionKind::Click, 2, Point::new(5.0, 5.0)),
    ];
    let mut offered = 0;
    for ev in &events {
        if page.hooks.wants(ROOT, ev.kind) {
            offered += 1;
            let verdict = engine.handle(&mut page, ev).unwrap();
            assert_eq!(verdict, Verdict::Redirected(Some(ROOT)));
        }
    }
    assert_eq!(offered, 1);
    assert_eq!(page.dispatched.len(), 1);
}
