#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use papatya_taksi::content::SITE_DESCRIPTION;
use papatya_taksi::controller::{
    navigate_to_section, scroll_action, NavigationError, PageAction, PageState, Viewport,
};
use papatya_taksi::dom::{
    document, set_meta_description, window, ScrollSubscription, WindowViewport,
};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Element, Event, EventTarget};
use yew::Reducible;

wasm_bindgen_test_configure!(run_in_browser);

fn fire(target: &EventTarget, event_type: &str) {
    let event = Event::new(event_type).expect("event should construct");
    target.dispatch_event(&event).expect("dispatch should succeed");
}

fn fire_on_window(event_type: &str) {
    fire(&window().expect("window should exist"), event_type);
}

fn append_to_body(tag: &str) -> Element {
    let document = document().expect("document should exist");
    let element = document.create_element(tag).expect("element should create");
    document
        .body()
        .expect("body should exist")
        .append_child(&element)
        .expect("append should succeed");
    element
}

fn mount_section(id: &str) -> Element {
    let element = append_to_body("section");
    element.set_id(id);
    element
}

fn counting_subscription(calls: &Rc<Cell<u32>>) -> ScrollSubscription {
    let calls = calls.clone();
    ScrollSubscription::attach(move || calls.set(calls.get() + 1))
        .expect("subscription should attach")
}

#[wasm_bindgen_test]
fn scroll_subscription_stops_after_drop() {
    let calls = Rc::new(Cell::new(0u32));
    let subscription = counting_subscription(&calls);
    // The handler runs once on attach.
    assert_eq!(calls.get(), 1);

    fire_on_window("scroll");
    assert_eq!(calls.get(), 2);

    drop(subscription);
    fire_on_window("scroll");
    fire_on_window("scroll");
    assert_eq!(calls.get(), 2);
}

#[wasm_bindgen_test]
fn resize_recomputes_until_dropped() {
    let calls = Rc::new(Cell::new(0u32));
    let subscription = counting_subscription(&calls);

    fire_on_window("resize");
    assert_eq!(calls.get(), 2);

    drop(subscription);
    fire_on_window("resize");
    assert_eq!(calls.get(), 2);
}

#[wasm_bindgen_test]
fn element_load_recomputes_until_dropped() {
    let calls = Rc::new(Cell::new(0u32));
    let image = append_to_body("img");
    let subscription = counting_subscription(&calls);

    // `load` from an element doesn't bubble; the document sees it while capturing.
    fire(&image, "load");
    assert_eq!(calls.get(), 2);

    drop(subscription);
    fire(&image, "load");
    assert_eq!(calls.get(), 2);
    image.remove();
}

#[wasm_bindgen_test]
fn repeated_mounts_do_not_accumulate_listeners() {
    let calls = Rc::new(Cell::new(0u32));
    for _ in 0..3 {
        drop(counting_subscription(&calls));
    }
    let before = calls.get();
    fire_on_window("scroll");
    fire_on_window("resize");
    assert_eq!(calls.get(), before);
}

#[wasm_bindgen_test]
fn scroll_action_reads_the_live_window() {
    let state = Rc::new(PageState::default()).reduce(scroll_action(&WindowViewport));
    let metrics = WindowViewport.metrics();
    assert_eq!(state.scroll_progress_ratio, metrics.progress());
    assert!((0.0..=1.0).contains(&state.scroll_progress_ratio));
}

#[wasm_bindgen_test]
fn missing_section_is_reported_to_the_viewport_layer() {
    let result = WindowViewport.scroll_to_section("nonexistent");
    assert_eq!(
        result,
        Err(NavigationError::SectionNotFound("nonexistent".to_string()))
    );
}

#[wasm_bindgen_test]
async fn navigating_scrolls_the_section_to_the_top() {
    let window = window().expect("window should exist");
    window.scroll_to_with_x_and_y(0.0, 0.0);

    let spacer = append_to_body("div");
    spacer
        .set_attribute("style", "height: 5000px;")
        .expect("style should set");
    let section = mount_section("hedef");
    section
        .set_attribute("style", "height: 2000px;")
        .expect("style should set");

    let top_before = section.get_bounding_client_rect().top();
    assert!(top_before > 1000.0);

    let state = Rc::new(PageState::default())
        .reduce(PageAction::ToggleMobileMenu)
        .reduce(navigate_to_section(&WindowViewport, "hedef"));
    assert!(!state.is_mobile_menu_open);

    // Smooth scrolling is animated; give it time to settle.
    let mut top_after = top_before;
    for _ in 0..40 {
        TimeoutFuture::new(50).await;
        top_after = section.get_bounding_client_rect().top();
        if top_after.abs() < 1.0 {
            break;
        }
    }

    let scrolled_y = window.scroll_y().expect("scroll_y should read");
    assert!(top_after.abs() < 1.0, "section top ended at {}", top_after);
    assert!(scrolled_y > 1000.0);

    let state = state.reduce(scroll_action(&WindowViewport));
    assert!(state.is_scrolled_past_threshold);
    assert!(state.scroll_progress_ratio > 0.0);

    section.remove();
    spacer.remove();
    window.scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
fn navigating_to_missing_section_still_closes_menu() {
    let state = Rc::new(PageState::default()).reduce(PageAction::ToggleMobileMenu);
    let before = WindowViewport.metrics();

    let state = state.reduce(navigate_to_section(&WindowViewport, "nonexistent"));

    assert!(!state.is_mobile_menu_open);
    assert_eq!(WindowViewport.metrics(), before);
}

#[wasm_bindgen_test]
fn meta_description_is_set_once() {
    let document = document().expect("document should exist");
    set_meta_description(SITE_DESCRIPTION).expect("meta description should set");
    set_meta_description(SITE_DESCRIPTION).expect("meta description should update");

    let tags = document
        .query_selector_all("meta[name=\"description\"]")
        .expect("selector should parse");
    assert_eq!(tags.length(), 1);

    let meta = document
        .query_selector("meta[name=\"description\"]")
        .expect("selector should parse")
        .expect("meta tag should exist");
    assert_eq!(
        meta.get_attribute("content").as_deref(),
        Some(SITE_DESCRIPTION)
    );
}
