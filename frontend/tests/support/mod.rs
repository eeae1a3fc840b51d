// Shared harness for the browser component tests.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// helper is used in every compilation unit.
#![allow(dead_code)]

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, EventInit, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    KeyboardEvent, KeyboardEventInit,
};

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Let yew flush its render queue.
pub async fn settle() {
    TimeoutFuture::new(0).await;
    TimeoutFuture::new(0).await;
}

pub fn text(mount: &Element) -> String {
    mount.text_content().unwrap_or_default()
}

pub fn exists(mount: &Element, selector: &str) -> bool {
    mount.query_selector(selector).unwrap().is_some()
}

fn bubbling(name: &str) -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    Event::new_with_event_init_dict(name, &init).unwrap()
}

/// Type `value` into the input matching `selector`.
pub fn fill(mount: &Element, selector: &str, value: &str) {
    let input = mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no input matches {selector}"))
        .dyn_into::<HtmlInputElement>()
        .unwrap();
    input.set_value(value);
    input.dispatch_event(&bubbling("input")).unwrap();
}

pub fn input_value(mount: &Element, selector: &str) -> String {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no input matches {selector}"))
        .dyn_into::<HtmlInputElement>()
        .unwrap()
        .value()
}

pub fn choose(mount: &Element, selector: &str, value: &str) {
    let select = mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no select matches {selector}"))
        .dyn_into::<HtmlSelectElement>()
        .unwrap();
    select.set_value(value);
    select.dispatch_event(&bubbling("change")).unwrap();
}

pub fn check(mount: &Element, selector: &str) {
    let input = mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no checkbox matches {selector}"))
        .dyn_into::<HtmlInputElement>()
        .unwrap();
    input.set_checked(true);
    input.dispatch_event(&bubbling("change")).unwrap();
}

pub fn click(mount: &Element, selector: &str) {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("nothing matches {selector}"))
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

/// Click the first `<button>` or `<a>` whose text contains `label`.
pub fn click_labelled(mount: &Element, label: &str) {
    let nodes = mount.query_selector_all("button, a").unwrap();
    for i in 0..nodes.length() {
        let element = nodes.item(i).unwrap().dyn_into::<HtmlElement>().unwrap();
        if element.text_content().unwrap_or_default().contains(label) {
            element.click();
            return;
        }
    }
    panic!("no button labelled {label}");
}

/// Submit the form the way the submit button would, native validation
/// included. An invalid form fires no submit event.
pub fn submit(mount: &Element, selector: &str) {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no form matches {selector}"))
        .dyn_into::<HtmlFormElement>()
        .unwrap()
        .request_submit()
        .unwrap();
}

pub fn press_escape() {
    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    gloo_utils::window().dispatch_event(&event).unwrap();
}
