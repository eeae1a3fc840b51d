// Integration tests for the landing page: section anchors and the buttons
// that open each dialog.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{cleanup, click, click_labelled, create_mount_point, exists, settle, text};
use wasm_bindgen_test::*;
use yew::prelude::*;
use yew_router::prelude::*;

use bloodlink_web::components::toast::ToastProvider;
use bloodlink_web::pages::landing::Landing;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[function_component(Wrapper)]
fn wrapper() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <Landing />
            </BrowserRouter>
        </ToastProvider>
    }
}

async fn mount() -> web_sys::Element {
    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    settle().await;
    mount
}

#[wasm_bindgen_test]
async fn renders_every_section_anchor() {
    let mount = mount().await;

    for id in ["#features", "#how-it-works", "#impact", "#contact"] {
        assert!(exists(&mount, id), "missing section {id}");
    }
    assert!(!exists(&mount, ".modal-dialog"), "no dialog open on load");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn get_started_opens_donor_signup() {
    let mount = mount().await;

    click(&mount, ".nav-actions .btn-primary");
    settle().await;

    assert!(text(&mount).contains("Join as a Life Saver"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn for_hospitals_opens_partnership_form() {
    let mount = mount().await;

    click(&mount, ".nav-actions .btn-outline");
    settle().await;

    assert!(text(&mount).contains("Hospital Partnership Program"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn burger_toggles_mobile_menu() {
    let mount = mount().await;
    assert!(!exists(&mount, ".mobile-menu"));

    click(&mount, ".burger-menu");
    settle().await;
    assert!(exists(&mount, ".mobile-menu"));

    click(&mount, ".mobile-menu .btn-primary");
    settle().await;
    assert!(!exists(&mount, ".mobile-menu"), "menu closes before the dialog opens");
    assert!(text(&mount).contains("Join as a Life Saver"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn live_demo_request_hands_off_to_scheduling() {
    let mount = mount().await;

    click_labelled(&mount, "Watch Demo");
    settle().await;
    assert!(text(&mount).contains("BloodLink AI Platform Demo"));

    click_labelled(&mount, "Request Live Demo");
    settle().await;

    let body = text(&mount);
    assert!(!body.contains("BloodLink AI Platform Demo"));
    assert!(body.contains("Book a personalized demo of BloodLink AI platform"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn impact_section_offers_a_consultation() {
    let mount = mount().await;

    click_labelled(&mount, "Schedule Consultation");
    settle().await;

    assert!(text(&mount).contains("Schedule a consultation to discuss your specific needs"));

    cleanup(&mount);
}

fn scroll_window_to(y: f64) {
    let window = gloo_utils::window();
    window.scroll_to_with_x_and_y(0.0, y);
    let event = web_sys::Event::new("scroll").unwrap();
    window.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
async fn header_turns_solid_once_scrolled() {
    let mount = mount().await;
    mount.set_attribute("style", "min-height: 5000px").unwrap();
    assert!(!exists(&mount, "header.top-nav.scrolled"));

    scroll_window_to(200.0);
    settle().await;
    assert!(exists(&mount, "header.top-nav.scrolled"));

    scroll_window_to(0.0);
    settle().await;
    assert!(!exists(&mount, "header.top-nav.scrolled"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn scrolling_after_unmount_is_harmless() {
    let mount = create_mount_point();
    mount.set_attribute("style", "min-height: 5000px").unwrap();
    let handle = yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    settle().await;
    assert!(exists(&mount, "header.top-nav"));

    handle.destroy();
    settle().await;
    assert!(!exists(&mount, "header.top-nav"));

    scroll_window_to(200.0);
    settle().await;
    scroll_window_to(0.0);
    settle().await;

    cleanup(&mount);
}
