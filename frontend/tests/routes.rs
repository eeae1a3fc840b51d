// Integration tests for the route table: each path renders its page and the
// footer's legal links navigate between them.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{cleanup, click, create_mount_point, exists, settle, text};
use wasm_bindgen_test::*;
use yew::prelude::*;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::prelude::*;

use bloodlink_web::components::toast::ToastProvider;
use bloodlink_web::{switch, Route};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct WrapperProps {
    path: &'static str,
}

#[function_component(Wrapper)]
fn wrapper(props: &WrapperProps) -> Html {
    let history = use_memo(
        |path| {
            let history = MemoryHistory::new();
            history.push(*path);
            AnyHistory::from(history)
        },
        props.path,
    );

    html! {
        <ToastProvider>
            <Router history={(*history).clone()}>
                <Switch<Route> render={switch} />
            </Router>
        </ToastProvider>
    }
}

async fn mount_at(path: &'static str) -> web_sys::Element {
    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root_and_props(mount.clone(), WrapperProps { path }).render();
    settle().await;
    mount
}

fn heading(mount: &web_sys::Element) -> String {
    mount
        .query_selector("h1")
        .unwrap()
        .and_then(|h1| h1.text_content())
        .unwrap_or_default()
}

#[wasm_bindgen_test]
async fn root_renders_the_landing_page() {
    let mount = mount_at("/").await;

    assert!(exists(&mount, ".landing-page"));
    assert!(exists(&mount, "#contact"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn legal_paths_render_their_pages() {
    for (path, title) in [
        ("/privacy", "Privacy Policy"),
        ("/terms", "Terms of Service"),
        ("/hipaa", "HIPAA Compliance"),
    ] {
        let mount = mount_at(path).await;

        assert_eq!(heading(&mount), title, "heading at {path}");
        assert!(!exists(&mount, ".landing-page"), "{path} is not the landing page");

        cleanup(&mount);
    }
}

#[wasm_bindgen_test]
async fn unknown_path_renders_not_found() {
    let mount = mount_at("/no-such-page").await;

    assert_eq!(heading(&mount), "404");
    assert!(exists(&mount, ".not-found a"));
    assert!(text(&mount).contains("Back to BloodLink AI"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn not_found_links_back_home() {
    let mount = mount_at("/no-such-page").await;

    click(&mount, ".not-found a");
    settle().await;

    assert!(exists(&mount, ".landing-page"));
    assert!(!exists(&mount, ".not-found"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn footer_privacy_link_swaps_the_page() {
    let mount = mount_at("/").await;

    click(&mount, ".site-footer .legal-links a");
    settle().await;

    assert_eq!(heading(&mount), "Privacy Policy");
    assert!(!exists(&mount, ".landing-page"));

    cleanup(&mount);
}
