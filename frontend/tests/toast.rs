// Component tests for the toast viewport.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use gloo_timers::future::TimeoutFuture;
use support::{cleanup, click, create_mount_point, exists, settle, text};
use wasm_bindgen_test::*;
use yew::prelude::*;

use bloodlink_web::components::toast::{use_toast, ToastMessage, ToastProvider};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[function_component(Announcer)]
fn announcer() -> Html {
    let toaster = use_toast();
    let count = use_mut_ref(|| 0u32);

    let on_failure = {
        let toaster = toaster.clone();
        Callback::from(move |_: MouseEvent| {
            toaster.show(ToastMessage::destructive("Failed", "Something broke."));
        })
    };
    let onclick = Callback::from(move |_: MouseEvent| {
        *count.borrow_mut() += 1;
        let n = *count.borrow();
        toaster.show(ToastMessage::success(format!("Saved #{n}"), "All good."));
    });

    html! {
        <>
            <button id="announce" {onclick}>{"Announce"}</button>
            <button id="fail" onclick={on_failure}>{"Fail"}</button>
        </>
    }
}

#[function_component(Wrapper)]
fn wrapper() -> Html {
    html! {
        <ToastProvider>
            <Announcer />
        </ToastProvider>
    }
}

#[function_component(QuickWrapper)]
fn quick_wrapper() -> Html {
    html! {
        <ToastProvider duration_ms={50}>
            <Announcer />
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
async fn shows_title_and_description() {
    let mount = mount().await;
    assert!(!exists(&mount, ".toast"));

    click(&mount, "#announce");
    settle().await;

    let toast = mount.query_selector(".toast.success").unwrap().unwrap();
    let body = toast.text_content().unwrap_or_default();
    assert!(body.contains("Saved #1"));
    assert!(body.contains("All good."));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn destructive_toasts_get_their_own_style() {
    let mount = mount().await;

    click(&mount, "#fail");
    settle().await;

    assert!(exists(&mount, ".toast.destructive"));
    assert!(!exists(&mount, ".toast.success"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn keeps_only_the_three_newest() {
    let mount = mount().await;

    for _ in 0..4 {
        click(&mount, "#announce");
        settle().await;
    }

    assert_eq!(mount.query_selector_all(".toast").unwrap().length(), 3);
    let body = text(&mount);
    assert!(!body.contains("Saved #1"));
    assert!(body.contains("Saved #2"));
    assert!(body.contains("Saved #4"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn close_button_dismisses() {
    let mount = mount().await;

    click(&mount, "#announce");
    settle().await;
    click(&mount, ".toast-close");
    settle().await;

    assert!(!exists(&mount, ".toast"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn toasts_dismiss_themselves_after_the_duration() {
    let mount = create_mount_point();
    yew::Renderer::<QuickWrapper>::with_root(mount.clone()).render();
    settle().await;

    click(&mount, "#announce");
    settle().await;
    assert!(exists(&mount, ".toast"));

    TimeoutFuture::new(200).await;
    settle().await;

    assert!(!exists(&mount, ".toast"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn toasts_stay_up_until_the_duration_passes() {
    let mount = mount().await;

    click(&mount, "#announce");
    settle().await;
    TimeoutFuture::new(200).await;
    settle().await;

    assert!(exists(&mount, ".toast"));

    cleanup(&mount);
}
