// Component tests for the three-step donor signup dialog.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{
    check, choose, cleanup, click, click_labelled, create_mount_point, exists, fill,
    input_value, settle, submit, text,
};
use wasm_bindgen_test::*;
use yew::prelude::*;

use bloodlink_web::components::toast::ToastProvider;
use bloodlink_web::modals::donor_signup::DonorSignupModal;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[function_component(Wrapper)]
fn wrapper() -> Html {
    let open = use_state(|| true);
    let reopen = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(true))
    };
    let close = {
        let open = open.clone();
        Callback::from(move |_| open.set(false))
    };

    html! {
        <ToastProvider>
            <button id="reopen" onclick={reopen}>{"Open"}</button>
            <DonorSignupModal open={*open} on_close={close} />
        </ToastProvider>
    }
}

async fn mount() -> web_sys::Element {
    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    settle().await;
    mount
}

async fn complete_personal_step(mount: &web_sys::Element) {
    fill(mount, "#name", "Asha Verma");
    fill(mount, "#age", "29");
    fill(mount, "#email", "asha@example.com");
    fill(mount, "#phone", "+91 9000000000");
    fill(mount, "#city", "Pune");
    choose(mount, "#state", "Maharashtra");
    settle().await;
    submit(mount, "form.donor-signup");
    settle().await;
}

#[wasm_bindgen_test]
async fn opens_on_the_personal_step() {
    let mount = mount().await;

    let body = text(&mount);
    assert!(body.contains("Join as a Life Saver"));
    assert!(body.contains("Step 1 of 3: Personal Information"));
    assert!(body.contains("Next Step"));
    assert!(!body.contains("Previous"), "first step has no Previous button");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn blank_personal_step_does_not_advance() {
    let mount = mount().await;

    submit(&mount, "form.donor-signup");
    settle().await;

    assert!(text(&mount).contains("Step 1 of 3"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn out_of_range_age_does_not_advance() {
    let mount = mount().await;

    fill(&mount, "#name", "Asha Verma");
    fill(&mount, "#age", "70");
    fill(&mount, "#email", "asha@example.com");
    fill(&mount, "#phone", "+91 9000000000");
    fill(&mount, "#city", "Pune");
    settle().await;
    submit(&mount, "form.donor-signup");
    settle().await;

    assert!(text(&mount).contains("Step 1 of 3"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn advancing_and_going_back_keeps_entered_values() {
    let mount = mount().await;

    complete_personal_step(&mount).await;
    assert!(text(&mount).contains("Step 2 of 3: Medical Details"));
    assert!(exists(&mount, "#bloodType"));

    click_labelled(&mount, "Previous");
    settle().await;

    assert!(text(&mount).contains("Step 1 of 3"));
    assert_eq!(input_value(&mount, "#name"), "Asha Verma");
    assert_eq!(input_value(&mount, "#city"), "Pune");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn final_step_requires_privacy_consent() {
    let mount = mount().await;

    complete_personal_step(&mount).await;
    submit(&mount, "form.donor-signup");
    settle().await;
    assert!(text(&mount).contains("Step 3 of 3: Preferences & Consent"));
    assert!(text(&mount).contains("Create Donor Profile"));

    submit(&mount, "form.donor-signup");
    settle().await;

    let body = text(&mount);
    assert!(body.contains("Privacy Consent Required"));
    assert!(exists(&mount, ".toast.destructive"));
    assert!(exists(&mount, ".modal-dialog"), "dialog stays open");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn accepting_consent_creates_the_profile_and_closes() {
    let mount = mount().await;

    complete_personal_step(&mount).await;
    submit(&mount, "form.donor-signup");
    settle().await;
    check(&mount, "#privacy");
    settle().await;
    submit(&mount, "form.donor-signup");
    settle().await;

    assert!(!exists(&mount, ".modal-dialog"));
    assert!(text(&mount).contains("Welcome to BloodLink AI!"));
    assert!(exists(&mount, ".toast.success"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn reopening_after_cancel_starts_from_scratch() {
    let mount = mount().await;

    complete_personal_step(&mount).await;
    click_labelled(&mount, "Cancel");
    settle().await;
    assert!(!exists(&mount, ".modal-dialog"));

    click(&mount, "#reopen");
    settle().await;

    assert!(text(&mount).contains("Step 1 of 3"));
    assert_eq!(input_value(&mount, "#name"), "");

    cleanup(&mount);
}
