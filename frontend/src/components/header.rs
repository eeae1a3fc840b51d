use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::HEADER_SCROLL_THRESHOLD;
use crate::content::SECTION_LINKS;
use crate::modals::donor_signup::DonorSignupModal;
use crate::modals::hospital::HospitalModal;

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_bool_toggle(false);
    let is_scrolled = use_state(|| false);
    let hospital_open = use_state(|| false);
    let donor_open = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let scroll_window = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let scroll_y = scroll_window.scroll_y().unwrap_or_default();
                        is_scrolled.set(scroll_y > HEADER_SCROLL_THRESHOLD);
                    }) as Box<dyn FnMut()>);
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.toggle();
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            if *menu_open {
                menu_open.toggle();
            }
        })
    };

    let open_hospital = {
        let hospital_open = hospital_open.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            hospital_open.set(true);
            if *menu_open {
                menu_open.toggle();
            }
        })
    };

    let open_donor = {
        let donor_open = donor_open.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            donor_open.set(true);
            if *menu_open {
                menu_open.toggle();
            }
        })
    };

    let close_hospital = {
        let hospital_open = hospital_open.clone();
        Callback::from(move |_| hospital_open.set(false))
    };

    let close_donor = {
        let donor_open = donor_open.clone();
        Callback::from(move |_| donor_open.set(false))
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <span class="nav-logo-mark">{"❤"}</span>
                    <span class="nav-logo-text">{"BloodLink AI"}</span>
                </a>

                <nav class="nav-links">
                    { for SECTION_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link">{ *label }</a>
                    }) }
                </nav>

                <div class="nav-actions">
                    <button type="button" class="btn btn-outline" onclick={open_hospital.clone()}>
                        {"🩺 For Hospitals"}
                    </button>
                    <button type="button" class="btn btn-primary" onclick={open_donor.clone()}>
                        {"Get Started"}
                    </button>
                </div>

                <button
                    type="button"
                    class={classes!("burger-menu", (*menu_open).then_some("open"))}
                    aria-label="Toggle menu"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            if *menu_open {
                <div class="mobile-menu">
                    { for SECTION_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link" onclick={close_menu.clone()}>{ *label }</a>
                    }) }
                    <div class="mobile-menu-actions">
                        <button type="button" class="btn btn-outline full" onclick={open_hospital}>
                            {"🩺 For Hospitals"}
                        </button>
                        <button type="button" class="btn btn-primary full" onclick={open_donor}>
                            {"Get Started"}
                        </button>
                    </div>
                </div>
            }

            <HospitalModal open={*hospital_open} on_close={close_hospital} />
            <DonorSignupModal open={*donor_open} on_close={close_donor} />

            <style>
                {r#"
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    background: rgba(255, 255, 255, 0.8);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid var(--border);
    transition: box-shadow 0.3s ease, background 0.3s ease;
}

.top-nav.scrolled {
    background: rgba(255, 255, 255, 0.95);
    box-shadow: var(--shadow-card);
}

.nav-content {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1.5rem;
    height: 4rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-logo {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    text-decoration: none;
}

.nav-logo-mark {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 0.5rem;
    background: var(--gradient-primary);
    color: var(--primary-foreground);
    box-shadow: var(--shadow-glow);
    animation: pulse 2s infinite;
}

.nav-logo-text {
    font-size: 1.25rem;
    font-weight: 700;
    background: var(--gradient-primary);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.nav-links {
    display: flex;
    gap: 2rem;
}

.nav-link {
    color: var(--foreground-soft);
    text-decoration: none;
    transition: color 0.2s ease;
}

.nav-link:hover {
    color: var(--primary);
}

.nav-actions {
    display: flex;
    gap: 1rem;
}

.burger-menu {
    display: none;
    flex-direction: column;
    justify-content: space-around;
    width: 2rem;
    height: 2rem;
    background: transparent;
    border: none;
    cursor: pointer;
    padding: 0.25rem;
}

.burger-menu span {
    width: 100%;
    height: 2px;
    background: var(--foreground);
    transition: transform 0.3s ease, opacity 0.3s ease;
}

.burger-menu.open span:nth-child(1) {
    transform: translateY(7px) rotate(45deg);
}

.burger-menu.open span:nth-child(2) {
    opacity: 0;
}

.burger-menu.open span:nth-child(3) {
    transform: translateY(-7px) rotate(-45deg);
}

.mobile-menu {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    padding: 1.5rem 1rem;
    background: rgba(255, 255, 255, 0.95);
    border-bottom: 1px solid var(--border);
    animation: slide-up 0.3s ease;
}

.mobile-menu-actions {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    padding-top: 1rem;
}

@media (max-width: 768px) {
    .nav-links,
    .nav-actions {
        display: none;
    }

    .burger-menu {
        display: flex;
    }
}
                "#}
            </style>
        </header>
    }
}
