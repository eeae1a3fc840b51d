use yew::prelude::*;

use crate::content::{HERO_PILLS, HERO_STATS};
use crate::forms::schedule::ScheduleKind;
use crate::modals::demo::DemoModal;
use crate::modals::donor_signup::DonorSignupModal;
use crate::modals::schedule::ScheduleModal;

#[function_component(Hero)]
pub fn hero() -> Html {
    let donor_open = use_state(|| false);
    let demo_open = use_state(|| false);
    let schedule_open = use_state(|| false);

    let open = |flag: &UseStateHandle<bool>| {
        let flag = flag.clone();
        Callback::from(move |_: MouseEvent| flag.set(true))
    };
    let close = |flag: &UseStateHandle<bool>| {
        let flag = flag.clone();
        Callback::from(move |_: ()| flag.set(false))
    };

    let request_live_demo = {
        let demo_open = demo_open.clone();
        let schedule_open = schedule_open.clone();
        Callback::from(move |_: ()| {
            demo_open.set(false);
            schedule_open.set(true);
        })
    };

    html! {
        <section class="hero">
            <div class="hero-glow hero-glow-left"></div>
            <div class="hero-glow hero-glow-right"></div>

            <div class="hero-content">
                <h1 class="hero-title">
                    <span>{"Never Let a"}</span>
                    <span class="gradient-text">{"Thalassemia Patient"}</span>
                    <span>{"Wait for Blood"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"BloodLink AI predicts donor availability, automates smart matching, and drives recurring engagement, ensuring lifesaving blood is always available when needed."}
                </p>

                <div class="hero-stats">
                    { for HERO_STATS.iter().map(|stat| html! {
                        <div class="hero-stat">
                            <div class={classes!("hero-stat-value", stat.tone.class())}>{ stat.value }</div>
                            <div class="hero-stat-label">{ stat.label }</div>
                        </div>
                    }) }
                </div>

                <div class="hero-actions">
                    <button type="button" class="btn btn-primary btn-lg" onclick={open(&donor_open)}>
                        {"Start Saving Lives →"}
                    </button>
                    <button type="button" class="btn btn-outline btn-lg" onclick={open(&demo_open)}>
                        {"Watch Demo"}
                    </button>
                </div>

                <div class="hero-pills">
                    { for HERO_PILLS.iter().map(|(icon, label, tone)| html! {
                        <div class="hero-pill">
                            <span class={tone.class()}>{ *icon }</span>
                            <span>{ *label }</span>
                        </div>
                    }) }
                </div>
            </div>

            <DonorSignupModal open={*donor_open} on_close={close(&donor_open)} />
            <DemoModal
                open={*demo_open}
                on_close={close(&demo_open)}
                on_request_demo={request_live_demo}
            />
            <ScheduleModal
                open={*schedule_open}
                on_close={close(&schedule_open)}
                kind={ScheduleKind::Demo}
            />

            <style>
                {r#"
.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
    background: var(--gradient-hero);
    padding: 6rem 1.5rem 4rem;
}

.hero-glow {
    position: absolute;
    border-radius: 50%;
    filter: blur(32px);
    animation: float 6s ease-in-out infinite;
}

.hero-glow-left {
    top: 5rem;
    left: 2.5rem;
    width: 4rem;
    height: 4rem;
    background: rgba(220, 38, 38, 0.1);
}

.hero-glow-right {
    bottom: 8rem;
    right: 4rem;
    width: 6rem;
    height: 6rem;
    background: rgba(37, 99, 235, 0.1);
    animation-delay: 1s;
}

.hero-content {
    position: relative;
    z-index: 1;
    max-width: 56rem;
    text-align: center;
}

.hero-title {
    font-size: clamp(2.25rem, 6vw, 4.5rem);
    font-weight: 700;
    margin-bottom: 1.5rem;
    animation: slide-up 0.6s ease;
}

.hero-title span {
    display: block;
}

.hero-subtitle {
    font-size: 1.2rem;
    color: var(--muted-foreground);
    max-width: 48rem;
    margin: 0 auto 2rem;
}

.hero-stats {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 1.5rem;
    margin-bottom: 2.5rem;
}

.hero-stat-value {
    font-size: 1.875rem;
    font-weight: 700;
    background: none;
}

.hero-stat-label {
    font-size: 0.875rem;
    color: var(--muted-foreground);
}

.hero-actions {
    display: flex;
    gap: 1rem;
    justify-content: center;
    margin-bottom: 3rem;
}

.hero-pills {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 0.75rem;
}

.hero-pill {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 9999px;
    box-shadow: var(--shadow-card);
    font-size: 0.875rem;
    font-weight: 500;
}

.hero-pill .tone-primary,
.hero-pill .tone-blue,
.hero-pill .tone-green {
    background: none;
}

@media (max-width: 768px) {
    .hero-stats {
        grid-template-columns: repeat(2, 1fr);
    }

    .hero-actions {
        flex-direction: column;
        align-items: center;
    }
}
                "#}
            </style>
        </section>
    }
}
