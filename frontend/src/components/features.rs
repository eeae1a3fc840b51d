use yew::prelude::*;

use crate::content::{FEATURES, FEATURE_STATS};
use crate::forms::schedule::ScheduleKind;
use crate::modals::schedule::ScheduleModal;

#[function_component(Features)]
pub fn features() -> Html {
    let schedule_open = use_state(|| false);

    let open_schedule = {
        let schedule_open = schedule_open.clone();
        Callback::from(move |_: MouseEvent| schedule_open.set(true))
    };
    let close_schedule = {
        let schedule_open = schedule_open.clone();
        Callback::from(move |_| schedule_open.set(false))
    };

    html! {
        <section id="features" class="section">
            <div class="section-inner">
                <div class="section-header">
                    <span class="badge badge-outline">{"⚡ Powered by AI"}</span>
                    <h2>
                        {"Revolutionary Features for"}
                        <span class="gradient-text block">{"Life-Saving Impact"}</span>
                    </h2>
                    <p>
                        {"Our comprehensive AI platform addresses every aspect of blood donation management, from prediction and matching to engagement and retention."}
                    </p>
                </div>

                <div class="stat-grid">
                    { for FEATURE_STATS.iter().map(|stat| html! {
                        <div class="card stat-card">
                            <div class={classes!("icon-tile", stat.tone.class())}>{ stat.icon }</div>
                            <div class="stat-value">{ stat.value }</div>
                            <div class="stat-description">{ stat.description }</div>
                        </div>
                    }) }
                </div>

                <div class="feature-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="card feature-card">
                            <div class="feature-card-top">
                                <div class={classes!("icon-tile", feature.tone.class())}>{ feature.icon }</div>
                                <span class="badge badge-secondary">{ feature.badge }</span>
                            </div>
                            <h3>{ feature.title }</h3>
                            <p>{ feature.description }</p>
                        </div>
                    }) }
                </div>

                <div class="cta-card">
                    <h3>{"Ready to Transform Blood Donation?"}</h3>
                    <p>{"Join hospitals and blood banks already using BloodLink AI to save more lives."}</p>
                    <div class="cta-actions">
                        <button type="button" class="btn btn-primary" onclick={open_schedule}>
                            {"Schedule Demo"}
                        </button>
                        <a href="#impact" class="btn btn-outline">{"View Case Studies"}</a>
                    </div>
                </div>
            </div>

            <ScheduleModal open={*schedule_open} on_close={close_schedule} kind={ScheduleKind::Demo} />

            <style>
                {r#"
.stat-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 1.5rem;
    margin-bottom: 4rem;
}

.stat-card {
    text-align: center;
}

.stat-card .icon-tile {
    margin: 0 auto 1rem;
}

.stat-value {
    font-size: 1.5rem;
    font-weight: 700;
    margin-bottom: 0.5rem;
}

.stat-description {
    font-size: 0.875rem;
    color: var(--muted-foreground);
}

.feature-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
}

.feature-card {
    padding: 2rem;
    transition: transform 0.5s ease, box-shadow 0.5s ease;
}

.feature-card:hover {
    transform: translateY(-0.5rem);
    box-shadow: var(--shadow-elegant);
}

.feature-card-top {
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
    margin-bottom: 1.5rem;
}

.feature-card h3 {
    font-size: 1.25rem;
    margin-bottom: 0.75rem;
}

.feature-card:hover h3 {
    color: var(--primary);
}

.feature-card p {
    color: var(--muted-foreground);
    line-height: 1.6;
}

@media (max-width: 1024px) {
    .feature-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}

@media (max-width: 768px) {
    .stat-grid {
        grid-template-columns: repeat(2, 1fr);
    }

    .feature-grid {
        grid-template-columns: 1fr;
    }
}
                "#}
            </style>
        </section>
    }
}
