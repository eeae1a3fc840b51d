use yew::prelude::*;

use crate::content::{ACHIEVEMENTS, IMPACT_METRICS, TESTIMONIALS};
use crate::forms::schedule::ScheduleKind;
use crate::modals::donor_signup::DonorSignupModal;
use crate::modals::schedule::ScheduleModal;

#[function_component(Impact)]
pub fn impact() -> Html {
    let donor_open = use_state(|| false);
    let schedule_open = use_state(|| false);

    let open_donor = {
        let donor_open = donor_open.clone();
        Callback::from(move |_: MouseEvent| donor_open.set(true))
    };
    let close_donor = {
        let donor_open = donor_open.clone();
        Callback::from(move |_| donor_open.set(false))
    };
    let open_schedule = {
        let schedule_open = schedule_open.clone();
        Callback::from(move |_: MouseEvent| schedule_open.set(true))
    };
    let close_schedule = {
        let schedule_open = schedule_open.clone();
        Callback::from(move |_| schedule_open.set(false))
    };

    html! {
        <section id="impact" class="section">
            <div class="section-inner">
                <div class="section-header">
                    <span class="badge badge-outline">{"📈 Measurable Impact"}</span>
                    <h2>
                        {"Transforming Healthcare"}
                        <span class="gradient-text block">{"One Life at a Time"}</span>
                    </h2>
                    <p>
                        {"Real results from hospitals and blood banks using BloodLink AI to create a more reliable and efficient blood donation ecosystem."}
                    </p>
                </div>

                <div class="metric-grid">
                    { for IMPACT_METRICS.iter().map(|metric| html! {
                        <div class="card metric-card">
                            <div class={classes!("icon-tile", "round", metric.tone.class())}>{ metric.icon }</div>
                            <div class="metric-value">{ metric.value }</div>
                            <div class="metric-label">{ metric.label }</div>
                            <div class="metric-description">{ metric.description }</div>
                        </div>
                    }) }
                </div>

                <div class="impact-block">
                    <h3 class="impact-heading">{"Key Achievements"}</h3>
                    <div class="achievement-grid">
                        { for ACHIEVEMENTS.iter().map(|achievement| html! {
                            <div class="card achievement-card">
                                <div class="achievement-body">
                                    <div class="icon-tile tone-primary small">{ achievement.icon }</div>
                                    <div>
                                        <h4>{ achievement.title }</h4>
                                        <p>{ achievement.description }</p>
                                    </div>
                                </div>
                                <span class={achievement.status.badge_class()}>{ achievement.status.label() }</span>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="impact-block">
                    <h3 class="impact-heading">{"What Healthcare Professionals Say"}</h3>
                    <div class="testimonial-grid">
                        { for TESTIMONIALS.iter().map(|testimonial| html! {
                            <div class="card testimonial-card">
                                <div class="testimonial-avatar">{ testimonial.avatar }</div>
                                <blockquote>{ format!("\"{}\"", testimonial.quote) }</blockquote>
                                <div class="testimonial-author">{ testimonial.author }</div>
                                <div class="testimonial-role">{ testimonial.role }</div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="cta-card">
                    <div class="cta-icon">{"❤"}</div>
                    <h3>{"Join the Movement to End Blood Shortages"}</h3>
                    <p>
                        {"Be part of the solution that ensures no Thalassemia patient ever waits for blood again. Together, we can achieve Blood Warriors' vision of a Thalassemia-free world by 2035."}
                    </p>
                    <div class="cta-actions">
                        <button type="button" class="btn btn-primary" onclick={open_donor}>
                            {"⚡ Get Started Today"}
                        </button>
                        <button type="button" class="btn btn-outline" onclick={open_schedule}>
                            {"Schedule Consultation"}
                        </button>
                    </div>
                </div>
            </div>

            <ScheduleModal
                open={*schedule_open}
                on_close={close_schedule}
                kind={ScheduleKind::Consultation}
            />
            <DonorSignupModal open={*donor_open} on_close={close_donor} />

            <style>
                {r#"
.metric-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 2rem;
    margin-bottom: 4rem;
}

.metric-card {
    padding: 2rem;
    text-align: center;
    transition: transform 0.5s ease, box-shadow 0.5s ease;
}

.metric-card:hover {
    transform: translateY(-0.5rem);
    box-shadow: var(--shadow-elegant);
}

.metric-card .icon-tile {
    margin: 0 auto 1.5rem;
}

.metric-value {
    font-size: 1.875rem;
    font-weight: 700;
    margin-bottom: 0.5rem;
}

.metric-label {
    font-weight: 600;
    margin-bottom: 0.5rem;
}

.metric-description {
    font-size: 0.875rem;
    color: var(--muted-foreground);
}

.impact-block {
    margin-bottom: 4rem;
}

.impact-heading {
    font-size: 1.5rem;
    text-align: center;
    margin-bottom: 2rem;
}

.achievement-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 1.5rem;
}

.achievement-card {
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
    gap: 1rem;
}

.achievement-body {
    display: flex;
    align-items: center;
    gap: 1rem;
}

.achievement-body p {
    font-size: 0.875rem;
    color: var(--muted-foreground);
}

.testimonial-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
}

.testimonial-card {
    padding: 2rem;
}

.testimonial-avatar {
    font-size: 2.25rem;
    margin-bottom: 1rem;
}

.testimonial-card blockquote {
    margin: 0 0 1.5rem;
    font-style: italic;
    color: var(--muted-foreground);
}

.testimonial-author {
    font-weight: 600;
}

.testimonial-role {
    font-size: 0.875rem;
    color: var(--muted-foreground);
}

.cta-icon {
    font-size: 3rem;
    color: var(--primary);
    margin-bottom: 1.5rem;
    animation: pulse 2s infinite;
}

@media (max-width: 1024px) {
    .metric-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}

@media (max-width: 768px) {
    .metric-grid,
    .achievement-grid,
    .testimonial-grid {
        grid-template-columns: 1fr;
    }
}
                "#}
            </style>
        </section>
    }
}
