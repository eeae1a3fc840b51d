use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{EMERGENCY_WORKFLOW, PROCESS_STEPS};
use crate::Route;

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let last = EMERGENCY_WORKFLOW.len().saturating_sub(1);

    html! {
        <section id="how-it-works" class="section muted">
            <div class="section-inner">
                <div class="section-header">
                    <span class="badge badge-outline">{"🧠 AI-Powered Process"}</span>
                    <h2>
                        {"How BloodLink AI"}
                        <span class="gradient-text block">{"Saves Lives"}</span>
                    </h2>
                    <p>
                        {"Our sophisticated AI system works behind the scenes to ensure every Thalassemia patient gets the blood they need, when they need it."}
                    </p>
                </div>

                <div class="process-grid">
                    { for PROCESS_STEPS.iter().map(|step| html! {
                        <div class="card process-card">
                            <div class="process-card-top">
                                <span class="process-number">{ step.number }</span>
                                <div class={classes!("icon-tile", step.tone.class())}>{ step.icon }</div>
                            </div>
                            <h3>{ step.title }</h3>
                            <p>{ step.description }</p>
                            <ul class="check-list">
                                { for step.details.iter().map(|detail| html! {
                                    <li>{ *detail }</li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>

                <div class="card workflow">
                    <div class="section-header compact">
                        <h3>{"Emergency Response Workflow"}</h3>
                        <p>{"From emergency to donation in minutes, not hours"}</p>
                    </div>
                    <div class="workflow-grid">
                        { for EMERGENCY_WORKFLOW.iter().enumerate().map(|(i, item)| html! {
                            <div class="workflow-item">
                                <div class="workflow-marker">
                                    <span class="workflow-number">{ i + 1 }</span>
                                    if i < last {
                                        <span class="workflow-arrow">{"→"}</span>
                                    }
                                </div>
                                <p>{ *item }</p>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="integration-grid">
                    <div class="card integration-card">
                        <div class="integration-card-top">
                            <div class="icon-tile tone-blue">{"📱"}</div>
                            <div>
                                <h3>{"Mobile-First Design"}</h3>
                                <p class="integration-tagline">{"Accessible to rural and urban donors"}</p>
                            </div>
                        </div>
                        <p>
                            {"Progressive Web App (PWA) technology ensures the platform works seamlessly on any device, even with limited internet connectivity."}
                        </p>
                        <a href="#features" class="btn btn-outline btn-sm">{"Learn More"}</a>
                    </div>
                    <div class="card integration-card">
                        <div class="integration-card-top">
                            <div class="icon-tile tone-green">{"❤"}</div>
                            <div>
                                <h3>{"Privacy & Security"}</h3>
                                <p class="integration-tagline">{"HIPAA compliant data protection"}</p>
                            </div>
                        </div>
                        <p>
                            {"End-to-end encryption and consent-first architecture ensure donor and patient data remains secure and private at all times."}
                        </p>
                        <Link<Route> to={Route::Privacy} classes="btn btn-outline btn-sm">
                            {"Security Details"}
                        </Link<Route>>
                    </div>
                </div>
            </div>

            <style>
                {r#"
.process-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 2rem;
    margin-bottom: 4rem;
}

.process-card {
    padding: 2rem;
}

.process-card-top {
    display: flex;
    align-items: center;
    gap: 1rem;
    margin-bottom: 1.5rem;
}

.process-number {
    font-size: 2.25rem;
    font-weight: 700;
    color: rgba(100, 116, 139, 0.2);
}

.process-card h3 {
    font-size: 1.5rem;
    margin-bottom: 1rem;
}

.process-card > p {
    color: var(--muted-foreground);
    margin-bottom: 1.5rem;
    line-height: 1.6;
}

.check-list {
    list-style: none;
    padding: 0;
}

.check-list li {
    font-size: 0.875rem;
    margin-bottom: 0.75rem;
}

.check-list li::before {
    content: "✓";
    color: var(--medical-green);
    margin-right: 0.75rem;
}

.workflow {
    padding: 2rem;
}

.workflow-grid {
    display: grid;
    grid-template-columns: repeat(6, 1fr);
    gap: 1rem;
}

.workflow-item {
    text-align: center;
}

.workflow-marker {
    position: relative;
    margin-bottom: 1rem;
}

.workflow-number {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 3rem;
    height: 3rem;
    border-radius: 50%;
    background: rgba(220, 38, 38, 0.1);
    color: var(--primary);
    font-weight: 700;
}

.workflow-arrow {
    position: absolute;
    top: 50%;
    right: -0.5rem;
    transform: translateY(-50%);
    color: var(--muted-foreground);
}

.workflow-item p {
    font-size: 0.875rem;
    color: var(--muted-foreground);
}

.integration-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 2rem;
    margin-top: 4rem;
}

.integration-card {
    padding: 2rem;
}

.integration-card-top {
    display: flex;
    align-items: center;
    gap: 1rem;
    margin-bottom: 1.5rem;
}

.integration-tagline {
    font-size: 0.875rem;
    color: var(--muted-foreground);
}

.integration-card > p {
    color: var(--muted-foreground);
    margin-bottom: 1rem;
}

@media (max-width: 1024px) {
    .workflow-grid {
        grid-template-columns: repeat(3, 1fr);
    }

    .workflow-arrow {
        display: none;
    }
}

@media (max-width: 768px) {
    .process-grid,
    .integration-grid {
        grid-template-columns: 1fr;
    }
}
                "#}
            </style>
        </section>
    }
}
