use log::debug;
use yew::prelude::*;

use crate::components::modal::Modal;
use crate::forms::demo::{DemoCatalog, DEMO_VIDEOS};

#[derive(Properties, PartialEq)]
pub struct DemoModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    /// "Request Live Demo" hands off to the scheduling dialog.
    pub on_request_demo: Callback<()>,
}

#[function_component(DemoModal)]
pub fn demo_modal(props: &DemoModalProps) -> Html {
    html! {
        <Modal
            open={props.open}
            on_close={props.on_close.clone()}
            title="BloodLink AI Platform Demo"
            description="Experience how AI transforms blood donation management"
            icon="▶"
            wide=true
        >
            <DemoPlayer
                on_close={props.on_close.clone()}
                on_request_demo={props.on_request_demo.clone()}
            />
        </Modal>
    }
}

#[derive(Properties, PartialEq)]
struct DemoPlayerProps {
    on_close: Callback<()>,
    on_request_demo: Callback<()>,
}

#[function_component(DemoPlayer)]
fn demo_player(props: &DemoPlayerProps) -> Html {
    let catalog = use_state(DemoCatalog::default);

    let on_select = {
        let catalog = catalog.clone();
        move |id: &'static str| {
            let catalog = catalog.clone();
            Callback::from(move |_: MouseEvent| {
                debug!("Playing demo {}", id);
                let mut next = *catalog;
                next.select(id);
                catalog.set(next);
            })
        }
    };

    let on_back = {
        let catalog = catalog.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *catalog;
            next.back();
            catalog.set(next);
        })
    };

    let on_request = {
        let on_request_demo = props.on_request_demo.clone();
        Callback::from(move |_: MouseEvent| on_request_demo.emit(()))
    };

    let on_case_study = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let body = match catalog.current() {
        None => html! {
            <div class="demo-grid">
                { for DEMO_VIDEOS.iter().map(|video| html! {
                    <div class="demo-card" onclick={on_select(video.id)}>
                        <div class="demo-icon">{ video.icon }</div>
                        <h3>{ video.title }</h3>
                        <p>{ video.description }</p>
                        <div class="demo-meta">
                            <span class="demo-duration">{ video.duration }</span>
                            <button type="button" class="btn btn-primary btn-sm">{"▶ Watch"}</button>
                        </div>
                    </div>
                }) }
            </div>
        },
        Some(video) => html! {
            <div class="demo-player">
                <div class="demo-player-header">
                    <h3>{ video.title }</h3>
                    <button type="button" class="btn btn-outline btn-sm" onclick={on_back}>
                        {"× Back to Demos"}
                    </button>
                </div>
                <div class="demo-screen">
                    <div class="demo-screen-icon">{"▶"}</div>
                    <p>{"Demo video would play here"}</p>
                    <p class="demo-screen-caption">
                        { format!("Interactive demo showcasing {}", video.title) }
                    </p>
                </div>
            </div>
        },
    };

    html! {
        <div class="demo-catalog">
            { body }
            <div class="form-actions centered">
                <button type="button" class="btn btn-primary" onclick={on_request}>
                    {"Request Live Demo"}
                </button>
                <a href="#impact" class="btn btn-outline" onclick={on_case_study}>
                    {"Download Case Study"}
                </a>
            </div>
        </div>
    }
}
