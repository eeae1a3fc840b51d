use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub title: AttrValue,
    #[prop_or_default]
    pub description: AttrValue,
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    /// Use the wider dialog for forms with three-column rows.
    #[prop_or_default]
    pub wide: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Dialog shell. Children are only mounted while `open` is true, so any
/// state they hold starts fresh on every open.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    {
        let on_close = props.on_close.clone();
        let title = props.title.clone();
        use_effect_with_deps(
            move |open| {
                let listener = if *open {
                    info!("Opened dialog {:?}", title);
                    web_sys::window().map(|window| {
                        let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                            if e.key() == "Escape" {
                                on_close.emit(());
                            }
                        }) as Box<dyn FnMut(KeyboardEvent)>);
                        let _ = window.add_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        );
                        (window, keydown)
                    })
                } else {
                    None
                };

                move || {
                    if let Some((window, keydown)) = listener {
                        info!("Closed dialog {:?}", title);
                        let _ = window.remove_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            props.open,
        );
    }

    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <div
                class={classes!("modal-dialog", props.wide.then_some("wide"))}
                role="dialog"
                aria-modal="true"
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <button type="button" class="modal-close" onclick={close} aria-label="Close">{"×"}</button>
                <div class="modal-header">
                    <h2 class="modal-title">
                        if let Some(icon) = &props.icon {
                            <span class="modal-icon">{ icon }</span>
                        }
                        { &props.title }
                    </h2>
                    if !props.description.is_empty() {
                        <p class="modal-description">{ &props.description }</p>
                    }
                </div>
                { for props.children.iter() }
            </div>
        </div>
    }
}
