use std::rc::Rc;

use gloo_timers::callback::Timeout;
use stylist::yew::use_style;
use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
}

impl ToastMessage {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: ToastKind::Destructive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub message: ToastMessage,
}

pub enum ToastAction {
    Push(ToastMessage),
    Dismiss(u32),
}

/// Toasts currently on screen, oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastQueue {
    next_id: u32,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push(message) => {
                let mut next = (*self).clone();
                next.next_id += 1;
                next.toasts.push(Toast {
                    id: next.next_id,
                    message,
                });
                let overflow = next.toasts.len().saturating_sub(config::TOAST_LIMIT);
                next.toasts.drain(..overflow);
                next.into()
            }
            ToastAction::Dismiss(id) => {
                if !self.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                let mut next = (*self).clone();
                next.toasts.retain(|t| t.id != id);
                next.into()
            }
        }
    }
}

pub type ToastContext = UseReducerHandle<ToastQueue>;

/// Handle returned by [`use_toast`].
#[derive(Clone)]
pub struct Toaster {
    queue: Option<ToastContext>,
}

impl Toaster {
    pub fn show(&self, message: ToastMessage) {
        match &self.queue {
            Some(queue) => queue.dispatch(ToastAction::Push(message)),
            None => log::warn!("No ToastProvider mounted, dropping toast {:?}", message.title),
        }
    }
}

#[hook]
pub fn use_toast() -> Toaster {
    Toaster {
        queue: use_context::<ToastContext>(),
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
    /// How long each toast stays up before dismissing itself.
    #[prop_or_else(config::toast_duration_ms)]
    pub duration_ms: u32,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);

    html! {
        <ContextProvider<ToastContext> context={queue}>
            { for props.children.iter() }
            <ToastViewport duration_ms={props.duration_ms} />
        </ContextProvider<ToastContext>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastViewportProps {
    duration_ms: u32,
}

#[function_component(ToastViewport)]
fn toast_viewport(props: &ToastViewportProps) -> Html {
    let queue = use_context::<ToastContext>();
    let style = use_style!(
        r#"
        position: fixed;
        right: 1rem;
        bottom: 1rem;
        z-index: 1100;
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
        width: min(420px, calc(100vw - 2rem));

        .toast {
            position: relative;
            padding: 1rem 2.5rem 1rem 1.25rem;
            border-radius: 10px;
            background: var(--card);
            color: var(--foreground);
            border: 1px solid var(--border);
            box-shadow: 0 10px 30px -10px rgba(0, 0, 0, 0.25);
            animation: toast-in 0.25s ease-out;
        }
        .toast.destructive {
            background: var(--destructive);
            color: #fff;
            border-color: transparent;
        }
        .toast-title {
            font-weight: 600;
            margin-bottom: 0.25rem;
        }
        .toast-description {
            font-size: 0.9rem;
            opacity: 0.9;
        }
        .toast-close {
            position: absolute;
            top: 0.5rem;
            right: 0.5rem;
            background: none;
            border: none;
            color: inherit;
            font-size: 1.1rem;
            cursor: pointer;
            opacity: 0.7;
        }
        @keyframes toast-in {
            from { transform: translateY(100%); opacity: 0; }
            to { transform: translateY(0); opacity: 1; }
        }
        "#
    );

    let Some(queue) = queue else {
        return html! {};
    };

    let on_dismiss = {
        let queue = queue.clone();
        Callback::from(move |id: u32| queue.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ol class={classes!("toast-viewport", style)} aria-live="polite">
            { for queue.toasts().iter().map(|toast| html! {
                <ToastItem
                    key={toast.id}
                    toast={toast.clone()}
                    duration_ms={props.duration_ms}
                    on_dismiss={on_dismiss.clone()}
                />
            }) }
        </ol>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    duration_ms: u32,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |&(id, duration_ms)| {
                let timeout = Timeout::new(duration_ms, move || {
                    on_dismiss.emit(id);
                });
                move || drop(timeout)
            },
            (id, props.duration_ms),
        );
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let message = &props.toast.message;
    let kind_class = match message.kind {
        ToastKind::Success => "success",
        ToastKind::Destructive => "destructive",
    };

    html! {
        <li class={classes!("toast", kind_class)} role="status">
            <div class="toast-title">{ &message.title }</div>
            <div class="toast-description">{ &message.description }</div>
            <button class="toast-close" onclick={close} aria-label="Close">{"×"}</button>
        </li>
    }
}
