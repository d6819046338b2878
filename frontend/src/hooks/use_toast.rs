use std::rc::Rc;
use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use gloo::timers::future::TimeoutFuture;
use crate::services::config::use_config;
use crate::services::logging::Logger;

/// A transient confirmation shown in the corner of the page
#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub title: String,
    pub description: String,
}

impl ToastMessage {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Clone, PartialEq)]
struct Toast {
    id: u64,
    message: ToastMessage,
}

#[derive(Default, PartialEq)]
struct ToastList {
    toasts: Vec<Toast>,
}

enum ToastAction {
    Show(Toast),
    Dismiss(u64),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Show(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|toast| toast.id != id),
        }
        Rc::new(ToastList { toasts })
    }
}

#[derive(Clone, PartialEq, Default)]
pub struct ToastContext {
    pub show: Callback<ToastMessage>,
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let config = use_config();
    let toasts = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0u64);

    let show = {
        let dispatcher = toasts.dispatcher();
        let next_id = next_id.clone();
        use_callback(config.toast_duration_ms, move |message: ToastMessage, duration_ms| {
            let id = {
                let mut next_id = next_id.borrow_mut();
                *next_id += 1;
                *next_id
            };
            Logger::debug_with_component("ToastProvider", &format!("Showing toast: {}", message.title));
            dispatcher.dispatch(ToastAction::Show(Toast { id, message }));

            // Auto-dismiss
            let dispatcher = dispatcher.clone();
            let duration_ms = *duration_ms;
            spawn_local(async move {
                TimeoutFuture::new(duration_ms).await;
                dispatcher.dispatch(ToastAction::Dismiss(id));
            });
        })
    };

    let context = ToastContext { show };

    html! {
        <ContextProvider<ToastContext> {context}>
            {props.children.clone()}
            <div class="toaster" role="status" aria-live="polite">
                {for toasts.toasts.iter().map(|toast| {
                    let onclick = {
                        let dispatcher = toasts.dispatcher();
                        let id = toast.id;
                        Callback::from(move |_: MouseEvent| {
                            dispatcher.dispatch(ToastAction::Dismiss(id));
                        })
                    };

                    html! {
                        <div class="toast" key={toast.id.to_string()} {onclick}>
                            <div class="toast-title">{&toast.message.title}</div>
                            <div class="toast-description">{&toast.message.description}</div>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}

/// Callback that shows a toast. Outside a `ToastProvider` the toast is only logged.
#[hook]
pub fn use_toast() -> Callback<ToastMessage> {
    match use_context::<ToastContext>() {
        Some(context) => context.show,
        None => Callback::from(|message: ToastMessage| {
            Logger::warn_with_component(
                "use_toast",
                &format!("No ToastProvider, dropping toast: {}", message.title),
            );
        }),
    }
}
