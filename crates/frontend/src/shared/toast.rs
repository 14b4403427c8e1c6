use leptos::prelude::*;
use uuid::Uuid;

/// How long a toast stays on screen before the host removes it.
const TOAST_LIFETIME_MS: u32 = 4_000;

/// One message shown by the [`ToastHost`].
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub description: String,
}

/// Centralized fire-and-forget notification service.
///
/// Provided once via context; callers push acknowledgements and never
/// wait for a result.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    /// Queues a notification. It disappears after [`TOAST_LIFETIME_MS`]
    /// or when the user clicks it.
    pub fn notify(&self, title: impl Into<String>, description: impl Into<String>) {
        let toast = Toast {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
        };
        let id = toast.id;
        self.toasts.update(|list| list.push(toast));

        let toasts = self.toasts;
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    pub fn entries(&self) -> Vec<Toast> {
        self.toasts.get()
    }
}

/// Renders the queued toasts in a fixed stack; click dismisses.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.entries()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast" on:click=move |_| toasts.dismiss(id)>
                            <div class="toast__title">{toast.title}</div>
                            <div class="toast__description">{toast.description}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
