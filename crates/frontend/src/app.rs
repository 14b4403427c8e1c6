use crate::routes::routes::AppRoutes;
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Notification sink for save/submit acknowledgements, shared with
    // every page via context.
    provide_context(ToastService::new());

    view! {
        <AppRoutes />
        <ToastHost />
    }
}
