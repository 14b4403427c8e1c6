use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__message">"The page you are looking for does not exist."</p>
            <A href="/">"Back to Home"</A>
        </section>
    }
}
