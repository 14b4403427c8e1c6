use crate::shared::icons::icon;
use leptos::prelude::*;

/// Controlled search input with a magnifier icon and a clear button.
#[component]
pub fn SearchBox(
    #[prop(into)] value: Signal<String>,

    #[prop(into)] on_change: Callback<String>,

    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-box">
            <span class="search-box__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-box__input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || {
                if value.get().is_empty() {
                    view! { <></> }.into_any()
                } else {
                    view! {
                        <button
                            class="search-box__clear"
                            title="Clear"
                            on:click=move |_| on_change.run(String::new())
                        >
                            {icon("x")}
                        </button>
                    }.into_any()
                }
            }}
        </div>
    }
}
