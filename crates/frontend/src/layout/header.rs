use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// Top navigation bar of the marketing site.
#[component]
pub fn Navigation() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="site-nav">
            <div class="site-nav__inner">
                <span class="site-nav__brand">
                    {icon("package")}
                    <A href="/">"TradeConnect"</A>
                </span>

                <nav class="site-nav__links" class:site-nav__links--open=menu_open>
                    <A href="/">"Home"</A>
                    <A href="/features">"Features"</A>
                    <A href="/pricing">"Pricing"</A>
                    <A href="/contact">"Contact"</A>
                </nav>

                <div class="site-nav__actions">
                    <span class="site-nav__cta site-nav__cta--ghost">
                        <A href="/login">"Log In"</A>
                    </span>
                    <span class="site-nav__cta site-nav__cta--primary">
                        <A href="/signup">"Sign Up"</A>
                    </span>
                </div>

                <button
                    class="site-nav__toggle"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { icon("x") } else { icon("menu") }}
                </button>
            </div>
        </header>
    }
}
