use chrono::Datelike;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="site-footer">
            <div class="site-footer__inner">
                <div class="site-footer__column site-footer__column--brand">
                    <div class="site-footer__brand">"TradeConnect"</div>
                    <p class="site-footer__tagline">
                        "The B2B marketplace platform connecting retailers and wholesalers."
                    </p>
                </div>
                <div class="site-footer__column">
                    <div class="site-footer__heading">"Product"</div>
                    <A href="/features">"Features"</A>
                    <A href="/pricing">"Pricing"</A>
                </div>
                <div class="site-footer__column">
                    <div class="site-footer__heading">"Company"</div>
                    <A href="/contact">"Contact"</A>
                    <A href="/login">"Log In"</A>
                    <A href="/signup">"Sign Up"</A>
                </div>
            </div>
            <div class="site-footer__legal">
                {format!("© {year} TradeConnect. All rights reserved.")}
            </div>
        </footer>
    }
}
