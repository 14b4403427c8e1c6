use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::shared::toast::ToastService;

/// Signup stub: collects the account details, acknowledges and enters
/// the demo dashboard. No account is created anywhere.
#[component]
pub fn SignupPage() -> impl IntoView {
    let (company, set_company) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (account_type, set_account_type) = signal("wholesaler".to_string());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if company.get().trim().is_empty() || email.get().trim().is_empty() {
            set_error_message.set(Some("Company name and email are required.".to_string()));
            return;
        }
        if password.get().len() < 8 {
            set_error_message.set(Some("Password must be at least 8 characters.".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        let company_val = company.get();
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(600).await;
            toasts.notify(
                "Account created",
                format!("Welcome aboard, {company_val}. Your 30-day trial has started."),
            );
            set_is_loading.set(false);
            navigate("/dashboard", Default::default());
        });
    };

    view! {
        <div class="auth">
            <div class="auth__box">
                <h1 class="auth__brand">"TradeConnect"</h1>
                <h2 class="auth__title">"Create your account"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="auth__error">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="company">"Company Name"</label>
                        <input
                            type="text"
                            id="company"
                            placeholder="Your Company Name"
                            prop:value=move || company.get()
                            on:input=move |ev| set_company.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="email">"Work Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="you@company.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="At least 8 characters"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="account-type">"I am a"</label>
                        <select
                            id="account-type"
                            prop:value=move || account_type.get()
                            on:change=move |ev| set_account_type.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        >
                            <option value="wholesaler">"Wholesaler"</option>
                            <option value="retailer">"Retailer"</option>
                        </select>
                    </div>

                    <button
                        type="submit"
                        class="button button--primary button--block"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Creating account..." } else { "Start Free Trial" }}
                    </button>
                </form>

                <div class="auth__footer">
                    <span>"Already have an account? "</span>
                    <A href="/login">"Log in"</A>
                </div>
            </div>
        </div>
    }
}
