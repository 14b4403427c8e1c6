use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::shared::toast::ToastService;

const REMEMBERED_EMAIL_KEY: &str = "tradeconnect_login_email";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn load_remembered_email() -> String {
    storage()
        .and_then(|s| s.get_item(REMEMBERED_EMAIL_KEY).ok().flatten())
        .unwrap_or_default()
}

fn remember_email(email: &str) {
    if let Some(s) = storage() {
        let _ = s.set_item(REMEMBERED_EMAIL_KEY, email);
    }
}

/// Login stub: no backend, the form validates locally, acknowledges and
/// enters the demo dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(load_remembered_email());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();
        if email_val.trim().is_empty() || password_val.is_empty() {
            set_error_message.set(Some("Enter your email and password.".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);
        remember_email(&email_val);

        let navigate = navigate.clone();
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(600).await;
            log::info!("demo sign-in for {email_val}");
            toasts.notify("Welcome back", format!("Signed in as {email_val}."));
            set_is_loading.set(false);
            navigate("/dashboard", Default::default());
        });
    };

    view! {
        <div class="auth">
            <div class="auth__box">
                <h1 class="auth__brand">"TradeConnect"</h1>
                <h2 class="auth__title">"Log in to your account"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="auth__error">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
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
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="button button--primary button--block"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Logging in..." } else { "Log In" }}
                    </button>
                </form>

                <div class="auth__footer">
                    <span>"New to TradeConnect? "</span>
                    <A href="/signup">"Create an account"</A>
                </div>
            </div>
        </div>
    }
}
