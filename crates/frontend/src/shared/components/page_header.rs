use leptos::prelude::*;

/// Reusable header block for the back-office pages: title, optional
/// subtitle, action buttons on the right.
#[component]
pub fn PageHeader(
    title: &'static str,

    #[prop(optional, into)] subtitle: Option<&'static str>,

    /// Action area content (pass an empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                {subtitle.map(|s| view! {
                    <p class="page-header__subtitle">{s}</p>
                })}
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
