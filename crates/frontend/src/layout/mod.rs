pub mod footer;
pub mod header;

use footer::Footer;
use header::Navigation;
use leptos::prelude::*;

/// Shared shell for the marketing pages.
///
/// ```text
/// +------------------------------------------+
/// |               Navigation                  |
/// +------------------------------------------+
/// |                                          |
/// |              page content                |
/// |                                          |
/// +------------------------------------------+
/// |                 Footer                    |
/// +------------------------------------------+
/// ```
///
/// The back-office pages render standalone and bring their own header.
#[component]
pub fn SiteLayout(children: Children) -> impl IntoView {
    view! {
        <div class="site">
            <Navigation />
            <main class="site__main">{children()}</main>
            <Footer />
        </div>
    }
}
