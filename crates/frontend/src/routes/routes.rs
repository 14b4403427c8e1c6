use crate::layout::SiteLayout;
use crate::pages::admin::AdminPage;
use crate::pages::contact::ContactPage;
use crate::pages::credit_payment::CreditPaymentPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::features::FeaturesPage;
use crate::pages::holiday_calendar::HolidayCalendarPage;
use crate::pages::home::HomePage;
use crate::pages::inventory_constraints::InventoryConstraintsPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::orders::OrdersPage;
use crate::pages::pricing::PricingPage;
use crate::pages::pricing_management::PricingManagementPage;
use crate::pages::reports_invoices::ReportsInvoicesPage;
use crate::pages::retailer_management::RetailerManagementPage;
use crate::pages::shop_selector::ShopSelectorPage;
use crate::pages::signup::SignupPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Flat route table.
///
/// Marketing pages share the navigation/footer shell; the auth stubs and
/// back-office pages render standalone. Unknown paths fall through to the
/// not-found page inside the shell.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <SiteLayout><NotFoundPage /></SiteLayout> }>
                <Route path=path!("/") view=|| view! { <SiteLayout><HomePage /></SiteLayout> } />
                <Route
                    path=path!("/features")
                    view=|| view! { <SiteLayout><FeaturesPage /></SiteLayout> }
                />
                <Route
                    path=path!("/pricing")
                    view=|| view! { <SiteLayout><PricingPage /></SiteLayout> }
                />
                <Route
                    path=path!("/contact")
                    view=|| view! { <SiteLayout><ContactPage /></SiteLayout> }
                />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/signup") view=SignupPage />
                <Route path=path!("/dashboard") view=DashboardPage />
                <Route path=path!("/admin") view=AdminPage />
                <Route path=path!("/orders") view=OrdersPage />
                <Route path=path!("/shop-selector") view=ShopSelectorPage />
                <Route path=path!("/inventory") view=InventoryConstraintsPage />
                <Route path=path!("/pricing-management") view=PricingManagementPage />
                <Route path=path!("/retailer-management") view=RetailerManagementPage />
                <Route path=path!("/credit-payment") view=CreditPaymentPage />
                <Route path=path!("/holiday-calendar") view=HolidayCalendarPage />
                <Route path=path!("/reports-invoices") view=ReportsInvoicesPage />
            </Routes>
        </Router>
    }
}
