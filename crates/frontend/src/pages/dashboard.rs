use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::components::StatCard;
use crate::shared::icons::icon;

#[derive(Clone, Debug)]
struct RecentOrder {
    id: &'static str,
    retailer: &'static str,
    amount: &'static str,
    status: &'static str,
    time: &'static str,
}

fn recent_orders() -> Vec<RecentOrder> {
    vec![
        RecentOrder {
            id: "ORD-001",
            retailer: "Metro Store",
            amount: "$1,240",
            status: "Pending",
            time: "2 hours ago",
        },
        RecentOrder {
            id: "ORD-002",
            retailer: "City Market",
            amount: "$865",
            status: "Confirmed",
            time: "4 hours ago",
        },
        RecentOrder {
            id: "ORD-003",
            retailer: "Quick Shop",
            amount: "$2,130",
            status: "Delivered",
            time: "1 day ago",
        },
    ]
}

fn status_class(status: &str) -> &'static str {
    match status {
        "Pending" => "badge badge--pending",
        "Confirmed" => "badge badge--info",
        "Delivered" => "badge badge--success",
        _ => "badge",
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let navigate = use_navigate();
    let go_home = navigate.clone();
    let go_orders = navigate;

    view! {
        <div class="backoffice">
            <header class="backoffice-header">
                <div class="backoffice-header__inner">
                    <div class="backoffice-header__brand">
                        <span class="backoffice-header__logo">{icon("package")}</span>
                        <h1>"TradeConnect Dashboard"</h1>
                    </div>
                    <div class="backoffice-header__actions">
                        <button class="button button--ghost" title="Notifications">
                            {icon("bell")}
                        </button>
                        <button class="button button--ghost" title="Settings">
                            {icon("settings")}
                        </button>
                        <button
                            class="button button--secondary"
                            on:click=move |_| go_home("/", Default::default())
                        >
                            {icon("log-out")}
                            "Logout"
                        </button>
                    </div>
                </div>
            </header>

            <div class="backoffice__container">
                <div class="backoffice__welcome">
                    <h2>"Welcome back, John!"</h2>
                    <p>"Here's what's happening with your business today."</p>
                </div>

                <div class="stat-grid">
                    <StatCard
                        label="Total Orders"
                        icon_name="shopping-cart"
                        value="156"
                        change="+12%"
                        caption="from last month"
                    />
                    <StatCard
                        label="Active Retailers"
                        icon_name="users"
                        value="48"
                        change="+8%"
                        caption="from last month"
                    />
                    <StatCard
                        label="Revenue"
                        icon_name="dollar-sign"
                        value="$24,580"
                        change="+15%"
                        caption="from last month"
                    />
                    <StatCard
                        label="Products"
                        icon_name="package"
                        value="342"
                        change="+3%"
                        caption="from last month"
                    />
                </div>

                <div class="panel-grid panel-grid--two">
                    <div class="panel">
                        <div class="panel__header">
                            <div>
                                <h2 class="panel__title">"Recent Orders"</h2>
                                <p class="panel__subtitle">"Your latest order activity"</p>
                            </div>
                        </div>
                        <div class="panel__body">
                            <div class="activity-list">
                                {recent_orders().into_iter().map(|order| view! {
                                    <div class="activity-list__row">
                                        <div class="activity-list__main">
                                            <div class="activity-list__title">{order.id}</div>
                                            <div class="activity-list__detail">{order.retailer}</div>
                                        </div>
                                        <div class="activity-list__side">
                                            <span class=status_class(order.status)>{order.status}</span>
                                            <span class="activity-list__amount">{order.amount}</span>
                                            <span class="activity-list__time">{order.time}</span>
                                        </div>
                                    </div>
                                }).collect_view()}
                            </div>
                            <button
                                class="button button--secondary button--block"
                                on:click=move |_| go_orders("/orders", Default::default())
                            >
                                "View All Orders"
                            </button>
                        </div>
                    </div>

                    <div class="panel">
                        <div class="panel__header">
                            <div>
                                <h2 class="panel__title">"Quick Actions"</h2>
                                <p class="panel__subtitle">"Common tasks you can perform"</p>
                            </div>
                        </div>
                        <div class="panel__body">
                            <div class="quick-actions">
                                <button class="quick-actions__tile">
                                    {icon("package")}
                                    <span>"Add Product"</span>
                                </button>
                                <button class="quick-actions__tile">
                                    {icon("users")}
                                    <span>"Invite Retailer"</span>
                                </button>
                                <button class="quick-actions__tile">
                                    {icon("trending-up")}
                                    <span>"View Reports"</span>
                                </button>
                                <button class="quick-actions__tile">
                                    {icon("clock")}
                                    <span>"Update Inventory"</span>
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
