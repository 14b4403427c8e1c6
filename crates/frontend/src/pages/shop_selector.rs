use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::components::PageHeader;
use crate::shared::icons::icon;

#[derive(Clone, Debug)]
struct Shop {
    name: &'static str,
    kind: &'static str,
    location: &'static str,
    status: &'static str,
    orders: u32,
    inventory: u32,
}

fn shops() -> Vec<Shop> {
    vec![
        Shop {
            name: "Main Wholesale Hub",
            kind: "Wholesaler",
            location: "Downtown District",
            status: "active",
            orders: 45,
            inventory: 1250,
        },
        Shop {
            name: "Retail Store - North",
            kind: "Retailer",
            location: "North Avenue",
            status: "active",
            orders: 12,
            inventory: 320,
        },
        Shop {
            name: "Express Outlet",
            kind: "Retailer",
            location: "Mall Complex",
            status: "pending",
            orders: 8,
            inventory: 180,
        },
    ]
}

#[component]
pub fn ShopSelectorPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="backoffice">
            <div class="backoffice__container">
                <PageHeader
                    title="Shop Selector"
                    subtitle="Choose which shop you'd like to manage"
                >
                    {()}
                </PageHeader>

                <div class="shop-grid">
                    {shops().into_iter().map(|shop| {
                        let active = shop.status == "active";
                        let navigate = navigate.clone();
                        view! {
                            <div class="shop-card">
                                <div class="shop-card__top">
                                    <span class="shop-card__icon">{icon("store")}</span>
                                    <div class="shop-card__heading">
                                        <h2 class="shop-card__name">{shop.name}</h2>
                                        <div class="shop-card__location">
                                            {icon("map-pin")}
                                            {shop.location}
                                        </div>
                                    </div>
                                    <span class=if active {
                                        "badge badge--success"
                                    } else {
                                        "badge badge--muted"
                                    }>
                                        {shop.status}
                                    </span>
                                </div>

                                <div class="shop-card__type">
                                    <span>"Type:"</span>
                                    <span class="shop-card__type-value">{shop.kind}</span>
                                </div>

                                <div class="shop-card__counts">
                                    <div class="shop-card__count">
                                        {icon("users")}
                                        <div>
                                            <div class="shop-card__count-label">"Orders"</div>
                                            <div class="shop-card__count-value">{shop.orders}</div>
                                        </div>
                                    </div>
                                    <div class="shop-card__count">
                                        {icon("package")}
                                        <div>
                                            <div class="shop-card__count-label">"Inventory"</div>
                                            <div class="shop-card__count-value">{shop.inventory}</div>
                                        </div>
                                    </div>
                                </div>

                                <button
                                    class="button button--primary button--block"
                                    disabled=!active
                                    on:click=move |_| {
                                        if active {
                                            navigate("/dashboard", Default::default());
                                        }
                                    }
                                >
                                    {if active { "Access Shop" } else { "Pending Approval" }}
                                </button>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
