use std::cmp::Ordering;

use leptos::prelude::*;

use crate::shared::components::{PageHeader, SearchBox, StatCard};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    contains_ignore_case, filter_list, sort_indicator, sort_list, Searchable, Sortable,
};
use crate::shared::number_format::format_money;

#[derive(Clone, Debug)]
struct Retailer {
    name: &'static str,
    contact: &'static str,
    phone: &'static str,
    email: &'static str,
    address: &'static str,
    status: &'static str,
    orders: u32,
    revenue: u32,
}

impl Searchable for Retailer {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(self.name, filter)
            || contains_ignore_case(self.contact, filter)
            || contains_ignore_case(self.email, filter)
    }
}

impl Sortable for Retailer {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "orders" => self.orders.cmp(&other.orders),
            "revenue" => self.revenue.cmp(&other.revenue),
            _ => Ordering::Equal,
        }
    }
}

fn retailers() -> Vec<Retailer> {
    vec![
        Retailer {
            name: "Metro Wholesale",
            contact: "John Smith",
            phone: "+1-555-0123",
            email: "john@metrowholesale.com",
            address: "123 Business St, City",
            status: "Active",
            orders: 45,
            revenue: 12_500,
        },
        Retailer {
            name: "City Market Co",
            contact: "Sarah Johnson",
            phone: "+1-555-0456",
            email: "sarah@citymarket.com",
            address: "456 Commerce Ave, Town",
            status: "Active",
            orders: 32,
            revenue: 8_750,
        },
        Retailer {
            name: "Local Goods LLC",
            contact: "Mike Davis",
            phone: "+1-555-0789",
            email: "mike@localgoods.com",
            address: "789 Trade Blvd, Village",
            status: "Inactive",
            orders: 18,
            revenue: 4_200,
        },
    ]
}

#[component]
pub fn RetailerManagementPage() -> impl IntoView {
    let (search_term, set_search_term) = signal(String::new());
    let (sort_field, set_sort_field) = signal("name".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);

    let toggle_sort = move |field: &'static str| {
        move |_| {
            if sort_field.get() == field {
                set_sort_ascending.update(|ascending| *ascending = !*ascending);
            } else {
                set_sort_field.set(field.to_string());
                set_sort_ascending.set(true);
            }
        }
    };

    let rows = move || {
        let mut rows = filter_list(retailers(), &search_term.get());
        sort_list(&mut rows, &sort_field.get(), sort_ascending.get());
        rows
    };

    view! {
        <div class="backoffice">
            <div class="backoffice__container">
                <PageHeader
                    title="Retailer Management"
                    subtitle="Manage your retail partners and relationships"
                >
                    {()}
                </PageHeader>

                <div class="stat-grid">
                    <StatCard
                        label="Total Retailers"
                        icon_name="users"
                        value="3"
                        caption="+1 this month"
                    />
                    <StatCard
                        label="Active Partners"
                        icon_name="check-circle"
                        value="2"
                        caption="66% active rate"
                    />
                    <StatCard
                        label="Total Orders"
                        icon_name="shopping-cart"
                        value="95"
                        caption="+12 this week"
                    />
                    <StatCard
                        label="Total Revenue"
                        icon_name="dollar-sign"
                        value="$25,450"
                        change="+15%"
                        caption="vs last month"
                    />
                </div>

                <div class="panel">
                    <div class="panel__header">
                        <div>
                            <h2 class="panel__title">"Retail Partners"</h2>
                            <p class="panel__subtitle">"Manage your retail partner network"</p>
                        </div>
                        <div class="panel__actions">
                            <SearchBox
                                value=search_term
                                on_change=Callback::new(move |value| set_search_term.set(value))
                                placeholder="Search retailers..."
                            />
                            <button class="button button--primary">
                                {icon("plus")}
                                "Add Retailer"
                            </button>
                        </div>
                    </div>
                    <div class="panel__body panel__body--scroll">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th
                                        class="table__header-cell table__header-cell--sortable"
                                        on:click=toggle_sort("name")
                                    >
                                        "Retailer"
                                        {move || sort_indicator(&sort_field.get(), "name", sort_ascending.get())}
                                    </th>
                                    <th class="table__header-cell">"Contact"</th>
                                    <th class="table__header-cell">"Location"</th>
                                    <th class="table__header-cell">"Status"</th>
                                    <th
                                        class="table__header-cell table__header-cell--sortable"
                                        on:click=toggle_sort("orders")
                                    >
                                        "Orders"
                                        {move || sort_indicator(&sort_field.get(), "orders", sort_ascending.get())}
                                    </th>
                                    <th
                                        class="table__header-cell table__header-cell--sortable"
                                        on:click=toggle_sort("revenue")
                                    >
                                        "Revenue"
                                        {move || sort_indicator(&sort_field.get(), "revenue", sort_ascending.get())}
                                    </th>
                                    <th class="table__header-cell">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || rows().into_iter().map(|retailer| view! {
                                    <tr class="table__row">
                                        <td class="table__cell">
                                            <div class="table__cell-title">{retailer.name}</div>
                                            <div class="table__cell-detail">
                                                {icon("mail")}
                                                {retailer.email}
                                            </div>
                                        </td>
                                        <td class="table__cell">
                                            <div class="table__cell-title">{retailer.contact}</div>
                                            <div class="table__cell-detail">
                                                {icon("phone")}
                                                {retailer.phone}
                                            </div>
                                        </td>
                                        <td class="table__cell">
                                            <div class="table__cell-detail">
                                                {icon("map-pin")}
                                                {retailer.address}
                                            </div>
                                        </td>
                                        <td class="table__cell">
                                            <span class=if retailer.status == "Active" {
                                                "badge badge--success"
                                            } else {
                                                "badge badge--muted"
                                            }>
                                                {retailer.status}
                                            </span>
                                        </td>
                                        <td class="table__cell table__cell--strong">{retailer.orders}</td>
                                        <td class="table__cell table__cell--positive">
                                            {format_money(retailer.revenue)}
                                        </td>
                                        <td class="table__cell">
                                            <div class="table__actions">
                                                <button class="button button--secondary button--small" title="Edit">
                                                    {icon("settings")}
                                                </button>
                                                <button class="button button--secondary button--small" title="Remove">
                                                    {icon("x")}
                                                </button>
                                            </div>
                                        </td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>
        </div>
    }
}
