use leptos::prelude::*;

use crate::shared::components::{PageHeader, SearchBox};
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_ignore_case, filter_list, Searchable};
use crate::shared::toast::ToastService;

#[derive(Clone, Copy, PartialEq, Eq)]
enum SalesChannel {
    Online,
    Offline,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum OrderBucket {
    Pending,
    Confirmed,
    Delivered,
}

#[derive(Clone, Debug)]
struct OrderRow {
    id: &'static str,
    retailer: &'static str,
    items: u32,
    total: &'static str,
    date: &'static str,
    status: &'static str,
    /// Delivery date for confirmed orders, delivered date for completed
    /// ones.
    second_date: Option<&'static str>,
}

impl Searchable for OrderRow {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(self.id, filter) || contains_ignore_case(self.retailer, filter)
    }
}

#[derive(Clone, Debug)]
struct OfflineSale {
    id: &'static str,
    customer: &'static str,
    items: u32,
    total: &'static str,
    date: &'static str,
    payment_mode: &'static str,
}

impl Searchable for OfflineSale {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(self.id, filter) || contains_ignore_case(self.customer, filter)
    }
}

fn pending_orders() -> Vec<OrderRow> {
    vec![
        OrderRow {
            id: "ORD-001",
            retailer: "QuickMart Store",
            items: 15,
            total: "₹25,000",
            date: "2024-01-15",
            status: "pending",
            second_date: None,
        },
        OrderRow {
            id: "ORD-002",
            retailer: "Fresh Grocery",
            items: 8,
            total: "₹12,500",
            date: "2024-01-15",
            status: "pending",
            second_date: None,
        },
    ]
}

fn confirmed_orders() -> Vec<OrderRow> {
    vec![OrderRow {
        id: "ORD-003",
        retailer: "Super Store",
        items: 22,
        total: "₹45,000",
        date: "2024-01-14",
        status: "confirmed",
        second_date: Some("2024-01-16"),
    }]
}

fn delivered_orders() -> Vec<OrderRow> {
    vec![OrderRow {
        id: "ORD-004",
        retailer: "Corner Shop",
        items: 12,
        total: "₹18,000",
        date: "2024-01-12",
        status: "delivered",
        second_date: Some("2024-01-14"),
    }]
}

fn offline_sales() -> Vec<OfflineSale> {
    vec![OfflineSale {
        id: "SALE-001",
        customer: "Walk-in Customer",
        items: 5,
        total: "₹3,500",
        date: "2024-01-15",
        payment_mode: "Cash",
    }]
}

fn status_icon(status: &str) -> &'static str {
    match status {
        "pending" => "clock",
        "confirmed" => "check-circle",
        "delivered" => "package",
        _ => "clock",
    }
}

fn status_badge(status: &str) -> &'static str {
    match status {
        "pending" => "badge badge--pending",
        "confirmed" => "badge badge--info",
        "delivered" => "badge badge--success",
        _ => "badge",
    }
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let (channel, set_channel) = signal(SalesChannel::Online);
    let (bucket, set_bucket) = signal(OrderBucket::Pending);
    let (search_term, set_search_term) = signal(String::new());

    view! {
        <div class="backoffice">
            <div class="backoffice__container">
                <PageHeader
                    title="Orders Management"
                    subtitle="Manage online bookings and offline sales"
                >
                    {()}
                </PageHeader>

                <div class="tabs tabs--block">
                    <button
                        class="tabs__trigger"
                        class:tabs__trigger--active=move || channel.get() == SalesChannel::Online
                        on:click=move |_| set_channel.set(SalesChannel::Online)
                    >
                        "Online Bookings"
                    </button>
                    <button
                        class="tabs__trigger"
                        class:tabs__trigger--active=move || channel.get() == SalesChannel::Offline
                        on:click=move |_| set_channel.set(SalesChannel::Offline)
                    >
                        "Offline Sales"
                    </button>
                </div>

                <div class="toolbar">
                    <SearchBox
                        value=search_term
                        on_change=Callback::new(move |value| set_search_term.set(value))
                        placeholder="Search orders..."
                    />
                    <Show when=move || channel.get() == SalesChannel::Offline>
                        <button class="button button--primary">
                            {icon("plus")}
                            "Add Sale"
                        </button>
                    </Show>
                </div>

                <Show
                    when=move || channel.get() == SalesChannel::Online
                    fallback=move || view! { <OfflineSalesPanel search=search_term /> }
                >
                    <div class="tabs">
                        <button
                            class="tabs__trigger"
                            class:tabs__trigger--active=move || bucket.get() == OrderBucket::Pending
                            on:click=move |_| set_bucket.set(OrderBucket::Pending)
                        >
                            {format!("Pending Orders ({})", pending_orders().len())}
                        </button>
                        <button
                            class="tabs__trigger"
                            class:tabs__trigger--active=move || bucket.get() == OrderBucket::Confirmed
                            on:click=move |_| set_bucket.set(OrderBucket::Confirmed)
                        >
                            {format!("Confirmed Orders ({})", confirmed_orders().len())}
                        </button>
                        <button
                            class="tabs__trigger"
                            class:tabs__trigger--active=move || bucket.get() == OrderBucket::Delivered
                            on:click=move |_| set_bucket.set(OrderBucket::Delivered)
                        >
                            {format!("Delivered Orders ({})", delivered_orders().len())}
                        </button>
                    </div>

                    {move || match bucket.get() {
                        OrderBucket::Pending => view! {
                            <OrderTable
                                title="Pending Orders"
                                subtitle="Orders awaiting approval or processing"
                                second_date_heading=None
                                rows=filter_list(pending_orders(), &search_term.get())
                                with_approval=true
                            />
                        }.into_any(),
                        OrderBucket::Confirmed => view! {
                            <OrderTable
                                title="Confirmed Orders"
                                subtitle="Orders confirmed and ready for delivery"
                                second_date_heading=Some("Delivery Date")
                                rows=filter_list(confirmed_orders(), &search_term.get())
                                with_approval=false
                            />
                        }.into_any(),
                        OrderBucket::Delivered => view! {
                            <OrderTable
                                title="Delivered Orders"
                                subtitle="Successfully completed orders"
                                second_date_heading=Some("Delivered Date")
                                rows=filter_list(delivered_orders(), &search_term.get())
                                with_approval=false
                            />
                        }.into_any(),
                    }}
                </Show>
            </div>
        </div>
    }
}

#[component]
fn OrderTable(
    title: &'static str,
    subtitle: &'static str,
    second_date_heading: Option<&'static str>,
    rows: Vec<OrderRow>,
    with_approval: bool,
) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");

    view! {
        <div class="panel">
            <div class="panel__header">
                <div>
                    <h2 class="panel__title">{title}</h2>
                    <p class="panel__subtitle">{subtitle}</p>
                </div>
            </div>
            <div class="panel__body panel__body--scroll">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Order ID"</th>
                            <th class="table__header-cell">"Retailer"</th>
                            <th class="table__header-cell">"Items"</th>
                            <th class="table__header-cell">"Total"</th>
                            <th class="table__header-cell">
                                {if second_date_heading.is_some() { "Order Date" } else { "Date" }}
                            </th>
                            {second_date_heading.map(|heading| view! {
                                <th class="table__header-cell">{heading}</th>
                            })}
                            {with_approval.then(|| view! {
                                <th class="table__header-cell">"Status"</th>
                            })}
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows.into_iter().map(|order| {
                            let approve_id = order.id;
                            let reject_id = order.id;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell table__cell--strong">{order.id}</td>
                                    <td class="table__cell">{order.retailer}</td>
                                    <td class="table__cell">{format!("{} items", order.items)}</td>
                                    <td class="table__cell">{order.total}</td>
                                    <td class="table__cell">{order.date}</td>
                                    {order.second_date.map(|date| view! {
                                        <td class="table__cell">{date}</td>
                                    })}
                                    {with_approval.then(|| view! {
                                        <td class="table__cell">
                                            <span class=status_badge(order.status)>
                                                {icon(status_icon(order.status))}
                                                {order.status}
                                            </span>
                                        </td>
                                    })}
                                    <td class="table__cell">
                                        <div class="table__actions">
                                            <button class="button button--secondary button--small">
                                                {icon("eye")}
                                                "View"
                                            </button>
                                            {with_approval.then(|| view! {
                                                <button
                                                    class="button button--primary button--small"
                                                    on:click=move |_| toasts.notify(
                                                        "Order approved",
                                                        format!("{approve_id} has been approved."),
                                                    )
                                                >
                                                    {icon("check-circle")}
                                                    "Approve"
                                                </button>
                                                <button
                                                    class="button button--danger button--small"
                                                    on:click=move |_| toasts.notify(
                                                        "Order rejected",
                                                        format!("{reject_id} has been rejected."),
                                                    )
                                                >
                                                    {icon("x-circle")}
                                                    "Reject"
                                                </button>
                                            })}
                                        </div>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn OfflineSalesPanel(#[prop(into)] search: Signal<String>) -> impl IntoView {
    view! {
        <div class="panel">
            <div class="panel__header">
                <div>
                    <h2 class="panel__title">"Offline Sales"</h2>
                    <p class="panel__subtitle">"Manual sales entries and walk-in customers"</p>
                </div>
            </div>
            <div class="panel__body panel__body--scroll">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Sale ID"</th>
                            <th class="table__header-cell">"Customer"</th>
                            <th class="table__header-cell">"Items"</th>
                            <th class="table__header-cell">"Total"</th>
                            <th class="table__header-cell">"Date"</th>
                            <th class="table__header-cell">"Payment Mode"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || filter_list(offline_sales(), &search.get()).into_iter().map(|sale| view! {
                            <tr class="table__row">
                                <td class="table__cell table__cell--strong">{sale.id}</td>
                                <td class="table__cell">{sale.customer}</td>
                                <td class="table__cell">{format!("{} items", sale.items)}</td>
                                <td class="table__cell">{sale.total}</td>
                                <td class="table__cell">{sale.date}</td>
                                <td class="table__cell">
                                    <span class="badge badge--outline">{sale.payment_mode}</span>
                                </td>
                                <td class="table__cell">
                                    <button class="button button--secondary button--small">
                                        {icon("eye")}
                                        "View"
                                    </button>
                                </td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
