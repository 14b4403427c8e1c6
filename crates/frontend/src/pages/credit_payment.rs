use leptos::prelude::*;

use crate::shared::components::{PageHeader, SearchBox, StatCard};
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_ignore_case, filter_list, Searchable};
use crate::shared::number_format::format_money;

#[derive(Clone, Copy, PartialEq, Eq)]
enum CreditTab {
    Credit,
    Payments,
}

#[derive(Clone, Debug)]
struct CreditAccount {
    retailer: &'static str,
    credit_limit: u32,
    used_credit: u32,
    available_credit: u32,
    status: &'static str,
}

impl CreditAccount {
    /// Share of the limit currently in use, for the utilization bar.
    fn utilization(&self) -> f64 {
        if self.credit_limit == 0 {
            return 0.0;
        }
        f64::from(self.used_credit) / f64::from(self.credit_limit) * 100.0
    }
}

impl Searchable for CreditAccount {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(self.retailer, filter)
    }
}

#[derive(Clone, Debug)]
struct PaymentRow {
    invoice: &'static str,
    retailer: &'static str,
    amount: u32,
    due_date: &'static str,
    status: &'static str,
    payment_date: Option<&'static str>,
}

impl Searchable for PaymentRow {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(self.invoice, filter) || contains_ignore_case(self.retailer, filter)
    }
}

fn credit_accounts() -> Vec<CreditAccount> {
    vec![
        CreditAccount {
            retailer: "Metro Wholesale",
            credit_limit: 15_000,
            used_credit: 8_500,
            available_credit: 6_500,
            status: "Active",
        },
        CreditAccount {
            retailer: "City Market Co",
            credit_limit: 10_000,
            used_credit: 7_200,
            available_credit: 2_800,
            status: "Active",
        },
        CreditAccount {
            retailer: "Local Goods LLC",
            credit_limit: 5_000,
            used_credit: 1_200,
            available_credit: 3_800,
            status: "Suspended",
        },
    ]
}

fn payments() -> Vec<PaymentRow> {
    vec![
        PaymentRow {
            invoice: "INV-2024-001",
            retailer: "Metro Wholesale",
            amount: 2_500,
            due_date: "2024-01-15",
            status: "Paid",
            payment_date: Some("2024-01-10"),
        },
        PaymentRow {
            invoice: "INV-2024-002",
            retailer: "City Market Co",
            amount: 3_200,
            due_date: "2024-01-12",
            status: "Overdue",
            payment_date: None,
        },
        PaymentRow {
            invoice: "INV-2024-003",
            retailer: "Local Goods LLC",
            amount: 1_800,
            due_date: "2024-01-20",
            status: "Pending",
            payment_date: None,
        },
    ]
}

fn utilization_class(utilization: f64) -> &'static str {
    if utilization > 80.0 {
        "meter__fill meter__fill--high"
    } else if utilization > 60.0 {
        "meter__fill meter__fill--mid"
    } else {
        "meter__fill meter__fill--low"
    }
}

fn payment_status_icon(status: &str) -> Option<&'static str> {
    match status {
        "Paid" => Some("check-circle"),
        "Overdue" => Some("alert-circle"),
        "Pending" => Some("clock"),
        _ => None,
    }
}

fn payment_status_badge(status: &str) -> &'static str {
    match status {
        "Paid" => "badge badge--success",
        "Overdue" => "badge badge--danger",
        "Pending" => "badge badge--pending",
        _ => "badge",
    }
}

#[component]
pub fn CreditPaymentPage() -> impl IntoView {
    let (tab, set_tab) = signal(CreditTab::Credit);
    let (search_term, set_search_term) = signal(String::new());

    view! {
        <div class="backoffice">
            <div class="backoffice__container">
                <PageHeader
                    title="Credit & Payment Management"
                    subtitle="Manage credit limits and payment tracking"
                >
                    {()}
                </PageHeader>

                <div class="stat-grid">
                    <StatCard
                        label="Total Credit Issued"
                        icon_name="credit-card"
                        value="$30,000"
                        caption="Across all retailers"
                    />
                    <StatCard
                        label="Credit Utilized"
                        icon_name="trending-up"
                        value="$16,900"
                        caption="56% utilization"
                    />
                    <StatCard
                        label="Outstanding Payments"
                        icon_name="alert-circle"
                        value="$5,000"
                        caption="2 overdue invoices"
                    />
                    <StatCard
                        label="This Month Received"
                        icon_name="dollar-sign"
                        value="$7,300"
                        change="+22%"
                        caption="vs last month"
                    />
                </div>

                <div class="tabs">
                    <button
                        class="tabs__trigger"
                        class:tabs__trigger--active=move || tab.get() == CreditTab::Credit
                        on:click=move |_| set_tab.set(CreditTab::Credit)
                    >
                        "Credit Management"
                    </button>
                    <button
                        class="tabs__trigger"
                        class:tabs__trigger--active=move || tab.get() == CreditTab::Payments
                        on:click=move |_| set_tab.set(CreditTab::Payments)
                    >
                        "Payment Tracking"
                    </button>
                </div>

                <Show
                    when=move || tab.get() == CreditTab::Credit
                    fallback=move || view! { <PaymentsPanel search=search_term set_search=set_search_term /> }
                >
                    <div class="panel">
                        <div class="panel__header">
                            <div>
                                <h2 class="panel__title">"Credit Accounts"</h2>
                                <p class="panel__subtitle">"Manage retailer credit limits and usage"</p>
                            </div>
                            <div class="panel__actions">
                                <SearchBox
                                    value=search_term
                                    on_change=Callback::new(move |value| set_search_term.set(value))
                                    placeholder="Search accounts..."
                                />
                                <button class="button button--primary">
                                    {icon("plus")}
                                    "Add Credit Account"
                                </button>
                            </div>
                        </div>
                        <div class="panel__body panel__body--scroll">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"Retailer"</th>
                                        <th class="table__header-cell">"Credit Limit"</th>
                                        <th class="table__header-cell">"Used Credit"</th>
                                        <th class="table__header-cell">"Available Credit"</th>
                                        <th class="table__header-cell">"Utilization"</th>
                                        <th class="table__header-cell">"Status"</th>
                                        <th class="table__header-cell">"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || filter_list(credit_accounts(), &search_term.get()).into_iter().map(|account| {
                                        let utilization = account.utilization();
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell table__cell--strong">{account.retailer}</td>
                                                <td class="table__cell">{format_money(account.credit_limit)}</td>
                                                <td class="table__cell">{format_money(account.used_credit)}</td>
                                                <td class="table__cell table__cell--positive">
                                                    {format_money(account.available_credit)}
                                                </td>
                                                <td class="table__cell">
                                                    <div class="meter">
                                                        <div class="meter__track">
                                                            <div
                                                                class=utilization_class(utilization)
                                                                style=format!("width: {utilization:.0}%")
                                                            ></div>
                                                        </div>
                                                        <span class="meter__value">{format!("{utilization:.0}%")}</span>
                                                    </div>
                                                </td>
                                                <td class="table__cell">
                                                    <span class=if account.status == "Active" {
                                                        "badge badge--success"
                                                    } else {
                                                        "badge badge--muted"
                                                    }>
                                                        {account.status}
                                                    </span>
                                                </td>
                                                <td class="table__cell">
                                                    <button class="button button--secondary button--small">
                                                        {icon("credit-card")}
                                                        "Adjust"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn PaymentsPanel(
    #[prop(into)] search: Signal<String>,
    set_search: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="panel">
            <div class="panel__header">
                <div>
                    <h2 class="panel__title">"Payment Tracking"</h2>
                    <p class="panel__subtitle">"Monitor invoice payments and outstanding amounts"</p>
                </div>
                <div class="panel__actions">
                    <SearchBox
                        value=search
                        on_change=Callback::new(move |value| set_search.set(value))
                        placeholder="Search payments..."
                    />
                    <button class="button button--primary">
                        {icon("plus")}
                        "Record Payment"
                    </button>
                </div>
            </div>
            <div class="panel__body panel__body--scroll">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Invoice"</th>
                            <th class="table__header-cell">"Retailer"</th>
                            <th class="table__header-cell">"Amount"</th>
                            <th class="table__header-cell">"Due Date"</th>
                            <th class="table__header-cell">"Payment Date"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || filter_list(payments(), &search.get()).into_iter().map(|payment| view! {
                            <tr class="table__row">
                                <td class="table__cell table__cell--strong">{payment.invoice}</td>
                                <td class="table__cell">{payment.retailer}</td>
                                <td class="table__cell">{format_money(payment.amount)}</td>
                                <td class="table__cell">{payment.due_date}</td>
                                <td class="table__cell">{payment.payment_date.unwrap_or("-")}</td>
                                <td class="table__cell">
                                    <span class=payment_status_badge(payment.status)>
                                        {payment_status_icon(payment.status).map(icon)}
                                        {payment.status}
                                    </span>
                                </td>
                                <td class="table__cell">
                                    <button class="button button--secondary button--small">
                                        {if payment.status == "Paid" { "View" } else { "Mark Paid" }}
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utilization_is_a_percentage_of_the_limit() {
        let account = CreditAccount {
            retailer: "Metro Wholesale",
            credit_limit: 15_000,
            used_credit: 8_500,
            available_credit: 6_500,
            status: "Active",
        };
        assert!((account.utilization() - 56.666).abs() < 0.01);
    }

    #[test]
    fn utilization_handles_zero_limit() {
        let account = CreditAccount {
            retailer: "Empty",
            credit_limit: 0,
            used_credit: 0,
            available_credit: 0,
            status: "Active",
        };
        assert_eq!(account.utilization(), 0.0);
    }
}
