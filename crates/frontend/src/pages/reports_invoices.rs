use leptos::prelude::*;

use crate::shared::components::{PageHeader, SearchBox, StatCard};
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_ignore_case, filter_list, Searchable};
use crate::shared::toast::ToastService;

#[derive(Clone, Copy, PartialEq, Eq)]
enum DocumentsTab {
    Invoices,
    Reports,
}

#[derive(Clone, Debug)]
struct InvoiceRow {
    number: &'static str,
    customer: &'static str,
    amount: &'static str,
    date: &'static str,
    due_date: &'static str,
    status: &'static str,
}

impl Searchable for InvoiceRow {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(self.number, filter) || contains_ignore_case(self.customer, filter)
    }
}

#[derive(Clone, Debug)]
struct ReportRow {
    name: &'static str,
    kind: &'static str,
    period: &'static str,
    generated: &'static str,
    size: &'static str,
}

impl Searchable for ReportRow {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(self.name, filter) || contains_ignore_case(self.kind, filter)
    }
}

fn invoices() -> Vec<InvoiceRow> {
    vec![
        InvoiceRow {
            number: "INV-2024-001",
            customer: "Metro Wholesale",
            amount: "$2,500",
            date: "2024-01-10",
            due_date: "2024-01-25",
            status: "Paid",
        },
        InvoiceRow {
            number: "INV-2024-002",
            customer: "City Market Co",
            amount: "$3,200",
            date: "2024-01-12",
            due_date: "2024-01-27",
            status: "Overdue",
        },
        InvoiceRow {
            number: "INV-2024-003",
            customer: "Local Goods LLC",
            amount: "$1,800",
            date: "2024-01-15",
            due_date: "2024-01-30",
            status: "Pending",
        },
        InvoiceRow {
            number: "INV-2024-004",
            customer: "Fresh Market Inc",
            amount: "$4,100",
            date: "2024-01-18",
            due_date: "2024-02-02",
            status: "Sent",
        },
    ]
}

fn reports() -> Vec<ReportRow> {
    vec![
        ReportRow {
            name: "Monthly Sales Report",
            kind: "Sales",
            period: "January 2024",
            generated: "2024-01-31",
            size: "2.3 MB",
        },
        ReportRow {
            name: "Inventory Analysis",
            kind: "Inventory",
            period: "Q4 2023",
            generated: "2024-01-05",
            size: "1.8 MB",
        },
        ReportRow {
            name: "Customer Payment Summary",
            kind: "Financial",
            period: "December 2023",
            generated: "2024-01-03",
            size: "856 KB",
        },
        ReportRow {
            name: "Product Performance",
            kind: "Analytics",
            period: "January 2024",
            generated: "2024-01-30",
            size: "3.1 MB",
        },
    ]
}

fn invoice_badge(status: &str) -> &'static str {
    match status {
        "Paid" => "badge badge--success",
        "Overdue" => "badge badge--danger",
        "Pending" => "badge badge--pending",
        "Sent" => "badge badge--outline",
        _ => "badge badge--outline",
    }
}

fn report_badge(kind: &str) -> &'static str {
    match kind {
        "Sales" => "badge badge--info",
        "Inventory" => "badge badge--success",
        "Financial" => "badge badge--outline",
        "Analytics" => "badge badge--pending",
        _ => "badge badge--outline",
    }
}

#[component]
pub fn ReportsInvoicesPage() -> impl IntoView {
    let (tab, set_tab) = signal(DocumentsTab::Invoices);
    let (search_term, set_search_term) = signal(String::new());

    view! {
        <div class="backoffice">
            <div class="backoffice__container">
                <PageHeader
                    title="Reports & Invoices"
                    subtitle="Generate reports and manage invoice documentation"
                >
                    {()}
                </PageHeader>

                <div class="stat-grid">
                    <StatCard
                        label="Total Invoices"
                        icon_name="file-text"
                        value="156"
                        caption="+12 this month"
                    />
                    <StatCard
                        label="Outstanding Amount"
                        icon_name="alert-circle"
                        value="$15,400"
                        caption="8 overdue invoices"
                    />
                    <StatCard
                        label="Paid This Month"
                        icon_name="dollar-sign"
                        value="$28,750"
                        change="+18%"
                        caption="vs last month"
                    />
                    <StatCard
                        label="Reports Generated"
                        icon_name="bar-chart"
                        value="47"
                        caption="This quarter"
                    />
                </div>

                <div class="tabs">
                    <button
                        class="tabs__trigger"
                        class:tabs__trigger--active=move || tab.get() == DocumentsTab::Invoices
                        on:click=move |_| set_tab.set(DocumentsTab::Invoices)
                    >
                        "Invoices"
                    </button>
                    <button
                        class="tabs__trigger"
                        class:tabs__trigger--active=move || tab.get() == DocumentsTab::Reports
                        on:click=move |_| set_tab.set(DocumentsTab::Reports)
                    >
                        "Reports"
                    </button>
                </div>

                <Show
                    when=move || tab.get() == DocumentsTab::Invoices
                    fallback=move || view! { <ReportsPanel search=search_term set_search=set_search_term /> }
                >
                    <div class="panel">
                        <div class="panel__header">
                            <div>
                                <h2 class="panel__title">"Invoice Management"</h2>
                                <p class="panel__subtitle">"Create, view, and manage customer invoices"</p>
                            </div>
                            <div class="panel__actions">
                                <SearchBox
                                    value=search_term
                                    on_change=Callback::new(move |value| set_search_term.set(value))
                                    placeholder="Search invoices..."
                                />
                                <button class="button button--primary">
                                    {icon("plus")}
                                    "Create Invoice"
                                </button>
                            </div>
                        </div>
                        <div class="panel__body panel__body--scroll">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"Invoice #"</th>
                                        <th class="table__header-cell">"Customer"</th>
                                        <th class="table__header-cell">"Amount"</th>
                                        <th class="table__header-cell">"Invoice Date"</th>
                                        <th class="table__header-cell">"Due Date"</th>
                                        <th class="table__header-cell">"Status"</th>
                                        <th class="table__header-cell">"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || filter_list(invoices(), &search_term.get()).into_iter().map(|invoice| view! {
                                        <tr class="table__row">
                                            <td class="table__cell table__cell--strong">{invoice.number}</td>
                                            <td class="table__cell">{invoice.customer}</td>
                                            <td class="table__cell">{invoice.amount}</td>
                                            <td class="table__cell">{invoice.date}</td>
                                            <td class="table__cell">{invoice.due_date}</td>
                                            <td class="table__cell">
                                                <span class=invoice_badge(invoice.status)>{invoice.status}</span>
                                            </td>
                                            <td class="table__cell">
                                                <div class="table__actions">
                                                    <button class="button button--secondary button--small">
                                                        {icon("eye")}
                                                        "View"
                                                    </button>
                                                    <button class="button button--secondary button--small">
                                                        {icon("download")}
                                                        "PDF"
                                                    </button>
                                                </div>
                                            </td>
                                        </tr>
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
fn ReportsPanel(
    #[prop(into)] search: Signal<String>,
    set_search: WriteSignal<String>,
) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");

    let report_kinds = [
        ("trending-up", "Sales Report", "Revenue & sales metrics"),
        ("file-text", "Inventory Report", "Stock levels & movement"),
        ("dollar-sign", "Financial Report", "Payments & receivables"),
    ];

    view! {
        <div class="panel">
            <div class="panel__header">
                <div>
                    <h2 class="panel__title">"Business Reports"</h2>
                    <p class="panel__subtitle">"Generate and download business analytics reports"</p>
                </div>
                <div class="panel__actions">
                    <SearchBox
                        value=search
                        on_change=Callback::new(move |value| set_search.set(value))
                        placeholder="Search reports..."
                    />
                    <button
                        class="button button--primary"
                        on:click=move |_| toasts.notify(
                            "Report queued",
                            "Your report is being generated and will appear in the list.",
                        )
                    >
                        {icon("trending-up")}
                        "Generate Report"
                    </button>
                </div>
            </div>
            <div class="panel__body">
                <div class="report-kinds">
                    {report_kinds.into_iter().map(|(icon_name, title, detail)| view! {
                        <div class="report-kinds__card">
                            <span class="report-kinds__icon">{icon(icon_name)}</span>
                            <div>
                                <h3 class="report-kinds__title">{title}</h3>
                                <p class="report-kinds__detail">{detail}</p>
                            </div>
                        </div>
                    }).collect_view()}
                </div>

                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Report Name"</th>
                            <th class="table__header-cell">"Type"</th>
                            <th class="table__header-cell">"Period"</th>
                            <th class="table__header-cell">"Generated"</th>
                            <th class="table__header-cell">"Size"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || filter_list(reports(), &search.get()).into_iter().map(|report| view! {
                            <tr class="table__row">
                                <td class="table__cell">
                                    <div class="table__cell-detail">
                                        {icon("file-text")}
                                        <span class="table__cell-title">{report.name}</span>
                                    </div>
                                </td>
                                <td class="table__cell">
                                    <span class=report_badge(report.kind)>{report.kind}</span>
                                </td>
                                <td class="table__cell">{report.period}</td>
                                <td class="table__cell">{report.generated}</td>
                                <td class="table__cell">{report.size}</td>
                                <td class="table__cell">
                                    <div class="table__actions">
                                        <button class="button button--secondary button--small">
                                            {icon("eye")}
                                            "View"
                                        </button>
                                        <button class="button button--secondary button--small">
                                            {icon("download")}
                                            "Download"
                                        </button>
                                    </div>
                                </td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
