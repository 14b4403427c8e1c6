use leptos::prelude::*;

use crate::shared::components::{PageHeader, SearchBox, StatCard};
use crate::shared::list_utils::{contains_ignore_case, Searchable};
use crate::shared::number_format::format_money;

#[derive(Clone, Copy, PartialEq, Eq)]
enum PricingTab {
    Prices,
    Rules,
}

#[derive(Clone, Debug)]
struct ProductPrice {
    name: &'static str,
    sku: &'static str,
    category: &'static str,
    cost_price: f64,
    selling_price: f64,
    last_updated: &'static str,
}

impl ProductPrice {
    /// Margin over cost, as a percentage of the cost price.
    fn margin(&self) -> f64 {
        if self.cost_price == 0.0 {
            return 0.0;
        }
        (self.selling_price - self.cost_price) / self.cost_price * 100.0
    }
}

impl Searchable for ProductPrice {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(self.name, filter) || contains_ignore_case(self.sku, filter)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum RuleKind {
    Fixed,
    Percentage,
    Bulk,
}

#[derive(Clone, Debug)]
struct PriceRule {
    name: &'static str,
    kind: RuleKind,
    category: &'static str,
    min_quantity: Option<u32>,
    discount: u32,
    start_date: &'static str,
    end_date: &'static str,
    is_active: bool,
}

impl PriceRule {
    fn discount_label(&self) -> String {
        match self.kind {
            RuleKind::Percentage => format!("{}%", self.discount),
            RuleKind::Fixed => format!("${}", self.discount),
            RuleKind::Bulk => format!(
                "{}% ({}+ items)",
                self.discount,
                self.min_quantity.unwrap_or(0)
            ),
        }
    }
}

impl Searchable for PriceRule {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(self.name, filter)
    }
}

fn product_prices() -> Vec<ProductPrice> {
    vec![
        ProductPrice {
            name: "Apple iPhone 14",
            sku: "APL-IP14-128",
            category: "Electronics",
            cost_price: 800.0,
            selling_price: 999.0,
            last_updated: "2024-01-15",
        },
        ProductPrice {
            name: "Samsung Galaxy S23",
            sku: "SAM-GS23-256",
            category: "Electronics",
            cost_price: 700.0,
            selling_price: 899.0,
            last_updated: "2024-01-14",
        },
        ProductPrice {
            name: "Dell Laptop XPS 13",
            sku: "DEL-XPS13-512",
            category: "Computers",
            cost_price: 1000.0,
            selling_price: 1299.0,
            last_updated: "2024-01-13",
        },
        ProductPrice {
            name: "Wireless Bluetooth Headphones",
            sku: "BTH-WL-001",
            category: "Accessories",
            cost_price: 120.0,
            selling_price: 199.0,
            last_updated: "2024-01-12",
        },
    ]
}

fn price_rules() -> Vec<PriceRule> {
    vec![
        PriceRule {
            name: "Electronics 10% Off",
            kind: RuleKind::Percentage,
            category: "Electronics",
            min_quantity: None,
            discount: 10,
            start_date: "2024-01-01",
            end_date: "2024-01-31",
            is_active: true,
        },
        PriceRule {
            name: "Bulk Computers Discount",
            kind: RuleKind::Bulk,
            category: "Computers",
            min_quantity: Some(5),
            discount: 15,
            start_date: "2024-01-15",
            end_date: "2024-02-15",
            is_active: true,
        },
        PriceRule {
            name: "Accessories Fixed Discount",
            kind: RuleKind::Fixed,
            category: "Accessories",
            min_quantity: None,
            discount: 25,
            start_date: "2024-01-10",
            end_date: "2024-01-25",
            is_active: false,
        },
    ]
}

const CATEGORIES: [&str; 6] = [
    "all",
    "Electronics",
    "Computers",
    "Accessories",
    "Clothing",
    "Home & Garden",
];

fn matches_category(category: &str, selected: &str) -> bool {
    selected == "all" || category == selected
}

fn rule_kind_badge(kind: RuleKind) -> (&'static str, &'static str) {
    match kind {
        RuleKind::Fixed => ("badge badge--info", "Fixed Amount"),
        RuleKind::Percentage => ("badge badge--outline", "Percentage"),
        RuleKind::Bulk => ("badge badge--pending", "Bulk Discount"),
    }
}

#[component]
pub fn PricingManagementPage() -> impl IntoView {
    let (tab, set_tab) = signal(PricingTab::Prices);
    let (search_term, set_search_term) = signal(String::new());
    let (category, set_category) = signal("all".to_string());

    let filtered_prices = move || {
        let term = search_term.get();
        let selected = category.get();
        product_prices()
            .into_iter()
            .filter(|item| {
                (term.trim().is_empty() || item.matches_filter(term.trim()))
                    && matches_category(item.category, &selected)
            })
            .collect::<Vec<_>>()
    };

    let filtered_rules = move || {
        let term = search_term.get();
        let selected = category.get();
        price_rules()
            .into_iter()
            .filter(|rule| {
                (term.trim().is_empty() || rule.matches_filter(term.trim()))
                    && matches_category(rule.category, &selected)
            })
            .collect::<Vec<_>>()
    };

    let prices = product_prices();
    let total_products = prices.len();
    let average_margin =
        prices.iter().map(ProductPrice::margin).sum::<f64>() / total_products as f64;
    let total_revenue: f64 = prices.iter().map(|item| item.selling_price).sum();
    let active_rules = price_rules().iter().filter(|rule| rule.is_active).count();

    view! {
        <div class="backoffice">
            <div class="backoffice__container">
                <PageHeader
                    title="Pricing Management"
                    subtitle="Manage product prices and pricing rules"
                >
                    {()}
                </PageHeader>

                <div class="stat-grid">
                    <StatCard
                        label="Total Products"
                        icon_name="calculator"
                        value=total_products.to_string()
                    />
                    <StatCard
                        label="Avg. Margin"
                        icon_name="percent"
                        value=format!("{average_margin:.1}%")
                    />
                    <StatCard
                        label="Active Rules"
                        icon_name="trending-up"
                        value=active_rules.to_string()
                    />
                    <StatCard
                        label="Est. Revenue"
                        icon_name="dollar-sign"
                        value=format_money(total_revenue as u32)
                    />
                </div>

                <div class="toolbar">
                    <SearchBox
                        value=search_term
                        on_change=Callback::new(move |value| set_search_term.set(value))
                        placeholder="Search products or rules..."
                    />
                    <select
                        class="select"
                        prop:value=move || category.get()
                        on:change=move |ev| set_category.set(event_target_value(&ev))
                    >
                        {CATEGORIES.into_iter().map(|entry| view! {
                            <option value=entry>
                                {if entry == "all" { "All Categories" } else { entry }}
                            </option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="tabs">
                    <button
                        class="tabs__trigger"
                        class:tabs__trigger--active=move || tab.get() == PricingTab::Prices
                        on:click=move |_| set_tab.set(PricingTab::Prices)
                    >
                        "Product Prices"
                    </button>
                    <button
                        class="tabs__trigger"
                        class:tabs__trigger--active=move || tab.get() == PricingTab::Rules
                        on:click=move |_| set_tab.set(PricingTab::Rules)
                    >
                        "Pricing Rules"
                    </button>
                </div>

                <Show
                    when=move || tab.get() == PricingTab::Prices
                    fallback=move || view! {
                        <div class="panel">
                            <div class="panel__header">
                                <div>
                                    <h2 class="panel__title">"Pricing Rules"</h2>
                                    <p class="panel__subtitle">
                                        "Create and manage dynamic pricing rules and discounts"
                                    </p>
                                </div>
                            </div>
                            <div class="panel__body panel__body--scroll">
                                <table class="table__data table--striped">
                                    <thead class="table__head">
                                        <tr>
                                            <th class="table__header-cell">"Rule Name"</th>
                                            <th class="table__header-cell">"Type"</th>
                                            <th class="table__header-cell">"Category"</th>
                                            <th class="table__header-cell">"Discount"</th>
                                            <th class="table__header-cell">"Start Date"</th>
                                            <th class="table__header-cell">"End Date"</th>
                                            <th class="table__header-cell">"Status"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {move || filtered_rules().into_iter().map(|rule| {
                                            let (badge_class, badge_label) = rule_kind_badge(rule.kind);
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell table__cell--strong">{rule.name}</td>
                                                    <td class="table__cell">
                                                        <span class=badge_class>{badge_label}</span>
                                                    </td>
                                                    <td class="table__cell">{rule.category}</td>
                                                    <td class="table__cell">{rule.discount_label()}</td>
                                                    <td class="table__cell">{rule.start_date}</td>
                                                    <td class="table__cell">{rule.end_date}</td>
                                                    <td class="table__cell">
                                                        <span class=if rule.is_active {
                                                            "badge badge--success"
                                                        } else {
                                                            "badge badge--muted"
                                                        }>
                                                            {if rule.is_active { "Active" } else { "Inactive" }}
                                                        </span>
                                                    </td>
                                                </tr>
                                            }
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        </div>
                    }
                >
                    <div class="panel">
                        <div class="panel__header">
                            <div>
                                <h2 class="panel__title">"Product Prices"</h2>
                                <p class="panel__subtitle">
                                    "Manage individual product pricing and margins"
                                </p>
                            </div>
                        </div>
                        <div class="panel__body panel__body--scroll">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"Product"</th>
                                        <th class="table__header-cell">"SKU"</th>
                                        <th class="table__header-cell">"Category"</th>
                                        <th class="table__header-cell">"Cost Price"</th>
                                        <th class="table__header-cell">"Selling Price"</th>
                                        <th class="table__header-cell">"Margin %"</th>
                                        <th class="table__header-cell">"Last Updated"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || filtered_prices().into_iter().map(|item| view! {
                                        <tr class="table__row">
                                            <td class="table__cell table__cell--strong">{item.name}</td>
                                            <td class="table__cell">{item.sku}</td>
                                            <td class="table__cell">{item.category}</td>
                                            <td class="table__cell">{format!("${:.0}", item.cost_price)}</td>
                                            <td class="table__cell">{format!("${:.0}", item.selling_price)}</td>
                                            <td class="table__cell table__cell--positive">
                                                {format!("{:.1}%", item.margin())}
                                            </td>
                                            <td class="table__cell">{item.last_updated}</td>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_is_relative_to_cost() {
        let item = ProductPrice {
            name: "Test",
            sku: "T-1",
            category: "Electronics",
            cost_price: 800.0,
            selling_price: 999.0,
            last_updated: "2024-01-15",
        };
        assert!((item.margin() - 24.875).abs() < 0.001);
    }

    #[test]
    fn margin_handles_zero_cost() {
        let item = ProductPrice {
            name: "Free",
            sku: "F-0",
            category: "Electronics",
            cost_price: 0.0,
            selling_price: 10.0,
            last_updated: "2024-01-15",
        };
        assert_eq!(item.margin(), 0.0);
    }

    #[test]
    fn discount_labels_follow_rule_kind() {
        let rules = price_rules();
        assert_eq!(rules[0].discount_label(), "10%");
        assert_eq!(rules[1].discount_label(), "15% (5+ items)");
        assert_eq!(rules[2].discount_label(), "$25");
    }

    #[test]
    fn category_filter_accepts_all() {
        assert!(matches_category("Electronics", "all"));
        assert!(matches_category("Electronics", "Electronics"));
        assert!(!matches_category("Electronics", "Computers"));
    }
}
