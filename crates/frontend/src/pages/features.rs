use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::icons::icon;

struct CoreFeature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: &'static [&'static str],
}

const CORE_FEATURES: [CoreFeature; 4] = [
    CoreFeature {
        icon: "package",
        title: "Inventory Management",
        description: "Complete inventory control with real-time tracking, automated stock updates, and multi-location support.",
        features: &[
            "Real-time stock tracking",
            "Automated reorder points",
            "Multi-location inventory",
            "Barcode scanning",
            "Stock adjustments",
            "Inventory reports",
        ],
    },
    CoreFeature {
        icon: "users",
        title: "Order Management",
        description: "Streamlined order processing from booking to delivery with approval workflows and status tracking.",
        features: &[
            "Online order booking",
            "Order approval workflow",
            "Status tracking",
            "Delivery management",
            "Order history",
            "Automated notifications",
        ],
    },
    CoreFeature {
        icon: "credit-card",
        title: "Pricing & Credit",
        description: "Flexible pricing management with multiple slabs, credit accounts, and payment tracking.",
        features: &[
            "Dynamic pricing slabs",
            "Credit management",
            "Payment tracking",
            "Invoice generation",
            "Payment reminders",
            "Financial reporting",
        ],
    },
    CoreFeature {
        icon: "bar-chart",
        title: "Analytics & Reports",
        description: "Comprehensive business insights with customizable reports and real-time analytics.",
        features: &[
            "Sales analytics",
            "Performance metrics",
            "Custom reports",
            "Export capabilities",
            "Data visualization",
            "Trend analysis",
        ],
    },
];

struct ExtraFeature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const EXTRA_FEATURES: [ExtraFeature; 6] = [
    ExtraFeature {
        icon: "shield",
        title: "Security & Compliance",
        description: "Enterprise-grade security with role-based access control and audit logs.",
    },
    ExtraFeature {
        icon: "smartphone",
        title: "Mobile Applications",
        description: "Native mobile apps for iOS and Android with offline capabilities.",
    },
    ExtraFeature {
        icon: "message-square",
        title: "Communication Tools",
        description: "Built-in messaging, notifications, and collaboration features.",
    },
    ExtraFeature {
        icon: "calendar-days",
        title: "Holiday Management",
        description: "Holiday calendar management with automated business logic.",
    },
    ExtraFeature {
        icon: "globe",
        title: "Multi-location Support",
        description: "Manage multiple warehouses and retail locations from one platform.",
    },
    ExtraFeature {
        icon: "settings",
        title: "API Integration",
        description: "Robust APIs for seamless integration with existing business systems.",
    },
];

struct UserRole {
    key: &'static str,
    tab_label: &'static str,
    title: &'static str,
    description: &'static str,
    features: &'static [&'static str],
}

const USER_ROLES: [UserRole; 4] = [
    UserRole {
        key: "owner",
        tab_label: "Owner",
        title: "Wholesaler Owner",
        description: "Complete platform access with full administrative controls",
        features: &[
            "Order management & approval",
            "Inventory control",
            "Pricing management",
            "Retailer management",
            "Financial oversight",
            "User management",
            "Analytics & reporting",
        ],
    },
    UserRole {
        key: "accountant",
        tab_label: "Accountant",
        title: "Wholesaler Accountant",
        description: "Financial management and accounting focused access",
        features: &[
            "Payment processing",
            "Invoice management",
            "Credit monitoring",
            "Financial reporting",
            "Offline sales entry",
            "Cash collection tracking",
        ],
    },
    UserRole {
        key: "staff",
        tab_label: "Staff",
        title: "Wholesaler Staff",
        description: "Operational staff with order processing capabilities",
        features: &[
            "Order status updates",
            "Inventory checks",
            "Offline sales entry",
            "Basic reporting",
            "Task notifications",
        ],
    },
    UserRole {
        key: "retailer",
        tab_label: "Retailer",
        title: "Retailer",
        description: "Customer-focused interface for placing and tracking orders",
        features: &[
            "Order placement",
            "Order tracking",
            "Credit account view",
            "Invoice access",
            "Communication tools",
            "Order history",
        ],
    },
];

#[component]
pub fn FeaturesPage() -> impl IntoView {
    let navigate = use_navigate();
    let go_signup = navigate.clone();
    let go_trial = navigate.clone();
    let go_pricing = navigate;

    let (active_role, set_active_role) = signal("owner");

    view! {
        <section class="hero hero--compact">
            <div class="hero__inner hero__inner--center">
                <span class="badge badge--outline hero__badge">
                    {icon("package")}
                    "Comprehensive Features"
                </span>
                <h1 class="hero__title">
                    "Powerful features for"
                    <span class="hero__title-accent">" modern businesses"</span>
                </h1>
                <p class="hero__lead">
                    "Everything you need to manage your B2B operations efficiently. From inventory \
                     management to analytics, we've got you covered."
                </p>
                <button
                    class="button button--primary button--large"
                    on:click=move |_| go_signup("/signup", Default::default())
                >
                    "Start Free Trial"
                    {icon("arrow-right")}
                </button>
            </div>
        </section>

        <section class="section">
            <div class="section__inner">
                <div class="section__intro">
                    <h2 class="section__title">"Core Features"</h2>
                    <p class="section__lead">"Essential tools that power your business operations"</p>
                </div>

                <div class="feature-grid feature-grid--two">
                    {CORE_FEATURES.iter().map(|feature| view! {
                        <div class="feature-card feature-card--detailed">
                            <div class="feature-card__head">
                                <span class="feature-card__icon feature-card__icon--large">
                                    {icon(feature.icon)}
                                </span>
                                <div>
                                    <h3 class="feature-card__title">{feature.title}</h3>
                                    <p class="feature-card__description">{feature.description}</p>
                                </div>
                            </div>
                            <ul class="checklist checklist--columns">
                                {feature.features.iter().map(|item| view! {
                                    <li class="checklist__item">
                                        {icon("check-circle")}
                                        <span>{*item}</span>
                                    </li>
                                }).collect_view()}
                            </ul>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>

        <section class="section section--muted">
            <div class="section__inner">
                <div class="section__intro">
                    <h2 class="section__title">"Role-Based Access"</h2>
                    <p class="section__lead">
                        "Different access levels for different users in your organization"
                    </p>
                </div>

                <div class="tabs tabs--block">
                    {USER_ROLES.iter().map(|role| {
                        let key = role.key;
                        view! {
                            <button
                                class="tabs__trigger"
                                class:tabs__trigger--active=move || active_role.get() == key
                                on:click=move |_| set_active_role.set(key)
                            >
                                {role.tab_label}
                            </button>
                        }
                    }).collect_view()}
                </div>

                {move || USER_ROLES.iter().find(|role| role.key == active_role.get()).map(|role| view! {
                    <div class="role-card">
                        <h3 class="role-card__title">{role.title}</h3>
                        <p class="role-card__description">{role.description}</p>
                        <ul class="checklist checklist--columns">
                            {role.features.iter().map(|item| view! {
                                <li class="checklist__item">
                                    {icon("check-circle")}
                                    <span>{*item}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>
                })}
            </div>
        </section>

        <section class="section">
            <div class="section__inner">
                <div class="section__intro">
                    <h2 class="section__title">"Additional Features"</h2>
                    <p class="section__lead">
                        "Advanced capabilities to enhance your business operations"
                    </p>
                </div>

                <div class="feature-grid">
                    {EXTRA_FEATURES.iter().map(|feature| view! {
                        <div class="feature-card">
                            <div class="feature-card__head">
                                <span class="feature-card__icon">{icon(feature.icon)}</span>
                                <h3 class="feature-card__title">{feature.title}</h3>
                            </div>
                            <p class="feature-card__description">{feature.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>

        <section class="cta">
            <div class="cta__inner">
                <h2 class="cta__title">"Ready to experience these features?"</h2>
                <p class="cta__lead">
                    "Start your free trial today and see how our platform can transform your \
                     business operations."
                </p>
                <div class="cta__actions">
                    <button
                        class="button button--secondary button--large"
                        on:click=move |_| go_trial("/signup", Default::default())
                    >
                        "Start Free Trial"
                        {icon("arrow-right")}
                    </button>
                    <button
                        class="button button--ghost button--large"
                        on:click=move |_| go_pricing("/pricing", Default::default())
                    >
                        "View Pricing"
                    </button>
                </div>
            </div>
        </section>
    }
}
