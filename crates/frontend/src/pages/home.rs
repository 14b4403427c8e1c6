use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::icons::icon;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        icon: "package",
        title: "Inventory Management",
        description: "Real-time stock tracking and automated inventory updates across all channels.",
    },
    Feature {
        icon: "users",
        title: "Retailer Network",
        description: "Connect with verified retailers and expand your distribution network.",
    },
    Feature {
        icon: "trending-up",
        title: "Sales Analytics",
        description: "Comprehensive reporting and insights to optimize your business performance.",
    },
    Feature {
        icon: "shield",
        title: "Secure Transactions",
        description: "End-to-end encryption and secure payment processing for all transactions.",
    },
    Feature {
        icon: "clock",
        title: "24/7 Support",
        description: "Round-the-clock customer support to help you succeed in your business.",
    },
    Feature {
        icon: "globe",
        title: "Global Reach",
        description: "Expand your business internationally with multi-currency and multi-language support.",
    },
];

const BENEFITS: [&str; 6] = [
    "Reduce operational costs by up to 40%",
    "Increase sales efficiency by 60%",
    "Automate 90% of routine tasks",
    "24/7 real-time inventory tracking",
    "Seamless integration with existing systems",
    "Advanced analytics and reporting",
];

const STATS: [(&str, &str); 4] = [
    ("10,000+", "Active Businesses"),
    ("$2.5B+", "Transactions Processed"),
    ("99.9%", "Uptime Guarantee"),
    ("150+", "Countries Served"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();
    let go_signup = navigate.clone();
    let go_features = navigate.clone();
    let go_pricing = navigate.clone();
    let go_trial = navigate.clone();
    let go_signup_cta = navigate.clone();
    let go_contact = navigate;

    view! {
        <section class="hero">
            <div class="hero__inner">
                <div class="hero__content">
                    <span class="badge badge--outline hero__badge">
                        {icon("zap")}
                        "Trusted by 10,000+ Businesses"
                    </span>
                    <h1 class="hero__title">
                        "Connect. Trade. "
                        <span class="hero__title-accent">"Grow."</span>
                    </h1>
                    <p class="hero__lead">
                        "The ultimate B2B marketplace platform connecting retailers and wholesalers. \
                         Streamline your operations, expand your network, and accelerate growth."
                    </p>
                    <div class="hero__actions">
                        <button
                            class="button button--primary button--large"
                            on:click=move |_| go_signup("/signup", Default::default())
                        >
                            "Get Started Free"
                            {icon("arrow-right")}
                        </button>
                        <button
                            class="button button--secondary button--large"
                            on:click=move |_| go_features("/features", Default::default())
                        >
                            "Learn More"
                        </button>
                    </div>

                    <div class="hero__stats">
                        {STATS.into_iter().map(|(value, label)| view! {
                            <div class="hero__stat">
                                <div class="hero__stat-value">{value}</div>
                                <div class="hero__stat-label">{label}</div>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </section>

        <section class="section">
            <div class="section__inner">
                <div class="section__intro">
                    <span class="badge badge--outline">
                        {icon("bar-chart")}
                        "Powerful Features"
                    </span>
                    <h2 class="section__title">"Everything you need to scale your business"</h2>
                    <p class="section__lead">
                        "Our comprehensive platform provides all the tools and features you need \
                         to manage your B2B operations efficiently."
                    </p>
                </div>

                <div class="feature-grid">
                    {FEATURES.iter().map(|feature| view! {
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

        <section class="section section--muted">
            <div class="section__inner section__inner--split">
                <div class="section__column">
                    <span class="badge badge--outline">
                        {icon("handshake")}
                        "Proven Results"
                    </span>
                    <h2 class="section__title">"Transform your business operations"</h2>
                    <p class="section__lead">
                        "Join thousands of successful businesses that have revolutionized \
                         their operations with our platform."
                    </p>
                    <ul class="checklist">
                        {BENEFITS.into_iter().map(|benefit| view! {
                            <li class="checklist__item">
                                {icon("check-circle")}
                                <span>{benefit}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                    <button
                        class="button button--primary"
                        on:click=move |_| go_pricing("/pricing", Default::default())
                    >
                        "View Pricing Plans"
                        {icon("arrow-right")}
                    </button>
                </div>

                <div class="section__column">
                    <div class="trial-card">
                        <h3 class="trial-card__title">"Ready to get started?"</h3>
                        <p class="trial-card__subtitle">
                            "Join our platform today and transform your business"
                        </p>
                        <div class="trial-card__offer">"Free Trial"</div>
                        <p class="trial-card__detail">"30-day free trial, no credit card required"</p>
                        <button
                            class="button button--primary button--block"
                            on:click=move |_| go_trial("/signup", Default::default())
                        >
                            "Start Free Trial"
                        </button>
                    </div>
                </div>
            </div>
        </section>

        <section class="cta">
            <div class="cta__inner">
                <h2 class="cta__title">"Ready to transform your business?"</h2>
                <p class="cta__lead">
                    "Join thousands of businesses already using TradeConnect to streamline \
                     their operations and accelerate growth."
                </p>
                <div class="cta__actions">
                    <button
                        class="button button--secondary button--large"
                        on:click=move |_| go_signup_cta("/signup", Default::default())
                    >
                        "Get Started Free"
                        {icon("arrow-right")}
                    </button>
                    <button
                        class="button button--ghost button--large"
                        on:click=move |_| go_contact("/contact", Default::default())
                    >
                        "Contact Sales"
                    </button>
                </div>
            </div>
        </section>
    }
}
