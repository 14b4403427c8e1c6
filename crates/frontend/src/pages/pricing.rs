use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::Switch;

use crate::shared::icons::icon;

struct Plan {
    name: &'static str,
    description: &'static str,
    monthly_price: u32,
    annual_price: u32,
    badge: Option<&'static str>,
    features: &'static [&'static str],
    limitations: &'static [&'static str],
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        description: "Perfect for small businesses just getting started",
        monthly_price: 49,
        annual_price: 39,
        badge: None,
        features: &[
            "Up to 5 users",
            "Basic inventory management",
            "Order processing",
            "Email support",
            "Basic reporting",
            "Mobile app access",
            "5GB storage",
        ],
        limitations: &["Limited integrations", "Basic analytics only"],
    },
    Plan {
        name: "Professional",
        description: "Ideal for growing businesses with advanced needs",
        monthly_price: 99,
        annual_price: 79,
        badge: Some("Most Popular"),
        features: &[
            "Up to 25 users",
            "Advanced inventory management",
            "Multi-location support",
            "Priority support",
            "Advanced reporting & analytics",
            "API access",
            "Custom pricing slabs",
            "Credit management",
            "50GB storage",
            "Third-party integrations",
        ],
        limitations: &[],
    },
    Plan {
        name: "Enterprise",
        description: "For large organizations with complex requirements",
        monthly_price: 199,
        annual_price: 159,
        badge: Some("Best Value"),
        features: &[
            "Unlimited users",
            "Full platform access",
            "Dedicated account manager",
            "24/7 phone support",
            "Custom reporting",
            "Advanced API access",
            "White-label options",
            "SSO integration",
            "Unlimited storage",
            "Custom integrations",
            "Advanced security features",
            "Training & onboarding",
        ],
        limitations: &[],
    },
];

const ADD_ONS: [(&str, u32, &str); 4] = [
    ("Additional Storage", 10, "Extra 100GB storage per month"),
    ("Premium Support", 25, "Priority support with faster response times"),
    ("Custom Integrations", 100, "Custom API integrations and development"),
    ("Advanced Training", 50, "Comprehensive training sessions for your team"),
];

const FAQS: [(&str, &str); 4] = [
    (
        "Can I change my plan anytime?",
        "Yes, you can upgrade or downgrade your plan at any time. Changes will be reflected in your next billing cycle.",
    ),
    (
        "Is there a free trial?",
        "Yes, we offer a 30-day free trial with full access to all features. No credit card required.",
    ),
    (
        "What payment methods do you accept?",
        "We accept all major credit cards, PayPal, and bank transfers for enterprise customers.",
    ),
    (
        "Do you offer custom pricing for large enterprises?",
        "Yes, we offer custom pricing and solutions for enterprises with specific requirements. Contact our sales team for details.",
    ),
];

#[component]
pub fn PricingPage() -> impl IntoView {
    let navigate = use_navigate();
    let go_signup_cta = navigate.clone();
    let go_contact = navigate.clone();

    let is_annual = RwSignal::new(false);

    view! {
        <section class="hero hero--compact">
            <div class="hero__inner hero__inner--center">
                <span class="badge badge--outline hero__badge">
                    {icon("star")}
                    "Simple, Transparent Pricing"
                </span>
                <h1 class="hero__title">
                    "Choose the perfect plan for"
                    <span class="hero__title-accent">" your business"</span>
                </h1>
                <p class="hero__lead">
                    "Start with our free trial and scale as you grow. No hidden fees, \
                     no setup costs, and you can cancel anytime."
                </p>

                <div class="billing-toggle">
                    <span>"Monthly"</span>
                    <Switch checked=is_annual />
                    <span>
                        "Annual "
                        <span class="badge badge--success">"Save 20%"</span>
                    </span>
                </div>
            </div>
        </section>

        <section class="section">
            <div class="section__inner">
                <div class="plan-grid">
                    {PLANS.iter().map(|plan| {
                        let monthly = plan.monthly_price;
                        let annual = plan.annual_price;
                        let navigate = navigate.clone();
                        view! {
                            <div class="plan-card" class:plan-card--featured=plan.badge.is_some()>
                                {plan.badge.map(|badge| view! {
                                    <span class="plan-card__badge badge badge--info">{badge}</span>
                                })}
                                <h2 class="plan-card__name">{plan.name}</h2>
                                <p class="plan-card__description">{plan.description}</p>
                                <div class="plan-card__price">
                                    {move || format!(
                                        "${}",
                                        if is_annual.get() { annual } else { monthly }
                                    )}
                                    <span class="plan-card__period">"/month"</span>
                                </div>
                                <Show when=move || is_annual.get()>
                                    <div class="plan-card__billing-note">
                                        {format!("Billed annually (${}/year)", annual * 12)}
                                    </div>
                                </Show>

                                <button
                                    class="button button--primary button--block"
                                    on:click=move |_| navigate("/signup", Default::default())
                                >
                                    "Start Free Trial"
                                    {icon("arrow-right")}
                                </button>

                                <div class="plan-card__section">"What's included:"</div>
                                <ul class="checklist">
                                    {plan.features.iter().map(|feature| view! {
                                        <li class="checklist__item">
                                            {icon("check-circle")}
                                            <span>{*feature}</span>
                                        </li>
                                    }).collect_view()}
                                </ul>

                                {(!plan.limitations.is_empty()).then(|| view! {
                                    <div class="plan-card__section">"Limitations:"</div>
                                    <ul class="checklist checklist--muted">
                                        {plan.limitations.iter().map(|limitation| view! {
                                            <li class="checklist__item">
                                                <span class="checklist__dot"></span>
                                                <span>{*limitation}</span>
                                            </li>
                                        }).collect_view()}
                                    </ul>
                                })}
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>

        <section class="section section--muted">
            <div class="section__inner">
                <div class="section__intro">
                    <h2 class="section__title">"Optional Add-ons"</h2>
                    <p class="section__lead">
                        "Enhance your plan with additional features and services"
                    </p>
                </div>

                <div class="addon-grid">
                    {ADD_ONS.into_iter().map(|(name, price, description)| view! {
                        <div class="addon-card">
                            <h3 class="addon-card__name">{name}</h3>
                            <div class="addon-card__price">
                                {format!("${price}")}
                                <span class="addon-card__period">"/month"</span>
                            </div>
                            <p class="addon-card__description">{description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>

        <section class="section">
            <div class="section__inner">
                <div class="section__intro">
                    <h2 class="section__title">"Frequently Asked Questions"</h2>
                    <p class="section__lead">"Got questions? We've got answers."</p>
                </div>

                <div class="faq-grid">
                    {FAQS.into_iter().map(|(question, answer)| view! {
                        <div class="faq-card">
                            <h3 class="faq-card__question">{question}</h3>
                            <p class="faq-card__answer">{answer}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>

        <section class="cta">
            <div class="cta__inner">
                <h2 class="cta__title">"Ready to get started?"</h2>
                <p class="cta__lead">
                    "Join thousands of businesses that trust TradeConnect to power their operations."
                </p>
                <div class="cta__actions">
                    <button
                        class="button button--secondary button--large"
                        on:click=move |_| go_signup_cta("/signup", Default::default())
                    >
                        "Start Free Trial"
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
