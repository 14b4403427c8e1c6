use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::toast::ToastService;

struct ContactMethod {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    contact: &'static str,
    availability: &'static str,
}

const CONTACT_METHODS: [ContactMethod; 4] = [
    ContactMethod {
        icon: "mail",
        title: "Email Support",
        description: "Get help via email with our support team",
        contact: "support@tradeconnect.com",
        availability: "24/7 Response",
    },
    ContactMethod {
        icon: "phone",
        title: "Phone Support",
        description: "Speak directly with our experts",
        contact: "+1 (555) 123-4567",
        availability: "Mon-Fri, 9AM-6PM PST",
    },
    ContactMethod {
        icon: "message-square",
        title: "Live Chat",
        description: "Chat with us in real-time",
        contact: "Available in app",
        availability: "Mon-Fri, 9AM-6PM PST",
    },
    ContactMethod {
        icon: "book-open",
        title: "Knowledge Base",
        description: "Find answers in our documentation",
        contact: "help.tradeconnect.com",
        availability: "Always Available",
    },
];

const OFFICES: [(&str, &str, &str, &str); 3] = [
    (
        "San Francisco",
        "123 Business District, Suite 100",
        "United States",
        "+1 (555) 123-4567",
    ),
    (
        "London",
        "456 Canary Wharf, Floor 12",
        "United Kingdom",
        "+44 20 7123 4567",
    ),
    (
        "Singapore",
        "789 Marina Bay, Level 15",
        "Singapore",
        "+65 6123 4567",
    ),
];

const FAQS: [(&str, &str); 2] = [
    (
        "How quickly will I get a response?",
        "We typically respond to all inquiries within 2-4 hours during business hours. \
         For urgent technical issues, our 24/7 support team responds within 30 minutes.",
    ),
    (
        "Do you offer custom demos?",
        "Yes! We provide personalized demos tailored to your business needs. \
         Contact our sales team to schedule a custom demonstration.",
    ),
];

#[component]
pub fn ContactPage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");

    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (company, set_company) = signal(String::new());
    let (subject, set_subject) = signal("sales".to_string());
    let (message, set_message) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if email.get().trim().is_empty() || message.get().trim().is_empty() {
            toasts.notify(
                "Message not sent",
                "Please fill in your email and a short message.",
            );
            return;
        }

        log::info!(
            "contact request from {} {} <{}> ({}): {}",
            first_name.get(),
            last_name.get(),
            email.get(),
            subject.get(),
            message.get()
        );
        toasts.notify(
            "Message sent",
            "Thanks for reaching out. We'll get back to you within 24 hours.",
        );

        set_first_name.set(String::new());
        set_last_name.set(String::new());
        set_email.set(String::new());
        set_company.set(String::new());
        set_subject.set("sales".to_string());
        set_message.set(String::new());
    };

    view! {
        <section class="hero hero--compact">
            <div class="hero__inner hero__inner--center">
                <span class="badge badge--outline hero__badge">
                    {icon("headphones")}
                    "24/7 Support Available"
                </span>
                <h1 class="hero__title">
                    "Get in touch with"
                    <span class="hero__title-accent">" our team"</span>
                </h1>
                <p class="hero__lead">
                    "Have questions about our platform? Need help getting started? \
                     Our expert team is here to support your business success."
                </p>
            </div>
        </section>

        <section class="section">
            <div class="section__inner">
                <div class="section__intro">
                    <h2 class="section__title">"How can we help you?"</h2>
                    <p class="section__lead">"Choose the best way to reach us based on your needs"</p>
                </div>

                <div class="contact-grid">
                    {CONTACT_METHODS.iter().map(|method| view! {
                        <div class="contact-card">
                            <span class="contact-card__icon">{icon(method.icon)}</span>
                            <h3 class="contact-card__title">{method.title}</h3>
                            <p class="contact-card__description">{method.description}</p>
                            <div class="contact-card__value">{method.contact}</div>
                            <div class="contact-card__availability">
                                {icon("clock")}
                                <span>{method.availability}</span>
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>

        <section class="section section--muted">
            <div class="section__inner section__inner--split">
                <div class="panel">
                    <div class="panel__header">
                        <div>
                            <h2 class="panel__title">"Send us a message"</h2>
                            <p class="panel__subtitle">
                                "Fill out the form below and we'll get back to you within 24 hours."
                            </p>
                        </div>
                    </div>
                    <form class="panel__body" on:submit=on_submit>
                        <div class="form-row">
                            <div class="form-group">
                                <label for="first-name">"First Name"</label>
                                <input
                                    type="text"
                                    id="first-name"
                                    placeholder="John"
                                    prop:value=move || first_name.get()
                                    on:input=move |ev| set_first_name.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label for="last-name">"Last Name"</label>
                                <input
                                    type="text"
                                    id="last-name"
                                    placeholder="Doe"
                                    prop:value=move || last_name.get()
                                    on:input=move |ev| set_last_name.set(event_target_value(&ev))
                                />
                            </div>
                        </div>

                        <div class="form-group">
                            <label for="contact-email">"Email"</label>
                            <input
                                type="email"
                                id="contact-email"
                                placeholder="john@company.com"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-group">
                            <label for="contact-company">"Company"</label>
                            <input
                                type="text"
                                id="contact-company"
                                placeholder="Your Company Name"
                                prop:value=move || company.get()
                                on:input=move |ev| set_company.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-group">
                            <label for="contact-subject">"Subject"</label>
                            <select
                                id="contact-subject"
                                prop:value=move || subject.get()
                                on:change=move |ev| set_subject.set(event_target_value(&ev))
                            >
                                <option value="sales">"Sales Inquiry"</option>
                                <option value="support">"Technical Support"</option>
                                <option value="billing">"Billing Question"</option>
                                <option value="partnership">"Partnership"</option>
                                <option value="other">"Other"</option>
                            </select>
                        </div>

                        <div class="form-group">
                            <label for="contact-message">"Message"</label>
                            <textarea
                                id="contact-message"
                                rows="5"
                                placeholder="Tell us more about your inquiry..."
                                prop:value=move || message.get()
                                on:input=move |ev| set_message.set(event_target_value(&ev))
                            ></textarea>
                        </div>

                        <button type="submit" class="button button--primary button--block">
                            "Send Message"
                            {icon("send")}
                        </button>
                    </form>
                </div>

                <div class="section__column">
                    <h3 class="section__subheading">"Our Global Offices"</h3>
                    <div class="office-list">
                        {OFFICES.into_iter().map(|(city, address, country, phone)| view! {
                            <div class="office-card">
                                {icon("map-pin")}
                                <div>
                                    <div class="office-card__city">
                                        {format!("{city}, {country}")}
                                    </div>
                                    <div class="office-card__address">{address}</div>
                                    <div class="office-card__phone">{phone}</div>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>

                    <div class="panel panel--accent">
                        <div class="panel__header">
                            <div>
                                <h2 class="panel__title">"Need immediate help?"</h2>
                                <p class="panel__subtitle">
                                    "For urgent technical issues, our support team is available 24/7"
                                </p>
                            </div>
                        </div>
                        <div class="panel__body">
                            <button class="button button--secondary button--block">
                                {icon("message-square")}
                                "Start Live Chat"
                            </button>
                            <button class="button button--secondary button--block">
                                {icon("phone")}
                                "Call Support"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </section>

        <section class="section">
            <div class="section__inner">
                <div class="section__intro">
                    <h2 class="section__title">"Frequently Asked Questions"</h2>
                    <p class="section__lead">"Quick answers to common questions"</p>
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
    }
}
