use leptos::prelude::*;
use uuid::Uuid;

use crate::shared::components::{PageHeader, StatCard};
use crate::shared::date_utils::format_friendly_date;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;

#[derive(Clone, Debug, PartialEq)]
struct Holiday {
    id: Uuid,
    name: String,
    date: String,
    kind: String,
    impact: String,
    affected_stores: u32,
}

impl Holiday {
    fn new(name: &str, date: &str, kind: &str, impact: &str, affected_stores: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            date: date.to_string(),
            kind: kind.to_string(),
            impact: impact.to_string(),
            affected_stores,
        }
    }
}

fn seeded_holidays() -> Vec<Holiday> {
    vec![
        Holiday::new("New Year's Day", "2024-01-01", "Public Holiday", "Store Closed", 5),
        Holiday::new(
            "Martin Luther King Jr. Day",
            "2024-01-15",
            "Public Holiday",
            "Limited Operations",
            3,
        ),
        Holiday::new("Presidents Day", "2024-02-19", "Public Holiday", "Store Closed", 5),
        Holiday::new("Spring Break", "2024-03-25", "Seasonal", "Extended Hours", 2),
        Holiday::new("Memorial Day", "2024-05-27", "Public Holiday", "Store Closed", 5),
    ]
}

fn impact_badge(impact: &str) -> &'static str {
    match impact {
        "Store Closed" => "badge badge--danger",
        "Limited Operations" => "badge badge--pending",
        "Extended Hours" => "badge badge--success",
        _ => "badge badge--outline",
    }
}

#[component]
pub fn HolidayCalendarPage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");

    let holidays = RwSignal::new(seeded_holidays());
    let (form_open, set_form_open) = signal(false);

    let (name, set_name) = signal(String::new());
    let (date, set_date) = signal(String::new());
    let (kind, set_kind) = signal(String::new());
    let (impact, set_impact) = signal(String::new());

    let add_holiday = move |_| {
        let name_val = name.get();
        let date_val = date.get();
        if name_val.trim().is_empty() || date_val.trim().is_empty() {
            toasts.notify("Missing details", "A holiday needs at least a name and a date.");
            return;
        }
        let kind_val = if kind.get().trim().is_empty() {
            "Public Holiday".to_string()
        } else {
            kind.get()
        };
        let impact_val = if impact.get().trim().is_empty() {
            "Store Closed".to_string()
        } else {
            impact.get()
        };

        holidays.update(|list| {
            list.push(Holiday::new(&name_val, &date_val, &kind_val, &impact_val, 1));
            list.sort_by(|a, b| a.date.cmp(&b.date));
        });
        toasts.notify("Holiday added", format!("{name_val} is now on the calendar."));

        set_name.set(String::new());
        set_date.set(String::new());
        set_kind.set(String::new());
        set_impact.set(String::new());
        set_form_open.set(false);
    };

    let upcoming = move || holidays.get().into_iter().take(3).collect::<Vec<_>>();

    view! {
        <div class="backoffice">
            <div class="backoffice__container">
                <PageHeader
                    title="Holiday Calendar"
                    subtitle="Manage holidays and their impact on operations"
                >
                    {()}
                </PageHeader>

                <div class="stat-grid">
                    <StatCard
                        label="Total Holidays"
                        icon_name="calendar-days"
                        value="24"
                        caption="This year"
                    />
                    <StatCard
                        label="Store Closures"
                        icon_name="x-circle"
                        value="12"
                        caption="Full closure days"
                    />
                    <StatCard
                        label="Limited Operations"
                        icon_name="clock"
                        value="8"
                        caption="Reduced hours"
                    />
                    <StatCard
                        label="Extended Hours"
                        icon_name="trending-up"
                        value="4"
                        caption="Special events"
                    />
                </div>

                <div class="panel-grid panel-grid--sidebar">
                    <div class="panel">
                        <div class="panel__header">
                            <div>
                                <h2 class="panel__title">"Holiday Schedule"</h2>
                                <p class="panel__subtitle">
                                    "All scheduled holidays and their operational impact"
                                </p>
                            </div>
                            <div class="panel__actions">
                                <button
                                    class="button button--primary"
                                    on:click=move |_| set_form_open.update(|open| *open = !*open)
                                >
                                    {icon("plus")}
                                    "Add Holiday"
                                </button>
                            </div>
                        </div>

                        <Show when=move || form_open.get()>
                            <div class="panel__form">
                                <div class="form-group">
                                    <label for="holiday-name">"Holiday Name"</label>
                                    <input
                                        type="text"
                                        id="holiday-name"
                                        placeholder="Enter holiday name"
                                        prop:value=move || name.get()
                                        on:input=move |ev| set_name.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="holiday-date">"Date"</label>
                                    <input
                                        type="date"
                                        id="holiday-date"
                                        prop:value=move || date.get()
                                        on:input=move |ev| set_date.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="holiday-type">"Type"</label>
                                    <input
                                        type="text"
                                        id="holiday-type"
                                        placeholder="e.g., Public Holiday, Seasonal"
                                        prop:value=move || kind.get()
                                        on:input=move |ev| set_kind.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="holiday-impact">"Operational Impact"</label>
                                    <input
                                        type="text"
                                        id="holiday-impact"
                                        placeholder="e.g., Store Closed, Limited Operations"
                                        prop:value=move || impact.get()
                                        on:input=move |ev| set_impact.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="panel__form-actions">
                                    <button
                                        class="button button--secondary"
                                        on:click=move |_| set_form_open.set(false)
                                    >
                                        "Cancel"
                                    </button>
                                    <button class="button button--primary" on:click=add_holiday>
                                        "Add Holiday"
                                    </button>
                                </div>
                            </div>
                        </Show>

                        <div class="panel__body">
                            <div class="holiday-list">
                                <For
                                    each=move || holidays.get()
                                    key=|holiday| holiday.id
                                    children=move |holiday: Holiday| view! {
                                        <div class="holiday-list__row">
                                            <div class="holiday-list__icon">{icon("calendar-days")}</div>
                                            <div class="holiday-list__main">
                                                <h3 class="holiday-list__name">{holiday.name.clone()}</h3>
                                                <div class="holiday-list__meta">
                                                    {icon("clock")}
                                                    <span>{format_friendly_date(&holiday.date)}</span>
                                                    <span>"•"</span>
                                                    {icon("users")}
                                                    <span>
                                                        {format!("{} stores affected", holiday.affected_stores)}
                                                    </span>
                                                </div>
                                            </div>
                                            <div class="holiday-list__badges">
                                                <span class="badge badge--outline">{holiday.kind.clone()}</span>
                                                <span class=impact_badge(&holiday.impact)>
                                                    {holiday.impact.clone()}
                                                </span>
                                            </div>
                                        </div>
                                    }
                                />
                            </div>
                        </div>
                    </div>

                    <div class="panel">
                        <div class="panel__header">
                            <div>
                                <h2 class="panel__title">"Upcoming Holidays"</h2>
                                <p class="panel__subtitle">"Next 3 scheduled holidays"</p>
                            </div>
                        </div>
                        <div class="panel__body">
                            <div class="holiday-upcoming">
                                {move || upcoming().into_iter().map(|holiday| view! {
                                    <div class="holiday-upcoming__row">
                                        <div>
                                            <div class="holiday-upcoming__name">{holiday.name.clone()}</div>
                                            <div class="holiday-upcoming__date">
                                                {format_friendly_date(&holiday.date)}
                                            </div>
                                        </div>
                                        <span class=impact_badge(&holiday.impact)>
                                            {holiday.impact.clone()}
                                        </span>
                                    </div>
                                }).collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
