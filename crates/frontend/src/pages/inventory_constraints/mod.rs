pub mod store;

use contracts::domain::catalog::InventoryItem;
use contracts::domain::constraints::{DaySlot, ProductUpdate};
use leptos::prelude::*;

use self::store::{sample_items, ConstraintStore, ToastSaveSink};
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;

/// Per-day and per-(day, item) constraint editor for the upcoming week.
///
/// A holiday forces every item of that day to the disabled state without
/// touching the stored per-item flags; value inputs lock whenever the
/// cell is not effectively enabled.
#[component]
pub fn InventoryConstraintsPage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");
    let store = ConstraintStore::for_upcoming_week(sample_items());
    let days = store.days();
    let items = store.items();

    let header_days = days.clone();
    let settings_days = days.clone();

    view! {
        <div class="backoffice">
            <div class="backoffice__container">
                <PageHeader
                    title="Inventory Constraints"
                    subtitle="Plan availability for the next seven days"
                >
                    <button
                        class="button button--primary"
                        on:click=move |_| store.save(&ToastSaveSink::new(toasts))
                    >
                        {icon("save")}
                        "Save Changes"
                    </button>
                </PageHeader>

                <div class="panel">
                    <div class="panel__header">
                        {icon("package")}
                        <h2 class="panel__title">"7-Day Inventory Management"</h2>
                    </div>
                    <div class="panel__body panel__body--scroll">
                        <div class="constraint-grid">
                            <div class="constraint-grid__row constraint-grid__row--head">
                                <div class="constraint-grid__corner">"Items"</div>
                                {header_days.into_iter().map(|day| view! {
                                    <div class="constraint-grid__day">
                                        <div class="constraint-grid__day-name">{day.day_name}</div>
                                        <div class="constraint-grid__day-date">
                                            {format!("{} {}", day.month, day.day_number)}
                                        </div>
                                    </div>
                                }).collect_view()}
                            </div>

                            <div class="constraint-grid__row constraint-grid__row--settings">
                                <div class="constraint-grid__corner">"Day Settings"</div>
                                {settings_days.into_iter().map(|day| view! {
                                    <div class="constraint-grid__cell">
                                        <HolidayToggle store=store day_key=day.key />
                                    </div>
                                }).collect_view()}
                            </div>

                            {items.into_iter().map(|item| view! {
                                <ItemRow store=store item=item days=days.clone() />
                            }).collect_view()}
                        </div>
                    </div>
                </div>

                <div class="constraint-notes">
                    <p>"• Toggle holidays to automatically disable all items for that day"</p>
                    <p>"• Set minimum order values and availability percentages per item and day"</p>
                    <p>"• Individual items can be disabled for specific days"</p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn HolidayToggle(store: ConstraintStore, day_key: String) -> impl IntoView {
    let key_for_read = day_key.clone();
    let key_for_write = day_key;

    view! {
        <label class="switch">
            <input
                type="checkbox"
                class="switch__input"
                prop:checked=move || store.is_holiday(&key_for_read)
                on:change=move |ev| {
                    store.set_day_holiday(&key_for_write, event_target_checked(&ev))
                }
            />
            <span class="switch__track"></span>
            <span class="switch__text">"Holiday"</span>
        </label>
    }
}

#[component]
fn ItemRow(store: ConstraintStore, item: InventoryItem, days: Vec<DaySlot>) -> impl IntoView {
    view! {
        <div class="constraint-grid__row">
            <div class="constraint-grid__item">
                <div class="constraint-grid__item-name">{item.name.clone()}</div>
                <div class="constraint-grid__item-meta">{item.sku.clone()}</div>
                <div class="constraint-grid__item-meta">{item.category.clone()}</div>
            </div>
            {days.into_iter().map(|day| view! {
                <ConstraintCell store=store day_key=day.key item_id=item.id.clone() />
            }).collect_view()}
        </div>
    }
}

/// One editable (day, item) cell: enable switch plus the two value
/// inputs, locked whenever the pair is not effectively enabled.
#[component]
fn ConstraintCell(store: ConstraintStore, day_key: String, item_id: String) -> impl IntoView {
    let day_for_enabled = day_key.clone();
    let item_for_enabled = item_id.clone();
    let enabled = Signal::derive(move || {
        store.effective_enabled(&day_for_enabled, &item_for_enabled)
    });

    let day_for_holiday = day_key.clone();
    let holiday = Signal::derive(move || store.is_holiday(&day_for_holiday));

    let day_for_toggle = day_key.clone();
    let item_for_toggle = item_id.clone();
    let day_for_min_read = day_key.clone();
    let item_for_min_read = item_id.clone();
    let day_for_min_write = day_key.clone();
    let item_for_min_write = item_id.clone();
    let day_for_avail_read = day_key.clone();
    let item_for_avail_read = item_id.clone();
    let day_for_avail_write = day_key;
    let item_for_avail_write = item_id;

    view! {
        <div class="constraint-grid__cell" class:constraint-grid__cell--off=move || !enabled.get()>
            <label class="switch">
                <input
                    type="checkbox"
                    class="switch__input"
                    prop:checked=move || enabled.get()
                    disabled=move || holiday.get()
                    on:change=move |ev| {
                        let now_enabled = event_target_checked(&ev);
                        store.set_product_field(
                            &day_for_toggle,
                            &item_for_toggle,
                            ProductUpdate::Disabled(!now_enabled),
                        );
                    }
                />
                <span class="switch__track"></span>
                <span class="switch__text">
                    {move || if enabled.get() { "Enabled" } else { "Disabled" }}
                </span>
            </label>

            <label class="constraint-grid__field">
                <span class="constraint-grid__field-label">"Min Order ($)"</span>
                <input
                    type="number"
                    class="constraint-grid__field-input"
                    placeholder="0"
                    prop:value=move || store.min_order_value(&day_for_min_read, &item_for_min_read)
                    disabled=move || !enabled.get()
                    on:input=move |ev| {
                        store.set_product_field(
                            &day_for_min_write,
                            &item_for_min_write,
                            ProductUpdate::MinOrderValue(event_target_value(&ev)),
                        );
                    }
                />
            </label>

            <label class="constraint-grid__field">
                <span class="constraint-grid__field-label">"Availability (%)"</span>
                <input
                    type="number"
                    class="constraint-grid__field-input"
                    placeholder="100"
                    max="100"
                    prop:value=move || store.availability(&day_for_avail_read, &item_for_avail_read)
                    disabled=move || !enabled.get()
                    on:input=move |ev| {
                        store.set_product_field(
                            &day_for_avail_write,
                            &item_for_avail_write,
                            ProductUpdate::Availability(event_target_value(&ev)),
                        );
                    }
                />
            </label>
        </div>
    }
}
