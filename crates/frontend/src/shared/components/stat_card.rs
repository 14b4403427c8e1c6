use crate::shared::icons::icon;
use contracts::shared::indicators::{IndicatorStatus, Trend};
use leptos::prelude::*;

/// KPI card with a preformatted value and an optional change label whose
/// sign picks the arrow colour.
#[component]
pub fn StatCard(
    label: &'static str,

    /// Icon name from the icon() helper
    icon_name: &'static str,

    /// Preformatted value ("$24,580", "98.2%")
    #[prop(into)] value: String,

    /// Change relative to the previous period ("+12%")
    #[prop(optional, into)] change: Option<&'static str>,

    /// Caption shown after the change label ("from last month")
    #[prop(optional, into)] caption: Option<&'static str>,

    #[prop(optional, into)] status: Option<IndicatorStatus>,
) -> impl IntoView {
    let status = status.unwrap_or(IndicatorStatus::Neutral);
    let card_class = format!("stat-card {}", status.card_modifier());

    let change_view = change.map(|label| {
        let class = match Trend::from_change_label(label) {
            Trend::Up => "stat-card__change stat-card__change--up",
            Trend::Down => "stat-card__change stat-card__change--down",
            Trend::Flat => "stat-card__change stat-card__change--flat",
        };
        view! { <span class=class>{label}</span> }
    });

    view! {
        <div class=card_class>
            <div class="stat-card__top">
                <span class="stat-card__label">{label}</span>
                <span class="stat-card__icon">{icon(icon_name)}</span>
            </div>
            <div class="stat-card__value">{value}</div>
            <div class="stat-card__meta">
                {change_view}
                {caption.map(|c| view! { <span class="stat-card__caption">{c}</span> })}
            </div>
        </div>
    }
}
