use crate::shared::icons::icon;
use leptos::prelude::*;

/// Summary card above the report tables
#[component]
pub fn StatCard(
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Formatted value; `None` while the report loads
    #[prop(into)]
    value: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__body">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get().unwrap_or_else(|| "…".to_string())}
                </div>
            </div>
        </div>
    }
}
