use contracts::enums::RecordStatus;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn StatusBadge(status: RecordStatus) -> impl IntoView {
    let color = match status {
        RecordStatus::Active => BadgeColor::Success,
        RecordStatus::Inactive => BadgeColor::Subtle,
    };

    view! {
        <Badge color=color appearance=BadgeAppearance::Tint>
            {status.display_name()}
        </Badge>
    }
}
