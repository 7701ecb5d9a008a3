use leptos::prelude::*;

use crate::shared::icons::icon;

/// Title row of a page: optional icon, title, a muted description and the
/// page actions aligned right.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional)] subtitle: &'static str,
    #[prop(optional)] icon_name: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">
                    {icon_name.map(|name| view! { <span class="page-header__icon">{icon(name)}</span> })}
                    {title}
                </h1>
                {(!subtitle.is_empty()).then(|| view! {
                    <div class="page-header__subtitle">{subtitle}</div>
                })}
            </div>
            <div class="page-header__actions">{children()}</div>
        </div>
    }
}
