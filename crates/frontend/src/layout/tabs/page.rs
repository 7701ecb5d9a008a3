use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;

/// Keeps the page mounted while its tab is open; inactive tabs are only
/// hidden so their list state survives switching.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = tab.key.clone();
    let is_active = {
        let key = key.clone();
        move || tabs_store.active.with(|active| active.as_ref() == Some(&key))
    };

    log::debug!("TabPage created: '{}'", key);
    let content = render_tab_content(&key);

    view! {
        <div class="tabs__item" class:tabs__item--hidden=move || !is_active() data-tab-key=key>
            {content}
        </div>
    }
}
