//! Auth gate: the login page until a session exists, the dashboard after.

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    tabs_store.init_router_integration();

    view! {
        <Shell>
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab: TabData| view! { <TabPage tab=tab tabs_store=tabs_store /> }
            />
            <Show when=move || tabs_store.opened.with(|tabs| tabs.is_empty())>
                <div class="empty-state">
                    <h2>"Bienvenido"</h2>
                    <p>"Seleccione una sección en el menú lateral."</p>
                </div>
            </Show>
        </Shell>
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <RequireAuth>
            <MainLayout />
        </RequireAuth>
    }
}
