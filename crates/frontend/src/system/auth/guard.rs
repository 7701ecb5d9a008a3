use leptos::prelude::*;

use super::context::use_auth;
use crate::system::pages::login::LoginPage;

/// Renders the children once a session exists, the login page otherwise
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.access_token.is_some())
            fallback=|| view! { <LoginPage /> }
        >
            {children()}
        </Show>
    }
}

/// Renders the children for administrators only
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.access_token.is_some() && s.is_admin())
            fallback=|| view! {
                <div class="empty-state">
                    <h2>"Acceso restringido"</h2>
                    <p>"Esta sección está disponible solo para administradores."</p>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
