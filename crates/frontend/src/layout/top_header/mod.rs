//! Top bar: sidebar toggle, brand, signed-in user and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();

    let logout = move |_| {
        spawn_local(async move {
            do_logout(set_auth_state).await;
        });
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || {
                        if ctx.left_open.get() { "Ocultar menú" } else { "Mostrar menú" }
                    }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Tienda Admin"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || {
                            auth_state
                                .get()
                                .user_info
                                .map(|u| format!("{} · {}", u.display_name(), u.role_label()))
                                .unwrap_or_default()
                        }}
                    </span>
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Cerrar sesión">
                    {icon("log-out")}
                </button>
            </div>
        </header>
    }
}
