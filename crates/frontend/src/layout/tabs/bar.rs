use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="tabs__bar">
            <For
                each=move || ctx.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab| {
                    let key = StoredValue::new(tab.key.clone());
                    view! {
                        <div
                            class="tabs__tab"
                            class:tabs__tab--active=move || {
                                ctx.active.get() == Some(key.get_value())
                            }
                            on:click=move |_| ctx.activate_tab(&key.get_value())
                        >
                            <span>{tab.title.clone()}</span>
                            <button
                                class="tabs__close"
                                title="Cerrar"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    ctx.close_tab(&key.get_value());
                                }
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
