pub mod global_context;
pub mod left;
pub mod tabs;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +---------+--------------------+
/// | Sidebar |  TabBar + content  |
/// +---------+--------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx = use_context::<global_context::AppGlobalContext>()
        .expect("AppGlobalContext not found");

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <aside class="app-sidebar" class:hidden=move || !ctx.left_open.get()>
                    <left::Sidebar />
                </aside>
                <main class="app-main">
                    <tabs::TabBar />
                    <div class="tabs__content">{children()}</div>
                </main>
            </div>
        </div>
    }
}
