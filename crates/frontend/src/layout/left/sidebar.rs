//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, icon)
    admin_only: bool,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "catalogs",
            label: "Catálogos",
            icon: "database",
            items: vec![
                ("a001_category", "tag"),
                ("a002_client", "users"),
                ("a003_supplier", "truck"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "sales",
            label: "Ventas",
            icon: "shopping-cart",
            items: vec![("a005_sale", "shopping-cart"), ("p900_sales_report", "bar-chart")],
            admin_only: false,
        },
        MenuGroup {
            id: "expenses",
            label: "Salidas",
            icon: "wallet",
            items: vec![("p901_expense_report", "file-minus")],
            admin_only: false,
        },
        MenuGroup {
            id: "administration",
            label: "Administración",
            icon: "settings",
            items: vec![("a004_vendor", "user-check")],
            admin_only: true,
        },
    ]
}

/// Groups shown to the current user; the vendor page is listed for
/// administrators only
fn menu_groups_for(is_admin: bool) -> Vec<MenuGroup> {
    menu_groups()
        .into_iter()
        .filter(|g| is_admin || !g.admin_only)
        .collect()
}

#[component]
fn SidebarGroup(group: MenuGroup, expanded: RwSignal<Vec<&'static str>>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let group_id = group.id;
    let is_expanded = move || expanded.get().contains(&group_id);

    view! {
        <div class="app-sidebar__group">
            <div
                class="app-sidebar__item"
                on:click=move |_| {
                    expanded.update(|ids| {
                        if let Some(pos) = ids.iter().position(|id| *id == group_id) {
                            ids.remove(pos);
                        } else {
                            ids.push(group_id);
                        }
                    })
                }
            >
                <div class="app-sidebar__item-content">
                    {icon(group.icon)}
                    <span>{group.label}</span>
                </div>
                <div class="app-sidebar__chevron" class:app-sidebar__chevron--expanded=is_expanded>
                    {icon("chevron-right")}
                </div>
            </div>
            <Show when=is_expanded>
                <div class="app-sidebar__children">
                    {group
                        .items
                        .clone()
                        .into_iter()
                        .map(|(key, icon_name)| {
                            let label = tab_label_for_key(key);
                            view! {
                                <div
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=move || {
                                        ctx.active.get().as_deref() == Some(key)
                                    }
                                    on:click=move |_| ctx.open_tab(key, label)
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(icon_name)}
                                        <span>{label}</span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let is_admin = Memo::new(move |_| auth_state.with(|s| s.is_admin()));

    let expanded = RwSignal::new(vec!["catalogs", "sales", "expenses", "administration"]);

    view! {
        <nav class="app-sidebar__content">
            {move || {
                menu_groups_for(is_admin.get())
                    .into_iter()
                    .map(|group| view! { <SidebarGroup group=group expanded=expanded /> })
                    .collect_view()
            }}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(is_admin: bool) -> Vec<&'static str> {
        menu_groups_for(is_admin)
            .into_iter()
            .flat_map(|g| g.items.into_iter().map(|(key, _)| key))
            .collect()
    }

    #[test]
    fn test_vendor_page_is_admin_only() {
        assert!(keys(true).contains(&"a004_vendor"));
        assert!(!keys(false).contains(&"a004_vendor"));
        assert_eq!(keys(true).len(), 7);
        assert_eq!(keys(false).len(), 6);
    }

    #[test]
    fn test_every_menu_item_has_a_label() {
        for key in keys(true) {
            assert_ne!(tab_label_for_key(key), key);
        }
    }
}
