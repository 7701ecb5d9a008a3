use crate::domain::a001_category::ui::details::{model, CategoryDetails};
use crate::shared::components::{PageHeader, StatusBadge};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, Searchable};
use crate::shared::modal::{confirm, Modal};
use crate::shared::toast::use_toast;
use contracts::domain::a001_category::aggregate::{Category, CategoryDto};
use contracts::domain::common::{remove_by_id, upsert_by_id, AggregateRoot};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::*;

impl Searchable for Category {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.base.code.as_str(),
            self.base.description.as_str(),
            self.base.comment.as_deref().unwrap_or(""),
        ]
    }
}

#[component]
pub fn CategoryList() -> impl IntoView {
    let toasts = use_toast();
    let items = RwSignal::new(Vec::<Category>::new());
    let is_loading = RwSignal::new(false);
    let search = RwSignal::new(String::new());
    // Some(form) while the modal is open
    let editing = RwSignal::new(Option::<CategoryDto>::None);

    let fetch = move || {
        is_loading.set(true);
        spawn_local(async move {
            match model::fetch_all().await {
                Ok(v) => items.set(v),
                Err(e) => toasts.error(format!("Error al cargar categorías: {}", e)),
            }
            is_loading.set(false);
        });
    };

    let visible = Signal::derive(move || items.with(|all| filter_list(all, &search.get())));

    let handle_delete = move |category: Category| {
        let message = format!("¿Eliminar la categoría \"{}\"?", category.base.description);
        if !confirm(&message) {
            return;
        }
        spawn_local(async move {
            match model::delete_by_id(&category.to_string_id()).await {
                Ok(()) => {
                    items.update(|v| {
                        remove_by_id(v, &category.id());
                    });
                    toasts.success("Categoría eliminada");
                }
                Err(e) => toasts.error(e),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <PageHeader title=Category::list_name() subtitle="Clasificación de los productos de la tienda">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| editing.set(Some(CategoryDto::default()))
                >
                    {icon("plus")}
                    "Nueva categoría"
                </Button>
                <Button on_click=move |_| fetch() disabled=Signal::derive(move || is_loading.get())>
                    {icon("refresh")}
                    "Actualizar"
                </Button>
            </PageHeader>

            <div class="list-toolbar">
                {icon("search")}
                <Input value=search placeholder="Buscar por código, nombre o descripción"/>
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Código"</TableHeaderCell>
                        <TableHeaderCell>"Nombre"</TableHeaderCell>
                        <TableHeaderCell>"Descripción"</TableHeaderCell>
                        <TableHeaderCell>"Productos"</TableHeaderCell>
                        <TableHeaderCell>"Estado"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = visible.get();
                        if rows.is_empty() {
                            let text = if is_loading.get() { "Cargando…" } else { "No hay categorías" };
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="6">
                                        <TableCellLayout><span class="text-muted">{text}</span></TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }.into_any();
                        }
                        rows.into_iter().map(|row| {
                            let for_edit = CategoryDto::from(&row);
                            let for_delete = row.clone();
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{row.base.code.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{row.base.description.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{row.base.comment.clone().unwrap_or_default()}</TableCellLayout></TableCell>
                                    <TableCell class="table__cell--right"><TableCellLayout>{row.product_count}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout><StatusBadge status=row.status/></TableCellLayout></TableCell>
                                    <TableCell>
                                        <div class="row-actions">
                                            <button class="button button--icon" title="Editar" on:click=move |_| editing.set(Some(for_edit.clone()))>
                                                {icon("edit")}
                                            </button>
                                            <button class="button button--icon button--danger" title="Eliminar" on:click=move |_| handle_delete(for_delete.clone())>
                                                {icon("trash")}
                                            </button>
                                        </div>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view().into_any()
                    }}
                </TableBody>
            </Table>

            {move || editing.get().map(|dto| {
                let title = if dto.id.is_some() { "Editar categoría" } else { "Nueva categoría" };
                let was_edit = dto.id.is_some();
                view! {
                    <Modal title=title.to_string() on_close=Callback::new(move |_| editing.set(None))>
                        {
                            let on_saved: Rc<dyn Fn(Category)> = Rc::new(move |saved: Category| {
                                items.update(|v| {
                                    upsert_by_id(v, saved);
                                });
                                editing.set(None);
                                toasts.success(if was_edit { "Categoría actualizada" } else { "Categoría creada" });
                            });
                            let on_cancel: Rc<dyn Fn(())> = Rc::new(move |_| editing.set(None));
                            view! { <CategoryDetails initial=dto on_saved=on_saved on_cancel=on_cancel/> }
                        }
                    </Modal>
                }
            })}
        </div>
    }
}
