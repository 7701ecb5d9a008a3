use crate::domain::a003_supplier::ui::details::{model, SupplierDetails};
use crate::shared::components::{PageHeader, StatusBadge};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, Searchable};
use crate::shared::modal::{confirm, Modal};
use crate::shared::toast::use_toast;
use contracts::domain::a003_supplier::aggregate::{Supplier, SupplierDto};
use contracts::domain::common::{remove_by_id, upsert_by_id, AggregateRoot};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::*;

impl Searchable for Supplier {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.base.code.as_str(),
            self.base.description.as_str(),
            self.tax_id.as_str(),
            self.contact_name.as_str(),
            self.supplied_category.as_deref().unwrap_or(""),
        ]
    }
}

#[component]
pub fn SupplierList() -> impl IntoView {
    let toasts = use_toast();
    let items = RwSignal::new(Vec::<Supplier>::new());
    let is_loading = RwSignal::new(false);
    let search = RwSignal::new(String::new());
    let editing = RwSignal::new(Option::<SupplierDto>::None);

    let fetch = move || {
        is_loading.set(true);
        spawn_local(async move {
            match model::fetch_all().await {
                Ok(v) => items.set(v),
                Err(e) => toasts.error(format!("Error al cargar proveedores: {}", e)),
            }
            is_loading.set(false);
        });
    };

    let visible = Signal::derive(move || items.with(|all| filter_list(all, &search.get())));

    let handle_delete = move |supplier: Supplier| {
        if !confirm(&format!("¿Eliminar el proveedor \"{}\"?", supplier.base.description)) {
            return;
        }
        spawn_local(async move {
            match model::delete_by_id(&supplier.to_string_id()).await {
                Ok(()) => {
                    items.update(|v| {
                        remove_by_id(v, &supplier.id());
                    });
                    toasts.success("Proveedor eliminado");
                }
                Err(e) => toasts.error(e),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <PageHeader title=Supplier::list_name() subtitle="Empresas que abastecen la tienda">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| editing.set(Some(SupplierDto::default()))
                >
                    {icon("plus")}
                    "Nuevo proveedor"
                </Button>
                <Button on_click=move |_| fetch() disabled=Signal::derive(move || is_loading.get())>
                    {icon("refresh")}
                    "Actualizar"
                </Button>
            </PageHeader>

            <div class="list-toolbar">
                {icon("search")}
                <Input value=search placeholder="Buscar por empresa, NIT, contacto o categoría"/>
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Código"</TableHeaderCell>
                        <TableHeaderCell>"Empresa"</TableHeaderCell>
                        <TableHeaderCell>"NIT"</TableHeaderCell>
                        <TableHeaderCell>"Contacto"</TableHeaderCell>
                        <TableHeaderCell>"Correo"</TableHeaderCell>
                        <TableHeaderCell>"Teléfono"</TableHeaderCell>
                        <TableHeaderCell>"Suministra"</TableHeaderCell>
                        <TableHeaderCell>"Estado"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = visible.get();
                        if rows.is_empty() {
                            let text = if is_loading.get() { "Cargando…" } else { "No hay proveedores" };
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="9">
                                        <TableCellLayout><span class="text-muted">{text}</span></TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }.into_any();
                        }
                        rows.into_iter().map(|row| {
                            let for_edit = SupplierDto::from(&row);
                            let for_delete = row.clone();
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{row.base.code.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{row.base.description.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{row.tax_id.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{row.contact_name.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{row.email.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{row.phone.clone().unwrap_or_default()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{row.supplied_category.clone().unwrap_or_else(|| "-".to_string())}</TableCellLayout></TableCell>
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
                let was_edit = dto.id.is_some();
                let title = if was_edit { "Editar proveedor" } else { "Nuevo proveedor" };
                view! {
                    <Modal title=title.to_string() on_close=Callback::new(move |_| editing.set(None))>
                        {
                            let on_saved: Rc<dyn Fn(Supplier)> = Rc::new(move |saved: Supplier| {
                                items.update(|v| {
                                    upsert_by_id(v, saved);
                                });
                                editing.set(None);
                                toasts.success(if was_edit { "Proveedor actualizado" } else { "Proveedor creado" });
                            });
                            let on_cancel: Rc<dyn Fn(())> = Rc::new(move |_| editing.set(None));
                            view! { <SupplierDetails initial=dto on_saved=on_saved on_cancel=on_cancel/> }
                        }
                    </Modal>
                }
            })}
        </div>
    }
}
