use crate::domain::a004_vendor::ui::details::{model, VendorDetails};
use crate::shared::components::{PageHeader, StatusBadge, TableCellMoney};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, Searchable};
use crate::shared::modal::{confirm, Modal};
use crate::shared::toast::use_toast;
use contracts::domain::a004_vendor::aggregate::{Vendor, VendorDto};
use contracts::domain::common::{remove_by_id, upsert_by_id, AggregateRoot};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::*;

impl Searchable for Vendor {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.base.code.as_str(),
            self.base.description.as_str(),
            self.document_id.as_str(),
            self.email.as_str(),
        ]
    }
}

#[component]
pub fn VendorList() -> impl IntoView {
    let toasts = use_toast();
    let items = RwSignal::new(Vec::<Vendor>::new());
    let is_loading = RwSignal::new(false);
    let search = RwSignal::new(String::new());
    let editing = RwSignal::new(Option::<VendorDto>::None);

    let fetch = move || {
        is_loading.set(true);
        spawn_local(async move {
            match model::fetch_all().await {
                Ok(v) => items.set(v),
                Err(e) => toasts.error(format!("Error al cargar vendedores: {}", e)),
            }
            is_loading.set(false);
        });
    };

    let visible = Signal::derive(move || items.with(|all| filter_list(all, &search.get())));
    let team_total = Signal::derive(move || {
        visible.with(|rows| rows.iter().map(|v| v.total_sales).sum::<f64>())
    });

    let handle_delete = move |vendor: Vendor| {
        if !confirm(&format!("¿Eliminar el vendedor \"{}\"?", vendor.base.description)) {
            return;
        }
        spawn_local(async move {
            match model::delete_by_id(&vendor.to_string_id()).await {
                Ok(()) => {
                    items.update(|v| {
                        remove_by_id(v, &vendor.id());
                    });
                    toasts.success("Vendedor eliminado");
                }
                Err(e) => toasts.error(e),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <PageHeader title=Vendor::list_name() subtitle="Equipo de ventas, comisiones y ventas acumuladas">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| editing.set(Some(VendorDto::default()))
                >
                    {icon("plus")}
                    "Nuevo vendedor"
                </Button>
                <Button on_click=move |_| fetch() disabled=Signal::derive(move || is_loading.get())>
                    {icon("refresh")}
                    "Actualizar"
                </Button>
            </PageHeader>

            <div class="list-toolbar">
                {icon("search")}
                <Input value=search placeholder="Buscar por nombre, documento o correo"/>
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Código"</TableHeaderCell>
                        <TableHeaderCell>"Nombre"</TableHeaderCell>
                        <TableHeaderCell>"Documento"</TableHeaderCell>
                        <TableHeaderCell>"Correo"</TableHeaderCell>
                        <TableHeaderCell>"Comisión"</TableHeaderCell>
                        <TableHeaderCell>"Ingreso"</TableHeaderCell>
                        <TableHeaderCell>"Ventas"</TableHeaderCell>
                        <TableHeaderCell>"Estado"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = visible.get();
                        if rows.is_empty() {
                            let text = if is_loading.get() { "Cargando…" } else { "No hay vendedores" };
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="9">
                                        <TableCellLayout><span class="text-muted">{text}</span></TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }.into_any();
                        }
                        rows.into_iter().map(|row| {
                            let for_edit = VendorDto::from(&row);
                            let for_delete = row.clone();
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{row.base.code.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{row.base.description.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{row.document_id.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{row.email.clone()}</TableCellLayout></TableCell>
                                    <TableCell class="table__cell--right">
                                        <TableCellLayout>{format!("{}%", row.commission_rate)}</TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{format_date(&row.hire_date)}</TableCellLayout></TableCell>
                                    <TableCellMoney value=row.total_sales/>
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
                    <TableRow class="table__totals-row">
                        <TableCell attr:colspan="6"><TableCellLayout>"Total del equipo"</TableCellLayout></TableCell>
                        {move || view! { <TableCellMoney value=team_total.get() bold=true/> }}
                        <TableCell attr:colspan="2"><TableCellLayout>""</TableCellLayout></TableCell>
                    </TableRow>
                </TableBody>
            </Table>

            {move || editing.get().map(|dto| {
                let was_edit = dto.id.is_some();
                let title = if was_edit { "Editar vendedor" } else { "Nuevo vendedor" };
                view! {
                    <Modal title=title.to_string() on_close=Callback::new(move |_| editing.set(None))>
                        {
                            let on_saved: Rc<dyn Fn(Vendor)> = Rc::new(move |saved: Vendor| {
                                items.update(|v| {
                                    upsert_by_id(v, saved);
                                });
                                editing.set(None);
                                toasts.success(if was_edit { "Vendedor actualizado" } else { "Vendedor creado" });
                            });
                            let on_cancel: Rc<dyn Fn(())> = Rc::new(move |_| editing.set(None));
                            view! { <VendorDetails initial=dto on_saved=on_saved on_cancel=on_cancel/> }
                        }
                    </Modal>
                }
            })}
        </div>
    }
}
