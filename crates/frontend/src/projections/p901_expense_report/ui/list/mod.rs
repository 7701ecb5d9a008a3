use crate::domain::a006_expense::ui::details::{model, ExpenseDetails};
use crate::projections::p901_expense_report::api;
use crate::shared::components::{PageHeader, StatCard, TableCellMoney};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::modal::{confirm, Modal};
use crate::shared::toast::use_toast;
use contracts::domain::a006_expense::aggregate::{Expense, ExpenseDto};
use contracts::enums::ExpenseCategory;
use contracts::projections::p901_expense_report::dto::ExpenseReportResponse;
use contracts::shared::money::format_money;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::*;

/// Expense report ("reporte de salidas") with create, edit and delete of
/// the listed expenses
#[component]
pub fn ExpenseReportList() -> impl IntoView {
    let toasts = use_toast();
    let date_from = RwSignal::new(String::new());
    let date_to = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let concept = RwSignal::new(String::new());

    let report = RwSignal::new(Option::<ExpenseReportResponse>::None);
    let is_loading = RwSignal::new(false);
    let editing = RwSignal::new(Option::<ExpenseDto>::None);

    let load = move || {
        let request = api::build_request(
            date_from.get_untracked(),
            date_to.get_untracked(),
            &category.get_untracked(),
            concept.get_untracked(),
        );
        is_loading.set(true);
        spawn_local(async move {
            match api::fetch_report(&request).await {
                Ok(r) => report.set(Some(r)),
                Err(e) => toasts.error(format!("Error al generar el reporte: {}", e)),
            }
            is_loading.set(false);
        });
    };

    let handle_delete = move |expense: Expense| {
        if !confirm(&format!("¿Eliminar la salida \"{}\"?", expense.base.description)) {
            return;
        }
        spawn_local(async move {
            match model::delete_by_id(&expense.to_string_id()).await {
                Ok(()) => {
                    toasts.success("Salida eliminada");
                    load();
                }
                Err(e) => toasts.error(e),
            }
        });
    };

    load();

    view! {
        <div class="page">
            <PageHeader title="Reporte de salidas" icon_name="file-minus" subtitle="Gastos de la tienda por período y categoría">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| editing.set(Some(ExpenseDto::default()))
                >
                    {icon("plus")}
                    "Nueva salida"
                </Button>
            </PageHeader>

            <div class="filter-panel">
                <div class="form-group">
                    <label>"Desde"</label>
                    <input type="date" class="form-input"
                        prop:value=move || date_from.get()
                        on:input=move |ev| date_from.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Hasta"</label>
                    <input type="date" class="form-input"
                        prop:value=move || date_to.get()
                        on:input=move |ev| date_to.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Categoría"</label>
                    <Select value=category>
                        <option value="">"Todas"</option>
                        {ExpenseCategory::all().into_iter().map(|c| view! {
                            <option value=c.code()>{c.display_name()}</option>
                        }).collect_view()}
                    </Select>
                </div>
                <div class="form-group">
                    <label>"Concepto"</label>
                    <Input value=concept placeholder="Buscar en el concepto"/>
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| load()
                    disabled=Signal::derive(move || is_loading.get())
                >
                    {icon("filter")}
                    "Generar"
                </Button>
            </div>

            <div class="stat-cards">
                <StatCard label="Salidas" icon_name="file-minus"
                    value=Signal::derive(move || report.with(|r| r.as_ref().map(|r| r.summary.expense_count.to_string())))/>
                <StatCard label="Total gastado" icon_name="wallet"
                    value=Signal::derive(move || report.with(|r| r.as_ref().map(|r| format!("$ {}", format_money(r.summary.total_amount)))))/>
            </div>

            <div class="report-breakdown">
                <h3>"Por categoría"</h3>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Categoría"</TableHeaderCell>
                            <TableHeaderCell>"Salidas"</TableHeaderCell>
                            <TableHeaderCell>"Total"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || report.with(|r| {
                            r.as_ref().map(|r| r.summary.by_category.clone()).unwrap_or_default()
                        }).into_iter().map(|row| view! {
                            <TableRow>
                                <TableCell><TableCellLayout>{row.category.display_name()}</TableCellLayout></TableCell>
                                <TableCell class="table__cell--right"><TableCellLayout>{row.expense_count}</TableCellLayout></TableCell>
                                <TableCellMoney value=row.total_amount/>
                            </TableRow>
                        }).collect_view()}
                    </TableBody>
                </Table>
            </div>

            <h3>"Detalle"</h3>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Código"</TableHeaderCell>
                        <TableHeaderCell>"Fecha"</TableHeaderCell>
                        <TableHeaderCell>"Concepto"</TableHeaderCell>
                        <TableHeaderCell>"Categoría"</TableHeaderCell>
                        <TableHeaderCell>"Pago"</TableHeaderCell>
                        <TableHeaderCell>"Responsable"</TableHeaderCell>
                        <TableHeaderCell>"Monto"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = report.with(|r| r.as_ref().map(|r| r.items.clone()).unwrap_or_default());
                        if rows.is_empty() {
                            let text = if is_loading.get() { "Cargando…" } else { "Sin salidas para los filtros elegidos" };
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="8">
                                        <TableCellLayout><span class="text-muted">{text}</span></TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }.into_any();
                        }
                        rows.into_iter().map(|row| {
                            let for_edit = ExpenseDto::from(&row);
                            let for_delete = row.clone();
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{row.base.code.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{format_date(&row.expense_date)}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{row.base.description.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{row.category.display_name()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{row.payment_method.display_name()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{row.responsible.clone()}</TableCellLayout></TableCell>
                                    <TableCellMoney value=row.amount/>
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
                let title = if was_edit { "Editar salida" } else { "Nueva salida" };
                view! {
                    <Modal title=title.to_string() on_close=Callback::new(move |_| editing.set(None))>
                        {
                            // Summary rows come from the server
                            let on_saved: Rc<dyn Fn(Expense)> = Rc::new(move |_saved: Expense| {
                                editing.set(None);
                                toasts.success(if was_edit { "Salida actualizada" } else { "Salida registrada" });
                                load();
                            });
                            let on_cancel: Rc<dyn Fn(())> = Rc::new(move |_| editing.set(None));
                            view! { <ExpenseDetails initial=dto on_saved=on_saved on_cancel=on_cancel/> }
                        }
                    </Modal>
                }
            })}
        </div>
    }
}
