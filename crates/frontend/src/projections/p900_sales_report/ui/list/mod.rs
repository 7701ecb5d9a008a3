use crate::domain::a005_sale::ui::list::SaleStatusBadge;
use crate::projections::p900_sales_report::api;
use crate::shared::components::{PageHeader, StatCard, TableCellMoney};
use crate::shared::date_utils::{format_date, month_start_iso, today_iso};
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::enums::SaleStatus;
use contracts::projections::p900_sales_report::dto::SalesReportResponse;
use contracts::shared::money::format_money;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn SalesReportList() -> impl IntoView {
    let toasts = use_toast();
    let date_from = RwSignal::new(String::new());
    let date_to = RwSignal::new(String::new());
    let vendor_name = RwSignal::new(String::new());
    let client_name = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());

    let report = RwSignal::new(Option::<SalesReportResponse>::None);
    let is_loading = RwSignal::new(false);

    let load = move || {
        let request = api::build_request(
            date_from.get_untracked(),
            date_to.get_untracked(),
            vendor_name.get_untracked(),
            client_name.get_untracked(),
            &status.get_untracked(),
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

    let clear_filters = move || {
        for s in [date_from, date_to, vendor_name, client_name, status] {
            s.set(String::new());
        }
        load();
    };

    let this_month = move || {
        date_from.set(month_start_iso());
        date_to.set(today_iso());
        load();
    };

    let summary_value = move |f: fn(&SalesReportResponse) -> String| {
        Signal::derive(move || report.with(|r| r.as_ref().map(f)))
    };

    load();

    view! {
        <div class="page">
            <PageHeader title="Reporte de ventas" icon_name="bar-chart" subtitle="Ventas por período, vendedor, cliente y estado">
                <Button on_click=move |_| this_month()>
                    "Este mes"
                </Button>
                <Button on_click=move |_| clear_filters()>
                    "Limpiar filtros"
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
                    <label>"Vendedor"</label>
                    <Input value=vendor_name placeholder="Nombre del vendedor"/>
                </div>
                <div class="form-group">
                    <label>"Cliente"</label>
                    <Input value=client_name placeholder="Nombre del cliente"/>
                </div>
                <div class="form-group">
                    <label>"Estado"</label>
                    <Select value=status>
                        <option value="">"Todos"</option>
                        {SaleStatus::all().into_iter().map(|s| view! {
                            <option value=s.code()>{s.display_name()}</option>
                        }).collect_view()}
                    </Select>
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
                <StatCard label="Ventas" icon_name="shopping-cart"
                    value=summary_value(|r| r.summary.sales_count.to_string())/>
                <StatCard label="Anuladas" icon_name="x"
                    value=summary_value(|r| r.summary.cancelled_count.to_string())/>
                <StatCard label="Total vendido" icon_name="wallet"
                    value=summary_value(|r| format!("$ {}", format_money(r.summary.total_amount)))/>
                <StatCard label="Ticket promedio" icon_name="bar-chart"
                    value=summary_value(|r| format!("$ {}", format_money(r.summary.average_ticket)))/>
            </div>
            <p class="text-muted">"Las ventas anuladas se listan pero no suman en los totales."</p>

            <div class="report-breakdowns">
                <div class="report-breakdown">
                    <h3>"Por método de pago"</h3>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Método"</TableHeaderCell>
                                <TableHeaderCell>"Ventas"</TableHeaderCell>
                                <TableHeaderCell>"Total"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || report.with(|r| {
                                r.as_ref().map(|r| r.summary.by_payment_method.clone()).unwrap_or_default()
                            }).into_iter().map(|row| view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{row.payment_method.display_name()}</TableCellLayout></TableCell>
                                    <TableCell class="table__cell--right"><TableCellLayout>{row.sales_count}</TableCellLayout></TableCell>
                                    <TableCellMoney value=row.total_amount/>
                                </TableRow>
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>
                <div class="report-breakdown">
                    <h3>"Por vendedor"</h3>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Vendedor"</TableHeaderCell>
                                <TableHeaderCell>"Ventas"</TableHeaderCell>
                                <TableHeaderCell>"Total"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || report.with(|r| {
                                r.as_ref().map(|r| r.summary.by_vendor.clone()).unwrap_or_default()
                            }).into_iter().map(|row| view! {
                                <TableRow>
                                    <TableCell><TableCellLayout truncate=true>{row.vendor_name}</TableCellLayout></TableCell>
                                    <TableCell class="table__cell--right"><TableCellLayout>{row.sales_count}</TableCellLayout></TableCell>
                                    <TableCellMoney value=row.total_amount/>
                                </TableRow>
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>
            </div>

            <h3>"Detalle"</h3>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Código"</TableHeaderCell>
                        <TableHeaderCell>"Fecha"</TableHeaderCell>
                        <TableHeaderCell>"Cliente"</TableHeaderCell>
                        <TableHeaderCell>"Vendedor"</TableHeaderCell>
                        <TableHeaderCell>"Pago"</TableHeaderCell>
                        <TableHeaderCell>"Estado"</TableHeaderCell>
                        <TableHeaderCell>"Total"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = report.with(|r| r.as_ref().map(|r| r.items.clone()).unwrap_or_default());
                        if rows.is_empty() {
                            let text = if is_loading.get() { "Cargando…" } else { "Sin ventas para los filtros elegidos" };
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="7">
                                        <TableCellLayout><span class="text-muted">{text}</span></TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }.into_any();
                        }
                        rows.into_iter().map(|row| view! {
                            <TableRow class=if row.status == SaleStatus::Cancelled { "table__row--muted" } else { "" }>
                                <TableCell><TableCellLayout>{row.base.code.clone()}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{format_date(&row.sale_date)}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout truncate=true>{row.client_name.clone()}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout truncate=true>{row.vendor_name.clone()}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{row.payment_method.display_name()}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout><SaleStatusBadge status=row.status/></TableCellLayout></TableCell>
                                <TableCellMoney value=row.total/>
                            </TableRow>
                        }).collect_view().into_any()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}
