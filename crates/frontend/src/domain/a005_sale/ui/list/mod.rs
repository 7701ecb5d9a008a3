use crate::domain::a005_sale::ui::details::{model, SaleDetails};
use crate::shared::components::{PageHeader, TableCellMoney};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, Searchable};
use crate::shared::modal::{confirm, Modal};
use crate::shared::toast::use_toast;
use contracts::domain::a005_sale::aggregate::{Sale, SaleDto};
use contracts::domain::common::{remove_by_id, upsert_by_id, AggregateRoot};
use contracts::enums::SaleStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::*;

impl Searchable for Sale {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.base.code.as_str(),
            self.client_name.as_str(),
            self.vendor_name.as_str(),
            self.base.description.as_str(),
        ]
    }
}

#[component]
pub fn SaleStatusBadge(status: SaleStatus) -> impl IntoView {
    let color = match status {
        SaleStatus::Pending => BadgeColor::Warning,
        SaleStatus::Completed => BadgeColor::Success,
        SaleStatus::Cancelled => BadgeColor::Danger,
    };
    view! {
        <Badge color=color appearance=BadgeAppearance::Tint>{status.display_name()}</Badge>
    }
}

/// Rows passing the search box and the status select ("" = every status)
fn visible_sales(sales: &[Sale], search: &str, status_code: &str) -> Vec<Sale> {
    let status = SaleStatus::from_code(status_code);
    filter_list(sales, search)
        .into_iter()
        .filter(|s| status.map_or(true, |st| s.status == st))
        .collect()
}

#[component]
pub fn SaleList() -> impl IntoView {
    let toasts = use_toast();
    let items = RwSignal::new(Vec::<Sale>::new());
    let is_loading = RwSignal::new(false);
    let search = RwSignal::new(String::new());
    let status_filter = RwSignal::new(String::new());
    let editing = RwSignal::new(Option::<SaleDto>::None);

    let fetch = move || {
        is_loading.set(true);
        spawn_local(async move {
            match model::fetch_all().await {
                Ok(v) => items.set(v),
                Err(e) => toasts.error(format!("Error al cargar ventas: {}", e)),
            }
            is_loading.set(false);
        });
    };

    let visible = Signal::derive(move || {
        items.with(|all| visible_sales(all, &search.get(), &status_filter.get()))
    });

    let handle_delete = move |sale: Sale| {
        if !confirm(&format!("¿Eliminar la venta {}?", sale.base.code)) {
            return;
        }
        spawn_local(async move {
            match model::delete_by_id(&sale.to_string_id()).await {
                Ok(()) => {
                    items.update(|v| {
                        remove_by_id(v, &sale.id());
                    });
                    toasts.success("Venta eliminada");
                }
                Err(e) => toasts.error(e),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <PageHeader title="Gestión de ventas" icon_name="shopping-cart" subtitle="Registro de ventas de la tienda">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| editing.set(Some(SaleDto::default()))
                >
                    {icon("plus")}
                    "Nueva venta"
                </Button>
                <Button on_click=move |_| fetch() disabled=Signal::derive(move || is_loading.get())>
                    {icon("refresh")}
                    "Actualizar"
                </Button>
            </PageHeader>

            <div class="list-toolbar">
                {icon("search")}
                <Input value=search placeholder="Buscar por código, cliente, vendedor o productos"/>
                <Select value=status_filter>
                    <option value="">"Todos los estados"</option>
                    {SaleStatus::all().into_iter().map(|s| view! {
                        <option value=s.code()>{s.display_name()}</option>
                    }).collect_view()}
                </Select>
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Código"</TableHeaderCell>
                        <TableHeaderCell>"Fecha"</TableHeaderCell>
                        <TableHeaderCell>"Cliente"</TableHeaderCell>
                        <TableHeaderCell>"Vendedor"</TableHeaderCell>
                        <TableHeaderCell>"Productos"</TableHeaderCell>
                        <TableHeaderCell>"Total"</TableHeaderCell>
                        <TableHeaderCell>"Pago"</TableHeaderCell>
                        <TableHeaderCell>"Estado"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = visible.get();
                        if rows.is_empty() {
                            let text = if is_loading.get() { "Cargando…" } else { "No hay ventas" };
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="9">
                                        <TableCellLayout><span class="text-muted">{text}</span></TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }.into_any();
                        }
                        rows.into_iter().map(|row| {
                            let for_edit = SaleDto::from(&row);
                            let for_delete = row.clone();
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{row.base.code.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{format_date(&row.sale_date)}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{row.client_name.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{row.vendor_name.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{row.base.description.clone()}</TableCellLayout></TableCell>
                                    <TableCellMoney value=row.total/>
                                    <TableCell><TableCellLayout>{row.payment_method.display_name()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout><SaleStatusBadge status=row.status/></TableCellLayout></TableCell>
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
                let title = match &dto.code {
                    Some(code) if was_edit => format!("Editar venta {}", code),
                    _ => "Nueva venta".to_string(),
                };
                view! {
                    <Modal title=title on_close=Callback::new(move |_| editing.set(None))>
                        {
                            let on_saved: Rc<dyn Fn(Sale)> = Rc::new(move |saved: Sale| {
                                items.update(|v| {
                                    upsert_by_id(v, saved);
                                });
                                editing.set(None);
                                toasts.success(if was_edit { "Venta actualizada" } else { "Venta registrada" });
                            });
                            let on_cancel: Rc<dyn Fn(())> = Rc::new(move |_| editing.set(None));
                            view! { <SaleDetails initial=dto on_saved=on_saved on_cancel=on_cancel/> }
                        }
                    </Modal>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::PaymentMethod;

    fn sale(client: &str, status: SaleStatus) -> Sale {
        Sale::new_for_insert(
            "VTA-0001".into(),
            &SaleDto {
                sale_date: "2024-03-01".into(),
                client_name: client.into(),
                vendor_name: "Laura Martínez".into(),
                items_description: "Arroz".into(),
                total: 10_000.0,
                payment_method: PaymentMethod::Cash,
                status,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_visible_sales_combines_search_and_status() {
        let sales = vec![
            sale("María González", SaleStatus::Completed),
            sale("María González", SaleStatus::Cancelled),
            sale("Juan Pérez", SaleStatus::Completed),
        ];
        assert_eq!(visible_sales(&sales, "", "").len(), 3);
        assert_eq!(visible_sales(&sales, "maría", "").len(), 2);
        assert_eq!(visible_sales(&sales, "maría", "anulada").len(), 1);
        assert_eq!(visible_sales(&sales, "", "completada").len(), 2);
    }
}
