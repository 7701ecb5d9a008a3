use crate::domain::a002_client::ui::details::{model, ClientDetails};
use crate::shared::components::{PageHeader, StatusBadge, TableCellMoney};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, Searchable};
use crate::shared::modal::{confirm, Modal};
use crate::shared::toast::use_toast;
use contracts::domain::a002_client::aggregate::{Client, ClientDto};
use contracts::domain::common::{remove_by_id, upsert_by_id, AggregateRoot};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::*;

impl Searchable for Client {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.base.code.as_str(),
            self.base.description.as_str(),
            self.document_id.as_str(),
            self.email.as_str(),
            self.phone.as_deref().unwrap_or(""),
        ]
    }
}

#[component]
pub fn ClientList() -> impl IntoView {
    let toasts = use_toast();
    let items = RwSignal::new(Vec::<Client>::new());
    let is_loading = RwSignal::new(false);
    let search = RwSignal::new(String::new());
    let editing = RwSignal::new(Option::<ClientDto>::None);

    let fetch = move || {
        is_loading.set(true);
        spawn_local(async move {
            match model::fetch_all().await {
                Ok(v) => items.set(v),
                Err(e) => toasts.error(format!("Error al cargar clientes: {}", e)),
            }
            is_loading.set(false);
        });
    };

    let visible = Signal::derive(move || items.with(|all| filter_list(all, &search.get())));

    let handle_delete = move |client: Client| {
        if !confirm(&format!("¿Eliminar el cliente \"{}\"?", client.base.description)) {
            return;
        }
        spawn_local(async move {
            match model::delete_by_id(&client.to_string_id()).await {
                Ok(()) => {
                    items.update(|v| {
                        remove_by_id(v, &client.id());
                    });
                    toasts.success("Cliente eliminado");
                }
                Err(e) => toasts.error(e),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <PageHeader title=Client::list_name() subtitle="Personas y empresas que compran en la tienda">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| editing.set(Some(ClientDto::default()))
                >
                    {icon("plus")}
                    "Nuevo cliente"
                </Button>
                <Button on_click=move |_| fetch() disabled=Signal::derive(move || is_loading.get())>
                    {icon("refresh")}
                    "Actualizar"
                </Button>
            </PageHeader>

            <div class="list-toolbar">
                {icon("search")}
                <Input value=search placeholder="Buscar por nombre, documento, correo o teléfono"/>
                <span class="list-toolbar__count">
                    {move || format!("{} de {}", visible.with(Vec::len), items.with(Vec::len))}
                </span>
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Código"</TableHeaderCell>
                        <TableHeaderCell>"Nombre"</TableHeaderCell>
                        <TableHeaderCell>"Tipo"</TableHeaderCell>
                        <TableHeaderCell>"Documento"</TableHeaderCell>
                        <TableHeaderCell>"Correo"</TableHeaderCell>
                        <TableHeaderCell>"Teléfono"</TableHeaderCell>
                        <TableHeaderCell>"Total compras"</TableHeaderCell>
                        <TableHeaderCell>"Estado"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = visible.get();
                        if rows.is_empty() {
                            let text = if is_loading.get() { "Cargando…" } else { "No hay clientes" };
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="9">
                                        <TableCellLayout><span class="text-muted">{text}</span></TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }.into_any();
                        }
                        rows.into_iter().map(|row| {
                            let for_edit = ClientDto::from(&row);
                            let for_delete = row.clone();
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{row.base.code.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{row.base.description.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{row.client_type.display_name()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{row.document_id.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{row.email.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{row.phone.clone().unwrap_or_default()}</TableCellLayout></TableCell>
                                    <TableCellMoney value=row.total_purchases/>
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
                let title = if was_edit { "Editar cliente" } else { "Nuevo cliente" };
                view! {
                    <Modal title=title.to_string() on_close=Callback::new(move |_| editing.set(None))>
                        {
                            let on_saved: Rc<dyn Fn(Client)> = Rc::new(move |saved: Client| {
                                items.update(|v| {
                                    upsert_by_id(v, saved);
                                });
                                editing.set(None);
                                toasts.success(if was_edit { "Cliente actualizado" } else { "Cliente creado" });
                            });
                            let on_cancel: Rc<dyn Fn(())> = Rc::new(move |_| editing.set(None));
                            view! { <ClientDetails initial=dto on_saved=on_saved on_cancel=on_cancel/> }
                        }
                    </Modal>
                }
            })}
        </div>
    }
}
