use super::view_model::ClientDetailsViewModel;
use crate::shared::components::form_field::to_optional;
use crate::shared::components::{SelectField, TextAreaField, TextField};
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::domain::a002_client::aggregate::{Client, ClientDto};
use contracts::enums::{ClientType, RecordStatus};
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn ClientDetails(
    initial: ClientDto,
    on_saved: Rc<dyn Fn(Client)>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = ClientDetailsViewModel::new(initial, use_toast());
    let form = vm.form;

    view! {
        <div class="details-form">
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="form-row">
                <TextField
                    label="Nombre"
                    required=true
                    placeholder="Nombre o razón social"
                    value=Signal::derive(move || form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.name = v))
                />
                <SelectField
                    label="Tipo"
                    options=ClientType::all().into_iter().map(|t| (t.code(), t.display_name())).collect()
                    value=Signal::derive(move || form.with(|f| f.client_type.code().to_string()))
                    on_change=Callback::new(move |v: String| {
                        form.update(|f| f.client_type = ClientType::from_code(&v).unwrap_or_default())
                    })
                />
            </div>
            <div class="form-row">
                <TextField
                    label="Documento"
                    required=true
                    placeholder="Cédula o NIT"
                    value=Signal::derive(move || form.with(|f| f.document_id.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.document_id = v))
                />
                <TextField
                    label="Correo"
                    required=true
                    input_type="email"
                    placeholder="cliente@correo.com"
                    value=Signal::derive(move || form.with(|f| f.email.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.email = v))
                />
            </div>
            <div class="form-row">
                <TextField
                    label="Teléfono"
                    value=Signal::derive(move || form.with(|f| f.phone.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v| form.update(|f| f.phone = to_optional(v)))
                />
                <TextField
                    label="Dirección"
                    value=Signal::derive(move || form.with(|f| f.address.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v| form.update(|f| f.address = to_optional(v)))
                />
            </div>
            <SelectField
                label="Estado"
                options=RecordStatus::all().into_iter().map(|s| (s.code(), s.display_name())).collect()
                value=Signal::derive(move || form.with(|f| f.status.code().to_string()))
                on_change=Callback::new(move |v: String| {
                    form.update(|f| f.status = RecordStatus::from_code(&v).unwrap_or_default())
                })
            />
            <TextAreaField
                label="Comentario"
                value=Signal::derive(move || form.with(|f| f.comment.clone().unwrap_or_default()))
                on_input=Callback::new(move |v| form.update(|f| f.comment = to_optional(v)))
            />
        </div>

        <div class="details-actions">
            <button
                class="btn btn-primary"
                disabled=move || vm.saving.get()
                on:click=move |_| vm.save_command(on_saved.clone())
            >
                {icon("save")}
                {move || if vm.is_edit_mode() { "Guardar" } else { "Crear" }}
            </button>
            <button class="btn btn-secondary" on:click=move |_| on_cancel(())>
                "Cancelar"
            </button>
        </div>
    }
}
