use super::view_model::VendorDetailsViewModel;
use crate::shared::components::form_field::to_optional;
use crate::shared::components::{SelectField, TextAreaField, TextField};
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::domain::a004_vendor::aggregate::{Vendor, VendorDto};
use contracts::enums::RecordStatus;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn VendorDetails(
    initial: VendorDto,
    on_saved: Rc<dyn Fn(Vendor)>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = VendorDetailsViewModel::new(initial, use_toast());
    let form = vm.form;

    view! {
        <div class="details-form">
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="form-row">
                <TextField
                    label="Nombre"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.name = v))
                />
                <TextField
                    label="Documento"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.document_id.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.document_id = v))
                />
            </div>
            <div class="form-row">
                <TextField
                    label="Correo"
                    required=true
                    input_type="email"
                    value=Signal::derive(move || form.with(|f| f.email.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.email = v))
                />
                <TextField
                    label="Teléfono"
                    value=Signal::derive(move || form.with(|f| f.phone.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v| form.update(|f| f.phone = to_optional(v)))
                />
            </div>
            <div class="form-row">
                <TextField
                    label="Comisión (%)"
                    placeholder="5"
                    value=vm.commission_text
                    on_input=Callback::new(move |v| vm.commission_text.set(v))
                />
                <TextField
                    label="Fecha de ingreso"
                    input_type="date"
                    value=Signal::derive(move || form.with(|f| f.hire_date.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v| form.update(|f| f.hire_date = to_optional(v)))
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
