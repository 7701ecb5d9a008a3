use super::view_model::SupplierDetailsViewModel;
use crate::shared::components::form_field::to_optional;
use crate::shared::components::{SelectField, TextAreaField, TextField};
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::domain::a003_supplier::aggregate::{Supplier, SupplierDto};
use contracts::enums::RecordStatus;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn SupplierDetails(
    initial: SupplierDto,
    on_saved: Rc<dyn Fn(Supplier)>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = SupplierDetailsViewModel::new(initial, use_toast());
    let form = vm.form;

    view! {
        <div class="details-form">
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="form-row">
                <TextField
                    label="Empresa"
                    required=true
                    placeholder="Razón social"
                    value=Signal::derive(move || form.with(|f| f.company_name.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.company_name = v))
                />
                <TextField
                    label="NIT"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.tax_id.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.tax_id = v))
                />
            </div>
            <div class="form-row">
                <TextField
                    label="Contacto"
                    required=true
                    placeholder="Persona de contacto"
                    value=Signal::derive(move || form.with(|f| f.contact_name.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.contact_name = v))
                />
                <TextField
                    label="Correo"
                    required=true
                    input_type="email"
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
                    label="Categoría que suministra"
                    placeholder="Ej. Bebidas"
                    value=Signal::derive(move || form.with(|f| f.supplied_category.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v| form.update(|f| f.supplied_category = to_optional(v)))
                />
            </div>
            <TextField
                label="Dirección"
                value=Signal::derive(move || form.with(|f| f.address.clone().unwrap_or_default()))
                on_input=Callback::new(move |v| form.update(|f| f.address = to_optional(v)))
            />
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
