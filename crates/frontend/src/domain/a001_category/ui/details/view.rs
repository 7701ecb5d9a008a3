use super::view_model::CategoryDetailsViewModel;
use crate::shared::components::form_field::to_optional;
use crate::shared::components::{SelectField, TextAreaField, TextField};
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::domain::a001_category::aggregate::{Category, CategoryDto};
use contracts::enums::RecordStatus;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn CategoryDetails(
    initial: CategoryDto,
    on_saved: Rc<dyn Fn(Category)>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = CategoryDetailsViewModel::new(initial, use_toast());
    let code = vm.form.with_untracked(|f| f.code.clone());

    view! {
        <div class="details-form">
            {code.map(|c| view! { <div class="details-form__code">{c}</div> })}

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <TextField
                label="Nombre"
                required=true
                placeholder="Ej. Bebidas"
                value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                on_input=Callback::new(move |v| vm.form.update(|f| f.name = v))
            />
            <TextAreaField
                label="Descripción"
                value=Signal::derive(move || vm.form.with(|f| f.description.clone().unwrap_or_default()))
                on_input=Callback::new(move |v| vm.form.update(|f| f.description = to_optional(v)))
            />
            <SelectField
                label="Estado"
                options=RecordStatus::all().into_iter().map(|s| (s.code(), s.display_name())).collect()
                value=Signal::derive(move || vm.form.with(|f| f.status.code().to_string()))
                on_change=Callback::new(move |v: String| {
                    vm.form.update(|f| f.status = RecordStatus::from_code(&v).unwrap_or_default())
                })
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
