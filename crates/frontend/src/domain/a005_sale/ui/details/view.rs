use super::view_model::SaleDetailsViewModel;
use crate::shared::components::form_field::to_optional;
use crate::shared::components::{SelectField, TextAreaField, TextField};
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::domain::a005_sale::aggregate::{Sale, SaleDto};
use contracts::enums::{PaymentMethod, SaleStatus};
use leptos::prelude::*;
use std::rc::Rc;

/// Text input bound to a `<datalist>` of suggestions
#[component]
fn NameInput(
    label: &'static str,
    list_id: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    suggestions: RwSignal<Vec<String>>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label class="form-group__label--required">{label}</label>
            <input
                type="text"
                class="form-input"
                list=list_id
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <datalist id=list_id>
                <For
                    each=move || suggestions.get()
                    key=|name| name.clone()
                    children=|name| view! { <option value=name/> }
                />
            </datalist>
        </div>
    }
}

#[component]
pub fn SaleDetails(
    initial: SaleDto,
    on_saved: Rc<dyn Fn(Sale)>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = SaleDetailsViewModel::new(initial, use_toast());
    vm.load_suggestions();
    let form = vm.form;

    view! {
        <div class="details-form">
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="form-row">
                <TextField
                    label="Fecha"
                    required=true
                    input_type="date"
                    value=Signal::derive(move || form.with(|f| f.sale_date.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.sale_date = v))
                />
                <TextField
                    label="Total"
                    required=true
                    placeholder="0"
                    value=vm.total_text
                    on_input=Callback::new(move |v| vm.total_text.set(v))
                />
            </div>
            <div class="form-row">
                <NameInput
                    label="Cliente"
                    list_id="sale-client-names"
                    value=Signal::derive(move || form.with(|f| f.client_name.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.client_name = v))
                    suggestions=vm.client_names
                />
                <NameInput
                    label="Vendedor"
                    list_id="sale-vendor-names"
                    value=Signal::derive(move || form.with(|f| f.vendor_name.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.vendor_name = v))
                    suggestions=vm.vendor_names
                />
            </div>
            <TextAreaField
                label="Productos"
                placeholder="Ej. 2x Arroz 1kg, 1x Aceite 1L"
                value=Signal::derive(move || form.with(|f| f.items_description.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.items_description = v))
            />
            <div class="form-row">
                <SelectField
                    label="Método de pago"
                    options=PaymentMethod::all().into_iter().map(|p| (p.code(), p.display_name())).collect()
                    value=Signal::derive(move || form.with(|f| f.payment_method.code().to_string()))
                    on_change=Callback::new(move |v: String| {
                        form.update(|f| f.payment_method = PaymentMethod::from_code(&v).unwrap_or_default())
                    })
                />
                <SelectField
                    label="Estado"
                    options=SaleStatus::all().into_iter().map(|s| (s.code(), s.display_name())).collect()
                    value=Signal::derive(move || form.with(|f| f.status.code().to_string()))
                    on_change=Callback::new(move |v: String| {
                        form.update(|f| f.status = SaleStatus::from_code(&v).unwrap_or_default())
                    })
                />
            </div>
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
                {move || if vm.is_edit_mode() { "Guardar" } else { "Registrar venta" }}
            </button>
            <button class="btn btn-secondary" on:click=move |_| on_cancel(())>
                "Cancelar"
            </button>
        </div>
    }
}
