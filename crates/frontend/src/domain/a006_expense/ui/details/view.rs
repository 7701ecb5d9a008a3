use super::view_model::ExpenseDetailsViewModel;
use crate::shared::components::form_field::to_optional;
use crate::shared::components::{SelectField, TextAreaField, TextField};
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::domain::a006_expense::aggregate::{Expense, ExpenseDto};
use contracts::enums::{ExpenseCategory, PaymentMethod};
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn ExpenseDetails(
    initial: ExpenseDto,
    on_saved: Rc<dyn Fn(Expense)>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = ExpenseDetailsViewModel::new(initial, use_toast());
    let form = vm.form;

    view! {
        <div class="details-form">
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="form-row">
                <TextField
                    label="Fecha"
                    required=true
                    input_type="date"
                    value=Signal::derive(move || form.with(|f| f.expense_date.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.expense_date = v))
                />
                <TextField
                    label="Monto"
                    required=true
                    placeholder="0"
                    value=vm.amount_text
                    on_input=Callback::new(move |v| vm.amount_text.set(v))
                />
            </div>
            <TextField
                label="Concepto"
                required=true
                placeholder="Ej. Pago de energía"
                value=Signal::derive(move || form.with(|f| f.concept.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.concept = v))
            />
            <div class="form-row">
                <SelectField
                    label="Categoría"
                    options=ExpenseCategory::all().into_iter().map(|c| (c.code(), c.display_name())).collect()
                    value=Signal::derive(move || form.with(|f| f.category.code().to_string()))
                    on_change=Callback::new(move |v: String| {
                        form.update(|f| f.category = ExpenseCategory::from_code(&v).unwrap_or_default())
                    })
                />
                <SelectField
                    label="Método de pago"
                    options=PaymentMethod::all().into_iter().map(|p| (p.code(), p.display_name())).collect()
                    value=Signal::derive(move || form.with(|f| f.payment_method.code().to_string()))
                    on_change=Callback::new(move |v: String| {
                        form.update(|f| f.payment_method = PaymentMethod::from_code(&v).unwrap_or_default())
                    })
                />
            </div>
            <TextField
                label="Responsable"
                required=true
                value=Signal::derive(move || form.with(|f| f.responsible.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.responsible = v))
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
                {move || if vm.is_edit_mode() { "Guardar" } else { "Registrar salida" }}
            </button>
            <button class="btn btn-secondary" on:click=move |_| on_cancel(())>
                "Cancelar"
            </button>
        </div>
    }
}
