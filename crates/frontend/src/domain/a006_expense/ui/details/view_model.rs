use super::model;
use crate::shared::components::form_field::amount_input_value;
use crate::shared::date_utils::today_iso;
use crate::shared::toast::ToastService;
use contracts::domain::a006_expense::aggregate::{Expense, ExpenseDto};
use contracts::shared::money::parse_money;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct ExpenseDetailsViewModel {
    pub form: RwSignal<ExpenseDto>,
    pub amount_text: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    toasts: ToastService,
}

impl ExpenseDetailsViewModel {
    pub fn new(mut initial: ExpenseDto, toasts: ToastService) -> Self {
        if initial.id.is_none() && initial.expense_date.trim().is_empty() {
            initial.expense_date = today_iso();
        }
        Self {
            amount_text: RwSignal::new(amount_input_value(initial.amount)),
            form: RwSignal::new(initial),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            toasts,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(Expense)>) {
        let mut current = self.form.get_untracked();
        current.amount = parse_money(&self.amount_text.get_untracked()).unwrap_or(0.0);
        if let Err(message) = current.validate() {
            self.error.set(Some(message.clone()));
            self.toasts.error(message);
            return;
        }

        let vm = *self;
        vm.error.set(None);
        vm.saving.set(true);
        spawn_local(async move {
            match model::save_form(&current).await {
                Ok(saved) => on_saved(saved),
                Err(e) => {
                    vm.error.set(Some(e.clone()));
                    vm.toasts.error(e);
                }
            }
            vm.saving.set(false);
        });
    }
}
