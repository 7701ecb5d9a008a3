use super::model;
use crate::shared::components::form_field::amount_input_value;
use crate::shared::date_utils::today_iso;
use crate::shared::toast::ToastService;
use contracts::domain::a005_sale::aggregate::{Sale, SaleDto};
use contracts::shared::money::parse_money;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct SaleDetailsViewModel {
    pub form: RwSignal<SaleDto>,
    pub total_text: RwSignal<String>,
    pub client_names: RwSignal<Vec<String>>,
    pub vendor_names: RwSignal<Vec<String>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    toasts: ToastService,
}

/// New sales start dated today
pub fn prepare_initial(mut dto: SaleDto, today: &str) -> SaleDto {
    if dto.id.is_none() && dto.sale_date.trim().is_empty() {
        dto.sale_date = today.to_string();
    }
    dto
}

impl SaleDetailsViewModel {
    pub fn new(initial: SaleDto, toasts: ToastService) -> Self {
        let initial = prepare_initial(initial, &today_iso());
        Self {
            total_text: RwSignal::new(amount_input_value(initial.total)),
            form: RwSignal::new(initial),
            client_names: RwSignal::new(Vec::new()),
            vendor_names: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            toasts,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn load_suggestions(&self) {
        let vm = *self;
        spawn_local(async move {
            match model::fetch_name_suggestions().await {
                Ok((clients, vendors)) => {
                    vm.client_names.set(clients);
                    vm.vendor_names.set(vendors);
                }
                Err(e) => log::warn!("Sale form suggestions unavailable: {}", e),
            }
        });
    }

    fn reject(&self, message: String) {
        self.error.set(Some(message.clone()));
        self.toasts.error(message);
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(Sale)>) {
        let mut current = self.form.get_untracked();
        current.total = parse_money(&self.total_text.get_untracked()).unwrap_or(0.0);
        if let Err(message) = current.validate() {
            self.reject(message);
            return;
        }

        let vm = *self;
        vm.error.set(None);
        vm.saving.set(true);
        spawn_local(async move {
            match model::save_form(&current).await {
                Ok(saved) => on_saved(saved),
                Err(e) => vm.reject(e),
            }
            vm.saving.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sale_is_dated_today() {
        let dto = prepare_initial(SaleDto::default(), "2024-03-15");
        assert_eq!(dto.sale_date, "2024-03-15");
    }

    #[test]
    fn test_edited_sale_keeps_its_date() {
        let dto = SaleDto {
            id: Some("x".into()),
            sale_date: "2024-03-01".into(),
            ..Default::default()
        };
        assert_eq!(prepare_initial(dto, "2024-03-15").sale_date, "2024-03-01");
    }
}
