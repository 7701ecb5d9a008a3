use super::model;
use crate::shared::components::form_field::amount_input_value;
use crate::shared::toast::ToastService;
use contracts::domain::a004_vendor::aggregate::{Vendor, VendorDto};
use contracts::shared::money::parse_money;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct VendorDetailsViewModel {
    pub form: RwSignal<VendorDto>,
    /// Raw text of the commission input, parsed on save
    pub commission_text: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    toasts: ToastService,
}

/// Commission typed in the form; blank falls back to the default rate
pub fn parse_commission(text: &str, default: f64) -> Result<f64, String> {
    if text.trim().is_empty() {
        return Ok(default);
    }
    parse_money(text).ok_or_else(|| "Comisión (%) debe ser un número".to_string())
}

impl VendorDetailsViewModel {
    pub fn new(initial: VendorDto, toasts: ToastService) -> Self {
        Self {
            commission_text: RwSignal::new(amount_input_value(initial.commission_rate)),
            form: RwSignal::new(initial),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            toasts,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    fn reject(&self, message: String) {
        self.error.set(Some(message.clone()));
        self.toasts.error(message);
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(Vendor)>) {
        let mut current = self.form.get_untracked();
        let checked = parse_commission(
            &self.commission_text.get_untracked(),
            VendorDto::default().commission_rate,
        )
        .and_then(|rate| {
            current.commission_rate = rate;
            current.validate()
        });
        if let Err(message) = checked {
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
    fn test_parse_commission() {
        assert_eq!(parse_commission("", 5.0), Ok(5.0));
        assert_eq!(parse_commission("7,5", 5.0), Ok(7.5));
        assert_eq!(parse_commission("12", 5.0), Ok(12.0));
        assert!(parse_commission("diez", 5.0).is_err());
    }
}
