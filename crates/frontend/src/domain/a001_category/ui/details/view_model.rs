use super::model;
use crate::shared::toast::ToastService;
use contracts::domain::a001_category::aggregate::{Category, CategoryDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct CategoryDetailsViewModel {
    pub form: RwSignal<CategoryDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    toasts: ToastService,
}

impl CategoryDetailsViewModel {
    pub fn new(initial: CategoryDto, toasts: ToastService) -> Self {
        Self {
            form: RwSignal::new(initial),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            toasts,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(Category)>) {
        let current = self.form.get_untracked();
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
