use super::model;
use crate::shared::toast::ToastService;
use contracts::domain::a002_client::aggregate::{Client, ClientDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct ClientDetailsViewModel {
    pub form: RwSignal<ClientDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    toasts: ToastService,
}

impl ClientDetailsViewModel {
    pub fn new(initial: ClientDto, toasts: ToastService) -> Self {
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

    /// Validates locally, then posts the form. The server answers with the
    /// stored record, which `on_saved` puts into the list.
    pub fn save_command(&self, on_saved: Rc<dyn Fn(Client)>) {
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
