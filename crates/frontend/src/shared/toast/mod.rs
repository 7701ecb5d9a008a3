//! Transient notifications in the bottom-right corner.
//!
//! Every toast dismisses itself after [`TOAST_DURATION_MS`]; the close
//! button removes it earlier.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

pub const TOAST_DURATION_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "check-circle",
            ToastKind::Error => "alert-circle",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Ordered list of visible toasts with monotonically increasing ids
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Returns `false` when the toast is already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }

    fn show(&self, kind: ToastKind, message: String) {
        if kind == ToastKind::Error {
            log::warn!("{}", message);
        }
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, message));

        let service = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            service.dismiss(id);
        });
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService context not found")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toast();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || toasts.queue.with(|q| q.items().to_vec())
                key=|t| t.id
                children=move |t| {
                    let id = t.id;
                    view! {
                        <div class=t.kind.class() role="status">
                            {icon(t.kind.icon())}
                            <span class="toast__message">{t.message}</span>
                            <button class="toast__close" on:click=move |_| toasts.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_unique_ids_in_order() {
        let mut q = ToastQueue::default();
        let a = q.push(ToastKind::Success, "Categoría guardada");
        let b = q.push(ToastKind::Error, "Nombre es obligatorio");
        assert_ne!(a, b);
        let messages: Vec<_> = q.items().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["Categoría guardada", "Nombre es obligatorio"]);
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let mut q = ToastQueue::default();
        let a = q.push(ToastKind::Success, "uno");
        let b = q.push(ToastKind::Success, "dos");
        assert!(q.dismiss(a));
        assert!(!q.dismiss(a));
        assert_eq!(q.items().len(), 1);
        assert_eq!(q.items()[0].id, b);
    }

    #[test]
    fn test_ids_are_not_reused_after_dismiss() {
        let mut q = ToastQueue::default();
        let a = q.push(ToastKind::Success, "uno");
        q.dismiss(a);
        let b = q.push(ToastKind::Success, "dos");
        assert!(b > a);
    }
}
