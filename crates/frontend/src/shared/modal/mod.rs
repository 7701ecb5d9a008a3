use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)]
    title: Signal<String>,
    /// Runs on Escape, overlay click and the close button
    on_close: Callback<()>,
    /// Content of the footer (Save, Cancel)
    #[prop(optional)]
    footer: Option<ChildrenFn>,
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" role="dialog" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {footer.map(|footer| view! { <div class="modal-footer">{footer()}</div> })}
            </div>
        </div>
    }
}

/// Browser confirmation dialog; `false` when the window is unavailable
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use crate::shared::toast::ToastService;
    use contracts::domain::a001_category::aggregate::{Category, CategoryDto};
    use contracts::domain::a005_sale::aggregate::{Sale, SaleDto};
    use leptos::prelude::RwSignal;

    fn assert_send<T: Send>() {}

    /// `Children` must be `Send`, so the list state moved into the modal body
    /// has to be too; callbacks are built inside the body.
    #[test]
    fn test_modal_body_captures_are_send() {
        assert_send::<ToastService>();
        assert_send::<RwSignal<Vec<Category>>>();
        assert_send::<RwSignal<Option<CategoryDto>>>();
        assert_send::<RwSignal<Vec<Sale>>>();
        assert_send::<SaleDto>();
    }
}
