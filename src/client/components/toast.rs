use dioxus::prelude::*;

use crate::client::store::toast::{Toast, ToastKind, ToastState};

/// Overlay rendering the toast queue. Toasts stay until dismissed; failures
/// never interrupt the board with a modal.
#[component]
pub fn ToastStack() -> Element {
    let mut toasts = use_context::<Signal<ToastState>>();

    let items: Vec<Toast> = toasts.read().list().to_vec();

    rsx!(
        div { class: "toast toast-end z-50",
            {items.into_iter().map(|toast| {
                let id = toast.id;
                let class = match toast.kind {
                    ToastKind::Success => "alert alert-success cursor-pointer",
                    ToastKind::Error => "alert alert-error cursor-pointer",
                };
                rsx!(
                    div {
                        key: "{id}",
                        class: "{class}",
                        onclick: move |_| toasts.write().dismiss(id),
                        span { "{toast.message}" }
                    }
                )
            })}
        }
    )
}
