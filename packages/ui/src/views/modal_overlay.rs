use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close` unless `locked` is set
/// (used while a request started from the dialog is in flight).
#[component]
pub fn ModalOverlay(
    on_close: EventHandler<()>,
    #[props(default)] locked: bool,
    #[props(default = "dialog".to_string())] role: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| {
                if !locked {
                    on_close.call(());
                }
            },
            div {
                class: "modal-card",
                role: role,
                "aria-modal": "true",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
