use dioxus::prelude::*;

use crate::t;

/// Centered dialog over a dimming backdrop. Clicking the backdrop or the
/// close button calls `on_close`; clicks inside the panel do not.
#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    let close_label = t!("modal-close");

    rsx! {
        div {
            class: "modal__backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                div { class: "modal__header",
                    h2 { class: "modal__title", "{title}" }
                    button {
                        r#type: "button",
                        class: "modal__close",
                        aria_label: "{close_label}",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                div { class: "modal__body", {children} }
            }
        }
    }
}
