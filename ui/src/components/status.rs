use dioxus::prelude::*;

use crate::export::ExportStatus;

/// One-line outcome of the last export, hidden while idle.
#[component]
pub fn StatusLine(status: ExportStatus) -> Element {
    match status.feedback() {
        Some((class_name, message)) => rsx! {
            p { class: "{class_name}", role: "status", "{message}" }
        },
        None => rsx! {},
    }
}
