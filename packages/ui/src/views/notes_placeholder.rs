use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaFileLines, FaPlus};
use crate::Icon;

/// Empty state shown when the user has no notes yet.
#[component]
pub fn NotesPlaceholder(on_create: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "empty-state",
            div {
                class: "empty-state-icon",
                Icon { icon: FaFileLines, width: 40, height: 40 }
            }
            h3 { "No notes yet" }
            p { "Start by creating your first note to organize your thoughts" }
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| on_create.call(()),
                Icon { icon: FaPlus, width: 12, height: 12 }
                " Create First Note"
            }
        }
    }
}
