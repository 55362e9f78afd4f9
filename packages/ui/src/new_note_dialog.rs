use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label, Textarea};
use crate::validation::NoteDraft;

/// Form for creating a new note.
///
/// The draft lives in the caller so a failed create keeps what was typed.
#[component]
pub fn NewNoteDialog(
    draft: Signal<NoteDraft>,
    creating: bool,
    on_create: EventHandler<NoteDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut draft = draft;

    rsx! {
        div {
            class: "dialog",
            h2 { class: "dialog-title", "Create New Note" }
            p { class: "dialog-description", "Add a title and content for your new note." }

            div {
                class: "form-field",
                Label { html_for: "new-note-title", "Title" }
                Input {
                    id: "new-note-title",
                    placeholder: "Enter note title...",
                    value: draft().title,
                    disabled: creating,
                    oninput: move |evt: FormEvent| draft.write().title = evt.value(),
                }
            }

            div {
                class: "form-field",
                Label { html_for: "new-note-content", "Content" }
                Textarea {
                    id: "new-note-content",
                    placeholder: "Write your note content here...",
                    value: draft().content,
                    disabled: creating,
                    oninput: move |evt: FormEvent| draft.write().content = evt.value(),
                }
            }

            div {
                class: "dialog-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: creating,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: creating,
                    onclick: move |_| on_create.call(draft()),
                    if creating { "Creating..." } else { "Create Note" }
                }
            }
        }
    }
}
