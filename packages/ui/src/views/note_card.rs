use api::Note;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle};
use crate::icons::{FaCalendar, FaTrash};
use crate::Icon;

#[component]
pub fn NoteCard(note: Note, on_delete: EventHandler<Note>) -> Element {
    let created = note.created_label();
    let preview = note.preview().to_string();
    let title = note.title.clone();

    rsx! {
        Card {
            class: "note-card",
            CardHeader {
                class: "note-card-header",
                div {
                    class: "note-card-heading",
                    CardTitle { class: "note-card-title", "{title}" }
                    p {
                        class: "note-card-date",
                        Icon { icon: FaCalendar, width: 11, height: 11 }
                        " {created}"
                    }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "note-card-delete",
                    title: "Delete note",
                    onclick: move |_| on_delete.call(note.clone()),
                    Icon { icon: FaTrash, width: 12, height: 12 }
                }
            }
            CardContent {
                p { class: "note-card-preview", "{preview}" }
            }
        }
    }
}

/// Confirmation step before a note is deleted.
#[component]
pub fn ConfirmDeleteDialog(
    note: Note,
    deleting: bool,
    on_confirm: EventHandler<Note>,
    on_cancel: EventHandler<()>,
) -> Element {
    let title = note.title.clone();

    rsx! {
        div {
            class: "dialog",
            h2 { class: "dialog-title", "Delete Note" }
            p {
                class: "dialog-description",
                "Are you sure you want to delete \"{title}\"? This action cannot be undone."
            }
            div {
                class: "dialog-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: deleting,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    disabled: deleting,
                    onclick: move |_| on_confirm.call(note.clone()),
                    if deleting { "Deleting..." } else { "Delete" }
                }
            }
        }
    }
}
