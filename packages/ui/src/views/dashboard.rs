//! Signed-in home: the note grid plus the create and delete flows.

use api::Note;
use dioxus::prelude::*;

use crate::auth::{use_api, use_auth};
use crate::board::NoteBoard;
use crate::components::{use_toast, Button, ButtonVariant, Skeleton, Spinner, ToastOptions};
use crate::icons::FaPlus;
use crate::navbar::Navbar;
use crate::new_note_dialog::NewNoteDialog;
use crate::validation::{Field, NoteDraft};
use crate::Icon;

use super::{
    begin_request, ConfirmDeleteDialog, ModalOverlay, NoteCard, NotesPlaceholder,
};

const SKELETON_CARDS: usize = 6;

/// Guarded dashboard. Waits for the session to settle, then either renders
/// the notes or calls `on_signed_out`.
#[component]
pub fn DashboardView(on_signed_out: EventHandler<()>) -> Element {
    let auth = use_auth();
    let state = auth();

    if state.loading() {
        return rsx! {
            div { class: "page-loading", Spinner {} }
        };
    }

    if state.is_authenticated() {
        rsx! { Dashboard {} }
    } else {
        rsx! { SignedOut { on_signed_out } }
    }
}

#[component]
fn SignedOut(on_signed_out: EventHandler<()>) -> Element {
    use_hook(|| on_signed_out.call(()));
    rsx! {}
}

#[component]
fn Dashboard() -> Element {
    let auth = use_auth();
    let api = use_api();
    let toast = use_toast();

    let mut board = use_signal(NoteBoard::default);
    let mut draft = use_signal(NoteDraft::default);
    let mut show_create = use_signal(|| false);
    let mut creating = use_signal(|| false);
    let mut pending_delete = use_signal(|| None::<Note>);
    let mut deleting = use_signal(|| false);

    let fetch_api = api.clone();
    let _ = use_resource(move || {
        let api = fetch_api.clone();
        async move {
            match api.list_notes().await {
                Ok(notes) => {
                    tracing::debug!("Loaded {} notes", notes.len());
                    board.write().loaded(notes);
                }
                Err(e) => {
                    board.write().load_failed();
                    // An expired session is already redirecting
                    if !e.is_unauthorized() {
                        tracing::error!("Failed to load notes: {}", e);
                        toast.error(
                            "Failed to load notes".to_string(),
                            ToastOptions::new().description("Please try refreshing the page."),
                        );
                    }
                }
            }
        }
    });

    let create_api = api.clone();
    let handle_create = move |submitted: NoteDraft| {
        if let Err(errors) = submitted.validate() {
            let message = errors.get(Field::Title).unwrap_or_default();
            toast.error("Title required".to_string(), ToastOptions::new().description(message));
            return;
        }
        if !begin_request(creating) {
            return;
        }

        let api = create_api.clone();
        spawn(async move {
            let result = api
                .create_note(submitted.title.trim(), &submitted.content)
                .await;
            creating.set(false);
            match result {
                Ok(note) => {
                    tracing::info!("Created note {}", note.id);
                    board.write().prepend(note);
                    draft.set(NoteDraft::default());
                    show_create.set(false);
                    toast.success(
                        "Note created!".to_string(),
                        ToastOptions::new().description("Your note has been saved successfully."),
                    );
                }
                Err(e) => {
                    toast.error(
                        "Failed to create note".to_string(),
                        ToastOptions::new().description(e.user_message("Please try again.")),
                    );
                }
            }
        });
    };

    let delete_api = api.clone();
    let handle_delete = move |note: Note| {
        if !begin_request(deleting) {
            return;
        }
        let api = delete_api.clone();
        spawn(async move {
            let result = api.delete_note(&note.id).await;
            deleting.set(false);
            match result {
                Ok(()) => {
                    tracing::info!("Deleted note {}", note.id);
                    board.write().remove(&note.id);
                    pending_delete.set(None);
                    toast.success(
                        "Note deleted".to_string(),
                        ToastOptions::new().description("Your note has been deleted successfully."),
                    );
                }
                Err(e) => {
                    pending_delete.set(None);
                    toast.error(
                        "Failed to delete note".to_string(),
                        ToastOptions::new().description(e.user_message("Please try again.")),
                    );
                }
            }
        });
    };

    let name = auth()
        .user
        .and_then(|u| u.name)
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| "there".to_string());
    let current = board.read();
    let summary = current.summary();

    rsx! {
        div {
            class: "dashboard",
            Navbar {}

            main {
                class: "dashboard-main",
                div {
                    class: "dashboard-header",
                    div {
                        h2 { class: "dashboard-greeting", "Welcome back, {name}!" }
                        p { class: "dashboard-summary", "{summary}" }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| show_create.set(true),
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        " New Note"
                    }
                }

                if current.is_loading() {
                    div {
                        class: "notes-grid",
                        for i in 0..SKELETON_CARDS {
                            div {
                                key: "{i}",
                                class: "card note-card",
                                Skeleton { class: "skeleton-title" }
                                Skeleton { class: "skeleton-line" }
                                Skeleton { class: "skeleton-line short" }
                            }
                        }
                    }
                } else if current.is_empty() {
                    NotesPlaceholder { on_create: move |_| show_create.set(true) }
                } else {
                    div {
                        class: "notes-grid",
                        for note in current.notes().iter().cloned() {
                            NoteCard {
                                key: "{note.id}",
                                note,
                                on_delete: move |note| pending_delete.set(Some(note)),
                            }
                        }
                    }
                }
            }

            if show_create() {
                ModalOverlay {
                    locked: creating(),
                    on_close: move |_| show_create.set(false),
                    NewNoteDialog {
                        draft,
                        creating: creating(),
                        on_create: handle_create,
                        on_cancel: move |_| show_create.set(false),
                    }
                }
            }

            if let Some(note) = pending_delete() {
                ModalOverlay {
                    role: "alertdialog",
                    locked: deleting(),
                    on_close: move |_| pending_delete.set(None),
                    ConfirmDeleteDialog {
                        note,
                        deleting: deleting(),
                        on_confirm: handle_delete,
                        on_cancel: move |_| pending_delete.set(None),
                    }
                }
            }
        }
    }
}
