//! Transient notifications.
//!
//! [`ToastProvider`] owns the queue and expires entries; screens push through
//! the [`Toasts`] handle returned by [`use_toast`].

use std::time::Duration;

use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleExclamation, FaXmark};
use crate::platform::sleep;
use crate::Icon;

const DEFAULT_TTL_SECS: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastOptions {
    description: Option<String>,
    ttl_secs: u32,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            description: None,
            ttl_secs: DEFAULT_TTL_SECS,
        }
    }
}

impl ToastOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    #[cfg(test)]
    fn ttl_secs(mut self, secs: u32) -> Self {
        self.ttl_secs = secs.max(1);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
    remaining: u32,
}

/// Queue of visible toasts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    entries: Vec<ToastEntry>,
    next_id: u64,
}

impl ToastQueue {
    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }

    pub fn push(&mut self, kind: ToastKind, title: String, options: ToastOptions) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(ToastEntry {
            id,
            kind,
            title,
            description: options.description,
            remaining: options.ttl_secs,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }

    /// Age every toast by one second and drop the expired ones.
    pub fn tick(&mut self) {
        for toast in &mut self.entries {
            toast.remaining = toast.remaining.saturating_sub(1);
        }
        self.entries.retain(|t| t.remaining > 0);
    }
}

/// Handle for pushing notifications.
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: Signal<ToastQueue>,
}

impl Toasts {
    pub fn success(&self, title: String, options: ToastOptions) {
        self.push(ToastKind::Success, title, options);
    }

    pub fn error(&self, title: String, options: ToastOptions) {
        tracing::debug!("Error toast: {}", title);
        self.push(ToastKind::Error, title, options);
    }

    fn push(&self, kind: ToastKind, title: String, options: ToastOptions) {
        let mut queue = self.queue;
        queue.write().push(kind, title, options);
    }
}

pub fn use_toast() -> Toasts {
    Toasts {
        queue: use_context::<Signal<ToastQueue>>(),
    }
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let mut queue = use_context_provider(|| Signal::new(ToastQueue::default()));

    use_future(move || async move {
        loop {
            sleep(Duration::from_secs(1)).await;
            if !queue.peek().entries().is_empty() {
                queue.write().tick();
            }
        }
    });

    let entries = queue().entries().to_vec();

    rsx! {
        {children}

        div {
            class: "toast-region",
            role: "status",
            for toast in entries {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    },
                    span {
                        class: "toast-icon",
                        if toast.kind == ToastKind::Success {
                            Icon { icon: FaCircleCheck, width: 16, height: 16 }
                        } else {
                            Icon { icon: FaCircleExclamation, width: 16, height: 16 }
                        }
                    }
                    div {
                        class: "toast-body",
                        p { class: "toast-title", "{toast.title}" }
                        if let Some(description) = toast.description.clone() {
                            p { class: "toast-description", "{description}" }
                        }
                    }
                    button {
                        class: "toast-close",
                        title: "Dismiss",
                        onclick: move |_| queue.write().dismiss(toast.id),
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_expire() {
        let mut queue = ToastQueue::default();
        queue.push(ToastKind::Success, "short".into(), ToastOptions::new().ttl_secs(1));
        queue.push(ToastKind::Error, "long".into(), ToastOptions::new().ttl_secs(3));
        assert_eq!(queue.entries().len(), 2);

        queue.tick();
        let titles: Vec<&str> = queue.entries().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["long"]);

        queue.tick();
        queue.tick();
        assert!(queue.entries().is_empty());
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut queue = ToastQueue::default();
        let first = queue.push(
            ToastKind::Error,
            "Login failed".into(),
            ToastOptions::new().description("Please check your credentials and try again."),
        );
        let second = queue.push(ToastKind::Success, "Note created!".into(), ToastOptions::new());
        assert_ne!(first, second);

        queue.dismiss(first);
        assert_eq!(queue.entries().len(), 1);
        assert_eq!(queue.entries()[0].id, second);
        assert_eq!(queue.entries()[0].description, None);
    }
}
