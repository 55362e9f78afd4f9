use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::{Button, ButtonVariant};
use crate::icons::{FaBolt, FaLock, FaPalette, FaPenNib};
use crate::Icon;

/// Marketing page. Signed-in visitors are sent on to the dashboard.
#[component]
pub fn LandingView(on_get_started: EventHandler<()>, on_authenticated: EventHandler<()>) -> Element {
    let auth = use_auth();

    use_effect(move || {
        if auth().is_authenticated() {
            on_authenticated.call(());
        }
    });

    rsx! {
        div {
            class: "landing",
            section {
                class: "hero",
                div {
                    class: "brand-mark brand-mark-lg",
                    Icon { icon: FaPenNib, width: 32, height: 32 }
                }
                h1 { class: "hero-title", "NoteFlow" }
                p {
                    class: "hero-subtitle",
                    "Your beautiful, organized note-taking experience. Capture thoughts, ideas, and memories with style."
                }
                Button {
                    variant: ButtonVariant::Primary,
                    class: "btn-lg",
                    onclick: move |_| on_get_started.call(()),
                    "Get Started"
                }
                p { class: "hero-tagline", "Free to use • Secure • Beautiful" }
            }

            section {
                class: "features",
                Feature {
                    title: "Quick & Easy",
                    body: "Create and organize your notes instantly with our intuitive interface.",
                    Icon { icon: FaBolt, width: 20, height: 20 }
                }
                Feature {
                    title: "Beautiful Design",
                    body: "Enjoy a clean, modern interface that makes note-taking a pleasure.",
                    Icon { icon: FaPalette, width: 20, height: 20 }
                }
                Feature {
                    title: "Secure & Private",
                    body: "Your notes stay behind your account, with email-verified sign-up.",
                    Icon { icon: FaLock, width: 20, height: 20 }
                }
            }
        }
    }
}

#[component]
fn Feature(title: String, body: String, children: Element) -> Element {
    rsx! {
        div {
            class: "feature",
            div { class: "feature-icon", {children} }
            h3 { "{title}" }
            p { "{body}" }
        }
    }
}
