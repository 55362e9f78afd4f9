use dioxus::prelude::*;

use crate::auth::{use_auth, use_session};
use crate::components::{Button, ButtonVariant};
use crate::icons::{FaPenNib, FaRightFromBracket};
use crate::Icon;

/// Top bar with the brand, the signed-in user, and the logout button.
#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let session = use_session();
    let user = auth().user;

    let initial = user.as_ref().map(|u| u.initial()).unwrap_or('U');
    let name = user
        .as_ref()
        .and_then(|u| u.name.clone())
        .unwrap_or_else(|| "User".to_string());
    let email = user.as_ref().map(|u| u.email.clone()).unwrap_or_default();

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-brand",
                span {
                    class: "brand-mark brand-mark-sm",
                    Icon { icon: FaPenNib, width: 14, height: 14 }
                }
                h1 { class: "brand-name", "NoteFlow" }
            }

            div {
                class: "navbar-user",
                span { class: "avatar", "{initial}" }
                div {
                    class: "navbar-user-text",
                    p { class: "navbar-user-name", "{name}" }
                    p { class: "navbar-user-email", "{email}" }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    title: "Sign out",
                    onclick: move |_| session.logout(),
                    Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                }
            }
        }
    }
}
