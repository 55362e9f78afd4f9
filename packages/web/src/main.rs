use dioxus::prelude::*;

use ui::components::ToastProvider;
use ui::{AuthProvider, PendingVerification, NOTEFLOW_CSS};
use views::{Auth, Dashboard, Landing, NotFound, OtpVerify};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/auth")]
    Auth {},
    #[route("/otp-verify")]
    OtpVerify {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Email handed from signup to the verification screen; never persisted
    use_context_provider(|| Signal::new(PendingVerification::default()));

    rsx! {
        document::Title { "NoteFlow" }
        document::Stylesheet { href: NOTEFLOW_CSS }

        AuthProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
