use dioxus::prelude::*;
use ui::use_pending_verification;
use ui::views::AuthView;

use crate::Route;

#[component]
pub fn Auth() -> Element {
    let nav = use_navigator();
    let mut pending = use_pending_verification();

    rsx! {
        AuthView {
            on_authenticated: move |_| {
                nav.replace(Route::Dashboard {});
            },
            on_verify_email: move |email: String| {
                pending.write().offer(email);
                nav.push(Route::OtpVerify {});
            },
        }
    }
}
