use dioxus::prelude::*;
use ui::use_pending_verification;
use ui::views::OtpVerifyView;

use crate::Route;

/// Takes the pending email exactly once, on mount. A refresh or a direct
/// visit finds nothing and falls back to the auth screen.
#[component]
pub fn OtpVerify() -> Element {
    let nav = use_navigator();
    let mut pending = use_pending_verification();
    let email = use_hook(|| pending.write().take());

    rsx! {
        OtpVerifyView {
            email,
            on_verified: move |_| {
                nav.replace(Route::Dashboard {});
            },
            on_back: move |_| {
                nav.replace(Route::Auth {});
            },
        }
    }
}
