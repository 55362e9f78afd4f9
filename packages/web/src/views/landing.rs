use dioxus::prelude::*;
use ui::views::LandingView;

use crate::Route;

#[component]
pub fn Landing() -> Element {
    let nav = use_navigator();

    rsx! {
        LandingView {
            on_get_started: move |_| {
                nav.push(Route::Auth {});
            },
            on_authenticated: move |_| {
                nav.replace(Route::Dashboard {});
            },
        }
    }
}
