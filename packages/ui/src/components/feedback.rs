use dioxus::prelude::*;

use crate::icons::FaSpinner;
use crate::Icon;

/// Rotating indicator for in-flight requests.
#[component]
pub fn Spinner(#[props(default = 14)] size: u32) -> Element {
    rsx! {
        span {
            class: "spinner",
            Icon { icon: FaSpinner, width: size, height: size }
        }
    }
}

/// Grey pulsing block standing in for content that is still loading.
#[component]
pub fn Skeleton(#[props(default)] class: String) -> Element {
    rsx! {
        div { class: "skeleton {class}" }
    }
}
