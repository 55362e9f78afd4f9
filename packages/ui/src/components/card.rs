use dioxus::prelude::*;

#[component]
pub fn Card(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "card {class}", {children} }
    }
}

#[component]
pub fn CardHeader(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "card-header {class}", {children} }
    }
}

#[component]
pub fn CardTitle(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        h3 { class: "card-title {class}", {children} }
    }
}

#[component]
pub fn CardDescription(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        p { class: "card-description {class}", {children} }
    }
}

#[component]
pub fn CardContent(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "card-content {class}", {children} }
    }
}
