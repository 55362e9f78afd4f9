use dioxus::prelude::*;

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "label", r#for: html_for, {children} }
    }
}

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] autocomplete: String,
    value: String,
    #[props(default)] invalid: bool,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: id,
            class: if invalid { "input input-invalid {class}" } else { "input {class}" },
            r#type: r#type,
            placeholder: placeholder,
            autocomplete: autocomplete,
            "aria-invalid": if invalid { "true" } else { "false" },
            disabled: disabled,
            value: value,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Textarea(
    #[props(default)] id: String,
    #[props(default)] placeholder: String,
    #[props(default = 6)] rows: u32,
    value: String,
    #[props(default)] disabled: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        textarea {
            id: id,
            class: "input textarea",
            placeholder: placeholder,
            rows: rows,
            disabled: disabled,
            value: value,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// Validation message rendered under a field.
#[component]
pub fn FieldError(message: Option<&'static str>) -> Element {
    match message {
        Some(message) => rsx! {
            p { class: "field-error", role: "alert", "{message}" }
        },
        None => rsx! {},
    }
}
