//! Sign-in / sign-up screen.
//!
//! Both forms validate locally before any request. Login hands the issued
//! token to the session store; signup sends the user on to OTP verification
//! with the submitted email.

use api::{ApiError, UserInfo};
use dioxus::prelude::*;

use crate::auth::{use_session, Session};
use crate::components::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    FieldError, Input, Label, Spinner, ToastOptions,
};
use crate::icons::{FaGoogle, FaPenNib};
use crate::platform::hard_navigate;
use crate::validation::{Field, FieldErrors, LoginForm, SignupForm};
use crate::Icon;

use super::begin_request;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Signup,
}

async fn sign_in(session: &Session, form: &LoginForm) -> Result<UserInfo, ApiError> {
    let token = session.client().login(&form.email, &form.password).await?;
    session.login(&token).await
}

#[component]
pub fn AuthView(on_authenticated: EventHandler<()>, on_verify_email: EventHandler<String>) -> Element {
    let session = use_session();
    let toast = use_toast();
    let mut tab = use_signal(AuthTab::default);
    let mut busy = use_signal(|| false);

    let mut login_form = use_signal(LoginForm::default);
    let mut login_errors = use_signal(FieldErrors::default);
    let mut signup_form = use_signal(SignupForm::default);
    let mut signup_errors = use_signal(FieldErrors::default);

    let google_url = session.client().google_login_url().to_string();

    let login_session = session.clone();
    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let form = login_form();
        if let Err(errors) = form.validate() {
            login_errors.set(errors);
            return;
        }
        login_errors.set(FieldErrors::default());
        if !begin_request(busy) {
            return;
        }

        let session = login_session.clone();
        spawn(async move {
            let result = sign_in(&session, &form).await;
            busy.set(false);
            match result {
                Ok(_) => {
                    toast.success(
                        "Welcome back!".to_string(),
                        ToastOptions::new().description("You have successfully logged in."),
                    );
                    on_authenticated.call(());
                }
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    toast.error(
                        "Login failed".to_string(),
                        ToastOptions::new().description(
                            e.user_message("Please check your credentials and try again."),
                        ),
                    );
                }
            }
        });
    };

    let signup_client = session.client().clone();
    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let form = signup_form();
        if let Err(errors) = form.validate() {
            signup_errors.set(errors);
            return;
        }
        signup_errors.set(FieldErrors::default());
        if !begin_request(busy) {
            return;
        }

        let client = signup_client.clone();
        spawn(async move {
            let result = client.register(&form.email, &form.password).await;
            busy.set(false);
            match result {
                Ok(()) => {
                    tracing::info!("Registration started for {}", form.email);
                    toast.success(
                        "Registration successful!".to_string(),
                        ToastOptions::new()
                            .description("Please check your email for the verification code."),
                    );
                    on_verify_email.call(form.email);
                }
                Err(e) => {
                    tracing::warn!("Registration failed: {}", e);
                    toast.error(
                        "Registration failed".to_string(),
                        ToastOptions::new().description(e.user_message("Please try again.")),
                    );
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            Card {
                class: "auth-card",
                CardHeader {
                    class: "text-center",
                    div {
                        class: "brand-mark",
                        Icon { icon: FaPenNib, width: 20, height: 20 }
                    }
                    CardTitle { "Welcome to NoteFlow" }
                    CardDescription { "Your beautiful, organized note-taking experience" }
                }

                CardContent {
                    div {
                        class: "tabs",
                        role: "tablist",
                        button {
                            class: if tab() == AuthTab::Login { "tab active" } else { "tab" },
                            role: "tab",
                            onclick: move |_| tab.set(AuthTab::Login),
                            "Sign In"
                        }
                        button {
                            class: if tab() == AuthTab::Signup { "tab active" } else { "tab" },
                            role: "tab",
                            onclick: move |_| tab.set(AuthTab::Signup),
                            "Sign Up"
                        }
                    }

                    if tab() == AuthTab::Login {
                        form {
                            class: "auth-form",
                            onsubmit: handle_login,
                            div {
                                class: "form-field",
                                Label { html_for: "login-email", "Email" }
                                Input {
                                    id: "login-email",
                                    placeholder: "Enter your email",
                                    autocomplete: "email",
                                    value: login_form().email,
                                    invalid: login_errors().get(Field::Email).is_some(),
                                    oninput: move |evt: FormEvent| login_form.write().email = evt.value(),
                                }
                                FieldError { message: login_errors().get(Field::Email) }
                            }
                            div {
                                class: "form-field",
                                Label { html_for: "login-password", "Password" }
                                Input {
                                    id: "login-password",
                                    r#type: "password",
                                    placeholder: "Enter your password",
                                    autocomplete: "current-password",
                                    value: login_form().password,
                                    invalid: login_errors().get(Field::Password).is_some(),
                                    oninput: move |evt: FormEvent| login_form.write().password = evt.value(),
                                }
                                FieldError { message: login_errors().get(Field::Password) }
                            }
                            Button {
                                variant: ButtonVariant::Primary,
                                class: "w-full",
                                r#type: "submit",
                                disabled: busy(),
                                if busy() {
                                    Spinner {}
                                }
                                "Sign In"
                            }
                        }
                    } else {
                        form {
                            class: "auth-form",
                            onsubmit: handle_signup,
                            div {
                                class: "form-field",
                                Label { html_for: "signup-email", "Email" }
                                Input {
                                    id: "signup-email",
                                    placeholder: "Enter your email",
                                    autocomplete: "email",
                                    value: signup_form().email,
                                    invalid: signup_errors().get(Field::Email).is_some(),
                                    oninput: move |evt: FormEvent| signup_form.write().email = evt.value(),
                                }
                                FieldError { message: signup_errors().get(Field::Email) }
                            }
                            div {
                                class: "form-field",
                                Label { html_for: "signup-password", "Password" }
                                Input {
                                    id: "signup-password",
                                    r#type: "password",
                                    placeholder: "Create a password",
                                    autocomplete: "new-password",
                                    value: signup_form().password,
                                    invalid: signup_errors().get(Field::Password).is_some(),
                                    oninput: move |evt: FormEvent| signup_form.write().password = evt.value(),
                                }
                                FieldError { message: signup_errors().get(Field::Password) }
                            }
                            div {
                                class: "form-field",
                                Label { html_for: "signup-confirm", "Confirm Password" }
                                Input {
                                    id: "signup-confirm",
                                    r#type: "password",
                                    placeholder: "Confirm your password",
                                    autocomplete: "new-password",
                                    value: signup_form().confirm_password,
                                    invalid: signup_errors().get(Field::ConfirmPassword).is_some(),
                                    oninput: move |evt: FormEvent| signup_form.write().confirm_password = evt.value(),
                                }
                                FieldError { message: signup_errors().get(Field::ConfirmPassword) }
                            }
                            Button {
                                variant: ButtonVariant::Primary,
                                class: "w-full",
                                r#type: "submit",
                                disabled: busy(),
                                if busy() {
                                    Spinner {}
                                }
                                "Create Account"
                            }
                        }
                    }

                    div {
                        class: "divider",
                        span { "Or continue with" }
                    }

                    Button {
                        variant: ButtonVariant::Outline,
                        class: "w-full",
                        disabled: busy(),
                        onclick: move |_| hard_navigate(&google_url),
                        Icon { icon: FaGoogle, width: 14, height: 14 }
                        " Google"
                    }
                }
            }
        }
    }
}
