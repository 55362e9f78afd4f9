//! # Client-side form validation
//!
//! Every form is checked here before any network call is made. Failures are
//! reported per field so the view can render the message under the input.
//!
//! | Form | Rules |
//! |------|-------|
//! | [`LoginForm`] | email format, password ≥ 6 characters |
//! | [`SignupForm`] | login rules + confirmation equals password |
//! | [`NoteDraft`] | title not blank |

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

pub const MIN_PASSWORD_LEN: usize = 6;

pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const PASSWORDS_DIFFER: &str = "Passwords don't match";
pub const TITLE_REQUIRED: &str = "Please enter a title for your note.";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Form field an error message belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
    Title,
}

/// Field-scoped validation messages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.0.len()
    }

    fn add(&mut self, field: Field, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Standard email shape: local part, `@`, dotted domain with an alphabetic TLD.
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}

fn check_credentials(errors: &mut FieldErrors, email: &str, password: &str) {
    if !is_valid_email(email) {
        errors.add(Field::Email, INVALID_EMAIL);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.add(Field::Password, PASSWORD_TOO_SHORT);
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        check_credentials(&mut errors, &self.email, &self.password);
        errors.into_result()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        check_credentials(&mut errors, &self.email, &self.password);
        if self.password != self.confirm_password {
            errors.add(Field::ConfirmPassword, PASSWORDS_DIFFER);
        }
        errors.into_result()
    }
}

/// Values typed into the create-note dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.title.trim().is_empty() {
            errors.add(Field::Title, TITLE_REQUIRED);
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_emails() {
        for email in [
            "ada@example.com",
            "first.last+tag@mail.example.co.uk",
            "o'brien@example.ie",
            "x_1@sub-domain.example.org",
        ] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "plainaddress",
            "@example.com",
            "ada@",
            "ada@example",
            "ada@example.c",
            ".ada@example.com",
            "ada..lovelace@example.com",
            "ada.@example.com",
            "ada @example.com",
            "ada@-example.com",
        ] {
            assert!(!is_valid_email(email), "{email} should be invalid");
        }
    }

    #[test]
    fn test_login_rejects_bad_email_and_short_password() {
        let errors = login("nope", "12345").validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::Email), Some(INVALID_EMAIL));
        assert_eq!(errors.get(Field::Password), Some(PASSWORD_TOO_SHORT));
        assert_eq!(errors.get(Field::ConfirmPassword), None);
    }

    #[test]
    fn test_login_password_boundary() {
        assert!(login("ada@example.com", "123456").validate().is_ok());
        assert!(login("ada@example.com", "12345").validate().is_err());
        // Six multi-byte characters still count as six
        assert!(login("ada@example.com", "ééééé€").validate().is_ok());
    }

    #[test]
    fn test_signup_mismatch_on_confirmation_field() {
        let form = SignupForm {
            email: "ada@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret2".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::ConfirmPassword), Some(PASSWORDS_DIFFER));
    }

    #[test]
    fn test_signup_valid() {
        let form = SignupForm {
            email: "ada@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_note_title_required() {
        for title in ["", "   ", "\n\t"] {
            let draft = NoteDraft {
                title: title.to_string(),
                content: "body".to_string(),
            };
            assert_eq!(
                draft.validate().unwrap_err().get(Field::Title),
                Some(TITLE_REQUIRED)
            );
        }
        let draft = NoteDraft {
            title: " Groceries ".to_string(),
            content: String::new(),
        };
        assert!(draft.validate().is_ok());
    }
}
