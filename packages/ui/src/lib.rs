//! This crate contains all shared UI for the workspace: the session store,
//! form and flow state, components, and the screens the web binary routes to.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::FaGoogle;
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod platform;
pub use platform::{hard_navigate, make_token_store};

pub mod views;

pub const NOTEFLOW_CSS: Asset = asset!("/assets/noteflow.css");

mod auth;
pub use auth::{
    use_api, use_auth, use_session, AuthProvider, AuthState, Session, SessionPhase, AUTH_PATH,
};

pub mod board;
pub use board::NoteBoard;

pub mod otp;
pub use otp::{use_pending_verification, OtpFlow, OtpPhase, PendingVerification};

pub mod validation;
pub use validation::{FieldErrors, LoginForm, NoteDraft, SignupForm};

mod navbar;
pub use navbar::Navbar;

mod new_note_dialog;
pub use new_note_dialog::NewNoteDialog;
