//! Request and response bodies for the remote API.

use serde::{Deserialize, Serialize};

use super::{Note, UserInfo};

/// Body of `POST /auth/register` and `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of `POST /auth/verify-otp`.
#[derive(Debug, Clone, Serialize)]
pub struct OtpRequest<'a> {
    pub email: &'a str,
    pub otp: &'a str,
}

/// Body of `POST /notes`.
#[derive(Debug, Clone, Serialize)]
pub struct NewNote<'a> {
    pub title: &'a str,
    pub content: &'a str,
}

/// `{token, ...}` returned by login and OTP verification. Extra fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MeResponse {
    pub user: UserInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotesResponse {
    #[serde(default)]
    pub notes: Vec<Note>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NoteResponse {
    pub note: Note,
}

/// Error body the server may attach to a non-success status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
