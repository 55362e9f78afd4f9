//! # API crate: typed client for the NoteFlow HTTP API
//!
//! Every screen reaches the remote server through [`ApiClient`]. The crate owns
//! the wire models, the error taxonomy, and the session interceptor that
//! enforces the global "401 means logged out" rule.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: auth, "who am I", and note endpoints under `<origin>/api` |
//! | [`error`] | [`ApiError`] and the notification text helper |
//! | [`interceptor`] | [`SessionInterceptor`]: bearer attachment and forced logout on `401` |
//! | [`models`] | [`UserInfo`], [`Note`], and request/response payloads |
//!
//! ## Endpoints
//!
//! | Call | Method | Path |
//! |------|--------|------|
//! | `register` / `resend_otp` | POST | `/auth/register` |
//! | `verify_otp` | POST | `/auth/verify-otp` |
//! | `login` | POST | `/auth/login` |
//! | `google_login_url` | (navigation) | `/auth/google` |
//! | `me` | GET | `/me` |
//! | `list_notes` | GET | `/notes` |
//! | `create_note` | POST | `/notes` |
//! | `delete_note` | DELETE | `/notes/:id` |

pub mod client;
pub mod error;
pub mod interceptor;
pub mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use interceptor::SessionInterceptor;
pub use models::{Note, UserInfo};

pub use store::ClientConfig;
