//! # Bearer-token persistence
//!
//! The client keeps exactly one opaque bearer token between page loads. Every
//! backend implements [`TokenStore`]; the HTTP layer reads it before each request
//! and the session store is the only other writer.
//!
//! | Backend | Platform | Location |
//! |---------|----------|----------|
//! | [`MemoryTokenStore`](crate::MemoryTokenStore) | any | process memory (tests) |
//! | `LocalStorageTokenStore` | WASM + `web` | `localStorage["accessToken"]` |
//! | `FileTokenStore` | native | `<data_dir>/noteflow/accessToken` |
//!
//! Holding a token says nothing about its validity; only a successful `GET /me`
//! establishes that.

use thiserror::Error;

/// Fixed key under which the token is persisted.
pub const TOKEN_KEY: &str = "accessToken";

#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("token storage is unavailable")]
    Unavailable,
    #[error("token storage lock poisoned")]
    Poisoned,
    #[error("token storage rejected the write: {0}")]
    Rejected(String),
    #[cfg(not(target_arch = "wasm32"))]
    #[error("token file error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single-slot store for the session bearer token.
pub trait TokenStore {
    /// The persisted token, if any. Blank values count as absent.
    fn load(&self) -> Option<String>;

    /// Replace the persisted token.
    fn save(&self, token: &str) -> Result<(), TokenStoreError>;

    /// Remove the persisted token. Clearing an empty store succeeds.
    fn clear(&self) -> Result<(), TokenStoreError>;

    fn has_token(&self) -> bool {
        self.load().is_some()
    }
}

pub(crate) fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
