//! Browser `localStorage` token store for the web build.

use web_sys::Storage;

use crate::tokens::{non_blank, TokenStore, TokenStoreError, TOKEN_KEY};

/// TokenStore backed by `window.localStorage`, keyed by [`TOKEN_KEY`].
#[derive(Clone, Debug, Default)]
pub struct LocalStorageTokenStore;

impl LocalStorageTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<Storage, TokenStoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(TokenStoreError::Unavailable)
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        let storage = Self::storage().ok()?;
        storage.get_item(TOKEN_KEY).ok().flatten().and_then(non_blank)
    }

    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        Self::storage()?
            .set_item(TOKEN_KEY, token.trim())
            .map_err(|e| TokenStoreError::Rejected(format!("{e:?}")))
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        Self::storage()?
            .remove_item(TOKEN_KEY)
            .map_err(|e| TokenStoreError::Rejected(format!("{e:?}")))
    }
}
