use std::sync::{Arc, Mutex};

use crate::tokens::{non_blank, TokenStore, TokenStoreError};

/// In-memory TokenStore for tests and headless use.
///
/// Clones share the same slot, so a test can keep a handle while the client
/// owns another.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        if let Ok(mut slot) = store.token.lock() {
            *slot = non_blank(token.to_string());
        }
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().ok().and_then(|slot| slot.clone())
    }

    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        let mut slot = self.token.lock().map_err(|_| TokenStoreError::Poisoned)?;
        *slot = non_blank(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        let mut slot = self.token.lock().map_err(|_| TokenStoreError::Poisoned)?;
        *slot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_clear() {
        let store = MemoryTokenStore::new();
        assert!(store.load().is_none());
        assert!(!store.has_token());

        store.save("abc.def").unwrap();
        assert_eq!(store.load().as_deref(), Some("abc.def"));

        store.clear().unwrap();
        assert!(store.load().is_none());

        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_clones_share_slot() {
        let store = MemoryTokenStore::with_token("first");
        let other = store.clone();

        other.save("second").unwrap();
        assert_eq!(store.load().as_deref(), Some("second"));

        store.clear().unwrap();
        assert!(other.load().is_none());
    }

    #[test]
    fn test_blank_token_is_absent() {
        let store = MemoryTokenStore::new();
        store.save("   ").unwrap();
        assert!(store.load().is_none());
    }
}
