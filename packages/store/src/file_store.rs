//! # Filesystem-backed token store
//!
//! [`FileTokenStore`] keeps the bearer token in a single file so native builds
//! stay logged in across restarts, the way the browser build relies on
//! `localStorage`.
//!
//! Use [`FileTokenStore::in_data_dir`] for the platform default:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/noteflow/accessToken` |
//! | Linux | `~/.local/share/noteflow/accessToken` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\noteflow\accessToken` |

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::tokens::{non_blank, TokenStore, TokenStoreError, TOKEN_KEY};

/// Filesystem-backed TokenStore for native builds.
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store the token at `<base>/accessToken`.
    pub fn new(base: PathBuf) -> Self {
        Self {
            path: base.join(TOKEN_KEY),
        }
    }

    /// Store the token under the platform data directory, or the working
    /// directory when none is known.
    pub fn in_data_dir() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("noteflow");
        Self::new(base)
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => non_blank(content),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read token file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token.trim())?;
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("noteflow"));
        assert!(store.load().is_none());

        store.save("token-123\n").unwrap();

        // Re-open from the same directory
        let reopened = FileTokenStore::new(dir.path().join("noteflow"));
        assert_eq!(reopened.load().as_deref(), Some("token-123"));

        reopened.clear().unwrap();
        assert!(store.load().is_none());
        assert!(!dir.path().join("noteflow").join(TOKEN_KEY).exists());
    }

    #[test]
    fn test_clear_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().to_path_buf());
        store.clear().unwrap();
    }
}
