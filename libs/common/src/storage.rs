//! Token slot storage for the Reservant client
//!
//! This module provides the single named slot holding the current bearer
//! token as an opaque string. The slot is overwritten wholesale on login and
//! cleared wholesale on logout; readers always see a complete token or none.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{info, warn};

use crate::error::{StorageError, StorageResult};

/// Configuration for the token slot
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Path of the file backing the slot
    pub token_file: PathBuf,
}

impl StorageConfig {
    /// Create a new StorageConfig from environment variables
    ///
    /// # Environment Variables
    /// - `RESERVANT_TOKEN_FILE`: path of the token file
    ///   (default: `.reservant/token` under the home directory, or under the
    ///   current directory when no home is set)
    pub fn from_env() -> StorageResult<Self> {
        let token_file = match std::env::var("RESERVANT_TOKEN_FILE") {
            Ok(path) if path.trim().is_empty() => {
                return Err(StorageError::Configuration(
                    "RESERVANT_TOKEN_FILE is set but empty".to_string(),
                ));
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => default_token_file(),
        };

        Ok(StorageConfig { token_file })
    }
}

fn default_token_file() -> PathBuf {
    let base = std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));
    base.join(".reservant").join("token")
}

/// The token slot shared by the session writer and every reader
///
/// Cloning returns a handle to the same slot. When a backing file is
/// configured, the file is read once at construction and rewritten on each
/// save so the session survives restarts.
#[derive(Clone)]
pub struct TokenStore {
    slot: Arc<Mutex<Option<String>>>,
    file: Option<PathBuf>,
}

impl TokenStore {
    /// Create a slot with no backing file
    pub fn in_memory() -> Self {
        TokenStore {
            slot: Arc::new(Mutex::new(None)),
            file: None,
        }
    }

    /// Create a slot backed by the given file, loading any stored token
    ///
    /// A missing or unreadable file loads as an empty slot.
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let initial = match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let token = contents.trim().to_string();
                if token.is_empty() { None } else { Some(token) }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("Failed to read token file {}: {}", path.display(), e);
                None
            }
        };

        TokenStore {
            slot: Arc::new(Mutex::new(initial)),
            file: Some(path),
        }
    }

    /// Create a slot from a storage configuration
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::with_file(config.token_file.clone())
    }

    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Replace the slot with the given token
    pub fn save(&self, token: &str) -> StorageResult<()> {
        if let Some(path) = &self.file {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(StorageError::Write)?;
            }
            std::fs::write(path, token).map_err(StorageError::Write)?;
        }

        *self.lock() = Some(token.to_string());
        info!("Token stored");
        Ok(())
    }

    /// Get the stored token, if any
    pub fn load(&self) -> Option<String> {
        self.lock().clone()
    }

    /// Empty the slot
    pub fn clear(&self) -> StorageResult<()> {
        if let Some(path) = &self.file {
            match std::fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(StorageError::Remove(e)),
            }
        }

        *self.lock() = None;
        info!("Token cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_round_trip() {
        let store = TokenStore::in_memory();
        assert_eq!(store.load(), None);

        store.save("header.payload.signature").expect("save failed");
        assert_eq!(store.load(), Some("header.payload.signature".to_string()));

        store.clear().expect("clear failed");
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_clones_share_the_slot() {
        let store = TokenStore::in_memory();
        let reader = store.clone();

        store.save("abc").expect("save failed");
        assert_eq!(reader.load(), Some("abc".to_string()));

        store.clear().expect("clear failed");
        assert_eq!(reader.load(), None);
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let store = TokenStore::in_memory();
        store.save("first").expect("save failed");
        store.save("second").expect("save failed");
        assert_eq!(store.load(), Some("second".to_string()));
    }

    #[test]
    #[serial_test::serial]
    fn test_config_rejects_empty_path() {
        // SAFETY: guarded by #[serial], no other thread touches the var
        unsafe { std::env::set_var("RESERVANT_TOKEN_FILE", "  ") };
        assert!(StorageConfig::from_env().is_err());

        unsafe { std::env::set_var("RESERVANT_TOKEN_FILE", "/tmp/reservant.token") };
        let config = StorageConfig::from_env().expect("Failed to create storage config");
        assert_eq!(config.token_file, PathBuf::from("/tmp/reservant.token"));

        unsafe { std::env::remove_var("RESERVANT_TOKEN_FILE") };
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let path = std::env::temp_dir().join(format!(
            "reservant_missing_{}.token",
            std::process::id()
        ));
        let store = TokenStore::with_file(&path);
        assert_eq!(store.load(), None);
    }
}
