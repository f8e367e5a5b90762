//! Durable bearer-token storage.
//!
//! A single file under the app config directory holds the raw token. It is
//! written on login, removed on logout or on a detected unauthorized
//! response, and read once at client construction to seed the session
//! slice. Writes happen synchronously with the matching state transition.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

/// Fixed file name under [`crate::config::app_config_dir`].
const TOKEN_FILE_NAME: &str = "token";

/// Errors from durable token storage.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to write token file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove token file '{path}': {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// File-backed token store.
#[derive(Debug, Clone)]
pub struct TokenStorage {
    path: PathBuf,
}

impl TokenStorage {
    /// Storage at the default location.
    pub fn new_default() -> Self {
        Self {
            path: crate::config::app_config_dir().join(TOKEN_FILE_NAME),
        }
    }

    /// Storage at an explicit path. Used by tests and embedders.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the persisted token, if any.
    ///
    /// Missing file, unreadable file, or an empty file all read as "no
    /// token"; a read failure is logged but never fails startup.
    pub fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(token.to_string())
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read token file");
                None
            }
        }
    }

    /// Persist the token, creating the parent directory if needed.
    pub fn store(&self, token: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::Write {
                path: self.path.clone(),
                source: e,
            })?;
        }
        fs::write(&self.path, token).map_err(|e| StorageError::Write {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Remove the persisted token. Idempotent: a missing file is success.
    pub fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Remove {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}
