//! Credential presence check guarding protected routes.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::client::routes::Route;

/// Storage key of the session token.
pub const TOKEN_KEY: &str = "token";

pub trait CredentialProvider {
    fn has_valid_credential(&self) -> bool;
}

/// Read access to persistent client-side storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
}

/// Sink for redirects issued by guards.
pub trait Navigator {
    fn navigate(&self, route: Route);
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage is not a JSON object: {0}")]
    Json(#[from] serde_json::Error),
}

/// String map persisted as a single JSON object on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file reads as an empty map.
    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        }
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.read_all() {
            Ok(mut entries) => entries.remove(key),
            Err(err) => {
                log::warn!("Cannot read {}: {err}", self.path.display());
                None
            }
        }
    }
}

/// Authenticated iff a non-empty token is stored. The token is not inspected.
#[derive(Debug, Clone)]
pub struct StoredToken<S> {
    store: S,
}

impl<S: KeyValueStore> StoredToken<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> CredentialProvider for StoredToken<S> {
    fn has_valid_credential(&self) -> bool {
        self.store
            .get(TOKEN_KEY)
            .is_some_and(|token| !token.is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct AuthGuard<C> {
    credentials: C,
}

impl<C: CredentialProvider> AuthGuard<C> {
    pub fn new(credentials: C) -> Self {
        Self { credentials }
    }

    /// Permits navigation when a credential is present, otherwise sends the
    /// navigator to the login route and denies it.
    pub fn can_activate(&self, navigator: &impl Navigator) -> bool {
        if self.credentials.has_valid_credential() {
            return true;
        }
        log::info!("No credential present, redirecting to {}", Route::Login.path());
        navigator.navigate(Route::Login);
        false
    }
}
