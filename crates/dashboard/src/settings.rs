//! Persisted store-connection settings.
//!
//! The shop URL and access token are supplied by the user on the settings
//! screen and serialized as JSON to a local file (`SETTINGS_PATH`). The file
//! is read exactly once at startup; afterwards the active client is the
//! source of truth and the file is only rewritten on a successful save.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Errors reading or writing the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed settings file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Store connection credentials.
///
/// Implements `Debug` manually to redact the access token.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreSettings {
    /// Shop base URL as entered by the user (scheme optional).
    pub shop_url: String,
    /// EasyStore private-app access token.
    pub access_token: String,
}

impl std::fmt::Debug for StoreSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreSettings")
            .field("shop_url", &self.shop_url)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

impl StoreSettings {
    /// Load settings from `path`.
    ///
    /// Returns `Ok(None)` if the file does not exist yet (first run).
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Option<Self>, SettingsError> {
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&raw)?;
        Ok(Some(settings))
    }

    /// Persist settings to `path` as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    /// Shop host for the sidebar connection badge (scheme and path stripped).
    #[must_use]
    pub fn display_domain(&self) -> String {
        let normalized = crate::easystore::normalize_base_url(&self.shop_url);
        Url::parse(&normalized)
            .ok()
            .and_then(|url| url.host_str().map(ToOwned::to_owned))
            .unwrap_or_else(|| self.shop_url.clone())
    }
}
