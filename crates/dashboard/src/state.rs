//! Shared application state.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::DashboardConfig;
use crate::data::StoreData;
use crate::easystore::{EasyStoreClient, EasyStoreError};
use crate::gemini::GeminiClient;
use crate::settings::StoreSettings;

/// Application state shared across all request handlers.
///
/// Cheaply cloneable. The store client, cached settings, and data snapshot
/// sit behind locks because settings changes swap them at runtime; the
/// config and Gemini client are fixed for the process lifetime.
///
/// The settings file is read once at startup; afterwards handlers read the
/// cached copy here, never the filesystem.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: DashboardConfig,
    gemini: GeminiClient,
    store: RwLock<EasyStoreClient>,
    settings: RwLock<Option<StoreSettings>>,
    data: RwLock<StoreData>,
}

impl AppState {
    #[must_use]
    pub fn new(
        config: DashboardConfig,
        store: EasyStoreClient,
        settings: Option<StoreSettings>,
    ) -> Self {
        let gemini = GeminiClient::new(&config.gemini);
        Self {
            inner: Arc::new(AppStateInner {
                config,
                gemini,
                store: RwLock::new(store),
                settings: RwLock::new(settings),
                data: RwLock::new(StoreData::default()),
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn gemini(&self) -> &GeminiClient {
        &self.inner.gemini
    }

    /// Current store client. Clients are cheap `Arc` clones.
    pub async fn store_client(&self) -> EasyStoreClient {
        self.inner.store.read().await.clone()
    }

    /// Replace the active store client.
    ///
    /// Callers validate the new client before swapping; the old client
    /// stays active until this call so a failed reconfiguration leaves
    /// the app untouched.
    pub async fn swap_store_client(&self, client: EasyStoreClient) {
        *self.inner.store.write().await = client;
    }

    /// Settings cached at startup or after the last successful save.
    pub async fn saved_settings(&self) -> Option<StoreSettings> {
        self.inner.settings.read().await.clone()
    }

    /// Update the cached settings alongside a client swap. `None` when the
    /// app falls back to demo data.
    pub async fn set_saved_settings(&self, settings: Option<StoreSettings>) {
        *self.inner.settings.write().await = settings;
    }

    /// Current data snapshot.
    pub async fn data(&self) -> StoreData {
        self.inner.data.read().await.clone()
    }

    /// Fetch a fresh snapshot and commit it.
    ///
    /// On failure the previous snapshot is kept as-is.
    ///
    /// # Errors
    ///
    /// Returns the fetch error without modifying the stored snapshot.
    pub async fn refresh(&self) -> Result<(), EasyStoreError> {
        let client = self.store_client().await;
        let fresh = StoreData::fetch_all(&client).await?;
        *self.inner.data.write().await = fresh;
        Ok(())
    }
}
