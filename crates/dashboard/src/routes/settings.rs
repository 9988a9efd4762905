//! Store connection settings routes.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::easystore::EasyStoreClient;
use crate::error::AppError;
use crate::filters;
use crate::settings::StoreSettings;
use crate::state::AppState;

use super::dashboard::ConnectionView;

/// Settings page template.
#[derive(Template, WebTemplate)]
#[template(path = "settings.html")]
pub struct SettingsTemplate {
    pub connection: ConnectionView,
    pub current_path: String,
    /// Prefilled shop URL from the saved settings, empty in demo mode.
    pub shop_url: String,
    pub error_message: Option<String>,
}

/// Store connection form.
#[derive(Debug, Deserialize)]
pub struct SettingsForm {
    #[serde(default)]
    pub shop_url: String,
    #[serde(default)]
    pub access_token: String,
}

async fn settings_page(state: &AppState, error_message: Option<String>) -> SettingsTemplate {
    let shop_url = state
        .saved_settings()
        .await
        .map(|s| s.shop_url)
        .unwrap_or_default();

    SettingsTemplate {
        connection: ConnectionView::build(state).await,
        current_path: "/settings".to_string(),
        shop_url,
        error_message,
    }
}

/// Settings page handler.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> SettingsTemplate {
    settings_page(&state, None).await
}

/// Validate and persist a store connection.
///
/// The new client is checked against the store before anything changes:
/// a failed validation re-renders the form and leaves the active client
/// and saved settings untouched.
#[instrument(skip(state, form))]
pub async fn save(
    State(state): State<AppState>,
    Form(form): Form<SettingsForm>,
) -> Result<Response, AppError> {
    let settings = StoreSettings {
        shop_url: form.shop_url.trim().to_string(),
        access_token: form.access_token.trim().to_string(),
    };

    if settings.shop_url.is_empty() || settings.access_token.is_empty() {
        let page = settings_page(
            &state,
            Some("Both the store URL and access token are required.".to_string()),
        )
        .await;
        return Ok(page.into_response());
    }

    let client = EasyStoreClient::connect(&settings);
    if !client.validate_connection().await {
        tracing::warn!(shop = %settings.display_domain(), "Store connection validation failed");
        let page = settings_page(
            &state,
            Some("Could not connect to the store. Check the URL and access token.".to_string()),
        )
        .await;
        return Ok(page.into_response());
    }

    settings
        .save(&state.config().settings_path)
        .map_err(|e| AppError::Internal(format!("Failed to save settings: {e}")))?;
    state.swap_store_client(client).await;
    state.set_saved_settings(Some(settings)).await;

    if let Err(e) = state.refresh().await {
        tracing::error!(error = %e, "Initial fetch after connecting failed");
    }

    Ok(Redirect::to("/").into_response())
}

/// Switch back to demo data, discarding any saved connection.
#[instrument(skip(state))]
pub async fn use_demo(State(state): State<AppState>) -> Redirect {
    if let Err(e) = std::fs::remove_file(&state.config().settings_path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!(error = %e, "Failed to remove saved settings");
        }
    }

    state.swap_store_client(EasyStoreClient::demo()).await;
    state.set_saved_settings(None).await;
    if let Err(e) = state.refresh().await {
        tracing::error!(error = %e, "Demo data fetch failed");
    }
    Redirect::to("/")
}
