//! Integration tests for the EasyStore AI dashboard.
//!
//! Each test spawns the full application in-process on a loopback port
//! and drives it with a plain HTTP client. The app starts in demo mode,
//! so no store credentials or external services are needed.
//!
//! Run with: `cargo test -p easystore-ai-integration-tests`

use secrecy::SecretString;

use easystore_ai_dashboard::config::{DashboardConfig, GeminiConfig};
use easystore_ai_dashboard::easystore::EasyStoreClient;
use easystore_ai_dashboard::state::AppState;

/// A running test instance of the dashboard.
pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    /// Keeps the per-test settings directory alive.
    _settings_dir: tempfile::TempDir,
}

/// Configuration for a test instance, isolated to a temp directory.
fn test_config(settings_dir: &tempfile::TempDir) -> DashboardConfig {
    DashboardConfig {
        host: "127.0.0.1".parse().expect("valid address"),
        port: 0,
        gemini: GeminiConfig {
            api_key: SecretString::from("test-api-key-0123456789abcdef"),
            model: "gemini-2.5-flash".to_string(),
        },
        settings_path: settings_dir.path().join("easystore-settings.json"),
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 1.0,
    }
}

/// Spawn the dashboard in demo mode with a fresh data snapshot.
///
/// # Panics
///
/// Panics if the server cannot be started; tests cannot proceed without it.
pub async fn spawn_app() -> TestApp {
    let settings_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let state = AppState::new(test_config(&settings_dir), EasyStoreClient::demo(), None);
    state.refresh().await.expect("Demo data fetch failed");

    let app = easystore_ai_dashboard::app(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    // Redirects are asserted explicitly, so don't follow them
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to build HTTP client");

    TestApp {
        address: format!("http://{addr}"),
        client,
        _settings_dir: settings_dir,
    }
}
