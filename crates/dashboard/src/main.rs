//! EasyStore AI Dashboard - storefront management with AI assistance.
//!
//! This binary serves the dashboard on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework with HTMX for interactivity
//! - Askama templates for server-side rendering
//! - EasyStore REST API for products, orders, and customers
//! - Gemini API for product copy and store analysis
//!
//! Without saved store credentials the app runs in demo mode, serving
//! built-in fixture data so every page works out of the box.

#![cfg_attr(not(test), forbid(unsafe_code))]

use easystore_ai_dashboard::config::DashboardConfig;
use easystore_ai_dashboard::easystore::EasyStoreClient;
use easystore_ai_dashboard::settings::StoreSettings;
use easystore_ai_dashboard::state::AppState;

use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &DashboardConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            sample_rate: config.sentry_sample_rate,
            traces_sample_rate: config.sentry_traces_sample_rate,
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

/// Build the initial store client from the saved settings file.
///
/// This is the only settings-file read; handlers work off the copy
/// cached in `AppState`. A missing or malformed file means demo mode;
/// a malformed file is logged, not fatal.
fn initial_client(config: &DashboardConfig) -> (EasyStoreClient, Option<StoreSettings>) {
    match StoreSettings::load(&config.settings_path) {
        Ok(Some(settings)) => {
            tracing::info!(shop = %settings.display_domain(), "Using saved store connection");
            (EasyStoreClient::connect(&settings), Some(settings))
        }
        Ok(None) => {
            tracing::info!("No saved store connection, starting in demo mode");
            (EasyStoreClient::demo(), None)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Settings file unreadable, starting in demo mode");
            (EasyStoreClient::demo(), None)
        }
    }
}

#[tokio::main]
async fn main() {
    // Load configuration from environment (needed for Sentry init)
    let config = DashboardConfig::from_env().expect("Failed to load configuration");

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Initialize tracing with EnvFilter and Sentry integration
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "easystore_ai_dashboard=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let (store, settings) = initial_client(&config);
    let addr = config.socket_addr();
    let state = AppState::new(config, store, settings);

    // Fetch the first snapshot up front; pages render empty until a
    // refresh succeeds, so a failure here is logged and not fatal
    if let Err(e) = state.refresh().await {
        tracing::error!(error = %e, "Initial store data fetch failed");
    }

    let app = easystore_ai_dashboard::app(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    tracing::info!("dashboard listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
