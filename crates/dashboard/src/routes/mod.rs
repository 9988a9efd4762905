//! HTTP route handlers for the dashboard.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                      - Health check
//!
//! # Dashboard
//! GET  /                            - Overview: metrics, sales chart, recent orders
//! POST /analyze                     - AI store analysis (HTMX fragment)
//! POST /refresh                     - Re-fetch store data
//!
//! # Products
//! GET  /products                    - Product listing
//! POST /products/{id}/enhance       - AI product copy (HTMX fragment)
//!
//! # Settings
//! GET  /settings                    - Store connection form
//! POST /settings                    - Validate and save a store connection
//! POST /settings/demo               - Switch back to demo data
//! ```
//!
//! Page handlers render full Askama templates; the AI endpoints return
//! HTML fragments swapped in by HTMX.

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub mod dashboard;
pub mod products;
pub mod settings;

pub fn routes() -> Router<AppState> {
    Router::new()
        // Dashboard
        .route("/", get(dashboard::index))
        .route("/analyze", post(dashboard::analyze))
        .route("/refresh", post(dashboard::refresh))
        // Products
        .route("/products", get(products::index))
        .route("/products/{id}/enhance", post(products::enhance))
        // Settings
        .route("/settings", get(settings::index).post(settings::save))
        .route("/settings/demo", post(settings::use_demo))
}
