//! Dashboard route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::instrument;

use easystore_ai_core::{format_amount, fulfillment_label, parse_amount, sum_amounts};

use crate::data::StoreData;
use crate::easystore::types::Order;
use crate::filters;
use crate::gemini::types::StoreAnalysis;
use crate::state::AppState;

/// Connection banner shown on every page.
#[derive(Debug, Clone)]
pub struct ConnectionView {
    /// "Demo data" or the connected shop domain.
    pub label: String,
    pub is_demo: bool,
    /// Pre-formatted refresh timestamp, empty before the first fetch.
    pub refreshed_at: String,
}

impl ConnectionView {
    pub async fn build(state: &AppState) -> Self {
        let client = state.store_client().await;
        let data = state.data().await;
        let label = if client.is_demo() {
            "Demo data".to_string()
        } else if let Some(shop) = &data.shop {
            shop.domain.clone()
        } else {
            // Unrefreshed snapshot; fall back to the cached settings
            state
                .saved_settings()
                .await
                .map_or_else(|| "Connected store".to_string(), |s| s.display_domain())
        };
        Self {
            label,
            is_demo: client.is_demo(),
            refreshed_at: data
                .refreshed_at
                .map(|t| t.format("%H:%M:%S UTC").to_string())
                .unwrap_or_default(),
        }
    }
}

/// Dashboard metrics.
#[derive(Debug, Clone)]
pub struct DashboardMetrics {
    pub revenue: String,
    pub orders: String,
    pub customers: String,
    pub products: String,
}

/// Recent order view for the dashboard table.
#[derive(Debug, Clone)]
pub struct RecentOrderView {
    pub number: String,
    pub customer_name: String,
    pub date: String,
    pub total: String,
    pub status: String,
}

impl From<&Order> for RecentOrderView {
    fn from(order: &Order) -> Self {
        Self {
            number: order.order_number.clone(),
            customer_name: order.customer.display_name(),
            date: order.created_at.clone(),
            total: order.total_price.clone(),
            status: fulfillment_label(order.fulfillment_status).to_string(),
        }
    }
}

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub connection: ConnectionView,
    pub current_path: String,
    pub metrics: DashboardMetrics,
    pub chart_points: String,
    pub has_chart: bool,
    pub recent_orders: Vec<RecentOrderView>,
}

/// AI analysis fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/analysis.html")]
pub struct AnalysisTemplate {
    pub analysis: StoreAnalysis,
}

/// Inline alert fragment, used when an AI call fails.
#[derive(Template, WebTemplate)]
#[template(path = "partials/alert.html")]
pub struct AlertTemplate {
    pub message: String,
}

/// Build SVG polyline points from order totals, oldest order first.
///
/// Returns an empty string for fewer than two orders; a one-point line
/// renders as nothing anyway.
fn chart_points(orders: &[Order]) -> String {
    const WIDTH: f64 = 600.0;
    const HEIGHT: f64 = 160.0;
    const PAD: f64 = 8.0;

    if orders.len() < 2 {
        return String::new();
    }

    // Orders arrive newest-first; plot left to right in time order
    let totals: Vec<Decimal> = orders
        .iter()
        .rev()
        .map(|o| parse_amount(&o.total_price))
        .collect();
    let max = totals
        .iter()
        .copied()
        .max()
        .unwrap_or(Decimal::ONE)
        .to_f64()
        .filter(|m| *m > 0.0)
        .unwrap_or(1.0);

    let step = (WIDTH - 2.0 * PAD) / (totals.len() - 1) as f64;
    totals
        .iter()
        .enumerate()
        .map(|(i, total)| {
            let value = total.to_f64().unwrap_or(0.0);
            let x = PAD + step * i as f64;
            let y = HEIGHT - PAD - (value / max) * (HEIGHT - 2.0 * PAD);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn build_metrics(data: &StoreData) -> DashboardMetrics {
    let revenue = sum_amounts(data.orders.iter().map(|o| o.total_price.as_str()));
    DashboardMetrics {
        revenue: format_amount(revenue),
        orders: data.orders.len().to_string(),
        customers: data.customers.len().to_string(),
        products: data.products.len().to_string(),
    }
}

/// Dashboard page handler.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> DashboardTemplate {
    let data = state.data().await;
    let points = chart_points(&data.orders);

    DashboardTemplate {
        connection: ConnectionView::build(&state).await,
        current_path: "/".to_string(),
        metrics: build_metrics(&data),
        has_chart: !points.is_empty(),
        chart_points: points,
        recent_orders: data.orders.iter().map(RecentOrderView::from).collect(),
    }
}

/// AI store analysis handler (HTMX fragment).
#[instrument(skip(state))]
pub async fn analyze(State(state): State<AppState>) -> Response {
    let data = state.data().await;
    match state
        .gemini()
        .analyze_store_performance(&data.orders, &data.customers)
        .await
    {
        Ok(analysis) => AnalysisTemplate { analysis }.into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Store analysis failed");
            sentry::capture_error(&e);
            AlertTemplate {
                message: "Analysis is unavailable right now. Please try again in a moment."
                    .to_string(),
            }
            .into_response()
        }
    }
}

/// Re-fetch the store data snapshot, then return to the dashboard.
#[instrument(skip(state))]
pub async fn refresh(State(state): State<AppState>) -> Redirect {
    if let Err(e) = state.refresh().await {
        tracing::error!(error = %e, "Store data refresh failed");
        sentry::capture_error(&e);
    }
    Redirect::to("/")
}
