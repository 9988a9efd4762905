//! Prompt construction and the response schemas that constrain the output.
//!
//! Store data is reduced to compact digests before prompting: the most recent
//! 30 orders and a three-number customer aggregate. Truncation is the only
//! defense against oversized prompts.

use serde::Serialize;
use serde_json::json;

use easystore_ai_core::average_amount;

use crate::easystore::types::{Customer, Order};

/// Number of orders embedded in the analysis prompt.
pub const ANALYSIS_ORDER_SAMPLE: usize = 30;

/// One order reduced to the fields the analysis cares about.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OrderDigest {
    pub date: String,
    pub total: String,
    pub currency: String,
}

/// Aggregate customer metrics embedded in the analysis prompt.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerMetrics {
    pub total_count: usize,
    /// Customers with more than one order.
    pub returning_count: usize,
    /// Mean lifetime spend, two decimals; the literal `"0"` when there are
    /// no customers.
    pub avg_spend: String,
}

/// Reduce orders to the analysis sample.
#[must_use]
pub fn summarize_orders(orders: &[Order]) -> Vec<OrderDigest> {
    orders
        .iter()
        .take(ANALYSIS_ORDER_SAMPLE)
        .map(|order| OrderDigest {
            date: order.created_at.clone(),
            total: order.total_price.clone(),
            currency: order.currency.clone(),
        })
        .collect()
}

/// Aggregate customer figures for the analysis prompt.
#[must_use]
pub fn customer_metrics(customers: &[Customer]) -> CustomerMetrics {
    CustomerMetrics {
        total_count: customers.len(),
        returning_count: customers.iter().filter(|c| c.orders_count > 1).count(),
        avg_spend: average_amount(customers.iter().map(|c| c.total_spent.as_str())),
    }
}

/// Prompt for product copy generation.
#[must_use]
pub fn product_description_prompt(name: &str, features: &str, tone: &str) -> String {
    format!(
        "Write a compelling product description for an e-commerce store.\n\
         Product Name: {name}\n\
         Key Features: {features}\n\
         Tone: {tone}\n\
         \n\
         Return the result in JSON format with the following fields:\n\
         - title: An SEO-optimized title\n\
         - description: The HTML description (keep it clean, use <p> and <ul> tags)\n\
         - tags: A comma-separated list of SEO tags"
    )
}

/// Prompt for store performance analysis, with the digests embedded as JSON.
#[must_use]
pub fn performance_prompt(orders: &[OrderDigest], metrics: &CustomerMetrics) -> String {
    let order_json = serde_json::to_string(orders).unwrap_or_else(|_| "[]".to_string());
    let metrics_json = serde_json::to_string(metrics).unwrap_or_else(|_| "{}".to_string());

    format!(
        "Analyze the performance of this e-commerce store based on the data provided.\n\
         \n\
         Recent Orders (Sample): {order_json}\n\
         Customer Metrics: {metrics_json}\n\
         \n\
         Provide a strategic summary, identify 2-3 key trends, and give 3 actionable \
         recommendations to improve revenue and customer retention."
    )
}

/// Response schema for product copy generation.
#[must_use]
pub fn product_copy_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "description": { "type": "STRING" },
            "tags": { "type": "STRING" }
        }
    })
}

/// Response schema for store performance analysis.
#[must_use]
pub fn store_analysis_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "trends": { "type": "ARRAY", "items": { "type": "STRING" } },
            "recommendations": { "type": "ARRAY", "items": { "type": "STRING" } }
        }
    })
}
