//! Domain records for the EasyStore REST API.
//!
//! Plain data with no behavior. Monetary fields stay decimal-formatted
//! strings (see `easystore_ai_core::types::money`); entities are fetched fresh per
//! session and never mutated locally.

use serde::{Deserialize, Serialize};

use easystore_ai_core::{FinancialStatus, FulfillmentStatus};

/// A product in the store catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub handle: String,
    #[serde(default)]
    pub body_html: String,
    #[serde(default)]
    pub vendor: String,
    #[serde(default)]
    pub product_type: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub published_at: Option<String>,
    /// Comma-separated tag list, as the API sends it.
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    #[serde(default)]
    pub images: Vec<ProductImage>,
}

impl Product {
    /// Total inventory across all variants.
    #[must_use]
    pub fn total_inventory(&self) -> i64 {
        self.variants.iter().map(|v| v.inventory_quantity).sum()
    }
}

/// A purchasable variant of a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductVariant {
    pub id: i64,
    pub product_id: i64,
    #[serde(default)]
    pub title: String,
    /// Decimal amount as string (preserves precision).
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub inventory_quantity: i64,
}

/// A product display image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductImage {
    pub id: i64,
    pub product_id: i64,
    pub src: String,
}

/// An order, immutable once fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub order_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub currency: String,
    /// Decimal amount as string.
    #[serde(default)]
    pub total_price: String,
    /// Decimal amount as string.
    #[serde(default)]
    pub subtotal_price: String,
    #[serde(default)]
    pub financial_status: FinancialStatus,
    #[serde(default)]
    pub fulfillment_status: Option<FulfillmentStatus>,
    /// Embedded customer snapshot.
    pub customer: OrderCustomer,
}

/// Customer snapshot embedded in an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderCustomer {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

impl OrderCustomer {
    /// Full display name, falling back to the email for nameless records.
    #[must_use]
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }
}

/// A customer with server-side aggregate figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub orders_count: i64,
    /// Lifetime spend, decimal amount as string.
    #[serde(default)]
    pub total_spent: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub created_at: String,
}

/// Read-only shop metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shop {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub timezone: String,
}

// =============================================================================
// Response Envelopes
// =============================================================================

/// `GET /api/1.0/shop` envelope.
#[derive(Debug, Deserialize)]
pub struct ShopEnvelope {
    pub shop: Shop,
}

/// `GET /api/1.0/products` envelope; a missing array means an empty catalog.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsEnvelope {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// `GET /api/1.0/orders` envelope.
#[derive(Debug, Default, Deserialize)]
pub struct OrdersEnvelope {
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// `GET /api/1.0/customers` envelope.
#[derive(Debug, Default, Deserialize)]
pub struct CustomersEnvelope {
    #[serde(default)]
    pub customers: Vec<Customer>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_deserializes_with_null_fulfillment() {
        let json = r##"{
            "id": 202,
            "order_number": "#1002",
            "email": "jane@test.com",
            "created_at": "2023-11-11T09:15:00Z",
            "currency": "USD",
            "total_price": "249.00",
            "subtotal_price": "240.00",
            "financial_status": "paid",
            "fulfillment_status": null,
            "customer": { "first_name": "Jane", "last_name": "Smith", "email": "jane@test.com" }
        }"##;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.financial_status, FinancialStatus::Paid);
        assert_eq!(order.fulfillment_status, None);
        assert_eq!(order.customer.display_name(), "Jane Smith");
    }

    #[test]
    fn test_envelope_missing_array_defaults_empty() {
        let envelope: ProductsEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.products.is_empty());

        let envelope: OrdersEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.orders.is_empty());

        let envelope: CustomersEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.customers.is_empty());
    }

    #[test]
    fn test_total_inventory_sums_variants() {
        let json = r#"{
            "id": 101,
            "title": "Backpack",
            "variants": [
                { "id": 1, "product_id": 101, "title": "Black", "price": "10.00", "sku": "A", "inventory_quantity": 15 },
                { "id": 2, "product_id": 101, "title": "Brown", "price": "10.00", "sku": "B", "inventory_quantity": 7 }
            ]
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.total_inventory(), 22);
    }

    #[test]
    fn test_order_customer_display_name_falls_back_to_email() {
        let customer = OrderCustomer {
            first_name: String::new(),
            last_name: String::new(),
            email: "guest@example.com".to_string(),
        };
        assert_eq!(customer.display_name(), "guest@example.com");
    }
}
