//! Fixture records for demo mode.
//!
//! Demo mode serves these fixed records (3 products, 3 orders, 3 customers)
//! after a short simulated network delay, so the dashboard is fully usable
//! without store credentials.

use std::time::Duration;

use easystore_ai_core::{FinancialStatus, FulfillmentStatus};

use super::types::{Customer, Order, OrderCustomer, Product, ProductImage, ProductVariant, Shop};

/// Simulated network latency for demo-mode fetches.
pub const MOCK_DELAY: Duration = Duration::from_millis(500);

/// The demo shop record.
#[must_use]
pub fn shop() -> Shop {
    Shop {
        id: 1,
        name: "Demo Store".to_string(),
        domain: "demo.easystore.co".to_string(),
        email: "demo@example.com".to_string(),
        currency: "USD".to_string(),
        timezone: "UTC".to_string(),
    }
}

/// The three demo catalog products.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: 101,
            title: "Minimalist Leather Backpack".to_string(),
            handle: "minimalist-leather-backpack".to_string(),
            body_html: "<p>Handcrafted from premium genuine leather.</p>".to_string(),
            vendor: "Urban Carry".to_string(),
            product_type: "Bags".to_string(),
            created_at: "2023-10-15T10:00:00Z".to_string(),
            updated_at: "2023-11-01T12:00:00Z".to_string(),
            published_at: Some("2023-10-15T10:00:00Z".to_string()),
            tags: "leather, bag, travel".to_string(),
            variants: vec![ProductVariant {
                id: 1001,
                product_id: 101,
                title: "Black".to_string(),
                price: "129.99".to_string(),
                sku: "BP-BLK-001".to_string(),
                inventory_quantity: 15,
            }],
            images: vec![ProductImage {
                id: 501,
                product_id: 101,
                src: "https://picsum.photos/400/400?random=1".to_string(),
            }],
        },
        Product {
            id: 102,
            title: "Wireless Noise Cancelling Headphones".to_string(),
            handle: "wireless-nc-headphones".to_string(),
            body_html: "<p>Experience silence with our advanced ANC technology.</p>".to_string(),
            vendor: "AudioTech".to_string(),
            product_type: "Electronics".to_string(),
            created_at: "2023-10-20T09:30:00Z".to_string(),
            updated_at: "2023-11-05T14:20:00Z".to_string(),
            published_at: Some("2023-10-20T09:30:00Z".to_string()),
            tags: "audio, wireless, bluetooth".to_string(),
            variants: vec![ProductVariant {
                id: 1002,
                product_id: 102,
                title: "Silver".to_string(),
                price: "249.00".to_string(),
                sku: "HP-SLV-002".to_string(),
                inventory_quantity: 8,
            }],
            images: vec![ProductImage {
                id: 502,
                product_id: 102,
                src: "https://picsum.photos/400/400?random=2".to_string(),
            }],
        },
        Product {
            id: 103,
            title: "Organic Cotton T-Shirt".to_string(),
            handle: "organic-cotton-tshirt".to_string(),
            body_html: "<p>Soft, sustainable, and stylish.</p>".to_string(),
            vendor: "EcoWear".to_string(),
            product_type: "Apparel".to_string(),
            created_at: "2023-09-01T08:00:00Z".to_string(),
            updated_at: "2023-10-12T11:00:00Z".to_string(),
            published_at: Some("2023-09-01T08:00:00Z".to_string()),
            tags: "clothing, eco, cotton".to_string(),
            variants: vec![ProductVariant {
                id: 1003,
                product_id: 103,
                title: "L / White".to_string(),
                price: "29.50".to_string(),
                sku: "TS-WHT-L".to_string(),
                inventory_quantity: 45,
            }],
            images: vec![ProductImage {
                id: 503,
                product_id: 103,
                src: "https://picsum.photos/400/400?random=3".to_string(),
            }],
        },
    ]
}

/// The three demo orders.
#[must_use]
pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: 201,
            order_number: "#1001".to_string(),
            email: "customer@example.com".to_string(),
            created_at: "2023-11-10T14:30:00Z".to_string(),
            currency: "USD".to_string(),
            total_price: "129.99".to_string(),
            subtotal_price: "120.00".to_string(),
            financial_status: FinancialStatus::Paid,
            fulfillment_status: Some(FulfillmentStatus::Fulfilled),
            customer: OrderCustomer {
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                email: "john@example.com".to_string(),
            },
        },
        Order {
            id: 202,
            order_number: "#1002".to_string(),
            email: "jane@test.com".to_string(),
            created_at: "2023-11-11T09:15:00Z".to_string(),
            currency: "USD".to_string(),
            total_price: "249.00".to_string(),
            subtotal_price: "240.00".to_string(),
            financial_status: FinancialStatus::Paid,
            fulfillment_status: None,
            customer: OrderCustomer {
                first_name: "Jane".to_string(),
                last_name: "Smith".to_string(),
                email: "jane@test.com".to_string(),
            },
        },
        Order {
            id: 203,
            order_number: "#1003".to_string(),
            email: "bob@builder.com".to_string(),
            created_at: "2023-11-12T16:45:00Z".to_string(),
            currency: "USD".to_string(),
            total_price: "59.00".to_string(),
            subtotal_price: "50.00".to_string(),
            financial_status: FinancialStatus::Pending,
            fulfillment_status: None,
            customer: OrderCustomer {
                first_name: "Bob".to_string(),
                last_name: "Jones".to_string(),
                email: "bob@builder.com".to_string(),
            },
        },
    ]
}

/// The three demo customers.
#[must_use]
pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: 301,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@example.com".to_string(),
            orders_count: 5,
            total_spent: "540.00".to_string(),
            currency: "USD".to_string(),
            created_at: "2023-01-15T10:00:00Z".to_string(),
        },
        Customer {
            id: 302,
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            email: "jane@test.com".to_string(),
            orders_count: 12,
            total_spent: "1250.00".to_string(),
            currency: "USD".to_string(),
            created_at: "2023-02-20T14:00:00Z".to_string(),
        },
        Customer {
            id: 303,
            first_name: "Alice".to_string(),
            last_name: "Wonder".to_string(),
            email: "alice@wonder.com".to_string(),
            orders_count: 1,
            total_spent: "45.00".to_string(),
            currency: "USD".to_string(),
            created_at: "2023-11-01T09:00:00Z".to_string(),
        },
    ]
}
