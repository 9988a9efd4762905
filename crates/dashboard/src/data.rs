//! In-memory snapshot of store data.
//!
//! The dashboard renders from a snapshot fetched in one shot rather than
//! hitting the store API per request. A refresh replaces the whole
//! snapshot or none of it; a partial fetch never leaks into views.

use chrono::{DateTime, Utc};

use crate::easystore::types::{Customer, Order, Product, Shop};
use crate::easystore::{EasyStoreClient, EasyStoreError};

/// One coherent snapshot of shop metadata, products, orders, and customers.
#[derive(Debug, Clone, Default)]
pub struct StoreData {
    pub shop: Option<Shop>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub customers: Vec<Customer>,
    /// When this snapshot was fetched. `None` for the empty initial state.
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl StoreData {
    /// Fetch a fresh snapshot from the store.
    ///
    /// All collections are fetched concurrently; if any one fails the
    /// whole fetch fails and no snapshot is produced.
    ///
    /// # Errors
    ///
    /// Returns the first fetch error encountered.
    pub async fn fetch_all(client: &EasyStoreClient) -> Result<Self, EasyStoreError> {
        let (shop, products, orders, customers) = tokio::try_join!(
            client.shop_info(),
            client.products(),
            client.orders(),
            client.customers()
        )?;

        Ok(Self {
            shop: Some(shop),
            products,
            orders,
            customers,
            refreshed_at: Some(Utc::now()),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_all_demo_snapshot() {
        let client = EasyStoreClient::demo();
        let data = StoreData::fetch_all(&client).await.unwrap();

        assert_eq!(data.products.len(), 3);
        assert_eq!(data.orders.len(), 3);
        assert_eq!(data.customers.len(), 3);
        assert_eq!(data.shop.map(|s| s.name), Some("Demo Store".to_string()));
        assert!(data.refreshed_at.is_some());
    }

    #[tokio::test]
    async fn test_fetch_all_is_all_or_nothing() {
        // A live client pointed at a closed port fails every collection,
        // so the caller's previous snapshot is never replaced.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let settings = crate::settings::StoreSettings {
            shop_url: format!("http://{addr}"),
            access_token: "test-token".to_string(),
        };
        let client = EasyStoreClient::connect(&settings);

        let previous = StoreData::default();
        let result = StoreData::fetch_all(&client).await;
        assert!(result.is_err());
        assert!(previous.refreshed_at.is_none());
        assert!(previous.products.is_empty());
    }
}
