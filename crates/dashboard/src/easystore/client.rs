//! EasyStore REST API client.
//!
//! The client operates in exactly one of two modes, chosen at construction:
//! demo (fixture records, no network) or live (authenticated HTTPS GETs
//! against the configured shop). The client is an immutable value; applying
//! new credentials means constructing a new client and swapping it into the
//! application state.

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::settings::StoreSettings;

use super::error::EasyStoreError;
use super::mock;
use super::types::{
    Customer, CustomersEnvelope, Order, OrdersEnvelope, Product, ProductsEnvelope, Shop,
    ShopEnvelope,
};

/// Auth header carrying the private-app access token.
const ACCESS_TOKEN_HEADER: &str = "EasyStore-Access-Token";

const SHOP_PATH: &str = "/api/1.0/shop";
/// 250 is the standard per-page maximum for the products resource.
const PRODUCTS_PATH: &str = "/api/1.0/products?limit=250";
/// Recent paid orders only; a single page, no cursor following.
const ORDERS_PATH: &str = "/api/1.0/orders?limit=50&financial_status=paid";
const CUSTOMERS_PATH: &str = "/api/1.0/customers?limit=50";

/// EasyStore API client.
///
/// Cheaply cloneable; all state lives behind an `Arc`.
#[derive(Clone)]
pub struct EasyStoreClient {
    inner: Arc<Backend>,
}

enum Backend {
    /// Fixture records after a simulated delay; no network.
    Demo,
    /// Authenticated GETs against a normalized base URL.
    Live(LiveStore),
}

struct LiveStore {
    http: reqwest::Client,
    base_url: String,
}

impl EasyStoreClient {
    /// Create a demo-mode client serving fixture data.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            inner: Arc::new(Backend::Demo),
        }
    }

    /// Create a live client from store settings.
    ///
    /// The shop URL is normalized (scheme prepended, trailing slash
    /// stripped). A missing or malformed token degrades to an empty auth
    /// header value, which the upstream API answers with 401.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client fails to build.
    #[must_use]
    pub fn connect(settings: &StoreSettings) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            ACCESS_TOKEN_HEADER,
            HeaderValue::from_str(&settings.access_token)
                .unwrap_or_else(|_| HeaderValue::from_static("")),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(Backend::Live(LiveStore {
                http,
                base_url: normalize_base_url(&settings.shop_url),
            })),
        }
    }

    /// Whether this client serves demo fixtures.
    #[must_use]
    pub fn is_demo(&self) -> bool {
        matches!(*self.inner, Backend::Demo)
    }

    /// Check that the configured shop is reachable with these credentials.
    ///
    /// Live mode performs a GET against the shop-info endpoint and returns
    /// true iff the request succeeds and deserializes; any network, HTTP, or
    /// parse failure yields false rather than an error. Demo mode is always
    /// connected.
    #[instrument(skip(self))]
    pub async fn validate_connection(&self) -> bool {
        let Backend::Live(live) = &*self.inner else {
            return true;
        };

        match live.fetch::<ShopEnvelope>(SHOP_PATH).await {
            Ok(envelope) => {
                tracing::info!(shop = %envelope.shop.name, "connected to shop");
                true
            }
            Err(e) => {
                tracing::warn!("connection validation failed: {e}");
                false
            }
        }
    }

    /// Fetch shop metadata.
    ///
    /// # Errors
    ///
    /// Returns an error on any transport or HTTP failure.
    #[instrument(skip(self))]
    pub async fn shop_info(&self) -> Result<Shop, EasyStoreError> {
        match &*self.inner {
            Backend::Demo => Ok(mock::shop()),
            Backend::Live(live) => {
                let envelope: ShopEnvelope = live.fetch(SHOP_PATH).await?;
                Ok(envelope.shop)
            }
        }
    }

    /// Fetch the first page of the product catalog.
    ///
    /// # Errors
    ///
    /// Returns an error on any transport or HTTP failure; no retry.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, EasyStoreError> {
        match &*self.inner {
            Backend::Demo => {
                tokio::time::sleep(mock::MOCK_DELAY).await;
                Ok(mock::products())
            }
            Backend::Live(live) => {
                let envelope: ProductsEnvelope = live.fetch(PRODUCTS_PATH).await?;
                Ok(envelope.products)
            }
        }
    }

    /// Fetch the most recent paid orders (single page).
    ///
    /// # Errors
    ///
    /// Returns an error on any transport or HTTP failure; no retry.
    #[instrument(skip(self))]
    pub async fn orders(&self) -> Result<Vec<Order>, EasyStoreError> {
        match &*self.inner {
            Backend::Demo => {
                tokio::time::sleep(mock::MOCK_DELAY).await;
                Ok(mock::orders())
            }
            Backend::Live(live) => {
                let envelope: OrdersEnvelope = live.fetch(ORDERS_PATH).await?;
                Ok(envelope.orders)
            }
        }
    }

    /// Fetch the first page of customers.
    ///
    /// # Errors
    ///
    /// Returns an error on any transport or HTTP failure; no retry.
    #[instrument(skip(self))]
    pub async fn customers(&self) -> Result<Vec<Customer>, EasyStoreError> {
        match &*self.inner {
            Backend::Demo => {
                tokio::time::sleep(mock::MOCK_DELAY).await;
                Ok(mock::customers())
            }
            Backend::Live(live) => {
                let envelope: CustomersEnvelope = live.fetch(CUSTOMERS_PATH).await?;
                Ok(envelope.customers)
            }
        }
    }
}

impl LiveStore {
    /// GET a resource and deserialize its envelope.
    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, EasyStoreError> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "easystore request");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(EasyStoreError::Api {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| EasyStoreError::Parse(e.to_string()))
    }
}

/// Normalize a user-entered shop URL into a request base URL.
///
/// Strips a single trailing slash and prepends `https://` when no scheme is
/// present. An empty input stays empty.
#[must_use]
pub fn normalize_base_url(shop_url: &str) -> String {
    let mut url = shop_url.trim();
    if url.is_empty() {
        return String::new();
    }
    if let Some(stripped) = url.strip_suffix('/') {
        url = stripped;
    }
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}
