//! EasyStore REST API integration.
//!
//! A thin read-only client over four endpoints (`shop`, `products`, `orders`,
//! `customers`), normalizing both demo-mode fixtures and live responses into
//! the same domain shapes. Mode is decided once, at construction; see
//! [`client::EasyStoreClient`].

mod client;
mod error;
pub mod mock;
pub mod types;

pub use client::{EasyStoreClient, normalize_base_url};
pub use error::EasyStoreError;
