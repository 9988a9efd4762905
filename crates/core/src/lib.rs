//! EasyStore AI Core - Shared domain types.
//!
//! This crate provides common types used by the dashboard binary and the
//! integration-test crate.
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Monetary-string helpers and order status enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
