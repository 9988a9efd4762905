//! Core types for the EasyStore AI dashboard.
//!
//! This module provides helpers for the domain concepts shared across the
//! workspace: decimal-string money handling and order statuses.

pub mod money;
pub mod status;

pub use money::{average_amount, format_amount, parse_amount, sum_amounts};
pub use status::{FinancialStatus, FulfillmentStatus, fulfillment_label};
