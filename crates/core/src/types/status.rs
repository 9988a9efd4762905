//! Order status enums.

use serde::{Deserialize, Serialize};

/// Order financial status.
///
/// The EasyStore API uses lowercase string values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FinancialStatus {
    #[default]
    Pending,
    Paid,
    Refunded,
}

impl FinancialStatus {
    /// Display label for tables and badges.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Refunded => "Refunded",
        }
    }
}

/// Order fulfillment status.
///
/// Orders carry `Option<FulfillmentStatus>`; the API sends `null` for
/// unfulfilled orders rather than a dedicated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FulfillmentStatus {
    Fulfilled,
    Partial,
}

/// Display label for an optional fulfillment status.
#[must_use]
pub const fn fulfillment_label(status: Option<FulfillmentStatus>) -> &'static str {
    match status {
        Some(FulfillmentStatus::Fulfilled) => "Fulfilled",
        Some(FulfillmentStatus::Partial) => "Partial",
        None => "Unfulfilled",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_financial_status_deserializes_lowercase() {
        let status: FinancialStatus = serde_json::from_str("\"paid\"").unwrap();
        assert_eq!(status, FinancialStatus::Paid);

        let status: FinancialStatus = serde_json::from_str("\"refunded\"").unwrap();
        assert_eq!(status, FinancialStatus::Refunded);
    }

    #[test]
    fn test_fulfillment_status_null_is_none() {
        let status: Option<FulfillmentStatus> = serde_json::from_str("null").unwrap();
        assert_eq!(status, None);

        let status: Option<FulfillmentStatus> = serde_json::from_str("\"partial\"").unwrap();
        assert_eq!(status, Some(FulfillmentStatus::Partial));
    }

    #[test]
    fn test_labels() {
        assert_eq!(FinancialStatus::Paid.label(), "Paid");
        assert_eq!(fulfillment_label(None), "Unfulfilled");
        assert_eq!(fulfillment_label(Some(FulfillmentStatus::Fulfilled)), "Fulfilled");
    }
}
