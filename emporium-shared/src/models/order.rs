use serde::{Deserialize, Serialize};

use super::de;

/// A past order as shown in the my-orders views.
///
/// The orders backend is not wired up yet; the UI renders demo data in
/// this shape until it is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order identifier.
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,

    /// Name of the ordering customer.
    pub customer_name: String,

    /// Payment state, e.g. "Paid" or "Refunded".
    pub payment_status: String,

    /// Display amount, currency included.
    pub amount: String,

    /// Shipping address summary.
    pub address: String,

    /// Display date.
    pub date: String,

    /// Fulfilment state, e.g. "Confirmed" or "Cancelled".
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_accepts_numeric_id() {
        let body = r#"{
            "id": 300, "customerName": "John", "paymentStatus": "Paid",
            "amount": "$400", "address": "Los Angeles",
            "date": "9-Jan-2022", "status": "Confirmed"
        }"#;
        let order: Order = serde_json::from_str(body).unwrap();
        assert_eq!(order.id, "300");
        assert_eq!(order.status, "Confirmed");
    }
}
