use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderStatusError {
    #[error("Invalid order status: {0}")]
    InvalidStatus(String),
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Completed,
    Shipped,
    Pending,
    Cancelled,
}

impl OrderStatus {
    /// Transition table: `pending -> {shipped, cancelled}`,
    /// `shipped -> {completed, cancelled}`; `completed` and `cancelled`
    /// are terminal. Re-asserting the current status is allowed.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        if self == next {
            return true;
        }
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Shipped)
                | (OrderStatus::Pending, OrderStatus::Cancelled)
                | (OrderStatus::Shipped, OrderStatus::Completed)
                | (OrderStatus::Shipped, OrderStatus::Cancelled)
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status_str = match self {
            OrderStatus::Completed => "completed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Pending => "pending",
            OrderStatus::Cancelled => "cancelled",
        };
        write!(f, "{status_str}")
    }
}

impl FromStr for OrderStatus {
    type Err = OrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "completed" => Ok(OrderStatus::Completed),
            "shipped" => Ok(OrderStatus::Shipped),
            "pending" => Ok(OrderStatus::Pending),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(OrderStatusError::InvalidStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub quantity: u32,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub customer_name: String,
    pub shipping_address: String,
    #[serde(default)]
    pub billing_address: String,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub shipping_fee: f64,
    #[serde(default)]
    pub tax: f64,
    #[serde(default)]
    pub payment_status: String,
    #[serde(default)]
    pub shipping_method: String,
    #[serde(default)]
    pub tracking_number: String,
    #[serde(default)]
    pub estimated_delivery: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("pending".parse::<OrderStatus>().unwrap(), OrderStatus::Pending);
        assert_eq!("Shipped".parse::<OrderStatus>().unwrap(), OrderStatus::Shipped);
        assert_eq!("COMPLETED".parse::<OrderStatus>().unwrap(), OrderStatus::Completed);
        assert!("unknown".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn status_round_trips_through_display() {
        for status in [
            OrderStatus::Completed,
            OrderStatus::Shipped,
            OrderStatus::Pending,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(status.to_string().parse::<OrderStatus>().unwrap(), status);
        }
    }

    #[test]
    fn transition_table_is_enforced() {
        use OrderStatus::*;

        assert!(Pending.can_transition_to(Shipped));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Shipped.can_transition_to(Completed));
        assert!(Shipped.can_transition_to(Cancelled));

        assert!(!Pending.can_transition_to(Completed));
        assert!(!Shipped.can_transition_to(Pending));
        assert!(!Completed.can_transition_to(Shipped));
        assert!(!Completed.can_transition_to(Pending));
        assert!(!Cancelled.can_transition_to(Pending));
        assert!(!Cancelled.can_transition_to(Completed));
    }

    #[test]
    fn reasserting_the_current_status_is_allowed() {
        use OrderStatus::*;
        for status in [Completed, Shipped, Pending, Cancelled] {
            assert!(status.can_transition_to(status));
        }
    }

    #[test]
    fn order_serializes_with_camel_case_keys() {
        let order = Order {
            id: "123456".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            customer_name: "John Doe".to_string(),
            shipping_address: "123 Main St".to_string(),
            billing_address: "123 Main St".to_string(),
            items: vec![],
            status: OrderStatus::Pending,
            total_amount: 0.0,
            discount: 0.0,
            shipping_fee: 0.0,
            tax: 0.0,
            payment_status: "unpaid".to_string(),
            shipping_method: String::new(),
            tracking_number: "123456789".to_string(),
            estimated_delivery: "3 days".to_string(),
        };
        let json = serde_json::to_value(&order).unwrap();
        assert!(json.get("customerName").is_some());
        assert!(json.get("totalAmount").is_some());
        assert_eq!(json.get("status").and_then(|v| v.as_str()), Some("pending"));
    }

    #[test]
    fn order_tolerates_missing_adjustment_fields() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "id": "1",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z",
            "customerName": "Jane Doe",
            "shippingAddress": "456 Elm St",
            "items": [{"id": "1", "quantity": 2}],
            "status": "pending"
        }))
        .unwrap();
        assert_eq!(order.discount, 0.0);
        assert_eq!(order.shipping_fee, 0.0);
        assert_eq!(order.tax, 0.0);
        assert_eq!(order.items[0].price, 0.0);
    }
}
