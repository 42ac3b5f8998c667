use serde::{Deserialize, Serialize};

/// Compact order row as shown on dashboards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub restaurant_name: String,
    pub total_price: f64,
}

/// Full order as listed in order management
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub table_name: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
    pub total_price: f64,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub menu_item_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl OrderLine {
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// Body of `POST /orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub restaurant_id: String,
    pub table_id: String,
    pub lines: Vec<OrderLine>,
    pub total_price: f64,
}

/// Query of `GET /orders`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderQuery {
    #[serde(rename = "resId")]
    pub restaurant_id: String,
}

/// Reply of `POST /orders`; the backend may echo the stored order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaceOrderResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub order: Option<Order>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let line = OrderLine {
            menu_item_id: "m1".into(),
            name: "Kacchi".into(),
            quantity: 3,
            unit_price: 250.0,
        };
        assert_eq!(line.line_total(), 750.0);
    }

    #[test]
    fn test_order_record_from_backend_json() {
        let json = r#"{"_id":"o9","restaurantName":"Sultan's Dine","totalPrice":1200}"#;
        let record: OrderRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "o9");
        assert_eq!(record.total_price, 1200.0);
    }

    #[test]
    fn test_place_order_response_tolerates_empty_body() {
        let reply: PlaceOrderResponse = serde_json::from_str("{}").unwrap();
        assert!(reply.order.is_none());

        let json = r#"{"message":"Order placed","order":{"_id":"o1","totalPrice":500}}"#;
        let reply: PlaceOrderResponse = serde_json::from_str(json).unwrap();
        assert_eq!(reply.message.as_deref(), Some("Order placed"));
        assert_eq!(reply.order.map(|o| o.id).as_deref(), Some("o1"));
    }
}
