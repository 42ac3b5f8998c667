use crate::domain::a001_restaurant::StoreStatus;
use crate::domain::a004_order::OrderRecord;
use serde::{Deserialize, Serialize};

/// Response of `GET /dashboard-stats/{id}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_orders: u64,
    pub total_earning: f64,
    pub total_due: f64,
    pub total_menu_items: u64,
    pub store_status: StoreStatus,
    /// Newest first
    pub recent_orders: Vec<OrderRecord>,
}

impl DashboardStats {
    /// Number of orders shown in the "recent orders" panel
    pub const RECENT_LIMIT: usize = 5;

    pub fn latest_orders(&self) -> &[OrderRecord] {
        let n = self.recent_orders.len().min(Self::RECENT_LIMIT);
        &self.recent_orders[..n]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(i: usize) -> OrderRecord {
        OrderRecord {
            id: format!("o{}", i),
            restaurant_name: "Haji Biryani".into(),
            total_price: 100.0 * i as f64,
        }
    }

    #[test]
    fn test_latest_orders_truncates() {
        let stats = DashboardStats {
            recent_orders: (0..8).map(order).collect(),
            ..Default::default()
        };
        let latest = stats.latest_orders();
        assert_eq!(latest.len(), DashboardStats::RECENT_LIMIT);
        assert_eq!(latest[0].id, "o0");
    }

    #[test]
    fn test_missing_fields_default() {
        let stats: DashboardStats = serde_json::from_str(r#"{"totalOrders": 3}"#).unwrap();
        assert_eq!(stats.total_orders, 3);
        assert!(stats.recent_orders.is_empty());
        assert!(stats.latest_orders().is_empty());
    }
}
