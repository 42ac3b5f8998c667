use contracts::dashboards::d100_restaurant_dashboard::DashboardStats;

use crate::shared::api_utils::{get_json, id_path};
use crate::shared::error::FetchError;

/// Stat cards and recent orders of one restaurant
pub async fn get_dashboard_stats(restaurant_id: String) -> Result<DashboardStats, FetchError> {
    get_json(&id_path("/dashboard-stats", &restaurant_id)?).await
}
