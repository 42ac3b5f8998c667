use contracts::domain::a002_dining_table::DiningTable;

use crate::shared::api_utils::{get_json, id_path};
use crate::shared::error::FetchError;

pub async fn fetch_tables(restaurant_id: String) -> Result<Vec<DiningTable>, FetchError> {
    get_json(&id_path("/tables", &restaurant_id)?).await
}
