use contracts::domain::a003_menu_item::MenuItem;

use crate::shared::api_utils::{get_json, id_path};
use crate::shared::error::FetchError;

pub async fn fetch_menu(restaurant_id: String) -> Result<Vec<MenuItem>, FetchError> {
    get_json(&id_path("/menu", &restaurant_id)?).await
}
