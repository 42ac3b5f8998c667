use contracts::domain::a004_order::{Order, OrderQuery, PlaceOrderRequest, PlaceOrderResponse};

use crate::shared::api_utils::{delete, get_json, id_path, post_json, query_path};
use crate::shared::error::FetchError;

pub async fn fetch_orders(restaurant_id: String) -> Result<Vec<Order>, FetchError> {
    if restaurant_id.trim().is_empty() {
        return Err(FetchError::MissingParameter("resId"));
    }
    let path = query_path("/orders", &OrderQuery { restaurant_id })?;
    get_json(&path).await
}

pub async fn delete_order(id: &str) -> Result<(), FetchError> {
    delete(&id_path("/orders", id)?).await
}

pub async fn place_order(request: &PlaceOrderRequest) -> Result<PlaceOrderResponse, FetchError> {
    post_json("/orders", request).await
}
