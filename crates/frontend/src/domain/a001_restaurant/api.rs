use contracts::domain::a001_restaurant::{Restaurant, StoreStatus, UpdateStoreStatusRequest};

use crate::shared::api_utils::{delete, get_json, id_path, put_json};
use crate::shared::error::FetchError;

pub async fn fetch_restaurants() -> Result<Vec<Restaurant>, FetchError> {
    get_json("/restaurants").await
}

pub async fn update_store_status(id: &str, status: StoreStatus) -> Result<(), FetchError> {
    let path = id_path("/update-store-status", id)?;
    put_json(&path, &UpdateStoreStatusRequest { status }).await
}

pub async fn delete_restaurant(id: &str) -> Result<(), FetchError> {
    delete(&id_path("/restaurants", id)?).await
}
