use serde::{Deserialize, Serialize};

/// A table a customer can seat an order at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTable {
    #[serde(alias = "_id")]
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub is_available: bool,
}
