use serde::{Deserialize, Serialize};

// ============================================================================
// Store status
// ============================================================================

/// Whether a restaurant currently accepts orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    #[default]
    Active,
    Inactive,
}

impl StoreStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreStatus::Active => "active",
            StoreStatus::Inactive => "inactive",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            StoreStatus::Active => StoreStatus::Inactive,
            StoreStatus::Inactive => StoreStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, StoreStatus::Active)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub status: StoreStatus,
}

/// Body of `PUT /update-store-status/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStoreStatusRequest {
    pub status: StoreStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let body = UpdateStoreStatusRequest {
            status: StoreStatus::Inactive,
        };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"status":"inactive"}"#);
    }

    #[test]
    fn test_status_toggle() {
        assert_eq!(StoreStatus::Active.toggled(), StoreStatus::Inactive);
        assert_eq!(StoreStatus::Inactive.toggled(), StoreStatus::Active);
        assert!(StoreStatus::default().is_active());
    }
}
