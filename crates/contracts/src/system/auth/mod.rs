use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub user: UserProfile,
}

/// Which console a signed-in user lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    SuperAdmin,
    RestaurantAdmin,
    Customer,
}

impl UserRole {
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::SuperAdmin | UserRole::RestaurantAdmin)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// Restaurant the user administers (restaurant admins only)
    #[serde(default, alias = "resId")]
    pub restaurant_id: Option<String>,
    #[serde(default, alias = "resName")]
    pub restaurant_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_accepts_backend_aliases() {
        let json = r#"{
            "_id": "u1",
            "name": "Rahim",
            "email": "rahim@example.com",
            "role": "restaurant_admin",
            "resId": "r42",
            "resName": "Kacchi Bhai"
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, "u1");
        assert_eq!(profile.role, UserRole::RestaurantAdmin);
        assert_eq!(profile.restaurant_id.as_deref(), Some("r42"));
        assert_eq!(profile.restaurant_name.as_deref(), Some("Kacchi Bhai"));
    }

    #[test]
    fn test_customer_profile_without_restaurant() {
        let json = r#"{"id":"c1","name":"Nila","email":"n@example.com","role":"customer"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert!(profile.restaurant_id.is_none());
        assert!(!profile.role.is_admin());
    }
}
