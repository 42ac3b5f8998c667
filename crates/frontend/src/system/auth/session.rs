//! Session state shared by every screen
//!
//! `Session` is created once in `App` and handed to screens as a prop. It keeps
//! the signed-in profile and the restaurant the consoles are scoped to, and
//! mirrors both into a [`SessionStorage`] so a reload keeps the user signed in.

use super::storage::SessionStorage;
use contracts::system::auth::UserProfile;
use leptos::prelude::*;
use std::sync::Arc;

pub const KEY_USER: &str = "user";
pub const KEY_RESOURCE_ID: &str = "resId";
pub const KEY_RESOURCE_NAME: &str = "resName";

/// Restaurant the admin screens are scoped to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    pub id: String,
    pub name: String,
}

/// Typed access to the session keys
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    pub fn save_login(&self, profile: &UserProfile) {
        match serde_json::to_string(profile) {
            Ok(json) => self.storage.set(KEY_USER, &json),
            Err(e) => log::error!("Failed to serialize profile: {}", e),
        }
        match &profile.restaurant_id {
            Some(id) => self.save_resource(&ResourceRef {
                id: id.clone(),
                name: profile.restaurant_name.clone().unwrap_or_default(),
            }),
            None => self.clear_resource(),
        }
    }

    pub fn user(&self) -> Option<UserProfile> {
        let raw = self.storage.get(KEY_USER)?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                log::warn!("Discarding unreadable session profile: {}", e);
                None
            }
        }
    }

    pub fn save_resource(&self, resource: &ResourceRef) {
        self.storage.set(KEY_RESOURCE_ID, &resource.id);
        self.storage.set(KEY_RESOURCE_NAME, &resource.name);
    }

    pub fn clear_resource(&self) {
        self.storage.remove(KEY_RESOURCE_ID);
        self.storage.remove(KEY_RESOURCE_NAME);
    }

    pub fn resource_id(&self) -> Option<String> {
        self.storage
            .get(KEY_RESOURCE_ID)
            .filter(|id| !id.trim().is_empty())
    }

    pub fn resource_name(&self) -> Option<String> {
        self.storage.get(KEY_RESOURCE_NAME)
    }

    pub fn resource(&self) -> Option<ResourceRef> {
        Some(ResourceRef {
            id: self.resource_id()?,
            name: self.resource_name().unwrap_or_default(),
        })
    }

    pub fn clear(&self) {
        self.storage.remove(KEY_USER);
        self.clear_resource();
    }
}

/// Reactive view over [`SessionStore`]
#[derive(Clone, Copy)]
pub struct Session {
    store: StoredValue<SessionStore>,
    user: RwSignal<Option<UserProfile>>,
    resource: RwSignal<Option<ResourceRef>>,
}

impl Session {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        let store = SessionStore::new(storage);
        let user = store.user();
        let resource = store.resource();
        Self {
            store: StoredValue::new(store),
            user: RwSignal::new(user),
            resource: RwSignal::new(resource),
        }
    }

    pub fn login(&self, profile: UserProfile) {
        self.store.with_value(|s| s.save_login(&profile));
        self.resource.set(self.store.with_value(|s| s.resource()));
        self.user.set(Some(profile));
    }

    pub fn logout(&self) {
        self.store.with_value(|s| s.clear());
        self.resource.set(None);
        self.user.set(None);
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.user.get()
    }

    pub fn user_untracked(&self) -> Option<UserProfile> {
        self.user.get_untracked()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with(|u| u.is_some())
    }

    /// Scopes the admin screens to another restaurant
    pub fn select_resource(&self, resource: ResourceRef) {
        self.store.with_value(|s| s.save_resource(&resource));
        self.resource.set(Some(resource));
    }

    pub fn clear_resource(&self) {
        self.store.with_value(|s| s.clear_resource());
        self.resource.set(None);
    }

    pub fn resource(&self) -> Option<ResourceRef> {
        self.resource.get()
    }

    pub fn resource_id(&self) -> Option<String> {
        self.resource.with(|r| r.as_ref().map(|r| r.id.clone()))
    }

    pub fn resource_name(&self) -> Option<String> {
        self.resource.with(|r| r.as_ref().map(|r| r.name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::storage::MemoryStorage;
    use contracts::system::auth::UserRole;

    fn admin() -> UserProfile {
        UserProfile {
            id: "u1".into(),
            name: "Rahim".into(),
            email: "rahim@example.com".into(),
            role: UserRole::RestaurantAdmin,
            restaurant_id: Some("r42".into()),
            restaurant_name: Some("Kacchi Bhai".into()),
        }
    }

    fn store() -> SessionStore {
        SessionStore::new(Arc::new(MemoryStorage::default()))
    }

    #[test]
    fn test_login_writes_all_keys() {
        let store = store();
        store.save_login(&admin());
        assert_eq!(store.user(), Some(admin()));
        assert_eq!(store.resource_id().as_deref(), Some("r42"));
        assert_eq!(store.resource_name().as_deref(), Some("Kacchi Bhai"));
    }

    #[test]
    fn test_login_without_restaurant_clears_stale_resource() {
        let store = store();
        store.save_login(&admin());
        let customer = UserProfile {
            role: UserRole::Customer,
            restaurant_id: None,
            restaurant_name: None,
            ..admin()
        };
        store.save_login(&customer);
        assert_eq!(store.resource_id(), None);
        assert_eq!(store.resource(), None);
    }

    #[test]
    fn test_clear_removes_everything() {
        let store = store();
        store.save_login(&admin());
        store.clear();
        assert_eq!(store.user(), None);
        assert_eq!(store.resource_id(), None);
        assert_eq!(store.resource_name(), None);
    }

    #[test]
    fn test_corrupt_profile_is_ignored() {
        let storage = Arc::new(MemoryStorage::default());
        storage.set(KEY_USER, "{not json");
        let store = SessionStore::new(storage);
        assert_eq!(store.user(), None);
    }

    #[test]
    fn test_blank_resource_id_is_absent() {
        let store = store();
        store.save_resource(&ResourceRef {
            id: "  ".into(),
            name: "Ghost".into(),
        });
        assert_eq!(store.resource_id(), None);
    }
}
