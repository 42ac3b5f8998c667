use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

const ACTIVE_PARAM: &str = "active";

/// Tab key carried by a `?active=` query string
pub fn active_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get(ACTIVE_PARAM)
        .filter(|key| !key.is_empty())
        .cloned()
}

/// `?active=<key>`
pub fn query_for_active(key: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([(ACTIVE_PARAM.to_string(), key.to_string())]))
        .unwrap_or_default();
    format!("?{}", query)
}

/// Open tabs and shell toggles shared by the whole console
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores the tab named in the URL, then keeps the URL in step with the active tab.
    /// `allowed` rejects keys the current user may not open.
    pub fn init_router_integration(&self, allowed: impl Fn(&str) -> bool, title_for: impl Fn(&str) -> String) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(active_key) = active_from_query(&search) {
            if allowed(&active_key) {
                self.open_tab(&active_key, &title_for(&active_key));
            } else {
                log::warn!("ignoring ?active={}: not available for this user", active_key);
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let new_url = query_for_active(&active_key);
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(w) = window() {
                if let Ok(history) = w.history() {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    );
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        leptos::logging::log!("open_tab: key='{}', title='{}'", key, title);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                });
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    /// Closes everything, e.g. on logout
    pub fn reset(&self) {
        self.opened.set(vec![]);
        self.active.set(None);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_from_query() {
        assert_eq!(
            active_from_query("?active=d101_sales_report").as_deref(),
            Some("d101_sales_report")
        );
        assert_eq!(active_from_query("?other=1"), None);
        assert_eq!(active_from_query("?active="), None);
        assert_eq!(active_from_query(""), None);
    }

    #[test]
    fn test_query_round_trips() {
        let query = query_for_active("a004_order");
        assert_eq!(query, "?active=a004_order");
        assert_eq!(active_from_query(&query).as_deref(), Some("a004_order"));
    }
}
