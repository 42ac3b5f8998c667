//! Sidebar with collapsible menu groups, filtered by the user's role

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_title;
use crate::shared::icons::icon;
use crate::system::auth::Session;
use contracts::system::auth::UserRole;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct MenuGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    /// (tab key, icon)
    pub items: Vec<(&'static str, &'static str)>,
    pub roles: &'static [UserRole],
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "platform",
            label: "Platform",
            icon: "store",
            items: vec![("a001_restaurant", "store")],
            roles: &[UserRole::SuperAdmin],
        },
        MenuGroup {
            id: "restaurant",
            label: "Restaurant",
            icon: "layout-dashboard",
            items: vec![
                ("d100_restaurant_dashboard", "layout-dashboard"),
                ("d101_sales_report", "bar-chart"),
                ("a004_order", "receipt"),
            ],
            roles: &[UserRole::SuperAdmin, UserRole::RestaurantAdmin],
        },
        MenuGroup {
            id: "ordering",
            label: "Order food",
            icon: "utensils",
            items: vec![("a003_menu_item", "utensils"), ("a005_cart", "shopping-cart")],
            roles: &[UserRole::Customer],
        },
    ]
}

/// Groups visible to `role`
pub fn menu_groups_for(role: UserRole) -> Vec<MenuGroup> {
    menu_groups()
        .into_iter()
        .filter(|g| g.roles.contains(&role))
        .collect()
}

/// Whether `role` may open the tab `key`
pub fn can_open(role: UserRole, key: &str) -> bool {
    menu_groups_for(role)
        .iter()
        .any(|g| g.items.iter().any(|(k, _)| *k == key))
}

/// Tab opened right after login
pub fn default_tab_for(role: UserRole) -> &'static str {
    match role {
        UserRole::SuperAdmin => "a001_restaurant",
        UserRole::RestaurantAdmin => "d100_restaurant_dashboard",
        UserRole::Customer => "a003_menu_item",
    }
}

#[component]
pub fn Sidebar(session: Session) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let role = session.user_untracked().map(|u| u.role);

    let groups = role.map(menu_groups_for).unwrap_or_default();
    let expanded_groups = RwSignal::new(groups.iter().map(|g| g.id).collect::<Vec<_>>());

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let gid = group.id;
                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            on:click=move |_| {
                                expanded_groups.update(|items| {
                                    if let Some(pos) = items.iter().position(|x| *x == gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.with(|e| e.contains(&gid))
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.with(|e| e.contains(&gid))>
                            <div class="app-sidebar__children">
                                {group.items.iter().map(|&(key, icon_name)| view! {
                                    <div
                                        class="app-sidebar__item"
                                        class:app-sidebar__item--active=move || ctx.active.with(|a| a.as_deref() == Some(key))
                                        on:click=move |_| ctx.open_tab(key, &tab_title(key))
                                    >
                                        <div class="app-sidebar__item-content">
                                            {icon(icon_name)}
                                            <span>{tab_title(key)}</span>
                                        </div>
                                    </div>
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(role: UserRole) -> Vec<&'static str> {
        menu_groups_for(role)
            .into_iter()
            .flat_map(|g| g.items.into_iter().map(|(k, _)| k))
            .collect()
    }

    #[test]
    fn test_customer_sees_only_ordering() {
        assert_eq!(keys(UserRole::Customer), vec!["a003_menu_item", "a005_cart"]);
    }

    #[test]
    fn test_restaurant_admin_has_no_platform_group() {
        let admin = keys(UserRole::RestaurantAdmin);
        assert!(admin.contains(&"d101_sales_report"));
        assert!(!admin.contains(&"a001_restaurant"));
        assert!(keys(UserRole::SuperAdmin).contains(&"a001_restaurant"));
    }

    #[test]
    fn test_default_tab_is_reachable() {
        for role in [UserRole::SuperAdmin, UserRole::RestaurantAdmin, UserRole::Customer] {
            assert!(can_open(role, default_tab_for(role)));
        }
        assert!(!can_open(UserRole::Customer, "a004_order"));
    }
}
