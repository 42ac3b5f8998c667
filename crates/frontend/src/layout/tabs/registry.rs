//! Tab content registry: the only place that maps a tab key to a screen

use crate::dashboards::{RestaurantDashboard, SalesReport};
use crate::domain::a001_restaurant::ui::RestaurantList;
use crate::domain::a003_menu_item::ui::MenuPage;
use crate::domain::a004_order::ui::OrderList;
use crate::domain::a005_cart::ui::CartPage;
use crate::system::auth::{RequireResource, RequireRole, Session};
use contracts::system::auth::UserRole;
use leptos::logging::log;
use leptos::prelude::*;

const ADMINS: &[UserRole] = &[UserRole::SuperAdmin, UserRole::RestaurantAdmin];

/// Screen for a tab key, or a placeholder for unknown keys
pub fn render_tab_content(key: &str, session: Session) -> AnyView {
    match key {
        "a001_restaurant" => view! {
            <RequireRole session=session roles=&[UserRole::SuperAdmin]>
                <RestaurantList session=session />
            </RequireRole>
        }
        .into_any(),

        "d100_restaurant_dashboard" => view! {
            <RequireRole session=session roles=ADMINS>
                <RequireResource session=session>
                    <RestaurantDashboard session=session />
                </RequireResource>
            </RequireRole>
        }
        .into_any(),

        "d101_sales_report" => view! {
            <RequireRole session=session roles=ADMINS>
                <RequireResource session=session>
                    <SalesReport session=session />
                </RequireResource>
            </RequireRole>
        }
        .into_any(),

        "a004_order" => view! {
            <RequireRole session=session roles=ADMINS>
                <RequireResource session=session>
                    <OrderList session=session />
                </RequireResource>
            </RequireRole>
        }
        .into_any(),

        "a003_menu_item" => view! { <MenuPage session=session /> }.into_any(),

        "a005_cart" => view! { <CartPage session=session /> }.into_any(),

        _ => {
            log!("unknown tab key: '{}'", key);
            view! {
                <div class="placeholder">{format!("Unknown tab: {}", key)}</div>
            }
            .into_any()
        }
    }
}
