//! Top bar: sidebar toggle, brand, current user and logout

use crate::domain::a005_cart::use_cart;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;
use crate::system::auth::Session;
use contracts::system::auth::UserRole;
use leptos::prelude::*;

fn role_label(role: UserRole) -> &'static str {
    match role {
        UserRole::SuperAdmin => "Super admin",
        UserRole::RestaurantAdmin => "Restaurant admin",
        UserRole::Customer => "Customer",
    }
}

#[component]
pub fn TopHeader(session: Session) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notifier = use_notifier();
    let cart = use_cart();

    let logout = move |_| {
        log::debug!("logout");
        ctx.reset();
        cart.update(|c| c.clear());
        session.logout();
        notifier.info("Signed out");
    };

    let cart_count = move || cart.with(|c| c.item_count());
    let is_customer = move || session.user().map(|u| u.role == UserRole::Customer).unwrap_or(false);

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button class="top-header__icon-btn" title="Toggle navigation" on:click=move |_| ctx.toggle_left()>
                    {icon("layout-dashboard")}
                </button>
                <span class="top-header__title">"Resto"</span>
                {move || session.resource_name().map(|name| view! {
                    <span class="top-header__resource">{icon("store")}{name}</span>
                })}
            </div>

            <div class="top-header__actions">
                <Show when=is_customer>
                    <button
                        class="top-header__icon-btn"
                        title="Cart"
                        on:click=move |_| ctx.open_tab("a005_cart", "Cart")
                    >
                        {icon("shopping-cart")}
                        <span class="top-header__badge">{cart_count}</span>
                    </button>
                </Show>
                <div class="top-header__user">
                    {move || session.user().map(|u| view! {
                        <span class="top-header__user-name">{u.name}</span>
                        <span class="top-header__user-role">{role_label(u.role)}</span>
                    })}
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
