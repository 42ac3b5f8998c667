use crate::dashboards::d100_restaurant_dashboard::api;
use crate::domain::a001_restaurant::api::update_store_status;
use crate::shared::components::{EmptyState, StatCard, ValueFormat};
use crate::shared::icons::icon;
use crate::shared::loader::ResourceLoader;
use crate::shared::notify::use_notifier;
use crate::shared::number_format::format_currency;
use crate::system::auth::Session;
use contracts::dashboards::d100_restaurant_dashboard::DashboardStats;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Restaurant admin home: totals, store status and the latest orders
#[component]
pub fn RestaurantDashboard(session: Session) -> impl IntoView {
    let notifier = use_notifier();
    let stats = ResourceLoader::new(move || session.resource_id(), api::get_dashboard_stats, notifier);
    let (toggling, set_toggling) = signal(false);

    let stat = move |f: fn(&DashboardStats) -> f64| Signal::derive(move || stats.data().map(|s| f(&s)));

    let status = move || stats.data().map(|s| s.store_status).unwrap_or_default();

    let toggle_status = move |_| {
        let Some(id) = session.resource_id() else {
            return;
        };
        let next = status().toggled();
        set_toggling.set(true);
        spawn_local(async move {
            match update_store_status(&id, next).await {
                Ok(()) => {
                    stats.update_data(|s| s.store_status = next);
                    notifier.success(format!("Store is now {}", next.as_str()));
                }
                Err(e) => {
                    log::error!("store status update failed: {}", e);
                    notifier.error(e.user_message());
                }
            }
            set_toggling.try_set(false);
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{move || session.resource_name().unwrap_or_else(|| "Dashboard".to_string())}</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button"
                        class:button--primary=move || status().is_active()
                        class:button--secondary=move || !status().is_active()
                        disabled=move || toggling.get() || stats.data().is_none()
                        on:click=toggle_status
                    >
                        {icon("power")}
                        {move || format!("Store {}", status().as_str())}
                    </button>
                    <button class="button button--secondary" on:click=move |_| stats.refetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Total orders"
                    icon_name="receipt"
                    value=stat(|s| s.total_orders as f64)
                    format=ValueFormat::Count
                />
                <StatCard
                    label="Earning"
                    icon_name="cash"
                    value=stat(|s| s.total_earning)
                    format=ValueFormat::Currency
                    variant="stat-card--success"
                />
                <StatCard
                    label="Due"
                    icon_name="cash"
                    value=stat(|s| s.total_due)
                    format=ValueFormat::Currency
                    variant="stat-card--warning"
                />
                <StatCard
                    label="Menu items"
                    icon_name="utensils"
                    value=stat(|s| s.total_menu_items as f64)
                    format=ValueFormat::Count
                />
            </div>

            <section class="section">
                <h2 class="section__title">"Recent orders"</h2>
                {move || {
                    let recent = stats
                        .data()
                        .map(|s| s.latest_orders().to_vec())
                        .unwrap_or_default();
                    if recent.is_empty() {
                        return view! { <EmptyState message="No orders yet" /> }.into_any();
                    }
                    view! {
                        <ul class="recent-orders">
                            {recent.into_iter().map(|o| view! {
                                <li class="recent-orders__item">
                                    <span class="recent-orders__name">{o.restaurant_name}</span>
                                    <span class="recent-orders__total">{format_currency(o.total_price)}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                    }.into_any()
                }}
            </section>
        </div>
    }
}
