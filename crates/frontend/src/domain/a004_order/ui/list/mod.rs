use crate::domain::a004_order::api::{delete_order, fetch_orders};
use crate::shared::components::{EmptyState, PaginationControls};
use crate::shared::confirm::{use_confirm, ConfirmKind};
use crate::shared::export::print_page;
use crate::shared::icons::icon;
use crate::shared::loader::ResourceLoader;
use crate::shared::notify::use_notifier;
use crate::shared::number_format::format_currency;
use crate::shared::pagination::{paginate, DEFAULT_PAGE_SIZE};
use crate::system::auth::Session;
use contracts::domain::a004_order::Order;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn short_id(id: &str) -> &str {
    let start = id.len().saturating_sub(6);
    id.get(start..).unwrap_or(id)
}

fn format_created(raw: &Option<String>) -> String {
    match raw.as_deref() {
        Some(s) => chrono::DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| s.to_string()),
        None => "-".to_string(),
    }
}

/// Orders of the managed restaurant
#[component]
#[allow(non_snake_case)]
pub fn OrderList(session: Session) -> impl IntoView {
    let notifier = use_notifier();
    let confirm = use_confirm();
    let orders = ResourceLoader::new(move || session.resource_id(), fetch_orders, notifier);
    let (page, set_page) = signal(0usize);

    let paged = Memo::new(move |_| {
        let rows = orders.data().unwrap_or_default();
        paginate(&rows, page.get(), DEFAULT_PAGE_SIZE)
    });

    let delete_row = move |order: Order| {
        let asked = confirm.confirm(
            "Delete order?",
            format!("Order #{} will be removed permanently.", short_id(&order.id)),
            ConfirmKind::Danger,
        );
        spawn_local(async move {
            if !asked.await {
                log::debug!("delete of order {} cancelled", order.id);
                return;
            }
            match delete_order(&order.id).await {
                Ok(()) => {
                    orders.update_data(|rows| rows.retain(|o| o.id != order.id));
                    notifier.success("Order deleted");
                }
                Err(e) => {
                    log::error!("delete of order {} failed: {}", order.id, e);
                    notifier.error(e.user_message());
                }
            }
        });
    };

    let print = move |_| {
        let asked = confirm.confirm("Print orders?", "The current page will be sent to the printer.", ConfirmKind::Info);
        spawn_local(async move {
            if asked.await {
                if let Err(e) = print_page() {
                    log::error!("print failed: {}", e);
                    notifier.error(e.user_message());
                }
            }
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Orders"</h1>
                    <span class="header__subtitle">{move || session.resource_name().unwrap_or_default()}</span>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| orders.refetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                    <button class="button button--secondary" on:click=print>
                        {icon("printer")}
                        "Print"
                    </button>
                </div>
            </div>

            {move || {
                let current = paged.get();
                if current.total_count == 0 {
                    let message = if orders.loading() { "Loading..." } else { "No orders yet" };
                    return view! { <EmptyState message=message /> }.into_any();
                }
                view! {
                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Order"</th>
                                    <th class="table__header-cell">"Table"</th>
                                    <th class="table__header-cell">"Customer"</th>
                                    <th class="table__header-cell table__header-cell--right">"Items"</th>
                                    <th class="table__header-cell table__header-cell--right">"Total"</th>
                                    <th class="table__header-cell">"Placed"</th>
                                    <th class="table__header-cell table__header-cell--actions"></th>
                                </tr>
                            </thead>
                            <tbody>
                                {current.items.into_iter().map(|order| {
                                    let items: u32 = order.lines.iter().map(|l| l.quantity).sum();
                                    let placed = format_created(&order.created_at);
                                    let label = format!("#{}", short_id(&order.id));
                                    let total = format_currency(order.total_price);
                                    let table = order.table_name.clone();
                                    let customer = order.customer_name.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{label}</td>
                                            <td class="table__cell">{table}</td>
                                            <td class="table__cell">{customer}</td>
                                            <td class="table__cell table__cell--right">{items}</td>
                                            <td class="table__cell table__cell--right">{total}</td>
                                            <td class="table__cell">{placed}</td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--ghost button--danger"
                                                    title="Delete"
                                                    on:click=move |_| delete_row(order.clone())
                                                >
                                                    {icon("trash")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                    <PaginationControls
                        current_page=Signal::derive(move || paged.with(|p| p.page))
                        total_pages=Signal::derive(move || paged.with(|p| p.total_pages))
                        total_count=Signal::derive(move || paged.with(|p| p.total_count))
                        on_page_change=Callback::new(move |p| set_page.set(p))
                    />
                }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id_keeps_tail() {
        assert_eq!(short_id("65f1a2b3c4d5e6"), "c4d5e6");
        assert_eq!(short_id("abc"), "abc");
    }

    #[test]
    fn test_format_created() {
        assert_eq!(format_created(&None), "-");
        assert_eq!(
            format_created(&Some("2024-03-05T14:30:00Z".to_string())),
            "2024-03-05 14:30"
        );
        assert_eq!(format_created(&Some("yesterday".to_string())), "yesterday");
    }
}
