use crate::domain::a001_restaurant::api::{delete_restaurant, fetch_restaurants, update_store_status};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_title;
use crate::shared::components::{EmptyState, PaginationControls};
use crate::shared::confirm::{use_confirm, ConfirmKind};
use crate::shared::icons::icon;
use crate::shared::loader::ResourceLoader;
use crate::shared::notify::use_notifier;
use crate::shared::pagination::{paginate, DEFAULT_PAGE_SIZE};
use crate::system::auth::{ResourceRef, Session};
use contracts::domain::a001_restaurant::{Restaurant, StoreStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;

/// Rows with a status change on the way to the backend
#[derive(Debug, Clone, Default, PartialEq)]
struct PendingToggles(HashSet<String>);

impl PendingToggles {
    /// `false` when `id` is already being toggled
    fn begin(&mut self, id: &str) -> bool {
        self.0.insert(id.to_string())
    }

    fn finish(&mut self, id: &str) {
        self.0.remove(id);
    }

    fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }
}

/// Super admin console: every restaurant on the platform
#[component]
#[allow(non_snake_case)]
pub fn RestaurantList(session: Session) -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notifier = use_notifier();
    let confirm = use_confirm();
    let restaurants = ResourceLoader::new(|| Some(()), |_| fetch_restaurants(), notifier);
    let (page, set_page) = signal(0usize);
    let pending = RwSignal::new(PendingToggles::default());

    let paged = Memo::new(move |_| {
        let rows = restaurants.data().unwrap_or_default();
        paginate(&rows, page.get(), DEFAULT_PAGE_SIZE)
    });

    let toggle_status = move |id: String, current: StoreStatus| {
        if !pending.try_update(|p| p.begin(&id)).unwrap_or(false) {
            return;
        }
        let next = current.toggled();
        spawn_local(async move {
            match update_store_status(&id, next).await {
                Ok(()) => {
                    restaurants.update_data(|rows| {
                        if let Some(r) = rows.iter_mut().find(|r| r.id == id) {
                            r.status = next;
                        }
                    });
                    notifier.success(format!("Store is now {}", next.as_str()));
                }
                Err(e) => {
                    log::error!("status update for {} failed: {}", id, e);
                    notifier.error(e.user_message());
                }
            }
            pending.try_update(|p| p.finish(&id));
        });
    };

    let delete_row = move |row: Restaurant| {
        let asked = confirm.confirm(
            "Delete restaurant?",
            format!("\"{}\" and its data will be removed.", row.name),
            ConfirmKind::Danger,
        );
        spawn_local(async move {
            if !asked.await {
                return;
            }
            match delete_restaurant(&row.id).await {
                Ok(()) => {
                    restaurants.update_data(|rows| rows.retain(|r| r.id != row.id));
                    notifier.success("Restaurant deleted");
                }
                Err(e) => {
                    log::error!("delete of restaurant {} failed: {}", row.id, e);
                    notifier.error(e.user_message());
                }
            }
        });
    };

    let open_dashboard = move |row: &Restaurant| {
        session.select_resource(ResourceRef {
            id: row.id.clone(),
            name: row.name.clone(),
        });
        notifier.info(format!("Managing {}", row.name));
        tabs_store.open_tab("d100_restaurant_dashboard", &tab_title("d100_restaurant_dashboard"));
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Restaurants"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| restaurants.refetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || {
                let current = paged.get();
                if current.total_count == 0 {
                    let message = if restaurants.loading() { "Loading..." } else { "No restaurants yet" };
                    return view! { <EmptyState message=message /> }.into_any();
                }
                view! {
                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Name"</th>
                                    <th class="table__header-cell">"Owner"</th>
                                    <th class="table__header-cell">"Address"</th>
                                    <th class="table__header-cell">"Status"</th>
                                    <th class="table__header-cell table__header-cell--actions"></th>
                                </tr>
                            </thead>
                            <tbody>
                                {current.items.into_iter().map(|row| {
                                    let status = row.status;
                                    let id_for_toggle = row.id.clone();
                                    let id_for_busy = row.id.clone();
                                    let row_for_delete = row.clone();
                                    let row_for_open = row.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{row.name}</td>
                                            <td class="table__cell">{row.owner_name}</td>
                                            <td class="table__cell">{row.address}</td>
                                            <td class="table__cell">
                                                <button
                                                    class="badge"
                                                    class:badge--success=status.is_active()
                                                    class:badge--muted=!status.is_active()
                                                    title="Toggle store status"
                                                    disabled=move || pending.with(|p| p.contains(&id_for_busy))
                                                    on:click=move |_| toggle_status(id_for_toggle.clone(), status)
                                                >
                                                    {icon("power")}
                                                    {status.as_str()}
                                                </button>
                                            </td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--ghost"
                                                    title="Open dashboard"
                                                    on:click=move |_| open_dashboard(&row_for_open)
                                                >
                                                    {icon("layout-dashboard")}
                                                </button>
                                                <button
                                                    class="button button--ghost button--danger"
                                                    title="Delete"
                                                    on:click=move |_| delete_row(row_for_delete.clone())
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
    fn test_second_toggle_of_same_row_is_rejected() {
        let mut pending = PendingToggles::default();
        assert!(pending.begin("r1"));
        assert!(!pending.begin("r1"));
        assert!(pending.contains("r1"));
    }

    #[test]
    fn test_rows_toggle_independently() {
        let mut pending = PendingToggles::default();
        assert!(pending.begin("r1"));
        assert!(pending.begin("r2"));
        pending.finish("r1");
        assert!(!pending.contains("r1"));
        assert!(pending.contains("r2"));
        assert!(pending.begin("r1"));
    }
}
