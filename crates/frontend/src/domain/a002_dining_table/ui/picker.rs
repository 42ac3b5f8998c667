use crate::domain::a002_dining_table::api::fetch_tables;
use crate::domain::a002_dining_table::TableSelection;
use crate::shared::components::EmptyState;
use crate::shared::loader::ResourceLoader;
use crate::shared::notify::use_notifier;
use contracts::domain::a002_dining_table::DiningTable;
use leptos::prelude::*;

/// Grid of tables; one available table can be selected at a time
#[component]
pub fn TablePicker(
    /// Restaurant whose tables are listed
    #[prop(into)]
    restaurant_id: Signal<Option<String>>,
    /// Selection state, owned by the caller so it can read the id
    selection: RwSignal<TableSelection>,
    /// Receives the display name after every successful selection
    on_select: Callback<String>,
) -> impl IntoView {
    let notifier = use_notifier();
    let tables = ResourceLoader::new(move || restaurant_id.get(), fetch_tables, notifier);

    let pick = move |table: DiningTable| {
        let Some(restaurant) = restaurant_id.get_untracked() else {
            return;
        };
        if let Some(name) = selection.try_update(|s| s.select(&restaurant, &table)).flatten() {
            on_select.run(name);
        }
    };

    view! {
        <div class="picker-container">
            <div class="picker-header">
                <h3>"Choose a table"</h3>
            </div>
            {move || {
                if tables.loading() && tables.data().is_none() {
                    return view! { <div class="picker-loading">"Loading..."</div> }.into_any();
                }
                let items = tables.data().unwrap_or_default();
                if items.is_empty() {
                    return view! { <EmptyState message="No tables available" /> }.into_any();
                }
                view! {
                    <div class="table-grid">
                        {items.into_iter().map(|table| {
                            let id = table.id.clone();
                            let available = table.is_available;
                            let name = table.display_name.clone();
                            view! {
                                <button
                                    class="table-grid__item"
                                    class:table-grid__item--selected=move || selection.with(|s| s.is_selected(&id))
                                    class:table-grid__item--unavailable=!available
                                    aria-disabled=(!available).to_string()
                                    on:click=move |_| pick(table.clone())
                                >
                                    {name}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}
