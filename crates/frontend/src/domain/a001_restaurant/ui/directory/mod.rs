use crate::domain::a001_restaurant::api::fetch_restaurants;
use crate::shared::components::EmptyState;
use crate::shared::icons::icon;
use crate::shared::loader::ResourceLoader;
use crate::shared::notify::use_notifier;
use crate::system::auth::{ResourceRef, Session};
use contracts::domain::a001_restaurant::Restaurant;
use leptos::prelude::*;

/// Customer entry point: pick the restaurant whose menu to browse.
/// Inactive stores are hidden.
#[component]
pub fn RestaurantDirectory(session: Session) -> impl IntoView {
    let notifier = use_notifier();
    let restaurants = ResourceLoader::new(|| Some(()), |_| fetch_restaurants(), notifier);

    let open = Memo::new(move |_| {
        restaurants
            .data()
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.status.is_active())
            .collect::<Vec<Restaurant>>()
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Restaurants"</h1>
                </div>
            </div>
            {move || {
                let items = open.get();
                if items.is_empty() {
                    let message = if restaurants.loading() { "Loading..." } else { "No restaurants are open right now" };
                    return view! { <EmptyState message=message /> }.into_any();
                }
                view! {
                    <div class="card-grid">
                        {items.into_iter().map(|r| {
                            let selected = ResourceRef { id: r.id.clone(), name: r.name.clone() };
                            view! {
                                <button class="card card--clickable" on:click=move |_| session.select_resource(selected.clone())>
                                    <div class="card__icon">{icon("store")}</div>
                                    <div class="card__title">{r.name}</div>
                                    <div class="card__subtitle">{r.address}</div>
                                </button>
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}
