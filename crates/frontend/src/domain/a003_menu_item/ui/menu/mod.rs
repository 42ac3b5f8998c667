use crate::domain::a001_restaurant::ui::RestaurantDirectory;
use crate::domain::a003_menu_item::api::fetch_menu;
use crate::domain::a005_cart::use_cart;
use crate::shared::components::{EmptyState, LazyImage};
use crate::shared::icons::icon;
use crate::shared::loader::ResourceLoader;
use crate::shared::notify::use_notifier;
use crate::shared::number_format::format_currency;
use crate::system::auth::Session;
use contracts::domain::a003_menu_item::MenuItem;
use leptos::prelude::*;

/// Groups items by category, keeping first-seen order
fn by_category(items: Vec<MenuItem>) -> Vec<(String, Vec<MenuItem>)> {
    let mut groups: Vec<(String, Vec<MenuItem>)> = Vec::new();
    for item in items {
        let category = if item.category.trim().is_empty() {
            "Other".to_string()
        } else {
            item.category.clone()
        };
        match groups.iter_mut().find(|(c, _)| *c == category) {
            Some((_, list)) => list.push(item),
            None => groups.push((category, vec![item])),
        }
    }
    groups
}

#[component]
fn MenuCard(item: MenuItem, on_add: Callback<MenuItem>) -> impl IntoView {
    let name = item.name.clone();
    let description = item.description.clone();
    let price = format_currency(item.price);
    let image_url = item.image_url.clone().filter(|u| !u.trim().is_empty());

    view! {
        <div class="menu-card">
            <LazyImage src=image_url alt=name.clone() class="menu-card__image" />
            <div class="menu-card__body">
                <div class="menu-card__title">{name}</div>
                <div class="menu-card__description">{description}</div>
                <div class="menu-card__footer">
                    <span class="menu-card__price">{price}</span>
                    <button class="button button--primary button--small" on:click=move |_| on_add.run(item.clone())>
                        {icon("plus")}
                        "Add"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Customer menu of the selected restaurant
#[component]
pub fn MenuPage(session: Session) -> impl IntoView {
    let notifier = use_notifier();
    let cart = use_cart();
    let menu = ResourceLoader::new(move || session.resource_id(), fetch_menu, notifier);

    let on_add = Callback::new(move |item: MenuItem| {
        let Some(restaurant_id) = session.resource_id() else {
            return;
        };
        let name = item.name.clone();
        cart.add(&restaurant_id, &item);
        notifier.success(format!("{} added to cart", name));
    });

    view! {
        <Show
            when=move || session.resource_id().is_some()
            fallback=move || view! { <RestaurantDirectory session=session /> }
        >
            <div class="page">
                <div class="header">
                    <div class="header__content">
                        <h1 class="header__title">{move || session.resource_name().unwrap_or_else(|| "Menu".to_string())}</h1>
                    </div>
                    <div class="header__actions">
                        <button class="button button--secondary" on:click=move |_| session.clear_resource()>
                            {icon("store")}
                            "Change restaurant"
                        </button>
                    </div>
                </div>
                {move || {
                    let items = menu.data().unwrap_or_default();
                    if items.is_empty() {
                        let message = if menu.loading() { "Loading menu..." } else { "This restaurant has no dishes yet" };
                        return view! { <EmptyState message=message /> }.into_any();
                    }
                    by_category(items).into_iter().map(|(category, items)| view! {
                        <section class="menu-section">
                            <h2 class="menu-section__title">{category}</h2>
                            <div class="card-grid">
                                {items.into_iter().map(|item| view! { <MenuCard item=item on_add=on_add /> }).collect_view()}
                            </div>
                        </section>
                    }).collect_view().into_any()
                }}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, category: &str) -> MenuItem {
        MenuItem {
            id: name.to_lowercase(),
            name: name.to_string(),
            description: String::new(),
            category: category.to_string(),
            price: 100.0,
            image_url: None,
        }
    }

    #[test]
    fn test_by_category_keeps_first_seen_order() {
        let groups = by_category(vec![
            item("Kacchi", "Rice"),
            item("Borhani", "Drinks"),
            item("Tehari", "Rice"),
            item("Misc", " "),
        ]);
        let names: Vec<&str> = groups.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(names, vec!["Rice", "Drinks", "Other"]);
        assert_eq!(groups[0].1.len(), 2);
    }
}
