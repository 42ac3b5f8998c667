use super::Cart;
use contracts::domain::a003_menu_item::MenuItem;
use leptos::prelude::*;

/// Cart shared by the menu and cart screens
#[derive(Clone, Copy)]
pub struct CartStore {
    cart: RwSignal<Cart>,
}

impl CartStore {
    pub fn new() -> Self {
        Self {
            cart: RwSignal::new(Cart::default()),
        }
    }

    pub fn add(&self, restaurant_id: &str, item: &MenuItem) {
        self.cart.update(|c| c.add(restaurant_id, item));
    }

    pub fn update(&self, f: impl FnOnce(&mut Cart)) {
        self.cart.update(f);
    }

    pub fn with<R>(&self, f: impl FnOnce(&Cart) -> R) -> R {
        self.cart.with(f)
    }

    pub fn get(&self) -> Cart {
        self.cart.get()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_cart() -> CartStore {
    use_context::<CartStore>().expect("CartStore not provided in context")
}
