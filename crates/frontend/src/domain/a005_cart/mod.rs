pub mod cart;
pub mod store;
pub mod ui;

pub use cart::Cart;
pub use store::{use_cart, CartStore};
