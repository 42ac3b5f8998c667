pub mod a001_restaurant;
pub mod a002_dining_table;
pub mod a003_menu_item;
pub mod a004_order;
