pub mod directory;
pub mod list;

pub use directory::RestaurantDirectory;
pub use list::RestaurantList;
