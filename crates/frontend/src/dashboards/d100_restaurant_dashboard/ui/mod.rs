pub mod dashboard;

pub use dashboard::RestaurantDashboard;
