pub mod d100_restaurant_dashboard;
pub mod d101_sales_report;

pub use d100_restaurant_dashboard::ui::RestaurantDashboard;
pub use d101_sales_report::ui::SalesReport;
