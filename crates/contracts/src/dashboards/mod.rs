pub mod d100_restaurant_dashboard;
pub mod d101_sales_report;
