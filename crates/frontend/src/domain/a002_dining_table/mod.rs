pub mod api;
pub mod selection;
pub mod ui;

pub use selection::TableSelection;
