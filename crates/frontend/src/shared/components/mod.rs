pub mod date_input;
pub mod date_range_picker;
pub mod empty_state;
pub mod lazy_image;
pub mod pagination_controls;
pub mod processing_overlay;
pub mod stat_card;
pub mod table_cell_money;
pub mod table_totals_row;

pub use date_input::DateInput;
pub use date_range_picker::DateRangePicker;
pub use empty_state::EmptyState;
pub use lazy_image::LazyImage;
pub use pagination_controls::PaginationControls;
pub use processing_overlay::ProcessingOverlay;
pub use stat_card::{StatCard, ValueFormat};
pub use table_cell_money::TableCellMoney;
pub use table_totals_row::TableTotalsRow;
