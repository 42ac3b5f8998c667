pub mod picker;

pub use picker::TablePicker;
