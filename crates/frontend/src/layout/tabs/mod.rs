//! Tab management
//!
//! - `page`: `TabPage`, the wrapper around one tab's content
//! - `registry`: tab key → screen
//! - `tab_labels`: tab key → title

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{tab_label_for_key, tab_title};
