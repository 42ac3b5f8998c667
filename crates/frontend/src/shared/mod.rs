pub mod api_utils;
pub mod components;
pub mod config;
pub mod confirm;
pub mod error;
pub mod export;
pub mod icons;
pub mod loader;
pub mod notify;
pub mod number_format;
pub mod pagination;
