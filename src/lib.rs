pub mod api;
pub mod app;
pub mod autocomplete;
pub mod browser;
pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod logging;
pub mod page;
pub mod panels;
pub mod test_utils;
pub mod widgets;
pub mod worker;
