pub mod catalog;
pub mod config_manager;
pub mod translation;
pub mod view;
pub mod terminal;
pub mod stub;

pub use config_manager::Config;
