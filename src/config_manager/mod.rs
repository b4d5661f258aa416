pub mod main;
pub mod client;
pub mod view;
pub mod utils;

pub use main::Config;
pub use client::ClientConfig;
pub use view::{AnalyzePolicy, VariantPreset, ViewConfig, ViewSettings};
