pub mod interface;
pub mod error;
pub mod client;
pub mod factory;

pub use interface::{LanguageMap, TranslationRequest, TranslationResult, TranslationService};
pub use error::RequestError;
pub use client::HttpTranslationClient;
pub use factory::TranslationServiceFactory;
