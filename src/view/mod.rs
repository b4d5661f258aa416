pub mod state;
pub mod render;
pub mod controller;

pub use state::{CompletionOutcome, IntentError, RequestMode, Submission, TranslationRequestView};
pub use render::{render_result, render_view, Card, RenderedResult, Section, SectionBody};
pub use controller::ViewController;
