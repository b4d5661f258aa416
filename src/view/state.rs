use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::catalog::LanguageCatalog;
use crate::config_manager::view::ViewSettings;
use crate::translation::{RequestError, TranslationRequest, TranslationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestMode {
    #[default]
    MultiLanguage,
    SingleLanguage,
}

impl RequestMode {
    pub fn toggled(self) -> Self {
        match self {
            RequestMode::MultiLanguage => RequestMode::SingleLanguage,
            RequestMode::SingleLanguage => RequestMode::MultiLanguage,
        }
    }
}

/// Rejected user intent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntentError {
    #[error("a language can only be selected in single-language mode")]
    NotSingleLanguage,
    #[error("unknown language code: {0:?}")]
    UnknownLanguage(String),
}

/// One issued request, identified so a late completion can be recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: Uuid,
    pub request: TranslationRequest,
}

/// What a completion did to the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The result was replaced
    Applied,
    /// The request failed; the previous result is untouched
    Failed(String),
    /// Not the outstanding submission; ignored
    Discarded,
}

/// Form state of the translation view: draft text, mode, selection, busy
/// flag and the last result.
///
/// Intents mutate the state synchronously. Network I/O is left to the
/// caller: `begin_submit` hands out the request to send and `complete`
/// takes the answer back.
#[derive(Debug, Clone)]
pub struct TranslationRequestView {
    settings: ViewSettings,
    draft: String,
    mode: RequestMode,
    selected_language: Option<String>,
    outstanding: Option<Uuid>,
    result: Option<TranslationResult>,
    last_failure: Option<String>,
    updated_at: Option<DateTime<Utc>>,
}

impl TranslationRequestView {
    pub fn new(settings: ViewSettings) -> Self {
        Self {
            settings,
            draft: String::new(),
            mode: RequestMode::default(),
            selected_language: None,
            outstanding: None,
            result: None,
            last_failure: None,
            updated_at: None,
        }
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    pub fn catalog(&self) -> &Arc<LanguageCatalog> {
        &self.settings.catalog
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn mode(&self) -> RequestMode {
        self.mode
    }

    pub fn selected_language(&self) -> Option<&str> {
        self.selected_language.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.outstanding.is_some()
    }

    pub fn outstanding(&self) -> Option<Uuid> {
        self.outstanding
    }

    pub fn result(&self) -> Option<&TranslationResult> {
        self.result.as_ref()
    }

    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Replace the draft verbatim
    pub fn edit_text(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Flip the mode. The single-language selection survives the round trip.
    pub fn toggle_mode(&mut self) -> RequestMode {
        self.mode = self.mode.toggled();
        debug!("Request mode is now {:?}", self.mode);
        self.mode
    }

    pub fn select_language(&mut self, code: &str) -> Result<(), IntentError> {
        if self.mode != RequestMode::SingleLanguage {
            return Err(IntentError::NotSingleLanguage);
        }
        if !self.settings.catalog.contains(code) {
            return Err(IntentError::UnknownLanguage(code.to_string()));
        }
        self.selected_language = Some(code.to_string());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected_language = None;
    }

    pub fn can_submit(&self) -> bool {
        if self.is_busy() {
            return false;
        }
        match self.mode {
            RequestMode::MultiLanguage => true,
            RequestMode::SingleLanguage => self
                .selected_language
                .as_deref()
                .is_some_and(|code| !code.is_empty()),
        }
    }

    /// Request that `submit` would send right now
    pub fn build_request(&self) -> TranslationRequest {
        let single_language = match self.mode {
            RequestMode::MultiLanguage => None,
            RequestMode::SingleLanguage => self.selected_language.clone(),
        };
        TranslationRequest {
            text: self.draft.clone(),
            target_langs: self.settings.target_langs.clone(),
            single_language,
            analyze: self.settings.analyze.applies(self.mode),
            question_response: self.settings.question_response,
        }
    }

    /// Start a submission, or `None` when submitting is not allowed
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if !self.can_submit() {
            debug!(
                "Submit ignored: busy={} mode={:?} selection={:?}",
                self.is_busy(),
                self.mode,
                self.selected_language
            );
            return None;
        }

        let submission = Submission {
            id: Uuid::new_v4(),
            request: self.build_request(),
        };
        self.outstanding = Some(submission.id);
        info!("Submitting {} ({:?})", submission.id, self.mode);
        Some(submission)
    }

    /// Apply the answer to submission `id`
    pub fn complete(
        &mut self,
        id: Uuid,
        outcome: Result<TranslationResult, RequestError>,
    ) -> CompletionOutcome {
        if self.outstanding != Some(id) {
            debug!("Discarding completion of superseded submission {}", id);
            return CompletionOutcome::Discarded;
        }
        self.outstanding = None;

        match outcome {
            Ok(result) => {
                info!(
                    "Submission {} completed with {} translations",
                    id,
                    result.translations.len()
                );
                self.result = Some(result);
                self.last_failure = None;
                self.updated_at = Some(Utc::now());
                CompletionOutcome::Applied
            }
            Err(e) => {
                error!("Translation error for submission {}: {}", id, e);
                let message = e.to_string();
                self.last_failure = Some(message.clone());
                CompletionOutcome::Failed(message)
            }
        }
    }

    /// Forget the outstanding submission; its answer will be discarded
    pub fn cancel(&mut self) -> Option<Uuid> {
        let cancelled = self.outstanding.take();
        if let Some(id) = cancelled {
            warn!("Cancelled submission {}", id);
        }
        cancelled
    }
}
