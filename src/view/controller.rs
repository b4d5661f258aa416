use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::{debug, info};
use uuid::Uuid;

use crate::translation::{RequestError, TranslationResult, TranslationService};
use crate::view::state::{CompletionOutcome, TranslationRequestView};

type Completion = (Uuid, Result<TranslationResult, RequestError>);

/// Drives a `TranslationRequestView` against a translation service.
///
/// Each submission runs as its own tokio task and reports back over a
/// channel tagged with the submission id. At most one task is alive at a
/// time; cancelling or dropping the controller aborts it.
pub struct ViewController {
    view: TranslationRequestView,
    service: Arc<dyn TranslationService>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    in_flight: Option<(Uuid, AbortHandle)>,
}

impl ViewController {
    pub fn new(view: TranslationRequestView, service: Arc<dyn TranslationService>) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            view,
            service,
            completions_tx,
            completions_rx,
            in_flight: None,
        }
    }

    pub fn view(&self) -> &TranslationRequestView {
        &self.view
    }

    /// For the synchronous intents: edit, toggle, select
    pub fn view_mut(&mut self) -> &mut TranslationRequestView {
        &mut self.view
    }

    pub fn is_busy(&self) -> bool {
        self.view.is_busy()
    }

    /// Issue the current form as a request. `None` when the view refuses.
    pub fn submit(&mut self) -> Option<Uuid> {
        let submission = self.view.begin_submit()?;
        let id = submission.id;
        let service = self.service.clone();
        let tx = self.completions_tx.clone();

        let handle = tokio::spawn(async move {
            let outcome = service.translate(&submission.request).await;
            let _ = tx.send((submission.id, outcome));
        });

        self.in_flight = Some((id, handle.abort_handle()));
        Some(id)
    }

    /// Wait for the in-flight submission and apply it.
    ///
    /// Returns `None` immediately when nothing is in flight.
    pub async fn next_completion(&mut self) -> Option<(Uuid, CompletionOutcome)> {
        while self.in_flight.is_some() {
            let (id, outcome) = self.completions_rx.recv().await?;
            let applied = self.view.complete(id, outcome);
            if applied == CompletionOutcome::Discarded {
                continue;
            }
            if matches!(self.in_flight, Some((current, _)) if current == id) {
                self.in_flight = None;
            }
            return Some((id, applied));
        }
        None
    }

    /// Submit and wait for the answer
    pub async fn submit_and_wait(&mut self) -> Option<CompletionOutcome> {
        self.submit()?;
        self.next_completion().await.map(|(_, outcome)| outcome)
    }

    /// Abort the in-flight request, if any, and leave the busy state
    pub fn cancel(&mut self) -> Option<Uuid> {
        if let Some((id, handle)) = self.in_flight.take() {
            handle.abort();
            debug!("Aborted request task {}", id);
        }
        self.view.cancel()
    }

    pub async fn health_check(&self) -> Result<bool, RequestError> {
        self.service.health_check().await
    }
}

impl Drop for ViewController {
    fn drop(&mut self) {
        if let Some((id, handle)) = self.in_flight.take() {
            handle.abort();
            info!("View torn down; abandoned submission {}", id);
        }
    }
}
