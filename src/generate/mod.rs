//! Grocery list generation.
//!
//! A pasted link goes through an [`IngredientSource`] which produces a
//! [`GeneratedList`]. The bundled [`MockSource`] waits out a fixed
//! processing delay and then picks a canned template from the link's
//! classification; a real extractor can be dropped in behind the same
//! trait. [`Generator`] drives a source, reports progress as
//! [`GeneratorAction`]s and honours a [`CancellationToken`].

mod cancel;
mod templates;

pub use cancel::CancellationToken;
pub use templates::template_for;

use crate::classify::LinkClassification;
use crate::config::Settings;
use crate::model::{GroceryItem, Recipe};
use crate::state::GeneratorAction;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Generation was cancelled")]
    Cancelled,
}

/// Output of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedList {
    pub link: LinkClassification,
    /// Never empty
    pub items: Vec<GroceryItem>,
    pub recipe: Option<Recipe>,
}

/// Turns a pasted link into a grocery list.
///
/// Implementations must always produce a non-empty list; links they cannot
/// make sense of get a generic fallback rather than an error.
pub trait IngredientSource {
    fn extract(&self, url: &str) -> impl Future<Output = GeneratedList> + Send;
}

/// Simulated extractor: sleeps, then answers from the canned templates.
#[derive(Debug, Clone)]
pub struct MockSource {
    processing_delay: Duration,
}

impl MockSource {
    pub fn new(processing_delay: Duration) -> Self {
        MockSource { processing_delay }
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new(Settings::default().processing_delay())
    }
}

impl IngredientSource for MockSource {
    fn extract(&self, url: &str) -> impl Future<Output = GeneratedList> + Send {
        let url = url.to_string();
        let delay = self.processing_delay;
        async move {
            tokio::time::sleep(delay).await;
            template_for(&crate::classify::classify_link(&url))
        }
    }
}

/// Runs generations for one grocery screen.
#[derive(Debug, Clone)]
pub struct Generator<S = MockSource> {
    source: S,
    reveal_delay: Duration,
}

impl Generator<MockSource> {
    /// Generator backed by the mock extractor with the given timings.
    pub fn mock(settings: &Settings) -> Self {
        Generator::new(MockSource::new(settings.processing_delay()), settings)
    }
}

impl<S: IngredientSource> Generator<S> {
    pub fn new(source: S, settings: &Settings) -> Self {
        Generator {
            source,
            reveal_delay: settings.reveal_delay(),
        }
    }

    /// Runs generation `run` for `url`, reporting each step through
    /// `dispatch`.
    ///
    /// Emits [`GeneratorAction::Completed`] once the source answers and
    /// [`GeneratorAction::Reveal`] after the reveal delay. If `token` is
    /// cancelled first, or the future is dropped before the reveal, emits
    /// [`GeneratorAction::Cancelled`] instead. Only cancellation through the
    /// token returns [`GenerateError::Cancelled`].
    pub async fn run<F>(
        &self,
        run: u64,
        url: &str,
        token: &CancellationToken,
        dispatch: F,
    ) -> Result<(), GenerateError>
    where
        F: FnMut(GeneratorAction),
    {
        log::info!("Generating grocery list (run {run})");
        let mut guard = RunGuard::new(run, dispatch);

        let list = tokio::select! {
            biased;
            _ = token.cancelled() => {
                log::info!("Generation run {run} cancelled while processing");
                guard.finish(GeneratorAction::Cancelled { run });
                return Err(GenerateError::Cancelled);
            }
            list = self.source.extract(url) => list,
        };

        log::info!(
            "Generated {} items for {:?} link (run {run})",
            list.items.len(),
            list.link.kind
        );
        guard.emit(GeneratorAction::Completed { run, list });

        tokio::select! {
            biased;
            _ = token.cancelled() => {
                log::info!("Generation run {run} cancelled before reveal");
                guard.finish(GeneratorAction::Cancelled { run });
                Err(GenerateError::Cancelled)
            }
            _ = tokio::time::sleep(self.reveal_delay) => {
                guard.finish(GeneratorAction::Reveal { run });
                Ok(())
            }
        }
    }
}

/// Dispatch handle for one run. Reports `Cancelled` when dropped before the
/// run emitted its final action.
struct RunGuard<F: FnMut(GeneratorAction)> {
    run: u64,
    dispatch: F,
    finished: bool,
}

impl<F: FnMut(GeneratorAction)> RunGuard<F> {
    fn new(run: u64, dispatch: F) -> Self {
        RunGuard {
            run,
            dispatch,
            finished: false,
        }
    }

    fn emit(&mut self, action: GeneratorAction) {
        (self.dispatch)(action);
    }

    fn finish(&mut self, action: GeneratorAction) {
        self.finished = true;
        (self.dispatch)(action);
    }
}

impl<F: FnMut(GeneratorAction)> Drop for RunGuard<F> {
    fn drop(&mut self) {
        if !self.finished {
            log::info!("Generation run {} dropped before finishing", self.run);
            (self.dispatch)(GeneratorAction::Cancelled { run: self.run });
        }
    }
}
