#[cfg(test)]
#[path = "search_test.rs"]
mod tests;

use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time;

use crate::domain::models::Event;
use crate::domain::models::GameApiBox;

/// Queries shorter than this never reach the backend.
pub const MIN_QUERY_CHARS: usize = 3;

pub fn is_searchable(query: &str) -> bool {
    return query.chars().count() >= MIN_QUERY_CHARS;
}

/// Runs at most one deferred task. Scheduling a new task aborts the pending
/// one, whether it is still waiting out the delay or already running.
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<Result<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Debouncer {
        return Debouncer {
            delay,
            pending: None,
        };
    }

    pub fn schedule<F>(&mut self, task: F)
    where
        F: Future<Output = Result<()>> + Send + 'static,
    {
        self.cancel();

        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            time::sleep(delay).await;
            return task.await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub struct SearchPipeline {
    api: GameApiBox,
    debouncer: Debouncer,
    tx: mpsc::UnboundedSender<Event>,
}

impl SearchPipeline {
    pub fn new(
        api: GameApiBox,
        delay: Duration,
        tx: mpsc::UnboundedSender<Event>,
    ) -> SearchPipeline {
        return SearchPipeline {
            api,
            debouncer: Debouncer::new(delay),
            tx,
        };
    }

    /// Called on every change of the search input. Short queries only cancel
    /// whatever lookup is pending.
    pub fn query(&mut self, query: String) {
        if !is_searchable(&query) {
            self.debouncer.cancel();
            return;
        }

        let api = self.api.clone();
        let tx = self.tx.clone();
        self.debouncer.schedule(async move {
            tracing::debug!(query = %query, "searching");
            match api.search(&query).await {
                Ok(results) => {
                    tx.send(Event::SearchResponse(query, results))?;
                }
                Err(err) => {
                    tracing::error!(error = ?err, query = %query, "search failed");
                    tx.send(Event::RequestFailed(
                        "Search is unavailable right now.".to_string(),
                    ))?;
                }
            }

            return Ok(());
        });
    }
}
