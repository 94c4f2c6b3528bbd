use crate::ports::inbound::LoadEventHook;
use crate::shared::Result;
use anyhow::Context;
use futures::future::join_all;
use std::sync::Arc;
use tracing::debug;

/// TrackLoadEventsUseCase - replays load events through a hook concurrently
///
/// Each event runs on the blocking pool, the way a host would call the hook
/// from its own loader threads.
///
/// # Type Parameters
/// * `H` - LoadEventHook implementation
pub struct TrackLoadEventsUseCase<H> {
    hook: Arc<H>,
}

impl<H> TrackLoadEventsUseCase<H>
where
    H: LoadEventHook + 'static,
{
    pub fn new(hook: Arc<H>) -> Self {
        Self { hook }
    }

    /// Dispatches every event and waits for all of them
    ///
    /// # Arguments
    /// * `origins` - One entry per loaded code unit; `None` when the origin is unknown
    ///
    /// # Returns
    /// Number of events dispatched
    ///
    /// # Errors
    /// Returns an error if a dispatch task panicked
    pub async fn execute(&self, origins: Vec<Option<String>>) -> Result<usize> {
        let tasks = origins.into_iter().map(|origin| {
            let hook = Arc::clone(&self.hook);
            tokio::task::spawn_blocking(move || {
                hook.notify(origin.as_deref(), &[]);
            })
        });

        let results = join_all(tasks).await;
        let dispatched = results.len();
        for result in results {
            result.context("load event dispatch failed")?;
        }

        debug!(events = dispatched, "load events dispatched");
        Ok(dispatched)
    }
}
