//! Concurrent fetch-and-combine.
//!
//! One task is spawned per locator. Successes come back on a channel sized to
//! the locator count, failures on a one-slot channel, so a task that finishes
//! after the call has returned never blocks.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::core::{combine_reversed, normalize_locator};
use crate::data::{FetchOutcome, ResultSlots};
use crate::effects::fetcher::ResourceFetcher;
use crate::effects::http::HttpClient;
use crate::error::{FetchError, Result};

/// Fans out one fetch per locator and joins the bodies in reverse input order.
///
/// A coordinator holds no per-call state. It can be shared behind an `Arc`
/// and called any number of times, sequentially or concurrently.
pub struct FetchCoordinator<C> {
    fetcher: ResourceFetcher<C>,
}

impl<C: HttpClient + 'static> FetchCoordinator<C> {
    pub fn new(client: C) -> Self { Self::from_shared(Arc::new(client)) }

    pub fn from_shared(client: Arc<C>) -> Self {
        Self {
            fetcher: ResourceFetcher::new(client),
        }
    }

    pub fn client(&self) -> &C { self.fetcher.client() }

    /// Fetch every locator concurrently and concatenate the bodies, last
    /// locator first.
    ///
    /// An empty input yields an empty string without any network activity.
    /// The first failure observed ends the call: outstanding fetches are
    /// cancelled and no partial output is returned. Which failure wins when
    /// several locators fail is a race.
    ///
    /// Dropping the returned future before it completes also cancels every
    /// fetch it started.
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn fetch_and_combine<S: AsRef<str>>(&self, locators: &[S]) -> Result<String> {
        if locators.is_empty() {
            return Ok(String::new());
        }

        let urls: Vec<String> = locators
            .iter()
            .map(|locator| normalize_locator(locator.as_ref()))
            .collect();
        let total = urls.len();
        tracing::debug!(total, "starting fetches");

        let cancel = CancellationToken::new();
        let guard = cancel.clone().drop_guard();
        let (success_tx, mut success_rx) = mpsc::channel::<FetchOutcome>(total);
        let (failure_tx, mut failure_rx) = mpsc::channel::<FetchError>(1);

        for (index, url) in urls.into_iter().enumerate() {
            let fetcher = self.fetcher.clone();
            let cancel = cancel.clone();
            let success_tx = success_tx.clone();
            let failure_tx = failure_tx.clone();
            let span = tracing::debug_span!("fetch", index, url = %url);

            tokio::spawn(
                async move {
                    match fetcher.fetch(index, &url, &cancel).await {
                        Some(Ok(outcome)) => {
                            let _ = success_tx.try_send(outcome);
                        }
                        // Only the first failure is kept; a full or closed
                        // conduit means the call is already over.
                        Some(Err(err)) => {
                            let _ = failure_tx.try_send(err);
                        }
                        None => {}
                    }
                }
                .instrument(span),
            );
        }
        // The success channel closes once every task has dropped its sender.
        drop(success_tx);
        drop(failure_tx);

        let mut slots = ResultSlots::new(total);
        loop {
            tokio::select! {
                biased;
                Some(err) = failure_rx.recv() => {
                    cancel.cancel();
                    tracing::warn!(error = %err, "fetch failed, cancelling remaining fetches");
                    return Err(err);
                }
                received = success_rx.recv() => match received {
                    Some(outcome) => {
                        let filled = slots.fill(outcome.index, outcome.body);
                        debug_assert!(filled, "slot {} reported twice or out of range", outcome.index);
                    }
                    None => break,
                },
            }
        }

        if !slots.is_complete() {
            // Every task is done. A failure that raced the close is already
            // buffered; otherwise a task ended without reporting.
            cancel.cancel();
            let err = failure_rx.recv().await.unwrap_or(FetchError::Incomplete {
                expected: total,
                received: slots.filled(),
            });
            tracing::warn!(error = %err, "fetch failed");
            return Err(err);
        }

        let _ = guard.disarm();
        let bodies = slots.into_bodies().ok_or(FetchError::Incomplete {
            expected: total,
            received: total,
        })?;
        Ok(combine_reversed(&bodies))
    }
}
