use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::core::is_success;
use crate::data::FetchOutcome;
use crate::effects::http::{HttpClient, HttpResponse};
use crate::error::{FetchError, Result};

/// Retrieves the body of a single locator, honoring a shared cancellation
/// token.
pub struct ResourceFetcher<C> {
    client: Arc<C>,
}

impl<C> Clone for ResourceFetcher<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<C: HttpClient> ResourceFetcher<C> {
    pub fn new(client: Arc<C>) -> Self { Self { client } }

    pub fn client(&self) -> &C { &self.client }

    /// Fetch `url` and tag the body with `index`.
    ///
    /// Returns `None` without touching the network when `cancel` has already
    /// fired. Otherwise exactly one outcome is returned; cancellation while
    /// the request or body is in flight is reported as a failure.
    pub async fn fetch(
        &self,
        index: usize,
        url: &str,
        cancel: &CancellationToken,
    ) -> Option<Result<FetchOutcome>> {
        if cancel.is_cancelled() {
            tracing::debug!(index, url, "call already cancelled, skipping fetch");
            return None;
        }
        Some(self.retrieve(index, url, cancel).await)
    }

    async fn retrieve(
        &self,
        index: usize,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<FetchOutcome> {
        let request = self.client.build_get(url).map_err(|e| FetchError::Request {
            url:   url.to_string(),
            cause: e.to_string(),
        })?;

        let executed = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err("request cancelled".to_string()),
            result = self.client.execute(request) => result.map_err(|e| e.to_string()),
        };
        let response = executed.map_err(|cause| FetchError::Transport {
            url: url.to_string(),
            cause,
        })?;

        let status = response.status();
        if !is_success(status) {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let read = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err("read cancelled".to_string()),
            result = response.bytes() => result.map_err(|e| e.to_string()),
        };
        let body = read.map_err(|cause| FetchError::Body {
            url: url.to_string(),
            cause,
        })?;

        tracing::debug!(index, url, bytes = body.len(), "fetched");
        Ok(FetchOutcome::new(index, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct Refused;

    impl std::fmt::Display for Refused {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "connection refused")
        }
    }

    impl std::error::Error for Refused {}

    struct Ok200(&'static str);

    impl HttpResponse for Ok200 {
        type Error = Refused;

        fn status(&self) -> u16 { 200 }

        async fn bytes(self) -> std::result::Result<Bytes, Refused> {
            Ok(Bytes::from_static(self.0.as_bytes()))
        }
    }

    #[derive(Default)]
    struct CountingClient {
        calls: AtomicUsize,
    }

    impl HttpClient for CountingClient {
        type Error = Refused;
        type Request = String;
        type Response = Ok200;

        fn build_get(&self, url: &str) -> std::result::Result<String, Refused> {
            Ok(url.to_string())
        }

        async fn execute(&self, request: String) -> std::result::Result<Ok200, Refused> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if request.ends_with("/down") {
                return Err(Refused);
            }
            Ok(Ok200("body"))
        }
    }

    #[tokio::test]
    async fn test_fetch_tags_body_with_index() {
        let fetcher = ResourceFetcher::new(Arc::new(CountingClient::default()));
        let outcome = fetcher
            .fetch(7, "http://host/x", &CancellationToken::new())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(outcome, FetchOutcome::new(7, Bytes::from_static(b"body")));
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let fetcher = ResourceFetcher::new(Arc::new(CountingClient::default()));
        let err = fetcher
            .fetch(0, "http://host/down", &CancellationToken::new())
            .await
            .unwrap()
            .unwrap_err();
        assert_eq!(err, FetchError::Transport {
            url:   "http://host/down".to_string(),
            cause: "connection refused".to_string(),
        });
    }

    #[tokio::test]
    async fn test_cancelled_before_start_reports_nothing() {
        let client = Arc::new(CountingClient::default());
        let fetcher = ResourceFetcher::new(Arc::clone(&client));
        let cancel = CancellationToken::new();
        cancel.cancel();

        assert!(fetcher.fetch(0, "http://host/x", &cancel).await.is_none());
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }
}
