use std::future::Future;

use bytes::Bytes;

/// A response whose status is known and whose body has not been read yet.
pub trait HttpResponse: Send {
    /// Error type for reading the body.
    type Error: std::error::Error + Send + 'static;

    /// Numeric HTTP status code.
    fn status(&self) -> u16;

    /// Drain the whole body.
    fn bytes(self) -> impl Future<Output = std::result::Result<Bytes, Self::Error>> + Send;
}

/// Asynchronous HTTP client abstraction.
///
/// Building a request and executing it are separate steps so that a
/// malformed locator is told apart from a transport failure. Implementations
/// handle their own redirect following and connection pooling.
///
/// # Implementations
///
/// - [`ReqwestClient`]: Production implementation using `reqwest`
/// - Mock implementations for testing
pub trait HttpClient: Send + Sync {
    /// Error type for building and executing requests.
    type Error: std::error::Error + Send + 'static;

    /// A request ready to be executed.
    type Request: Send;

    /// The response handed back by [`execute`](Self::execute).
    type Response: HttpResponse;

    /// Build a plain GET for `url`: no body, no custom headers.
    ///
    /// # Errors
    ///
    /// Returns an error if `url` cannot be turned into a request.
    fn build_get(&self, url: &str) -> std::result::Result<Self::Request, Self::Error>;

    /// Send `request` and wait for the response head.
    ///
    /// # Errors
    ///
    /// Returns an error on DNS, connection or TLS failure. Non-2xx statuses
    /// are not errors at this level.
    fn execute(
        &self,
        request: Self::Request,
    ) -> impl Future<Output = std::result::Result<Self::Response, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;

    /// Production HTTP client implementation using reqwest.
    ///
    /// Cloning is cheap; clones share one connection pool.
    #[derive(Debug, Clone)]
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        /// Create a new ReqwestClient with default configuration.
        pub fn new() -> std::result::Result<Self, reqwest::Error> {
            let client = reqwest::Client::builder().build()?;
            Ok(Self { client })
        }

        /// Wrap an already configured client.
        pub fn with_client(client: reqwest::Client) -> Self { Self { client } }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;
        type Request = reqwest::Request;
        type Response = reqwest::Response;

        fn build_get(&self, url: &str) -> std::result::Result<reqwest::Request, reqwest::Error> {
            self.client.get(url).build()
        }

        async fn execute(
            &self,
            request: reqwest::Request,
        ) -> std::result::Result<reqwest::Response, reqwest::Error> {
            self.client.execute(request).await
        }
    }

    impl HttpResponse for reqwest::Response {
        type Error = reqwest::Error;

        fn status(&self) -> u16 { reqwest::Response::status(self).as_u16() }

        async fn bytes(self) -> std::result::Result<Bytes, reqwest::Error> {
            reqwest::Response::bytes(self).await
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;
