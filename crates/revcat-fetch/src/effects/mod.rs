//! I/O operations for fetching and combining remote resources.
//!
//! Everything here talks to the network through the [`HttpClient`] trait so
//! the coordination logic can be exercised with in-memory clients.

mod coordinator;
mod fetcher;
mod http;

pub use coordinator::FetchCoordinator;
pub use fetcher::ResourceFetcher;
pub use http::{HttpClient, HttpResponse};
#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
