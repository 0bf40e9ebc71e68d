//! Concurrent fetch-and-combine of remote resources.
//!
//! Given an ordered list of locators, every resource is fetched in parallel
//! and the bodies are concatenated in reverse of the input order. The first
//! failure cancels everything still in flight.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Plain types passed between layers
//! - [`core`] - Pure transformations
//! - [`effects`] - I/O operations with trait abstraction
//!
//! # Example
//!
//! ```no_run
//! use revcat_fetch::{FetchCoordinator, ReqwestClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let coordinator = FetchCoordinator::new(ReqwestClient::new()?);
//! let combined = coordinator
//!     .fetch_and_combine(&["example.com/a", "https://example.com/b"])
//!     .await?;
//! print!("{combined}");
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod data;
pub mod effects;
mod error;

pub use self::core::{combine_reversed, is_success, normalize_locator};
pub use self::data::{FetchOutcome, ResultSlots};
pub use self::effects::{FetchCoordinator, HttpClient, HttpResponse, ResourceFetcher};

#[cfg(feature = "reqwest")]
pub use self::effects::ReqwestClient;

pub use self::error::{FetchError, Result};
