//! Pure transformations for fetch-and-combine.
//!
//! Nothing in here performs I/O; the effectful edge lives in
//! [`effects`](crate::effects).

mod assemble;
mod normalize;
mod validation;

pub use assemble::combine_reversed;
pub use normalize::{HTTP_SCHEME, HTTPS_SCHEME, normalize_locator};
pub use validation::is_success;
