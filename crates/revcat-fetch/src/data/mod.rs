//! Data layer: plain types shared by the pure core and the effectful edge.

mod outcome;
mod slots;

pub use outcome::FetchOutcome;
pub use slots::ResultSlots;
