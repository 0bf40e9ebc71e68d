use bytes::Bytes;

/// The success half of one fetch task's result.
///
/// Failures travel separately as [`FetchError`](crate::FetchError) so the
/// coordinator can watch them on their own conduit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    /// Position of the locator in the caller's input, 0-based.
    pub index: usize,
    /// Raw response body.
    pub body:  Bytes,
}

impl FetchOutcome {
    pub fn new(index: usize, body: impl Into<Bytes>) -> Self {
        Self {
            index,
            body: body.into(),
        }
    }
}
