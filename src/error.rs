/// Errors reported by [`SkipMap`](crate::SkipMap).
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested key is not present in the map.
    #[error("key not found")]
    KeyNotFound,

    /// A construction parameter is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
