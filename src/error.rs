use thiserror_no_std::Error;

/// Reasons a raw slice cannot be viewed as a history.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesError {
    #[error("history is empty")]
    Empty,
    #[error("history length {len} is not a multiple of the record width {width}")]
    Misaligned { len: usize, width: usize },
}
