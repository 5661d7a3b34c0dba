use thiserror::Error;

pub type Result<T> = std::result::Result<T, SegmentError>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SegmentError {
  #[error("invalid edit range: start {start} is after end {end}")]
  InvalidRange { start: usize, end: usize },
  #[error("edit range {start}..{end} is out of bounds for buffer length {len}")]
  RangeOutOfBounds {
    start: usize,
    end:   usize,
    len:   usize,
  },
}

/// Checks that `start..end` is an ordered range inside a buffer of `len`
/// characters.
pub(crate) fn validate_range(start: usize, end: usize, len: usize) -> Result<()> {
  if start > end {
    return Err(SegmentError::InvalidRange { start, end });
  }
  if end > len {
    return Err(SegmentError::RangeOutOfBounds { start, end, len });
  }
  Ok(())
}
