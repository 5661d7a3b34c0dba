//! Offset index and binary-search locators.
//!
//! [`build_offsets`] turns a segment list into a prefix table where entry `i`
//! is the buffer offset at which segment `i` starts. The two locators search
//! that table and differ only in how they break ties on exact segment
//! boundaries:
//!
//! - [`locate_start`] resolves an offset to the segment that *starts* there,
//!   which is where the first affected character of an edit lives.
//! - [`locate_end`] resolves an offset to the segment that *ends* there, so an
//!   edit ending exactly on a boundary does not pull in the following segment.
//!
//! Both return an index in `0..offsets.len()` (or `0` for an empty table);
//! bounds checking is the caller's job.

use crate::segment::Segment;

/// Start offset of every segment, in characters.
pub fn build_offsets<T>(segments: &[Segment<T>]) -> Vec<usize> {
  let mut offsets = Vec::with_capacity(segments.len());
  let mut offset = 0;
  for segment in segments {
    offsets.push(offset);
    offset += segment.len_chars();
  }
  offsets
}

/// Greatest index `i` with `offsets[i] <= pos`.
#[inline]
pub fn locate_start(offsets: &[usize], pos: usize) -> usize {
  offsets.partition_point(|&offset| offset <= pos).saturating_sub(1)
}

/// Greatest index `i` with `offsets[i] < pos`, i.e. the segment whose end
/// is at or after `pos`. A position of `0` resolves to the first segment.
#[inline]
pub fn locate_end(offsets: &[usize], pos: usize) -> usize {
  offsets.partition_point(|&offset| offset < pos).saturating_sub(1)
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn offsets_are_prefix_sums() {
    let segments: Vec<Segment> = vec![
      "abc".into(),
      Segment::located("", 4),
      Segment::located("de", 0),
      "f".into(),
    ];
    assert_eq!(build_offsets(&segments), vec![0, 3, 3, 5]);
    assert_eq!(build_offsets::<()>(&[]), Vec::<usize>::new());
  }

  #[test]
  fn start_search() {
    let offsets = [0, 5, 10];
    assert_eq!(locate_start(&offsets, 0), 0);
    assert_eq!(locate_start(&offsets, 1), 0);
    assert_eq!(locate_start(&offsets, 4), 0);
    assert_eq!(locate_start(&offsets, 5), 1);
    assert_eq!(locate_start(&offsets, 6), 1);
    assert_eq!(locate_start(&offsets, 9), 1);
    assert_eq!(locate_start(&offsets, 10), 2);
    assert_eq!(locate_start(&offsets, 11), 2);
  }

  #[test]
  fn end_search_prefers_earlier_segment_on_boundary() {
    let offsets = [0, 5, 10];
    assert_eq!(locate_end(&offsets, 0), 0);
    assert_eq!(locate_end(&offsets, 1), 0);
    assert_eq!(locate_end(&offsets, 5), 0);
    assert_eq!(locate_end(&offsets, 6), 1);
    assert_eq!(locate_end(&offsets, 10), 1);
    assert_eq!(locate_end(&offsets, 11), 2);
  }

  #[test]
  fn empty_segments_on_boundary() {
    // "abc", "", "de"
    let offsets = [0, 3, 3];
    assert_eq!(locate_start(&offsets, 3), 2);
    assert_eq!(locate_end(&offsets, 3), 0);
    assert_eq!(locate_end(&offsets, 4), 2);
  }

  #[test]
  fn empty_table() {
    assert_eq!(locate_start(&[], 3), 0);
    assert_eq!(locate_end(&[], 3), 0);
  }
}
