//! Replacement addressed by provenance instead of buffer offset.

use crate::{
  segment::Segment,
  segments::{
    Pieces,
    Segments,
  },
  trim::{
    trim_end,
    trim_start,
  },
};

impl<T: Clone> Segments<T> {
  /// Replaces the text that came from `start..end` of `source` with
  /// `new_segments`.
  ///
  /// The first located segment from `source` whose mapped span contains the
  /// whole range is edited; its remaining head and tail keep their
  /// provenance. Returns `false` without touching the buffer when no single
  /// segment contains the range, which includes ranges spanning several
  /// segments, ranges outside every mapped span, and `start > end`.
  ///
  /// Segments are not indexed by source offset, so this is a linear scan.
  pub fn replace_source_range<I>(
    &mut self,
    source: Option<&str>,
    start: usize,
    end: usize,
    new_segments: I,
  ) -> bool
  where
    I: IntoIterator,
    I::Item: Into<Segment<T>>,
  {
    if start > end {
      return false;
    }

    let found = self.iter().enumerate().find_map(|(index, segment)| {
      let located = segment.as_located()?;
      let range = located.source_range();
      (located.is_from(source) && range.start <= start && range.end >= end)
        .then_some((index, range))
    });
    let Some((index, range)) = found else {
      tracing::trace!(?source, start, end, "no segment contains source range");
      return false;
    };

    let target = &self[index];
    let mut pieces = Pieces::new();
    if start > range.start {
      pieces.push(trim_end(target, start - range.start));
    }
    pieces.extend(new_segments.into_iter().map(Into::<Segment<T>>::into));
    if end < range.end {
      let from_end = isize::try_from(range.end - end).unwrap_or(isize::MAX);
      pieces.push(trim_start(target, -from_end));
    }

    self.splice_merged(index, index + 1, pieces);
    true
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::segment::{
    Located,
    Locator,
  };

  fn no_segments() -> Vec<Segment> {
    Vec::new()
  }

  #[test]
  fn replace_problems() {
    let mut s: Segments = vec![Segment::located("problems = 99", 0)].into();
    assert_eq!(s.to_string(), "problems = 99");

    assert!(s.replace_source_range(None, 0, 8, ["answer"]));
    assert_eq!(s.to_string(), "answer = 99");
    assert_eq!(s.as_slice(), &[
      Segment::from("answer"),
      Segment::located(" = 99", 8)
    ]);

    assert!(s.replace_source_range(None, 11, 13, ["42"]));
    assert_eq!(s.to_string(), "answer = 42");
    assert_eq!(s.as_slice(), &[
      Segment::from("answer"),
      Segment::located(" = ", 8),
      Segment::from("42")
    ]);

    s.push_front("var ");
    s.push(";");
    assert_eq!(s.to_string(), "var answer = 42;");
    assert_eq!(s.as_slice(), &[
      Segment::from("var "),
      Segment::from("answer"),
      Segment::located(" = ", 8),
      Segment::from("42"),
      Segment::from(";")
    ]);
  }

  #[test]
  fn uncontained_ranges_are_rejected() {
    let mut s: Segments = Segments::from_source("problems = 99");

    assert!(!s.replace_source_range(None, 0, 14, no_segments()));
    assert!(!s.replace_source_range(None, 13, 14, no_segments()));
    assert!(!s.replace_source_range(None, 14, 15, no_segments()));
    assert!(!s.replace_source_range(None, 5, 4, no_segments()));
    assert_eq!(s.as_slice(), &[Segment::located("problems = 99", 0)]);

    assert!(s.replace_source_range(None, 1, 12, no_segments()));
    assert_eq!(s.as_slice(), &[
      Segment::located("p", 0),
      Segment::located("9", 12)
    ]);
  }

  #[test]
  fn range_spanning_segments_is_rejected() {
    let mut s: Segments = Segments::from_source("abcdef");
    assert!(s.replace_source_range(None, 2, 4, ["--"]));
    assert_eq!(s.to_string(), "ab--ef");

    // 1..5 now spans "ab" and "ef".
    assert!(!s.replace_source_range(None, 1, 5, ["x"]));
    assert_eq!(s.to_string(), "ab--ef");
  }

  #[test]
  fn source_id_must_match() {
    let mut s: Segments = vec![
      Segment::from(Located::new("one", Locator::Offset(0)).with_source("a.ts")),
      Segment::from(" "),
      Segment::from(Located::new("two", Locator::Offset(0)).with_source("b.ts")),
    ]
    .into();

    assert!(!s.replace_source_range(None, 0, 3, ["x"]));
    assert!(!s.replace_source_range(Some("c.ts"), 0, 3, ["x"]));

    assert!(s.replace_source_range(Some("b.ts"), 0, 3, ["2"]));
    assert_eq!(s.to_string(), "one 2");
    assert_eq!(s.as_slice(), &[
      Segment::from(Located::new("one", Locator::Offset(0)).with_source("a.ts")),
      Segment::from(" 2")
    ]);
  }

  #[test]
  fn first_containing_segment_wins() {
    // The same source span duplicated in the buffer.
    let mut s: Segments = vec![
      Segment::located("abc", 0),
      Segment::from("|"),
      Segment::located("abc", 0),
    ]
    .into();
    assert!(s.replace_source_range(None, 1, 2, ["B"]));
    assert_eq!(s.to_string(), "aBc|abc");
    assert_eq!(s[4], Segment::located("abc", 0));
  }

  #[test]
  fn zero_length_range_inserts() {
    let mut s: Segments = Segments::from_source("ab");
    assert!(s.replace_source_range(None, 1, 1, ["-"]));
    assert_eq!(s.as_slice(), &[
      Segment::located("a", 0),
      Segment::from("-"),
      Segment::located("b", 1)
    ]);

    assert!(s.replace_source_range(None, 2, 2, ["!"]));
    assert_eq!(s.to_string(), "a-b!");
  }

  #[test]
  fn explicit_range_locator_tail_counts_from_end() {
    let mut s: Segments = vec![Segment::located_range("abcd", 10, 14)].into();
    assert!(s.replace_source_range(None, 11, 13, ["X"]));
    assert_eq!(s.as_slice(), &[
      Segment::located_range("a", 10, 11),
      Segment::from("X"),
      Segment::located_range("d", 13, 14)
    ]);
  }

  #[test]
  fn payload_survives_on_remainders() {
    let mut s: Segments<u8> =
      vec![Segment::from(Located::new("hello", Locator::Offset(0)).with_data(9))].into();
    assert!(s.replace_source_range(None, 1, 4, ["ELL"]));
    assert_eq!(s.to_string(), "hELLo");
    assert_eq!(s[0].data(), Some(&9));
    assert_eq!(s[2].data(), Some(&9));
  }
}
