//! The segment buffer and its splice engine.
//!
//! [`Segments`] owns an ordered list of [`Segment`]s whose concatenated text
//! is the buffer contents. Every edit goes through a single splice of that
//! list: the segments overlapping the edited range are replaced by their
//! retained head, the new segments and their retained tail, and bare-text
//! pieces around the edit site are merged back together.
//!
//! # Example
//!
//! ```ignore
//! use the_segments::{Segment, Segments};
//!
//! let mut s: Segments = Segments::from_source("problems = 99");
//! s.update(0, 8, "answer");
//! assert_eq!(s.as_slice(), &[
//!   Segment::from("answer"),
//!   Segment::located(" = 99", 8),
//! ]);
//! ```

use std::{
  fmt,
  ops::{
    Deref,
    Range,
  },
};

use smallvec::SmallVec;

use crate::{
  Result,
  Tendril,
  error::validate_range,
  offsets::{
    build_offsets,
    locate_end,
    locate_start,
  },
  segment::{
    Located,
    Locator,
    Segment,
    SourceId,
  },
  trim::{
    trim_end,
    trim_start,
  },
};

/// Replacement list assembled for one splice: head, new segments, tail.
pub(crate) type Pieces<T> = SmallVec<[Segment<T>; 4]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments<T = ()> {
  segments: Vec<Segment<T>>,
}

/// A located segment as seen from the buffer: where its text currently sits
/// and which source span it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping<'a, T> {
  /// Char range in the flattened buffer.
  pub range:        Range<usize>,
  pub source:       Option<&'a SourceId>,
  pub source_range: Range<usize>,
  pub data:         Option<&'a T>,
}

impl<T> Default for Segments<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Segments<T> {
  pub fn new() -> Self {
    Self {
      segments: Vec::new(),
    }
  }

  /// A buffer holding all of `text` as one located segment starting at `0`.
  pub fn from_source(text: impl Into<Tendril>) -> Self {
    Self {
      segments: vec![Segment::Located(Located::new(text, Locator::Offset(0)))],
    }
  }

  /// Like [`Segments::from_source`], tagging the segment with `source`.
  pub fn from_source_with_id(text: impl Into<Tendril>, source: impl Into<SourceId>) -> Self {
    Self {
      segments: vec![Segment::Located(
        Located::new(text, Locator::Offset(0)).with_source(source),
      )],
    }
  }

  /// Total length in characters.
  pub fn len_chars(&self) -> usize {
    self.segments.iter().map(Segment::len_chars).sum()
  }

  pub fn is_empty(&self) -> bool {
    self.segments.iter().all(Segment::is_empty)
  }

  pub fn as_slice(&self) -> &[Segment<T>] {
    &self.segments
  }

  pub fn into_inner(self) -> Vec<Segment<T>> {
    self.segments
  }

  /// Appends a segment as-is, without merging.
  pub fn push(&mut self, segment: impl Into<Segment<T>>) {
    self.segments.push(segment.into());
  }

  /// Prepends a segment as-is, without merging.
  pub fn push_front(&mut self, segment: impl Into<Segment<T>>) {
    self.segments.insert(0, segment.into());
  }

  /// Located segments with their current buffer range, in buffer order.
  pub fn mappings(&self) -> impl Iterator<Item = Mapping<'_, T>> {
    self
      .segments
      .iter()
      .scan(0, |offset, segment| {
        let start = *offset;
        *offset += segment.len_chars();
        Some((start..*offset, segment))
      })
      .filter_map(|(range, segment)| {
        let located = segment.as_located()?;
        Some(Mapping {
          range,
          source: located.source.as_ref(),
          source_range: located.source_range(),
          data: located.data.as_ref(),
        })
      })
  }
}

impl<T: Clone> Segments<T> {
  /// Replaces the chars in `start..end` with `new_segments`.
  ///
  /// `start == end` inserts without removing anything, and an empty
  /// `new_segments` deletes the range. Segments only partly covered by the
  /// range keep their uncovered head or tail, with locators adjusted.
  ///
  /// The range is not validated: `start > end` or `end > self.len_chars()`
  /// produce unspecified (but memory safe) contents. Use
  /// [`Segments::try_replace_range`] for a checked edit.
  pub fn replace_range<I>(&mut self, start: usize, end: usize, new_segments: I)
  where
    I: IntoIterator,
    I::Item: Into<Segment<T>>,
  {
    let new_segments = new_segments.into_iter().map(Into::<Segment<T>>::into);

    if self.segments.is_empty() {
      let pieces: Pieces<T> = new_segments.collect();
      self.splice_merged(0, 0, pieces);
      return;
    }

    let offsets = build_offsets(&self.segments);
    let start_index = locate_start(&offsets, start);
    let end_index = locate_end(&offsets, end);

    let start_segment = &self.segments[start_index];
    let end_segment = &self.segments[end_index];
    let start_segment_start = offsets[start_index];
    let end_segment_start = offsets[end_index];
    let end_segment_end = end_segment_start + end_segment.len_chars();

    let mut pieces = Pieces::new();
    if start > start_segment_start {
      pieces.push(trim_end(start_segment, start - start_segment_start));
    }
    pieces.extend(new_segments);
    if end < end_segment_end {
      let cut = end.saturating_sub(end_segment_start);
      pieces.push(trim_start(end_segment, isize::try_from(cut).unwrap_or(isize::MAX)));
    }

    // An insertion on a boundary resolves `end_index` to the segment before
    // `start_index`; nothing is removed then.
    let remove_end = if end_index >= start_index {
      end_index + 1
    } else {
      start_index
    };

    tracing::trace!(
      start,
      end,
      start_index,
      end_index,
      pieces = pieces.len(),
      "splice segments"
    );

    self.splice_merged(start_index, remove_end, pieces);
  }

  /// Single-segment form of [`Segments::replace_range`].
  pub fn update(&mut self, start: usize, end: usize, segment: impl Into<Segment<T>>) {
    let segment: Segment<T> = segment.into();
    self.replace_range(start, end, [segment]);
  }

  /// [`Segments::replace_range`] with the range checked against the buffer
  /// first.
  pub fn try_replace_range<I>(&mut self, start: usize, end: usize, new_segments: I) -> Result<()>
  where
    I: IntoIterator,
    I::Item: Into<Segment<T>>,
  {
    validate_range(start, end, self.len_chars())?;
    self.replace_range(start, end, new_segments);
    Ok(())
  }

  /// Replaces `self.segments[from..to]` with `pieces` in one splice.
  ///
  /// Bare-text neighbours directly outside `from..to` are pulled into the
  /// splice so that no two bare-text segments end up adjacent around the
  /// edit site. Empty bare-text pieces are dropped.
  pub(crate) fn splice_merged(&mut self, mut from: usize, mut to: usize, mut pieces: Pieces<T>) {
    if from > 0
      && let Segment::Text(text) = &mut self.segments[from - 1]
    {
      pieces.insert(0, Segment::Text(std::mem::take(text)));
      from -= 1;
    }
    if to < self.segments.len()
      && let Segment::Text(text) = &mut self.segments[to]
    {
      pieces.push(Segment::Text(std::mem::take(text)));
      to += 1;
    }

    merge_text(&mut pieces);
    self.segments.splice(from..to, pieces);
  }
}

/// Drops empty bare text and joins runs of adjacent bare text, scanning
/// right to left.
fn merge_text<T>(pieces: &mut Pieces<T>) {
  pieces.retain(|piece| !matches!(piece, Segment::Text(text) if text.is_empty()));

  for i in (1..pieces.len()).rev() {
    let (left, right) = pieces.split_at_mut(i);
    if let (Segment::Text(head), Segment::Text(tail)) = (&mut left[i - 1], &mut right[0]) {
      head.push_str(tail.as_str());
      pieces.remove(i);
    }
  }
}

impl<T> fmt::Display for Segments<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for segment in &self.segments {
      f.write_str(segment.text())?;
    }
    Ok(())
  }
}

impl<T> Deref for Segments<T> {
  type Target = [Segment<T>];

  fn deref(&self) -> &Self::Target {
    &self.segments
  }
}

impl<T> From<Vec<Segment<T>>> for Segments<T> {
  fn from(segments: Vec<Segment<T>>) -> Self {
    Self { segments }
  }
}

impl<T, S: Into<Segment<T>>> FromIterator<S> for Segments<T> {
  fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
    Self {
      segments: iter.into_iter().map(Into::into).collect(),
    }
  }
}

impl<'a, T> IntoIterator for &'a Segments<T> {
  type IntoIter = std::slice::Iter<'a, Segment<T>>;
  type Item = &'a Segment<T>;

  fn into_iter(self) -> Self::IntoIter {
    self.segments.iter()
  }
}
