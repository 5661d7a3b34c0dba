//! The segment value shape.
//!
//! A [`Segment`] is either bare text with no provenance, or [`Located`] text
//! that remembers which source it came from and where. The position inside the
//! source is encoded by a [`Locator`]: a single start offset whose end is
//! implied by the text length, or an explicit `[start, end)` pair for text
//! whose mapped span no longer matches its own length.

use std::{
  fmt,
  ops::Range,
  sync::Arc,
};

use crate::Tendril;

/// Identifies the source a located segment was taken from.
pub type SourceId = Arc<str>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locator {
  /// Mapped span is `[start, start + len(text))`.
  Offset(usize),
  /// Mapped span is `[start, end)`, independent of the text length.
  Range(usize, usize),
}

impl Locator {
  pub fn start(self) -> usize {
    match self {
      Locator::Offset(start) | Locator::Range(start, _) => start,
    }
  }
}

impl From<usize> for Locator {
  fn from(start: usize) -> Self {
    Locator::Offset(start)
  }
}

impl From<(usize, usize)> for Locator {
  fn from((start, end): (usize, usize)) -> Self {
    Locator::Range(start, end)
  }
}

/// Text carrying provenance, plus an optional caller-defined payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located<T = ()> {
  pub text:    Tendril,
  pub source:  Option<SourceId>,
  pub locator: Locator,
  pub data:    Option<T>,
}

impl<T> Located<T> {
  pub fn new(text: impl Into<Tendril>, locator: Locator) -> Self {
    Self {
      text:    text.into(),
      source:  None,
      locator,
      data:    None,
    }
  }

  #[must_use]
  pub fn with_source(mut self, source: impl Into<SourceId>) -> Self {
    self.source = Some(source.into());
    self
  }

  #[must_use]
  pub fn with_data(mut self, data: T) -> Self {
    self.data = Some(data);
    self
  }

  pub fn len_chars(&self) -> usize {
    self.text.chars().count()
  }

  /// The `[start, end)` span of the source this text maps to.
  pub fn source_range(&self) -> Range<usize> {
    match self.locator {
      Locator::Offset(start) => start..start + self.len_chars(),
      Locator::Range(start, end) => start..end,
    }
  }

  /// Whether this segment was taken from `source`. `None` only matches
  /// segments without a source id.
  pub fn is_from(&self, source: Option<&str>) -> bool {
    self.source.as_deref() == source
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<T = ()> {
  /// Generated text with no original-source counterpart.
  Text(Tendril),
  Located(Located<T>),
}

impl<T> Segment<T> {
  /// Located text mapped to `[start, start + len(text))` of an unnamed source.
  pub fn located(text: impl Into<Tendril>, start: usize) -> Self {
    Segment::Located(Located::new(text, Locator::Offset(start)))
  }

  /// Located text mapped to an explicit `[start, end)` of an unnamed source.
  pub fn located_range(text: impl Into<Tendril>, start: usize, end: usize) -> Self {
    Segment::Located(Located::new(text, Locator::Range(start, end)))
  }

  pub fn text(&self) -> &str {
    match self {
      Segment::Text(text) => text,
      Segment::Located(located) => &located.text,
    }
  }

  /// Length in characters.
  pub fn len_chars(&self) -> usize {
    self.text().chars().count()
  }

  pub fn is_empty(&self) -> bool {
    self.text().is_empty()
  }

  #[inline]
  pub fn is_located(&self) -> bool {
    matches!(self, Segment::Located(_))
  }

  pub fn as_located(&self) -> Option<&Located<T>> {
    match self {
      Segment::Text(_) => None,
      Segment::Located(located) => Some(located),
    }
  }

  pub fn source(&self) -> Option<&SourceId> {
    self.as_located().and_then(|located| located.source.as_ref())
  }

  pub fn data(&self) -> Option<&T> {
    self.as_located().and_then(|located| located.data.as_ref())
  }
}

impl<T> fmt::Display for Segment<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.text())
  }
}

impl<T> From<&str> for Segment<T> {
  fn from(text: &str) -> Self {
    Segment::Text(text.into())
  }
}

impl<T> From<String> for Segment<T> {
  fn from(text: String) -> Self {
    Segment::Text(text.into())
  }
}

impl<T> From<Tendril> for Segment<T> {
  fn from(text: Tendril) -> Self {
    Segment::Text(text)
  }
}

impl<T> From<Located<T>> for Segment<T> {
  fn from(located: Located<T>) -> Self {
    Segment::Located(located)
  }
}
