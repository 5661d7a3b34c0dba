//! Pattern-based replacement.
//!
//! [`Segments::replace`] and [`Segments::replace_all`] search the flattened
//! buffer text and hand each match to the splice engine, so provenance around
//! the match is kept the same way as for an absolute-range edit.
//!
//! Search targets are given by the [`Pattern`] trait, implemented for:
//! - `str`, `String` and `char` - literal matches
//! - `regex_automata::meta::Regex` - regular expressions (`regex` feature)
//!
//! Replacements are given by the [`Replacer`] trait, implemented for literal
//! strings and for `FnMut(&str) -> Segment<T>`, which receives the matched
//! text and can return a located segment to carry provenance.
//!
//! # Example
//!
//! ```ignore
//! use the_segments::{Segment, Segments};
//!
//! let mut s: Segments = Segments::from_source("a + a");
//! s.replace_all("a", |m: &str| -> Segment { Segment::located(m.to_uppercase(), 100) });
//! assert_eq!(s.to_string(), "A + A");
//! ```

use std::ops::Range;

use crate::{
  Tendril,
  segment::Segment,
  segments::Segments,
};

/// Something that can be searched for in the flattened buffer text.
///
/// Ranges are byte ranges into `haystack`.
pub trait Pattern {
  fn find_in(&self, haystack: &str) -> Option<Range<usize>>;

  /// All non-overlapping matches, left to right.
  fn find_all_in(&self, haystack: &str) -> Vec<Range<usize>>;
}

impl Pattern for str {
  fn find_in(&self, haystack: &str) -> Option<Range<usize>> {
    haystack.find(self).map(|start| start..start + self.len())
  }

  fn find_all_in(&self, haystack: &str) -> Vec<Range<usize>> {
    haystack
      .match_indices(self)
      .map(|(start, m)| start..start + m.len())
      .collect()
  }
}

impl Pattern for String {
  fn find_in(&self, haystack: &str) -> Option<Range<usize>> {
    self.as_str().find_in(haystack)
  }

  fn find_all_in(&self, haystack: &str) -> Vec<Range<usize>> {
    self.as_str().find_all_in(haystack)
  }
}

impl Pattern for char {
  fn find_in(&self, haystack: &str) -> Option<Range<usize>> {
    haystack
      .find(*self)
      .map(|start| start..start + self.len_utf8())
  }

  fn find_all_in(&self, haystack: &str) -> Vec<Range<usize>> {
    haystack
      .match_indices(*self)
      .map(|(start, m)| start..start + m.len())
      .collect()
  }
}

#[cfg(feature = "regex")]
impl Pattern for regex_automata::meta::Regex {
  fn find_in(&self, haystack: &str) -> Option<Range<usize>> {
    self.find(haystack).map(|m| m.range())
  }

  fn find_all_in(&self, haystack: &str) -> Vec<Range<usize>> {
    self.find_iter(haystack).map(|m| m.range()).collect()
  }
}

impl<P: Pattern + ?Sized> Pattern for &P {
  fn find_in(&self, haystack: &str) -> Option<Range<usize>> {
    (**self).find_in(haystack)
  }

  fn find_all_in(&self, haystack: &str) -> Vec<Range<usize>> {
    (**self).find_all_in(haystack)
  }
}

/// Produces the segment that replaces a match.
pub trait Replacer<T> {
  fn replacement(&mut self, matched: &str) -> Segment<T>;
}

impl<T> Replacer<T> for &str {
  fn replacement(&mut self, _matched: &str) -> Segment<T> {
    Segment::Text(Tendril::from(*self))
  }
}

impl<T> Replacer<T> for String {
  fn replacement(&mut self, _matched: &str) -> Segment<T> {
    Segment::Text(Tendril::from(self.as_str()))
  }
}

impl<T> Replacer<T> for Tendril {
  fn replacement(&mut self, _matched: &str) -> Segment<T> {
    Segment::Text(self.clone())
  }
}

impl<T, F: FnMut(&str) -> Segment<T>> Replacer<T> for F {
  fn replacement(&mut self, matched: &str) -> Segment<T> {
    (*self)(matched)
  }
}

/// Char offset of byte index `byte` in `text`, counting from a known
/// `(byte, char)` position at or before it.
fn advance_chars(text: &str, from: (usize, usize), byte: usize) -> usize {
  from.1 + text[from.0..byte].chars().count()
}

impl<T: Clone> Segments<T> {
  /// Replaces the first match of `pattern`. Returns whether anything matched.
  pub fn replace<P, R>(&mut self, pattern: P, mut replacer: R) -> bool
  where
    P: Pattern,
    R: Replacer<T>,
  {
    let text = self.to_string();
    let Some(range) = pattern.find_in(&text) else {
      return false;
    };

    let start = advance_chars(&text, (0, 0), range.start);
    let end = advance_chars(&text, (range.start, start), range.end);
    let segment = replacer.replacement(&text[range]);
    self.update(start, end, segment);
    true
  }

  /// Replaces every non-overlapping match of `pattern`, returning the number
  /// of replacements.
  ///
  /// Matches are all found up front against the text as it was before the
  /// call, so replacement text is never searched again. Each later match is
  /// shifted by the length change of the replacements before it.
  pub fn replace_all<P, R>(&mut self, pattern: P, mut replacer: R) -> usize
  where
    P: Pattern,
    R: Replacer<T>,
  {
    let text = self.to_string();
    let matches = pattern.find_all_in(&text);

    // (byte, char) position of the last match end in `text`.
    let mut cursor = (0, 0);
    let mut delta: isize = 0;

    for range in &matches {
      let start = advance_chars(&text, cursor, range.start);
      let end = advance_chars(&text, (range.start, start), range.end);
      cursor = (range.end, end);

      let segment = replacer.replacement(&text[range.clone()]);
      let new_len = segment.len_chars();
      self.update(
        start.saturating_add_signed(delta),
        end.saturating_add_signed(delta),
        segment,
      );
      delta += new_len as isize - (end - start) as isize;
    }

    tracing::debug!(matches = matches.len(), "replaced all matches");
    matches.len()
  }
}
