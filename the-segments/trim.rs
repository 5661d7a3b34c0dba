//! Shortened copies of a segment.
//!
//! Trimming keeps either the head or the tail of a segment's text and adjusts
//! the locator so the kept characters still point at the right place in the
//! source. Source id and payload are carried over unchanged.

use crate::{
  Tendril,
  segment::{
    Located,
    Locator,
    Segment,
  },
};

/// Byte index of the `n`th char of `text`, or `text.len()` past the end.
fn char_to_byte(text: &str, n: usize) -> usize {
  text.char_indices().nth(n).map_or(text.len(), |(idx, _)| idx)
}

/// Keeps the first `cut` characters of `segment`.
///
/// A single-offset locator is unchanged since its end follows the text. An
/// explicit range has its end pulled in by the number of removed characters.
/// `cut` past the end keeps the whole segment.
pub fn trim_end<T: Clone>(segment: &Segment<T>, cut: usize) -> Segment<T> {
  match segment {
    Segment::Text(text) => Segment::Text(Tendril::from(&text[..char_to_byte(text, cut)])),
    Segment::Located(located) => {
      let len = located.len_chars();
      let cut = cut.min(len);
      let removed = len - cut;
      let locator = match located.locator {
        Locator::Offset(start) => Locator::Offset(start),
        Locator::Range(start, end) => Locator::Range(start, end.saturating_sub(removed)),
      };
      Segment::Located(Located {
        text: Tendril::from(&located.text[..char_to_byte(&located.text, cut)]),
        source: located.source.clone(),
        locator,
        data: located.data.clone(),
      })
    },
  }
}

/// Keeps the characters of `segment` from `cut` onward.
///
/// A negative `cut` counts from the end of the text: it is normalized by
/// adding the text length, so `-2` keeps the last two characters. The result
/// is clamped to `0..=len`. The locator start advances by the number of
/// removed characters; an explicit range keeps its end.
pub fn trim_start<T: Clone>(segment: &Segment<T>, cut: isize) -> Segment<T> {
  let len = segment.len_chars();
  let cut = normalize_cut(cut, len);
  match segment {
    Segment::Text(text) => Segment::Text(Tendril::from(&text[char_to_byte(text, cut)..])),
    Segment::Located(located) => {
      let locator = match located.locator {
        Locator::Offset(start) => Locator::Offset(start + cut),
        Locator::Range(start, end) => Locator::Range(start + cut, end),
      };
      Segment::Located(Located {
        text: Tendril::from(&located.text[char_to_byte(&located.text, cut)..]),
        source: located.source.clone(),
        locator,
        data: located.data.clone(),
      })
    },
  }
}

fn normalize_cut(cut: isize, len: usize) -> usize {
  let cut = if cut < 0 {
    len.saturating_sub(cut.unsigned_abs())
  } else {
    cut.unsigned_abs()
  };
  cut.min(len)
}
