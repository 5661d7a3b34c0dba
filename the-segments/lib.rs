//! Source-mapped text buffers.
//!
//! A [`Segments`] buffer represents a string as an ordered list of
//! [`Segment`]s. Each segment is either bare generated text or text that
//! remembers where it came from (a source id plus an offset or offset range
//! into that source). Edits splice the list in place and keep the provenance
//! of every partially consumed segment correct, so after any number of
//! rewrites the surviving characters still trace back to their original
//! offsets.
//!
//! ```ignore
//! use the_segments::Segments;
//!
//! let mut s: Segments = Segments::from_source("problems = 99");
//! s.replace("problems", "answer");
//! s.replace("99", "42");
//! assert_eq!(s.to_string(), "answer = 42");
//! ```
//!
//! All offsets are character (`char`) indices, not byte indices.

use smartstring::{
  LazyCompact,
  SmartString,
};

pub mod error;
pub mod offsets;
pub mod pattern;
pub mod segment;
pub mod segments;
pub mod source_range;
pub mod trim;

pub type Tendril = SmartString<LazyCompact>;

pub use error::{
  Result,
  SegmentError,
};
pub use pattern::{
  Pattern,
  Replacer,
};
pub use segment::{
  Located,
  Locator,
  Segment,
  SourceId,
};
pub use segments::{
  Mapping,
  Segments,
};
