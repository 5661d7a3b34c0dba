//! Benchmarks for segment buffer edits.
//!
//! Run with: `cargo bench -p the-segments --bench segments`

use divan::{
  Bencher,
  black_box,
};
use the_segments::{
  Segment,
  Segments,
};

fn main() {
  divan::main();
}

fn make_ascii_text(size: usize) -> String {
  let line = "let problems = 99; ";
  let mut s = String::with_capacity(size);
  while s.len() < size {
    s.push_str(line);
  }
  s.truncate(size);
  s
}

/// A buffer that has already been split into `count` located pieces.
fn make_fragmented(size: usize, count: usize) -> Segments {
  let text = make_ascii_text(size);
  let step = (size / count.max(1)).max(1);
  text
    .as_bytes()
    .chunks(step)
    .enumerate()
    .map(|(i, chunk)| -> Segment {
      let chunk = std::str::from_utf8(chunk).unwrap_or_default();
      Segment::located(chunk, i * step)
    })
    .collect()
}

// `Segments::update` benchmarks.

mod update {
  use super::*;

  const SIZE: usize = 64 * 1024;

  #[divan::bench(args = [1, 64, 1024])]
  fn middle(bencher: Bencher, count: usize) {
    let segments = make_fragmented(SIZE, count);
    let mid = SIZE / 2;

    bencher.bench(|| {
      let mut next = segments.clone();
      next.update(black_box(mid), black_box(mid + 3), "xyz");
      black_box(next);
    });
  }
}

// `Segments::replace_all` benchmarks.

mod replace_all {
  use super::*;

  #[divan::bench(args = [4 * 1024, 64 * 1024])]
  fn literal(bencher: Bencher, size: usize) {
    let segments = Segments::<()>::from_source(make_ascii_text(size));

    bencher.bench(|| {
      let mut next = segments.clone();
      let count = next.replace_all(black_box("problems"), "answer");
      black_box((next, count));
    });
  }
}

// `Segments::replace_source_range` benchmarks.

mod replace_source_range {
  use super::*;

  const SIZE: usize = 64 * 1024;

  #[divan::bench(args = [1, 64, 1024])]
  fn last_piece(bencher: Bencher, count: usize) {
    let segments = make_fragmented(SIZE, count);
    let pos = SIZE - 2;

    bencher.bench(|| {
      let mut next = segments.clone();
      let found = next.replace_source_range(None, black_box(pos), black_box(pos + 1), ["x"]);
      black_box((next, found));
    });
  }
}
