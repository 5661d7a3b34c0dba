#![no_main]

mod common;

use std::mem;

use libfuzzer_sys::fuzz_target;

use crate::common::{
  apply_to_model,
  check_invariants,
  check_no_adjacent_text,
  resolve_edit,
  session_from_bytes,
};

// Source offsets are probed against the original text length; most probes
// miss once the buffer is fragmented, and a miss must leave it untouched.
fuzz_target!(|data: &[u8]| {
  let Some(mut session) = session_from_bytes(data) else {
    return;
  };
  let source_len = session.model.len();

  for (index, op) in mem::take(&mut session.ops).into_iter().enumerate() {
    let (start, end, segment) = resolve_edit(source_len, &op, index);

    // Where would this source range sit in the buffer right now?
    let target = session.segments.mappings().find(|mapping| {
      mapping.source.is_none()
        && mapping.source_range.start <= start
        && mapping.source_range.end >= end
    });
    let expected = target.map(|mapping| {
      let offset = mapping.range.start + (start - mapping.source_range.start);
      (offset, offset + (end - start))
    });

    let before = session.segments.clone();
    let replaced = session
      .segments
      .replace_source_range(None, start, end, [segment.clone()]);
    assert_eq!(replaced, expected.is_some());

    match expected {
      Some((from, to)) => apply_to_model(&mut session.model, from, to, segment.text()),
      None => assert_eq!(session.segments, before),
    }
    check_invariants(&session);
    check_no_adjacent_text(&session.segments);
  }
});
