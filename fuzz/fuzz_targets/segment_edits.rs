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

fuzz_target!(|data: &[u8]| {
  let Some(mut session) = session_from_bytes(data) else {
    return;
  };

  for (index, op) in mem::take(&mut session.ops).into_iter().enumerate() {
    let (start, end, segment) = resolve_edit(session.model.len(), &op, index);
    apply_to_model(&mut session.model, start, end, segment.text());
    session
      .segments
      .try_replace_range(start, end, [segment])
      .expect("edit range is clamped to the buffer");

    check_invariants(&session);
    check_no_adjacent_text(&session.segments);
  }
});
