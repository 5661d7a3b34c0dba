use the_segments::{
  Segment,
  Segments,
};

const MAX_INITIAL_BYTES: usize = 4 * 1024;
const MAX_OPS: usize = 128;
const MAX_INSERT_BYTES: usize = 64;

#[derive(Debug, Clone)]
pub struct EditOp {
  pub anchor:  u16,
  pub delete:  u16,
  pub insert:  Vec<u8>,
  pub located: bool,
}

pub struct FuzzSession {
  pub segments: Segments,
  /// Expected flattened text, edited with plain string operations.
  pub model:    Vec<char>,
  pub ops:      Vec<EditOp>,
}

pub fn session_from_bytes(data: &[u8]) -> Option<FuzzSession> {
  let mut cursor = ByteCursor::new(data);
  let initial_len = cursor.next_usize(MAX_INITIAL_BYTES);
  let initial = lossy_text(cursor.next_bytes(initial_len));
  let op_count = cursor.next_usize(MAX_OPS);
  let mut ops = Vec::with_capacity(op_count);
  for _ in 0..op_count {
    let anchor = cursor.next_u16();
    let delete = cursor.next_u16();
    let located = cursor.next_u8() & 1 == 1;
    let insert_len = cursor.next_usize(MAX_INSERT_BYTES);
    let insert = cursor.next_bytes(insert_len).to_vec();
    ops.push(EditOp {
      anchor,
      delete,
      insert,
      located,
    });
  }
  if ops.is_empty() {
    return None;
  }

  Some(FuzzSession {
    model: initial.chars().collect(),
    segments: Segments::from_source(initial),
    ops,
  })
}

/// Clamps `op` to the current text and returns `(start, end, replacement)`.
pub fn resolve_edit(len_chars: usize, op: &EditOp, index: usize) -> (usize, usize, Segment) {
  let start = (op.anchor as usize) % (len_chars + 1);
  let max_delete = len_chars - start;
  let end = start + (op.delete as usize) % (max_delete + 1);
  let text = lossy_text(&op.insert);
  let segment = if op.located {
    Segment::located(text, 10_000 + index)
  } else {
    Segment::from(text)
  };
  (start, end, segment)
}

pub fn apply_to_model(model: &mut Vec<char>, start: usize, end: usize, text: &str) {
  model.splice(start..end, text.chars());
}

pub fn check_invariants(session: &FuzzSession) {
  let text: String = session.model.iter().collect();
  assert_eq!(session.segments.to_string(), text);
  assert_eq!(session.segments.len_chars(), session.model.len());
}

/// Bare text is only ever merged around an edit site, so this holds for
/// buffers that started out with no adjacent bare text.
pub fn check_no_adjacent_text(segments: &Segments) {
  for pair in segments.windows(2) {
    assert!(
      pair[0].is_located() || pair[1].is_located(),
      "adjacent bare text: {pair:?}"
    );
  }
}

fn lossy_text(bytes: &[u8]) -> String {
  String::from_utf8_lossy(bytes).into_owned()
}

struct ByteCursor<'a> {
  data: &'a [u8],
  pos:  usize,
}

impl<'a> ByteCursor<'a> {
  fn new(data: &'a [u8]) -> Self {
    Self { data, pos: 0 }
  }

  fn next_u8(&mut self) -> u8 {
    let value = self.data.get(self.pos).copied().unwrap_or(0);
    self.pos = self.pos.saturating_add(1);
    value
  }

  fn next_u16(&mut self) -> u16 {
    let lo = self.next_u8() as u16;
    let hi = self.next_u8() as u16;
    lo | (hi << 8)
  }

  fn next_usize(&mut self, max: usize) -> usize {
    if max == 0 {
      return 0;
    }
    (self.next_u16() as usize) % (max + 1)
  }

  fn next_bytes(&mut self, len: usize) -> &'a [u8] {
    let start = self.pos.min(self.data.len());
    let end = start.saturating_add(len).min(self.data.len());
    self.pos = end;
    &self.data[start..end]
  }
}
