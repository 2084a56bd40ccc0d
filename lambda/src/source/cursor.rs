use super::SourceCode;

/// Forward-only byte cursor over a [SourceCode] buffer.
///
/// Reads past the end yield `\0` thanks to the buffer padding, so callers can
/// look ahead without bounds checks.
#[derive(Clone, Debug)]
pub struct CharCursor {
  code: SourceCode,
  pos: usize,
}

impl CharCursor {
  pub fn new(code: &SourceCode) -> Self {
    CharCursor {
      code: code.clone(),
      pos: 0,
    }
  }

  pub fn source(&self) -> SourceCode {
    self.code.clone()
  }

  pub fn is_eof(&self) -> bool {
    self.pos >= self.code.len()
  }

  /// Returns the current byte without consuming it.
  pub fn peek(&self) -> u8 {
    self.peek_ahead(0)
  }

  /// Returns the byte `offset` positions ahead without consuming anything.
  pub fn peek_ahead(&self, offset: usize) -> u8 {
    if self.pos + offset >= self.code.len() {
      return 0;
    }

    self.code.as_bytes()[self.pos + offset]
  }

  /// Consumes and returns the current byte, advancing by exactly one.
  pub fn advance(&mut self) -> u8 {
    let byte = self.peek();

    if !self.is_eof() {
      self.pos += 1;
    }

    byte
  }

  /// Current byte offset into the buffer.
  pub fn pos(&self) -> u32 {
    self.pos as u32
  }

  /// Remaining bytes, padding included.
  pub fn rest(&self) -> &[u8] {
    &self.code.as_bytes()[self.pos..]
  }

  /// Advances over `count` bytes at once.
  pub fn advance_by(&mut self, count: usize) {
    self.pos = (self.pos + count).min(self.code.len());
  }
}
