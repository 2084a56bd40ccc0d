use std::rc::Rc;

use crate::lexer::Token;
use crate::source::{SourceCode, Span};

/// Persistent cursor over a lexed token sequence.
///
/// Cloning an [Input] snapshots the position, which is how speculative parses
/// backtrack: a failed attempt simply keeps using the old value. Reads past
/// the end clamp to the last token, which the lexer guarantees to be the
/// end-of-input token.
#[derive(PartialEq, Debug, Clone)]
pub struct Input {
  raw: Rc<RawInput>,
  cursor: usize,
}

#[derive(PartialEq, Debug)]
struct RawInput {
  code: SourceCode,
  tokens: Vec<Token>,
}

impl Input {
  pub fn new(code: SourceCode, tokens: Vec<Token>) -> Self {
    debug_assert!(!tokens.is_empty(), "token sequence must end with eof");

    Input {
      raw: Rc::new(RawInput { code, tokens }),
      cursor: 0,
    }
  }

  pub fn next(&self) -> Input {
    Input {
      raw: Rc::clone(&self.raw),
      cursor: (self.cursor + 1).min(self.raw.tokens.len() - 1),
    }
  }

  /// The current token.
  pub fn read(&self) -> Token {
    self.raw.tokens[self.clamped()].clone()
  }

  /// The token `offset` positions ahead. Clamps to the end-of-input token.
  pub fn read_ahead(&self, offset: usize) -> Token {
    let cursor = (self.cursor + offset).min(self.raw.tokens.len() - 1);
    self.raw.tokens[cursor].clone()
  }

  pub fn span(&self) -> Span {
    self.raw.tokens[self.clamped()].span
  }

  pub fn pos(&self) -> u32 {
    let (pos, _) = self.span();
    pos
  }

  /// End offset of the previously consumed token.
  pub fn pos_end(&self) -> u32 {
    let cursor = self.cursor.saturating_sub(1);
    let (_, pos) = self.raw.tokens[cursor].span;

    pos
  }

  pub fn source(&self) -> SourceCode {
    self.raw.code.clone()
  }

  fn clamped(&self) -> usize {
    self.cursor.min(self.raw.tokens.len() - 1)
  }
}
