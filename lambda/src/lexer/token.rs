use std::fmt;

use crate::source::Span;
use crate::symbols::Symbol;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum TokenKind {
  // Terminals.
  LeftParen,
  RightParen,
  BackSlash,
  Dot,
  Equals,
  Colon,
  Semi,
  RightArrow,
  Eof,

  // Non-terminals.
  Ident,
}

impl fmt::Display for TokenKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let spelling = match self {
      | TokenKind::LeftParen => "(",
      | TokenKind::RightParen => ")",
      | TokenKind::BackSlash => "\\",
      | TokenKind::Dot => ".",
      | TokenKind::Equals => "=",
      | TokenKind::Colon => ":",
      | TokenKind::Semi => ";",
      | TokenKind::RightArrow => "->",
      | TokenKind::Eof => "end of input",
      | TokenKind::Ident => "identifier",
    };

    f.write_str(spelling)
  }
}

/// A source span tagged with an interned symbol. The token kind is read from
/// the symbol.
#[derive(PartialEq, Debug, Clone)]
pub struct Token {
  pub span: Span,
  pub symbol: Symbol,
}

impl Token {
  pub fn new(span: Span, symbol: Symbol) -> Self {
    Token { span, symbol }
  }

  pub fn kind(&self) -> TokenKind {
    self.symbol.kind()
  }

  pub fn text(&self) -> &str {
    self.symbol.text()
  }
}

impl fmt::Display for Token {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.kind() {
      | TokenKind::Eof => f.write_str("end of input"),
      | _ => f.write_str(self.text()),
    }
  }
}
