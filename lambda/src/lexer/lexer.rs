use super::parser;
use super::{Token, TokenKind};
use crate::errors::{LangError, LexicalError};
use crate::source::{CharCursor, SourceCode};
use crate::symbols::{Symbol, SymbolTable};

/// Transforms a character stream into a token sequence.
///
/// The nom recognizers in [parser] decide what the next token is; this driver
/// owns whitespace trimming, spans, interning, and error recovery.
pub struct Lexer {
  cursor: CharCursor,
  symbols: SymbolTable,
}

impl Lexer {
  pub fn new(code: &SourceCode) -> Self {
    Lexer {
      cursor: CharCursor::new(code),
      symbols: SymbolTable::new(),
    }
  }

  pub fn source(&self) -> SourceCode {
    self.cursor.source()
  }

  pub fn symbols(&self) -> &SymbolTable {
    &self.symbols
  }

  /// Lexes the whole buffer, failing if any character could not be tokenized.
  pub fn lex(&mut self) -> Result<Vec<Token>, LangError> {
    let (tokens, errors) = self.read_all();

    match errors.len() {
      | 0 => Ok(tokens),
      | 1 => Err(errors.into_iter().next().unwrap()),
      | _ => Err(LangError::List(errors)),
    }
  }

  /// Lexes the whole buffer, collecting recoverable errors alongside the
  /// tokens. The returned sequence always ends with an end-of-input token.
  pub fn read_all(&mut self) -> (Vec<Token>, Vec<LangError>) {
    let mut errors = vec![];
    let mut tokens = vec![];

    loop {
      self.trim_spaces();

      if self.cursor.is_eof() {
        break;
      }

      match self.read_next() {
        | Ok(token) => tokens.push(token),
        | Err(error) => errors.push(error),
      }
    }

    let pos = self.cursor.pos();
    tokens.push(Token::new((pos, pos), self.eof_symbol()));

    (tokens, errors)
  }

  fn read_next(&mut self) -> Result<Token, LangError> {
    let code = self.source();
    let start = self.cursor.pos();
    let rest = self.cursor.rest();

    match parser::token(rest) {
      | Ok((remaining, kind)) => {
        let consumed = rest.len() - remaining.len();
        let span = (start, start + consumed as u32);

        let spelling = &code.as_str()[start as usize..span.1 as usize];
        let symbol = self.symbols.intern(spelling, kind);

        self.cursor.advance_by(consumed);

        Ok(Token::new(span, symbol))
      },
      | Err(_) => {
        // Consume exactly the offending character and keep scanning.
        self.cursor.advance();

        Err(LangError::Lexer(
          self.source(),
          LexicalError::UnrecognizedCharacter {
            span: (start, start + 1),
          },
        ))
      },
    }
  }

  fn trim_spaces(&mut self) {
    while matches!(self.cursor.peek(), b' ' | b'\t' | b'\r' | b'\n') {
      self.cursor.advance();
    }
  }

  fn eof_symbol(&mut self) -> Symbol {
    self.symbols.intern("", TokenKind::Eof)
  }
}

#[cfg(test)]
mod tests {
  use indoc::indoc;

  use super::*;

  fn kinds(code: &str) -> Vec<TokenKind> {
    match Lexer::new(&SourceCode::from_str(code)).lex() {
      | Ok(tokens) => tokens.iter().map(Token::kind).collect(),
      | Err(error) => panic!("{:?}", error),
    }
  }

  #[test]
  fn test_tokens() {
    let code = r"\x:T.x";

    assert_eq!(
      kinds(code),
      vec![
        TokenKind::BackSlash,
        TokenKind::Ident,
        TokenKind::Colon,
        TokenKind::Ident,
        TokenKind::Dot,
        TokenKind::Ident,
        TokenKind::Eof,
      ]
    );
  }

  #[test]
  fn test_arrow_and_parens() {
    let code = r"\f:(T->T).f";

    assert_eq!(
      kinds(code),
      vec![
        TokenKind::BackSlash,
        TokenKind::Ident,
        TokenKind::Colon,
        TokenKind::LeftParen,
        TokenKind::Ident,
        TokenKind::RightArrow,
        TokenKind::Ident,
        TokenKind::RightParen,
        TokenKind::Dot,
        TokenKind::Ident,
        TokenKind::Eof,
      ]
    );
  }

  #[test]
  fn test_whitespace_insignificant() {
    let code = indoc! {"
      id = x ;
      \tid
    "};

    assert_eq!(
      kinds(code),
      vec![
        TokenKind::Ident,
        TokenKind::Equals,
        TokenKind::Ident,
        TokenKind::Semi,
        TokenKind::Ident,
        TokenKind::Eof,
      ]
    );
  }

  #[test]
  fn test_identifier_interning() {
    let code = SourceCode::from_str("id other id");
    let mut lexer = Lexer::new(&code);

    let tokens = lexer.lex().unwrap();

    assert_eq!(tokens[0].symbol, tokens[2].symbol);
    assert_ne!(tokens[0].symbol, tokens[1].symbol);

    // Two identifiers plus the end-of-input symbol.
    assert_eq!(lexer.symbols().len(), 3);
  }

  #[test]
  fn test_spans() {
    let code = SourceCode::from_str("ab -> c");
    let tokens = Lexer::new(&code).lex().unwrap();

    assert_eq!(tokens[0].span, (0, 2));
    assert_eq!(tokens[1].span, (3, 5));
    assert_eq!(tokens[2].span, (6, 7));
    assert_eq!(tokens[3].span, (7, 7));
  }

  #[test]
  fn test_unrecognized_character_recovery() {
    let code = SourceCode::from_str("a @ # b");
    let mut lexer = Lexer::new(&code);

    let (tokens, errors) = lexer.read_all();

    // Both offenders are diagnosed and both identifiers survive.
    assert_eq!(errors.len(), 2);

    assert_eq!(
      tokens.iter().map(Token::kind).collect::<Vec<_>>(),
      vec![TokenKind::Ident, TokenKind::Ident, TokenKind::Eof]
    );
  }

  #[test]
  fn test_relexing_spellings_is_stable() {
    let code = r"id = \x:T.x; id y:T";
    let tokens = Lexer::new(&SourceCode::from_str(code)).lex().unwrap();

    let spellings = tokens
      .iter()
      .map(|token| token.text())
      .collect::<Vec<_>>()
      .join(" ");

    let relexed = Lexer::new(&SourceCode::from_str(&spellings)).lex().unwrap();

    assert_eq!(
      tokens.iter().map(Token::kind).collect::<Vec<_>>(),
      relexed.iter().map(Token::kind).collect::<Vec<_>>()
    );
  }
}
