use super::combinators;
use super::context::Context;
use super::expression::parse_sequence;
use crate::ast::TypedExpression;
use crate::errors::LangError;
use crate::lexer::Lexer;
use crate::source::{Input, SourceCode};

/// Front-end driver. A single pass over the source lexes, parses, resolves
/// names, and type checks, producing a typed program.
pub struct Parser {
  code: SourceCode,
}

impl Parser {
  pub fn new(code: SourceCode) -> Self {
    Parser { code }
  }

  pub fn parse_program(&self) -> Result<TypedExpression, LangError> {
    let tokens = Lexer::new(&self.code).lex()?;
    let input = Input::new(self.code.clone(), tokens);
    let code = input.source();

    let mut context = Context::new();

    combinators::complete(&mut context, &parse_sequence, input)
      .map_err(|error| LangError::Parser(code, error))
  }
}

#[cfg(test)]
mod tests {
  use super::super::testing::{parse, parse_error};
  use crate::errors::ParseError;
  use crate::lexer::TokenKind;

  #[test]
  fn test_identity() {
    let program = parse(r"\x:T.x").unwrap();

    assert_eq!(program.to_string(), r"\x:T.x");
    assert_eq!(program.get_type().to_string(), "T->T");
  }

  #[test]
  fn test_application_of_identity() {
    let program = parse(r"y:T; (\x:T.x) y").unwrap();

    assert_eq!(program.to_string(), r"y:T; (\x:T.x) y");
    assert_eq!(program.get_type().to_string(), "T");
  }

  #[test]
  fn test_declaration_as_argument() {
    let program = parse(r"(\x:T.x) y:T;").unwrap();

    assert_eq!(program.get_type().to_string(), "T");
  }

  #[test]
  fn test_sequenced_definitions() {
    let program = parse(r"id = \x:T.x; id y:T").unwrap();

    assert_eq!(program.get_type().to_string(), "T");
  }

  #[test]
  fn test_type_mismatch() {
    let error = parse_error(r"\f:T->T.\x:U.f x");

    assert!(matches!(error, ParseError::ArgumentMismatch { .. }));
  }

  #[test]
  fn test_non_arrow_application() {
    let error = parse_error(r"\x:T.x x");

    assert!(matches!(error, ParseError::ExpectedArrowType { .. }));
  }

  #[test]
  fn test_unbound_reference() {
    match parse_error(r"\x:T.y") {
      | ParseError::UnboundVariable { name, .. } => assert_eq!(name.text(), "y"),
      | other => panic!("expected an unbound variable error, got {other:?}"),
    }
  }

  #[test]
  fn test_missing_type() {
    let error = parse_error(r"\x:.x");

    assert!(matches!(
      error,
      ParseError::ExpectedRule {
        rule: "primary-type",
        ..
      }
    ));
  }

  #[test]
  fn test_unterminated_enclosure() {
    let error = parse_error(r"( \x:T.x");

    assert!(matches!(
      error,
      ParseError::ExpectedClosing {
        close: TokenKind::RightParen,
        ..
      }
    ));
  }

  #[test]
  fn test_trailing_semicolon() {
    let program = parse("x:T;").unwrap();

    assert_eq!(program.to_string(), "x:T");
  }

  #[test]
  fn test_trailing_garbage() {
    let error = parse_error("x:T )");

    assert!(matches!(error, ParseError::ExpectedEndOfInput { .. }));
  }

  #[test]
  fn test_shadowing() {
    let program = parse(r"x:T; \x:U.x").unwrap();

    // The inner binding wins inside the abstraction body.
    assert_eq!(program.get_type().to_string(), "U->U");
  }

  #[test]
  fn test_definitions_are_not_recursive() {
    let error = parse_error("f = f");

    assert!(matches!(error, ParseError::UnboundVariable { .. }));
  }

  #[test]
  fn test_bound_variable_leaves_scope() {
    let error = parse_error(r"(\x:T.x) x");

    assert!(matches!(error, ParseError::UnboundVariable { .. }));
  }

  #[test]
  fn test_application_is_left_associative() {
    let program = parse(r"f:T->T->U; a:T; f a a").unwrap();

    assert_eq!(program.get_type().to_string(), "U");
  }

  #[test]
  fn test_higher_order_argument() {
    let program = parse(r"(\f:T->T.f) (\x:T.x)").unwrap();

    assert_eq!(program.get_type().to_string(), "T->T");
  }
}
