use super::combinators::{self, Parsed};
use super::context::Context;
use crate::ast::Type;
use crate::errors::ParseError;
use crate::lexer::TokenKind;
use crate::source::Input;

const PRIMARY_TYPE: &str = "primary-type";

/// `primary-type ('->' type)?`. The arrow is right-associative and its
/// operands are interned through the context's type store.
pub fn parse_type(context: &mut Context, input: Input) -> Parsed<Type> {
  combinators::infix_right(
    context,
    TokenKind::RightArrow,
    &parse_primary_type,
    &|context, input_ty, output_ty| Ok(context.types.arrow(input_ty, output_ty)),
    input,
  )
}

/// A base type name or a parenthesized type. Base types spring into existence
/// by being named; there is no declaration form for them.
fn parse_primary_type(context: &mut Context, input: Input) -> Parsed<Type> {
  match input.read().kind() {
    | TokenKind::Ident => {
      let name = input.read().symbol;

      Ok((context.types.base(name), input.next()))
    },
    | TokenKind::LeftParen => {
      let inner = input.next();

      let (ty, input) = combinators::enclosed(
        context,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        &parse_type,
        PRIMARY_TYPE,
        input,
      )?;

      match ty {
        | Some(ty) => Ok((ty, input)),
        | None => {
          Err(ParseError::ExpectedRule {
            span: inner.span(),
            rule: PRIMARY_TYPE,
            found: inner.read(),
          })
        },
      }
    },
    | _ => {
      Err(ParseError::ExpectedRule {
        span: input.span(),
        rule: PRIMARY_TYPE,
        found: input.read(),
      })
    },
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::lexer::Lexer;
  use crate::source::SourceCode;

  fn parse(code: &str) -> (Context, Parsed<Type>) {
    let code = SourceCode::from_str(code);
    let tokens = Lexer::new(&code).lex().expect("lexer error");

    let mut context = Context::new();
    let result = parse_type(&mut context, Input::new(code, tokens));

    (context, result)
  }

  fn display(code: &str) -> String {
    let (_, result) = parse(code);
    result.unwrap().0.to_string()
  }

  #[test]
  fn test_base_type() {
    assert_eq!(display("T"), "T");
  }

  #[test]
  fn test_arrow_is_right_associative() {
    assert_eq!(display("T->U->T"), "T->U->T");

    let (_, result) = parse("T->U->T");
    let (ty, _) = result.unwrap();

    // The first operand splits off; the rest stays nested to the right.
    let (input, output) = ty.as_arrow().unwrap();

    assert!(input.as_arrow().is_none());
    assert!(output.as_arrow().is_some());
  }

  #[test]
  fn test_parenthesized_arrow() {
    assert_eq!(display("(T->U)->U"), "(T->U)->U");
  }

  #[test]
  fn test_spelling_round_trip() {
    for spelling in ["T", "T->U", "(T->U)->U", "T->T->U", "((T))"] {
      let rendered = display(spelling);
      assert_eq!(display(&rendered), rendered);
    }
  }

  #[test]
  fn test_same_spelling_same_type() {
    let (_, result) = parse("T->T");
    let (ty, _) = result.unwrap();

    let (input, output) = ty.as_arrow().unwrap();

    assert_eq!(input, output);
  }

  #[test]
  fn test_empty_parens_rejected() {
    let (_, result) = parse("()");

    assert!(matches!(result, Err(ParseError::ExpectedRule { .. })));
  }

  #[test]
  fn test_missing_close() {
    let (_, result) = parse("(T->U");

    assert!(matches!(result, Err(ParseError::ExpectedClosing { .. })));
  }
}
