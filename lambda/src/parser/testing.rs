use super::Parser;
use crate::ast::TypedExpression;
use crate::errors::{LangError, ParseError};
use crate::source::SourceCode;

pub fn parse(code: &str) -> Result<TypedExpression, LangError> {
  Parser::new(SourceCode::from_str(code)).parse_program()
}

pub fn parse_error(code: &str) -> ParseError {
  match parse(code) {
    | Err(LangError::Parser(_, error)) => error,
    | other => panic!("expected a parse error, got {other:?}"),
  }
}
