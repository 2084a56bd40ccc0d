use super::*;
use crate::ast::TypedExpression;

#[derive(PartialEq, Debug, Clone)]
pub enum InterpreterError {
  /// The head of an application reduced to something other than an
  /// abstraction. Only reachable through a stuck (undefined) reference.
  ExpectedAbstraction(TypedExpression),
}

impl Wrappable for InterpreterError {
  type Wrapper = LangError;

  fn wrap(self) -> LangError {
    LangError::Interpreter(self)
  }
}
