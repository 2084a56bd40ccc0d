use std::collections::HashMap;

use crate::ast::{TypedExpression, Var};
use crate::errors::{InterpreterError, LangError, Wrappable};

/// Evaluates a typed program by full β-reduction.
///
/// Abstractions are the values. A reference without a top-level definition is
/// stuck and evaluates to itself, so open programs still produce output.
pub struct Interpreter {
  definitions: HashMap<Var, TypedExpression>,
  outputs: Vec<TypedExpression>,
}

impl Interpreter {
  pub fn new() -> Self {
    Interpreter {
      definitions: HashMap::new(),
      outputs: Vec::new(),
    }
  }

  /// Intermediate values produced by the left operands of sequencing, in
  /// evaluation order.
  pub fn outputs(&self) -> &[TypedExpression] {
    &self.outputs
  }

  /// Evaluates a whole program and returns its final value. Definitions and
  /// declarations produce no value, so a program ending in one returns `None`.
  pub fn eval_program(
    &mut self,
    program: &TypedExpression,
  ) -> Result<Option<TypedExpression>, LangError> {
    self.eval_statement(program)
  }

  fn eval_statement(
    &mut self,
    expr: &TypedExpression,
  ) -> Result<Option<TypedExpression>, LangError> {
    match expr {
      | TypedExpression::Seq(_, _, left, right) => {
        if let Some(value) = self.eval_statement(left)? {
          self.outputs.push(value);
        }

        self.eval_statement(right)
      },
      | TypedExpression::Def(_, _, var, value) => {
        self.definitions.insert(var.clone(), (**value).clone());

        Ok(None)
      },
      | TypedExpression::Decl(..) => Ok(None),
      | _ => self.eval_expression(expr).map(Some),
    }
  }

  fn eval_expression(&mut self, expr: &TypedExpression) -> Result<TypedExpression, LangError> {
    match expr {
      | TypedExpression::Ref(_, _, var) => {
        match self.definitions.get(var) {
          | Some(value) => Ok(value.clone()),
          | None => Ok(expr.clone()),
        }
      },
      // In operand position a declaration stands for its (stuck) variable.
      | TypedExpression::Decl(span, ty, var) => {
        Ok(TypedExpression::Ref(*span, ty.clone(), var.clone()))
      },
      // In operand position a definition binds and stands for its value.
      | TypedExpression::Def(_, _, var, value) => {
        self.definitions.insert(var.clone(), (**value).clone());

        self.eval_expression(value)
      },
      | TypedExpression::Abs(..) => Ok(expr.clone()),
      | TypedExpression::App(_, _, function, argument) => {
        match self.eval_expression(function)? {
          | TypedExpression::Abs(_, _, var, body) => {
            // The argument is reduced before substitution, which keeps the
            // capture-unaware substitution below sound for programs whose
            // free variables are all top-level.
            let argument = self.eval_expression(argument)?;
            let body = substitute(&body, &var, &argument);

            self.eval_expression(&body)
          },
          | function => Err(InterpreterError::ExpectedAbstraction(function).wrap()),
        }
      },
      | TypedExpression::Seq(_, _, left, right) => {
        if let Some(value) = self.eval_statement(left)? {
          self.outputs.push(value);
        }

        self.eval_expression(right)
      },
    }
  }
}

impl Default for Interpreter {
  fn default() -> Self {
    Self::new()
  }
}

/// Replaces every reference to `var` in `expr` with `value`. Does not
/// α-rename: inner abstractions keep their bound variables, and references
/// compare by variable identity rather than by name.
pub fn substitute(expr: &TypedExpression, var: &Var, value: &TypedExpression) -> TypedExpression {
  match expr {
    | TypedExpression::Ref(_, _, target) if target == var => value.clone(),
    | TypedExpression::Ref(..) => expr.clone(),
    | TypedExpression::Abs(span, ty, bound, body) => {
      TypedExpression::Abs(
        *span,
        ty.clone(),
        bound.clone(),
        Box::new(substitute(body, var, value)),
      )
    },
    | TypedExpression::App(span, ty, function, argument) => {
      TypedExpression::App(
        *span,
        ty.clone(),
        Box::new(substitute(function, var, value)),
        Box::new(substitute(argument, var, value)),
      )
    },
    | TypedExpression::Seq(span, ty, left, right) => {
      TypedExpression::Seq(
        *span,
        ty.clone(),
        Box::new(substitute(left, var, value)),
        Box::new(substitute(right, var, value)),
      )
    },
    // Definitions and declarations bind no references, so there is nothing
    // to replace inside them.
    | TypedExpression::Def(..) | TypedExpression::Decl(..) => expr.clone(),
  }
}
