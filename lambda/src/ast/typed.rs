use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::rc::Rc;

use super::types::Type;
use crate::source::Span;
use crate::symbols::Symbol;

/// A typed variable. Identity is allocation identity: two variables with the
/// same name in different scopes are different variables, and substitution
/// and the definition environment key on that identity.
#[derive(Clone, Debug)]
pub struct Var(Rc<Variable>);

#[derive(Debug)]
pub struct Variable {
  pub name: Symbol,
  pub ty: Type,
}

impl Var {
  pub fn new(name: Symbol, ty: Type) -> Self {
    Var(Rc::new(Variable { name, ty }))
  }
}

impl Deref for Var {
  type Target = Variable;

  fn deref(&self) -> &Variable {
    &self.0
  }
}

impl PartialEq for Var {
  fn eq(&self, other: &Var) -> bool {
    Rc::ptr_eq(&self.0, &other.0)
  }
}

impl Eq for Var {}

impl Hash for Var {
  fn hash<H: Hasher>(&self, state: &mut H) {
    state.write_usize(Rc::as_ptr(&self.0) as usize);
  }
}

impl fmt::Display for Var {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name)
  }
}

/// Elaborated expression tree. Every node carries its span and interned type.
#[derive(Clone, Debug)]
pub enum TypedExpression {
  /// A name occurrence resolved to its variable.
  Ref(Span, Type, Var),
  /// A top-level definition; the variable's type is inferred from the value.
  Def(Span, Type, Var, Box<TypedExpression>),
  /// A declaration introducing a variable without a value.
  Decl(Span, Type, Var),
  /// A lambda abstraction; the type is the interned arrow from the bound
  /// variable's type to the body's type.
  Abs(Span, Type, Var, Box<TypedExpression>),
  /// An application; the type is the function's output type.
  App(Span, Type, Box<TypedExpression>, Box<TypedExpression>),
  /// Sequencing; the type is the right operand's type.
  Seq(Span, Type, Box<TypedExpression>, Box<TypedExpression>),
}

impl TypedExpression {
  pub fn get_span(&self) -> Span {
    *match self {
      | TypedExpression::Ref(span, ..) => span,
      | TypedExpression::Def(span, ..) => span,
      | TypedExpression::Decl(span, ..) => span,
      | TypedExpression::Abs(span, ..) => span,
      | TypedExpression::App(span, ..) => span,
      | TypedExpression::Seq(span, ..) => span,
    }
  }

  pub fn get_type(&self) -> Type {
    match self {
      | TypedExpression::Ref(_, ty, ..) => ty.clone(),
      | TypedExpression::Def(_, ty, ..) => ty.clone(),
      | TypedExpression::Decl(_, ty, ..) => ty.clone(),
      | TypedExpression::Abs(_, ty, ..) => ty.clone(),
      | TypedExpression::App(_, ty, ..) => ty.clone(),
      | TypedExpression::Seq(_, ty, ..) => ty.clone(),
    }
  }
}

/// Structural equality, ignoring spans. Variables compare by identity.
impl PartialEq for TypedExpression {
  fn eq(&self, other: &TypedExpression) -> bool {
    match self {
      | TypedExpression::Ref(_, _, lhs) => {
        if let TypedExpression::Ref(_, _, rhs) = other {
          lhs == rhs
        } else {
          false
        }
      },
      | TypedExpression::Def(_, _, lhs_var, lhs_value) => {
        if let TypedExpression::Def(_, _, rhs_var, rhs_value) = other {
          lhs_var == rhs_var && lhs_value == rhs_value
        } else {
          false
        }
      },
      | TypedExpression::Decl(_, _, lhs) => {
        if let TypedExpression::Decl(_, _, rhs) = other {
          lhs == rhs
        } else {
          false
        }
      },
      | TypedExpression::Abs(_, _, lhs_var, lhs_body) => {
        if let TypedExpression::Abs(_, _, rhs_var, rhs_body) = other {
          lhs_var == rhs_var && lhs_body == rhs_body
        } else {
          false
        }
      },
      | TypedExpression::App(_, _, lhs_func, lhs_arg) => {
        if let TypedExpression::App(_, _, rhs_func, rhs_arg) = other {
          lhs_func == rhs_func && lhs_arg == rhs_arg
        } else {
          false
        }
      },
      | TypedExpression::Seq(_, _, lhs_left, lhs_right) => {
        if let TypedExpression::Seq(_, _, rhs_left, rhs_right) = other {
          lhs_left == rhs_left && lhs_right == rhs_right
        } else {
          false
        }
      },
    }
  }
}

impl fmt::Display for TypedExpression {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | TypedExpression::Ref(_, _, var) => write!(f, "{var}"),
      | TypedExpression::Decl(_, _, var) => write!(f, "{}:{}", var, var.ty),
      | TypedExpression::Def(_, _, var, value) => write!(f, "{var} = {value}"),
      | TypedExpression::Abs(_, _, var, body) => write!(f, "\\{}:{}.{}", var, var.ty, body),
      | TypedExpression::App(_, _, function, argument) => {
        function.fmt_function(f)?;
        f.write_str(" ")?;
        argument.fmt_argument(f)
      },
      | TypedExpression::Seq(_, _, left, right) => write!(f, "{left}; {right}"),
    }
  }
}

impl TypedExpression {
  /// An abstraction's body extends as far right as possible, so abstractions
  /// in function position and any non-atomic argument need parentheses.
  fn fmt_function(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | TypedExpression::Abs(..) => write!(f, "({self})"),
      | _ => write!(f, "{self}"),
    }
  }

  fn fmt_argument(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | TypedExpression::Abs(..) | TypedExpression::App(..) => write!(f, "({self})"),
      | _ => write!(f, "{self}"),
    }
  }
}
