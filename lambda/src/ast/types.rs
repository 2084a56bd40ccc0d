use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::rc::Rc;

use crate::symbols::Symbol;

/// An interned type. Structurally equal types are the same allocation, so
/// type equality is pointer equality.
#[derive(Clone)]
pub struct Type(Rc<TypeData>);

#[derive(Debug)]
pub enum TypeData {
  /// A base type, introduced by being named in an annotation.
  Base(Symbol),
  /// A function type. The output is the second component.
  Arrow(Type, Type),
}

impl Type {
  /// Splits an arrow type into its input and output.
  pub fn as_arrow(&self) -> Option<(&Type, &Type)> {
    match self.deref() {
      | TypeData::Arrow(input, output) => Some((input, output)),
      | TypeData::Base(_) => None,
    }
  }
}

impl Deref for Type {
  type Target = TypeData;

  fn deref(&self) -> &TypeData {
    &self.0
  }
}

impl PartialEq for Type {
  fn eq(&self, other: &Type) -> bool {
    Rc::ptr_eq(&self.0, &other.0)
  }
}

impl Eq for Type {}

impl Hash for Type {
  fn hash<H: Hasher>(&self, state: &mut H) {
    state.write_usize(Rc::as_ptr(&self.0) as usize);
  }
}

impl fmt::Debug for Type {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Type({self})")
  }
}

impl fmt::Display for Type {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.deref() {
      | TypeData::Base(name) => write!(f, "{name}"),
      // The arrow is right-associative, so only a left operand that is itself
      // an arrow needs parentheses.
      | TypeData::Arrow(input, output) => match input.deref() {
        | TypeData::Arrow(..) => write!(f, "({input})->{output}"),
        | TypeData::Base(_) => write!(f, "{input}->{output}"),
      },
    }
  }
}

/// Deduplicating store of [Type]s: base types keyed by symbol, arrow types
/// keyed by their interned operands.
#[derive(Debug, Default)]
pub struct TypeStore {
  bases: HashMap<Symbol, Type>,
  arrows: HashMap<(Type, Type), Type>,
}

impl TypeStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn base(&mut self, name: Symbol) -> Type {
    self
      .bases
      .entry(name.clone())
      .or_insert_with(|| Type(Rc::new(TypeData::Base(name))))
      .clone()
  }

  pub fn arrow(&mut self, input: Type, output: Type) -> Type {
    self
      .arrows
      .entry((input.clone(), output.clone()))
      .or_insert_with(|| Type(Rc::new(TypeData::Arrow(input, output))))
      .clone()
  }
}
