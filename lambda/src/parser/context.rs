use std::collections::HashMap;

use crate::ast::{Type, TypeStore, Var};
use crate::symbols::Symbol;

/// Elaboration state threaded through the grammar rules: the lexical scope
/// stack for name resolution and the store that interns types.
///
/// Scope frames map names to variables. Binding never removes an earlier
/// variable; an inner frame merely shadows it, and the shadowed variable
/// becomes visible again when the frame is popped.
#[derive(Debug)]
pub struct Context {
  pub types: TypeStore,
  scopes: Vec<HashMap<Symbol, Var>>,
}

impl Context {
  pub fn new() -> Self {
    Context {
      types: TypeStore::new(),
      scopes: vec![HashMap::new()],
    }
  }

  /// Creates a fresh variable and binds it in the innermost frame. Rebinding
  /// a name already bound in that frame shadows it there as well.
  pub fn bind(&mut self, name: Symbol, ty: Type) -> Var {
    let var = Var::new(name.clone(), ty);

    self
      .scopes
      .last_mut()
      .expect("scope stack must not be empty")
      .insert(name, var.clone());

    var
  }

  /// Resolves a name against the scope stack, innermost frame first.
  pub fn lookup(&self, name: &Symbol) -> Option<Var> {
    self
      .scopes
      .iter()
      .rev()
      .find_map(|frame| frame.get(name).cloned())
  }

  /// Runs `func` inside a fresh scope frame, popping it afterwards.
  pub fn scope<T>(&mut self, func: impl FnOnce(&mut Context) -> T) -> T {
    self.scopes.push(HashMap::new());
    let result = func(self);
    self.scopes.pop();

    result
  }
}

impl Default for Context {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::lexer::TokenKind;
  use crate::symbols::SymbolTable;

  fn setup() -> (Context, SymbolTable) {
    (Context::new(), SymbolTable::new())
  }

  #[test]
  fn test_bind_and_lookup() {
    let (mut context, mut symbols) = setup();

    let name = symbols.intern("x", TokenKind::Ident);
    let ty = context.types.base(symbols.intern("T", TokenKind::Ident));

    let var = context.bind(name.clone(), ty);

    assert_eq!(context.lookup(&name), Some(var));
    assert_eq!(context.lookup(&symbols.intern("y", TokenKind::Ident)), None);
  }

  #[test]
  fn test_shadowing_is_scoped() {
    let (mut context, mut symbols) = setup();

    let name = symbols.intern("x", TokenKind::Ident);
    let t = context.types.base(symbols.intern("T", TokenKind::Ident));
    let u = context.types.base(symbols.intern("U", TokenKind::Ident));

    let outer = context.bind(name.clone(), t);

    let inner = context.scope(|context| {
      let inner = context.bind(name.clone(), u);

      assert_eq!(context.lookup(&name), Some(inner.clone()));

      inner
    });

    // The inner binding is gone with its frame.
    assert_ne!(outer, inner);
    assert_eq!(context.lookup(&name), Some(outer));
  }

  #[test]
  fn test_rebinding_in_same_frame() {
    let (mut context, mut symbols) = setup();

    let name = symbols.intern("x", TokenKind::Ident);
    let t = context.types.base(symbols.intern("T", TokenKind::Ident));

    let first = context.bind(name.clone(), t.clone());
    let second = context.bind(name.clone(), t);

    assert_ne!(first, second);
    assert_eq!(context.lookup(&name), Some(second));
  }

  #[test]
  fn test_outer_frames_stay_visible() {
    let (mut context, mut symbols) = setup();

    let name = symbols.intern("x", TokenKind::Ident);
    let t = context.types.base(symbols.intern("T", TokenKind::Ident));

    let var = context.bind(name.clone(), t);

    context.scope(|context| {
      assert_eq!(context.lookup(&name), Some(var.clone()));
    });
  }
}
