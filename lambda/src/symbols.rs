use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::lexer::TokenKind;

/// An interned string tagged with the token kind it was first lexed as.
///
/// Two symbols with equal text are the same allocation, so equality and
/// hashing are pointer-based and O(1).
#[derive(Clone)]
pub struct Symbol(Rc<SymbolData>);

#[derive(Debug)]
pub struct SymbolData {
  text: String,
  kind: TokenKind,
}

impl Symbol {
  fn new(text: &str, kind: TokenKind) -> Self {
    Symbol(Rc::new(SymbolData {
      text: text.to_string(),
      kind,
    }))
  }

  pub fn text(&self) -> &str {
    &self.0.text
  }

  pub fn kind(&self) -> TokenKind {
    self.0.kind
  }
}

impl PartialEq for Symbol {
  fn eq(&self, other: &Symbol) -> bool {
    Rc::ptr_eq(&self.0, &other.0)
  }
}

impl Eq for Symbol {}

impl Hash for Symbol {
  fn hash<H: Hasher>(&self, state: &mut H) {
    state.write_usize(Rc::as_ptr(&self.0) as usize);
  }
}

impl fmt::Debug for Symbol {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Symbol({:?}, {:?})", self.0.text, self.0.kind)
  }
}

impl fmt::Display for Symbol {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0.text)
  }
}

/// Deduplicating store of [Symbol]s, keyed by text content.
#[derive(Debug, Default)]
pub struct SymbolTable {
  symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns the symbol for `text`, creating it with `kind` on first sight.
  /// Re-interning leaves the original kind untouched.
  pub fn intern(&mut self, text: &str, kind: TokenKind) -> Symbol {
    if let Some(symbol) = self.symbols.get(text) {
      return symbol.clone();
    }

    let symbol = Symbol::new(text, kind);
    self.symbols.insert(text.to_string(), symbol.clone());

    symbol
  }

  pub fn lookup(&self, text: &str) -> Option<Symbol> {
    self.symbols.get(text).cloned()
  }

  pub fn len(&self) -> usize {
    self.symbols.len()
  }

  pub fn is_empty(&self) -> bool {
    self.symbols.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_interning_identity() {
    let mut table = SymbolTable::new();

    let first = table.intern("id", TokenKind::Ident);
    let second = table.intern("id", TokenKind::Ident);

    assert_eq!(first, second);
    assert_eq!(table.len(), 1);
  }

  #[test]
  fn test_distinct_contents() {
    let mut table = SymbolTable::new();

    let x = table.intern("x", TokenKind::Ident);
    let y = table.intern("y", TokenKind::Ident);

    assert_ne!(x, y);
  }

  #[test]
  fn test_kind_preserved_on_reintern() {
    let mut table = SymbolTable::new();

    let arrow = table.intern("->", TokenKind::RightArrow);
    let again = table.intern("->", TokenKind::Ident);

    assert_eq!(arrow, again);
    assert_eq!(again.kind(), TokenKind::RightArrow);
  }

  #[test]
  fn test_lookup() {
    let mut table = SymbolTable::new();

    assert!(table.lookup("x").is_none());

    let x = table.intern("x", TokenKind::Ident);

    assert_eq!(table.lookup("x"), Some(x));
  }
}
