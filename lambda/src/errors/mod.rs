pub use interpreter::*;
pub use language::*;
pub use lexer::*;
pub use loader::*;
pub use parser::*;
pub use reporter::*;

#[macro_use]
mod helpers;

mod interpreter;
mod language;
mod lexer;
mod loader;
mod parser;
mod reporter;

use crate::source::SourceCode;

/// This trait allows for wrapping a given error in a more generic error.
pub trait Wrappable {
  type Wrapper;

  fn wrap(self) -> Self::Wrapper;
}

pub type ReportBuilder<'a> = ariadne::ReportBuilder<(&'a str, std::ops::Range<usize>)>;

/// Phase errors that can render themselves as an ariadne report against the
/// source they were produced from.
pub trait Reportable<'a> {
  fn report(&'a self, source: &'a SourceCode) -> ReportBuilder<'a>;
}
