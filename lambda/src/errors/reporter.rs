use ariadne::Source;

use super::*;
use crate::source::SourceCode;

/// Stack of diagnostic contexts. The topmost context receives every emitted
/// diagnostic; a *suppressing* context buffers instead of printing, which is
/// how speculative work keeps quiet until it commits.
#[derive(Debug, Default)]
pub struct Reporter {
  contexts: Vec<DiagnosticContext>,
}

#[derive(Debug, Default)]
struct DiagnosticContext {
  suppressing: bool,
  buffered: Vec<LangError>,
  errors: usize,
}

impl Reporter {
  pub fn new() -> Self {
    Reporter {
      contexts: vec![DiagnosticContext::default()],
    }
  }

  /// Routes a diagnostic to the topmost context: printed right away unless
  /// that context is suppressing. The error count is bumped either way.
  pub fn emit(&mut self, error: LangError) {
    let top = self.top();
    top.errors += count_errors(&error);

    if top.suppressing {
      top.buffered.push(error);
    } else {
      print(&error);
    }
  }

  /// Error count of the topmost context.
  pub fn errors(&self) -> usize {
    self.contexts.last().unwrap().errors
  }

  pub fn reset(&mut self) {
    let top = self.top();
    top.errors = 0;
    top.buffered.clear();
  }

  /// Enters a suppressing context for a speculative phase.
  pub fn suppress(&mut self) {
    self.contexts.push(DiagnosticContext {
      suppressing: true,
      ..DiagnosticContext::default()
    });
  }

  /// Commits a speculative phase: pops the suppressing context and re-emits
  /// its buffered diagnostics, in order, into the enclosing context.
  pub fn replay(&mut self) {
    let context = self.pop();

    for error in context.buffered {
      self.emit(error);
    }
  }

  /// Abandons a speculative phase: pops the suppressing context and drops its
  /// buffered diagnostics.
  pub fn discard(&mut self) {
    self.pop();
  }

  fn top(&mut self) -> &mut DiagnosticContext {
    self.contexts.last_mut().unwrap()
  }

  fn pop(&mut self) -> DiagnosticContext {
    assert!(
      self.contexts.len() > 1,
      "tried to pop the root diagnostic context"
    );

    self.contexts.pop().unwrap()
  }
}

fn count_errors(error: &LangError) -> usize {
  match error {
    | LangError::List(errors) => errors.iter().map(count_errors).sum(),
    | _ => 1,
  }
}

/// Renders a diagnostic to stderr. Phase errors that carry a source get the
/// full ariadne treatment; runtime and loader errors are plain lines.
fn print(error: &LangError) {
  match error {
    | LangError::Lexer(code, error) => print_report(code, error),
    | LangError::Parser(code, error) => print_report(code, error),
    | LangError::Interpreter(InterpreterError::ExpectedAbstraction(expr)) => {
      eprintln!("runtime error: application of non-abstraction '{expr}'");
    },
    | LangError::Loader(LoaderError::UnableToRead { path }) => {
      eprintln!("error: unable to read '{path}'");
    },
    | LangError::List(errors) => {
      for error in errors {
        print(error);
      }
    },
  }
}

fn print_report<'a, R: Reportable<'a>>(code: &'a SourceCode, error: &'a R) {
  error
    .report(code)
    .finish()
    .eprint((code.file_name(), Source::from(code.text())))
    .ok();
}
