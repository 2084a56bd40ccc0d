use ariadne::{Label, Report, ReportKind};
use indoc::formatdoc;

use super::*;
use crate::ast::Type;
use crate::lexer::{Token, TokenKind};
use crate::source::{SourceCode, Span};
use crate::symbols::Symbol;

/// Everything the front end can reject. Name resolution and type checking
/// happen during parsing, so their failures are parse errors too.
#[derive(PartialEq, Debug, Clone)]
pub enum ParseError {
  Expected {
    span: Span,
    expected: TokenKind,
    found: Token,
  },
  ExpectedIdent {
    span: Span,
    found: Token,
  },
  /// A rule did not match at its first token. The combinators treat this as
  /// a non-match to backtrack from rather than a failure to propagate.
  ExpectedRule {
    span: Span,
    rule: &'static str,
    found: Token,
  },
  ExpectedClosing {
    span: Span,
    close: TokenKind,
    rule: &'static str,
  },
  ExpectedEndOfInput {
    span: Span,
    found: Token,
  },
  UnboundVariable {
    span: Span,
    name: Symbol,
  },
  ExpectedArrowType {
    span: Span,
    ty: Type,
  },
  ArgumentMismatch {
    span: Span,
    expected: Type,
    found: Type,
  },
}

impl ParseError {
  pub fn span(&self) -> Span {
    *match self {
      | ParseError::Expected { span, .. } => span,
      | ParseError::ExpectedIdent { span, .. } => span,
      | ParseError::ExpectedRule { span, .. } => span,
      | ParseError::ExpectedClosing { span, .. } => span,
      | ParseError::ExpectedEndOfInput { span, .. } => span,
      | ParseError::UnboundVariable { span, .. } => span,
      | ParseError::ExpectedArrowType { span, .. } => span,
      | ParseError::ArgumentMismatch { span, .. } => span,
    }
  }

  /// Whether this error is a rule not matching at all, as opposed to a rule
  /// that started matching and then failed.
  pub fn is_unmatched(&self) -> bool {
    matches!(self, ParseError::ExpectedRule { .. })
  }
}

impl<'a> Reportable<'a> for ParseError {
  fn report(&'a self, source: &'a SourceCode) -> ReportBuilder<'a> {
    let source = source.file_name();

    match self {
      | ParseError::Expected {
        span,
        expected,
        found,
      } => {
        Report::build(ReportKind::Error, source, span.0 as usize)
          .with_message(format!("expected '{expected}' but got '{found}'"))
          .with_label(Label::new((source, span!(span))))
      },
      | ParseError::ExpectedIdent { span, found } => {
        Report::build(ReportKind::Error, source, span.0 as usize)
          .with_message(format!("expected identifier but got '{found}'"))
          .with_label(Label::new((source, span!(span))))
      },
      | ParseError::ExpectedRule { span, rule, .. } => {
        Report::build(ReportKind::Error, source, span.0 as usize)
          .with_message(format!("expected {rule}"))
          .with_label(Label::new((source, span!(span))))
      },
      | ParseError::ExpectedClosing { span, close, rule } => {
        Report::build(ReportKind::Error, source, span.0 as usize)
          .with_message(format!("expected '{close}' after {rule}"))
          .with_label(Label::new((source, span!(span))))
      },
      | ParseError::ExpectedEndOfInput { span, found } => {
        Report::build(ReportKind::Error, source, span.0 as usize)
          .with_message(format!("expected end-of-input but got '{found}'"))
          .with_label(Label::new((source, span!(span))))
      },
      | ParseError::UnboundVariable { span, name } => {
        Report::build(ReportKind::Error, source, span.0 as usize)
          .with_message(format!("no matching variable for '{name}'"))
          .with_label(Label::new((source, span!(span))))
      },
      | ParseError::ExpectedArrowType { span, ty } => {
        Report::build(ReportKind::Error, source, span.0 as usize)
          .with_message("expression does not have arrow type")
          .with_label(Label::new((source, span!(span))))
          .with_note(format!("the applied expression has type '{ty}'"))
      },
      | ParseError::ArgumentMismatch {
        span,
        expected,
        found,
      } => {
        Report::build(ReportKind::Error, source, span.0 as usize)
          .with_message("type mismatch in application")
          .with_label(Label::new((source, span!(span))))
          .with_note(formatdoc! {"
            the function expects an argument of type '{expected}'
            but the argument has type '{found}'
          "})
      },
    }
  }
}
