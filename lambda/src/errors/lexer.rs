use ariadne::{Label, Report, ReportKind};

use super::*;
use crate::source::{SourceCode, Span};

#[derive(PartialEq, Debug, Clone)]
pub enum LexicalError {
  UnrecognizedCharacter { span: Span },
}

impl<'a> Reportable<'a> for LexicalError {
  fn report(&'a self, source: &'a SourceCode) -> ReportBuilder<'a> {
    let source = source.file_name();

    match self {
      | LexicalError::UnrecognizedCharacter { span } => {
        Report::build(ReportKind::Error, source, span.0 as usize)
          .with_message("unrecognized character")
          .with_label(Label::new((source, span!(span))))
      },
    }
  }
}
