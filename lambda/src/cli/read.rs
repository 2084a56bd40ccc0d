use std::fs;

use crate::errors::{LangError, LoaderError, Reporter, Wrappable};
use crate::parser::Parser;
use crate::runtime::Interpreter;
use crate::source::SourceCode;

/// Runs a program file end to end. Every diagnostic goes through the
/// reporter; the exit code is 0 when none of them were errors and 1 otherwise.
pub fn read(path: &str) -> i32 {
  let mut reporter = Reporter::new();

  match load(path) {
    | Ok(code) => interpret(code, &mut reporter),
    | Err(error) => reporter.emit(error),
  }

  i32::from(reporter.errors() > 0)
}

fn load(path: &str) -> Result<SourceCode, LangError> {
  match fs::read(path) {
    | Ok(bytes) => Ok(SourceCode::from_bytes(bytes, path)),
    | Err(_) => {
      Err(
        LoaderError::UnableToRead {
          path: path.to_string(),
        }
        .wrap(),
      )
    },
  }
}

fn interpret(code: SourceCode, reporter: &mut Reporter) {
  let program = match Parser::new(code).parse_program() {
    | Ok(program) => program,
    | Err(error) => return reporter.emit(error),
  };

  let mut interpreter = Interpreter::new();
  let result = interpreter.eval_program(&program);

  // Intermediate outputs are flushed even when evaluation got stuck later.
  for output in interpreter.outputs() {
    println!("{output}");
  }

  match result {
    | Ok(Some(value)) => println!("{value}"),
    | Ok(None) => {},
    | Err(error) => reporter.emit(error),
  }
}
