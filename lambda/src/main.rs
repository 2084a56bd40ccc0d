use std::process;

use clap::Parser;
use lambda::cli;

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
pub struct Cli {
  /// File to run.
  #[clap(name = "file")]
  file: Option<String>,
}

fn main() {
  let options = Cli::parse();

  match options.file {
    | Some(file) => process::exit(cli::read(file.as_str())),
    | None => {
      eprintln!("usage: lambda <file>");
      process::exit(-1);
    },
  }
}
