pub use lexer::*;
pub use token::*;

mod lexer;
pub mod parser;
#[cfg(test)]
#[macro_use]
mod testing;
mod token;
