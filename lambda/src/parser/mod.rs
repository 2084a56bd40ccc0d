pub use parser::*;

mod combinators;
mod context;
mod expression;
mod parser;
mod types;

#[cfg(test)]
pub mod testing;
