pub use interpreter::*;

mod interpreter;
