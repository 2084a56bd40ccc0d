pub use cursor::*;
pub use input::*;
pub use source::*;

mod cursor;
mod input;
mod source;
