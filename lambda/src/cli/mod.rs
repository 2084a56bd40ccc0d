pub use read::*;

mod read;
