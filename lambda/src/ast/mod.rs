pub use typed::*;
pub use types::*;

mod typed;
mod types;
