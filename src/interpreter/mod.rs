mod error;
mod interpreter;

pub use self::error::*;
pub use self::interpreter::*;
