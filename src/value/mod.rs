mod error;
mod value;

pub use self::error::*;
pub use self::value::*;
