pub mod lexer;
pub mod token;

pub use self::lexer::{scan_tokens, LexError, Lexer};
pub use self::token::{Kind, Token};
