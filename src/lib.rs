//! A tree-walking front-end for Lox expressions: scanner, parser and
//! evaluator, driven either once over a script file or line by line.

pub mod cli;
pub mod config;
pub mod driver;
pub mod exit;
pub mod expr;
pub mod interpreter;
pub mod parse;
pub mod repl;
pub mod report;
pub mod token;
pub mod value;

pub use crate::config::Config;
pub use crate::driver::Driver;
pub use crate::exit::ExitOutcome;
