use crate::token::Token;
use crate::value::Value;
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Value),
    Grouping(Box<Expression>),
    Unary(Token, Box<Expression>),
    Binary(Box<Expression>, Token, Box<Expression>),
}

/// Prints the tree in prefix form, e.g. `(* (- 1) (group 2))`.
impl Display for Expression {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Expression::Literal(Value::Str(s)) => write!(f, "\"{}\"", s),
            Expression::Literal(v) => write!(f, "{}", v),
            Expression::Grouping(e) => write!(f, "(group {})", e),
            Expression::Unary(op, e) => write!(f, "({} {})", op.lexeme, e),
            Expression::Binary(l, op, r) => write!(f, "({} {} {})", op.lexeme, l, r),
        }
    }
}
