use std::io::{self, Write};

use super::RuntimeError;
use crate::expr::Expression;
use crate::report::Reporter;
use crate::token::Kind;
use crate::value::Value;

type Result<T> = std::result::Result<T, RuntimeError>;

/// Tree-walking evaluator. One instance lives for the whole session.
#[derive(Debug, Default)]
pub struct Interpreter {}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter {}
    }

    /// Evaluates `expr` and prints its value to `out`. A runtime error is
    /// handed to `reporter` and only aborts this evaluation; the returned
    /// `io::Error` is for failures writing to `out`.
    pub fn interpret(
        &mut self,
        expr: &Expression,
        reporter: &mut Reporter,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        match self.evaluate(expr) {
            Ok(value) => {
                writeln!(out, "{}", value)?;
                out.flush()
            }
            Err(err) => {
                tracing::debug!(line = err.token.line, "runtime error");
                reporter.runtime_error(&err);
                Ok(())
            }
        }
    }

    pub fn evaluate(&mut self, ex: &Expression) -> Result<Value> {
        match ex {
            Expression::Literal(x) => Ok(x.clone()),
            Expression::Grouping(e) => self.evaluate(e),
            Expression::Unary(op, right) => {
                let val = self.evaluate(right)?;
                match op.kind {
                    Kind::Minus => (-val).map_err(|e| RuntimeError::from_value(op, e)),
                    Kind::Bang => Ok(!val),
                    _ => Err(RuntimeError::new(op.clone(), "Unknown unary operator.")),
                }
            }
            Expression::Binary(left, op, right) => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                let cvterr = |e| RuntimeError::from_value(op, e);
                match op.kind {
                    Kind::Plus => (left + right).map_err(cvterr),
                    Kind::Minus => (left - right).map_err(cvterr),
                    Kind::Star => (left * right).map_err(cvterr),
                    Kind::Slash => (left / right).map_err(cvterr),
                    Kind::EqualEqual => Ok(Value::Bool(left.equals(&right))),
                    Kind::BangEqual => Ok(Value::Bool(!left.equals(&right))),
                    Kind::Greater => {
                        let (a, b) = left.numbers(right).map_err(cvterr)?;
                        Ok(Value::Bool(a > b))
                    }
                    Kind::GreaterEqual => {
                        let (a, b) = left.numbers(right).map_err(cvterr)?;
                        Ok(Value::Bool(a >= b))
                    }
                    Kind::Less => {
                        let (a, b) = left.numbers(right).map_err(cvterr)?;
                        Ok(Value::Bool(a < b))
                    }
                    Kind::LessEqual => {
                        let (a, b) = left.numbers(right).map_err(cvterr)?;
                        Ok(Value::Bool(a <= b))
                    }
                    _ => Err(RuntimeError::new(op.clone(), "Unknown binary operator.")),
                }
            }
        }
    }
}
