use std::fmt::{self, Display, Formatter};
use std::ops::*;

use super::Error;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Nil,
    Bool(bool),
    Num(f64),
    Str(String),
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Num(x) if x.is_nan() => write!(f, "NaN"),
            Value::Num(x) if x.is_infinite() => {
                write!(f, "{}", if *x > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Value::Num(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

type Result<T> = std::result::Result<T, Error>;

impl Value {
    /// `nil` and `false` are falsey, everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    pub fn equals(&self, other: &Value) -> bool {
        self == other
    }

    /// Unwraps both operands as numbers, for operators defined only on numbers.
    pub fn numbers(self, other: Value) -> Result<(f64, f64)> {
        match (self, other) {
            (Value::Num(x), Value::Num(y)) => Ok((x, y)),
            _ => Err(Error::NumberOperands),
        }
    }
}

impl Neg for Value {
    type Output = Result<Value>;
    fn neg(self) -> Result<Value> {
        match self {
            Value::Num(x) => Ok(Value::Num(-x)),
            _ => Err(Error::NumberOperand),
        }
    }
}

impl Not for Value {
    type Output = Value;
    fn not(self) -> Value {
        Value::Bool(!self.is_truthy())
    }
}

impl Add for Value {
    type Output = Result<Value>;
    fn add(self, other: Value) -> Result<Value> {
        match (self, other) {
            (Value::Num(x), Value::Num(y)) => Ok(Value::Num(x + y)),
            (Value::Str(x), Value::Str(y)) => Ok(Value::Str(x + &y)),
            _ => Err(Error::AddOperands),
        }
    }
}

impl Sub for Value {
    type Output = Result<Value>;
    fn sub(self, other: Value) -> Result<Value> {
        let (x, y) = self.numbers(other)?;
        Ok(Value::Num(x - y))
    }
}

impl Mul for Value {
    type Output = Result<Value>;
    fn mul(self, other: Value) -> Result<Value> {
        let (x, y) = self.numbers(other)?;
        Ok(Value::Num(x * y))
    }
}

impl Div for Value {
    type Output = Result<Value>;
    fn div(self, other: Value) -> Result<Value> {
        let (x, y) = self.numbers(other)?;
        Ok(Value::Num(x / y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_drops_integral_fraction() {
        assert_eq!(Value::Num(4.0).to_string(), "4");
        assert_eq!(Value::Num(2.5).to_string(), "2.5");
        assert_eq!(Value::Num(-0.5).to_string(), "-0.5");
    }

    #[test]
    fn display_non_finite_numbers() {
        assert_eq!(Value::Num(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Value::Num(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::Num(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn truthiness() {
        assert!(!Value::Nil.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(Value::Num(0.0).is_truthy());
        assert!(Value::Str(String::new()).is_truthy());
    }

    #[test]
    fn add_concatenates_strings() {
        let v = Value::Str("foo".into()) + Value::Str("bar".into());
        assert_eq!(v, Ok(Value::Str("foobar".into())));
    }

    #[test]
    fn add_rejects_mixed_operands() {
        let v = Value::Str("foo".into()) + Value::Num(1.0);
        assert_eq!(v, Err(Error::AddOperands));
    }

    #[test]
    fn arithmetic_requires_numbers() {
        assert_eq!(Value::Num(1.0) - Value::Nil, Err(Error::NumberOperands));
        assert_eq!(Value::Bool(true) * Value::Num(1.0), Err(Error::NumberOperands));
        assert_eq!(-Value::Str("x".into()), Err(Error::NumberOperand));
    }

    #[test]
    fn equality_across_kinds() {
        assert!(Value::Nil.equals(&Value::Nil));
        assert!(!Value::Nil.equals(&Value::Bool(false)));
        assert!(!Value::Num(1.0).equals(&Value::Str("1".into())));
    }
}
