use thiserror::Error;

/// Operand mismatch raised by a [`Value`](super::Value) operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Operand must be a number.")]
    NumberOperand,
    #[error("Operands must be numbers.")]
    NumberOperands,
    #[error("Operands must be two numbers or two strings.")]
    AddOperands,
}
