use crate::token::Token;
use crate::value;
use thiserror::Error;

/// An evaluation failure, attributed to the operator token that caused it.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}

impl RuntimeError {
    pub fn new(token: Token, message: impl Into<String>) -> Self {
        RuntimeError {
            token,
            message: message.into(),
        }
    }

    pub fn from_value(token: &Token, err: value::Error) -> Self {
        RuntimeError::new(token.clone(), err.to_string())
    }
}
