//! Errors the engine can return at its public boundary.

use std::fmt;

use crate::primitives::{OrderId, ValidationError};

/// Failure modes visible to callers of [`crate::engine::MatchingEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The request failed input validation before ever reaching a book.
    Validation(ValidationError),
    /// The request named a symbol the engine has no book for.
    UnknownSymbol(String),
    /// The request named an order id that is not currently resting.
    NotFound(OrderId),
    /// The caller supplied an order id that is already in use by another
    /// currently-resting order.
    DuplicateOrderId(OrderId),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Validation(e) => write!(f, "validation failed: {e}"),
            EngineError::UnknownSymbol(symbol) => write!(f, "unknown symbol: {symbol:?}"),
            EngineError::NotFound(id) => write!(f, "order {id} not found"),
            EngineError::DuplicateOrderId(id) => write!(f, "order id {id} is already in use"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<ValidationError> for EngineError {
    fn from(e: ValidationError) -> Self {
        EngineError::Validation(e)
    }
}
