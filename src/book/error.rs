//! Errors an [`OrderBook`](super::OrderBook) can return.

use std::fmt;

use crate::primitives::OrderId;

/// Failure modes internal to a single book. Input validation (price/quantity
/// bounds, missing fields) happens one layer up, in
/// [`crate::engine::MatchingEngine`]; by the time a request reaches the book
/// it is already well-formed, so the only thing that can go wrong here is
/// operating on an order id the book doesn't know about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderBookError {
    /// No resting order with this id exists in the book (already filled,
    /// cancelled, or never accepted).
    NotFound(OrderId),
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::NotFound(id) => write!(f, "order {id} not found"),
        }
    }
}

impl std::error::Error for OrderBookError {}
