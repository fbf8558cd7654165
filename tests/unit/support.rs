//! Shared helpers for the integration test suite.

use clob_core::engine::{EngineConfig, MatchingEngine, NewOrderRequest};
use clob_core::order::Order;
use clob_core::primitives::{OrderType, Side};

/// A fresh engine with deterministic order ids, for reproducible assertions.
pub fn engine() -> MatchingEngine {
    MatchingEngine::new(EngineConfig::deterministic())
}

/// Submit an order and unwrap the result — test scenarios only submit
/// requests they expect to be accepted.
pub fn submit(
    engine: &MatchingEngine,
    symbol: &str,
    side: Side,
    order_type: OrderType,
    quantity: &str,
    price: Option<&str>,
) -> Order {
    engine
        .submit_order(NewOrderRequest {
            symbol: symbol.to_string(),
            side,
            order_type,
            quantity: quantity.to_string(),
            price: price.map(|p| p.to_string()),
            client_order_id: None,
        })
        .expect("test scenario submits only well-formed orders")
}
