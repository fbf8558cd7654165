//! Convenience re-exports of the most commonly used types.
//!
//! ```
//! use clob_core::prelude::*;
//! ```

pub use crate::book::{BookUpdateEvent, DepthLevel, DepthSnapshot, MatchOutcome, OrderBook, OrderBookError};
pub use crate::engine::{
    BookUpdateCallback, EngineConfig, EngineError, MatchingEngine, NewOrderRequest, Statistics,
    SymbolStatistics, TradeCallback,
};
pub use crate::order::Order;
pub use crate::price_level::PriceLevel;
pub use crate::primitives::{
    Amount, IdGenerator, OrderId, OrderType, Sequence, SequenceGenerator, Side, Status, Timestamp,
    ValidationError,
};
pub use crate::trade::Trade;
