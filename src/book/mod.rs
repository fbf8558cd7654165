//! [`OrderBook`]: the per-symbol price-time priority matching core.
//!
//! Bids are keyed so the *last* entry of the `BTreeMap` is the best (highest)
//! bid; asks are keyed so the *first* entry is the best (lowest) ask. Each
//! side is a flat price -> [`PriceLevel`] map; within a level, orders queue
//! in strict FIFO arrival order. A single `orders` index gives O(1) lookup
//! from id to the mutable order body for both matching and cancellation.

mod cancel;
mod error;
mod matching;
mod snapshot;

pub use error::OrderBookError;
pub use matching::MatchOutcome;
pub use snapshot::{BookUpdateEvent, DepthLevel, DepthSnapshot};

use std::collections::{BTreeMap, HashMap};

use crate::order::Order;
use crate::price_level::PriceLevel;
use crate::primitives::{Amount, OrderId, Side};

/// A single trading symbol's resting liquidity and matching state.
///
/// Owned exclusively by [`crate::engine::MatchingEngine`] behind a
/// `parking_lot::Mutex`, so every method here assumes it already holds that
/// book's critical section — there is no internal locking.
#[derive(Debug)]
pub struct OrderBook {
    symbol: String,
    bids: BTreeMap<Amount, PriceLevel>,
    asks: BTreeMap<Amount, PriceLevel>,
    orders: HashMap<OrderId, Order>,
    last_trade_price: Option<Amount>,
}

impl OrderBook {
    /// An empty book for `symbol`.
    pub fn new(symbol: impl Into<String>) -> Self {
        OrderBook {
            symbol: symbol.into(),
            bids: BTreeMap::new(),
            asks: BTreeMap::new(),
            orders: HashMap::new(),
            last_trade_price: None,
        }
    }

    /// The symbol this book serves.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The best bid price and the aggregate quantity resting there.
    pub fn best_bid(&self) -> Option<(Amount, Amount)> {
        self.bids
            .iter()
            .next_back()
            .map(|(price, level)| (*price, level.total_quantity()))
    }

    /// The best ask price and the aggregate quantity resting there.
    pub fn best_ask(&self) -> Option<(Amount, Amount)> {
        self.asks
            .iter()
            .next()
            .map(|(price, level)| (*price, level.total_quantity()))
    }

    /// The best bid and ask together — the book's top of book.
    pub fn bbo(&self) -> (Option<(Amount, Amount)>, Option<(Amount, Amount)>) {
        (self.best_bid(), self.best_ask())
    }

    /// The price of the most recent trade in this book, if any has occurred.
    pub fn last_trade_price(&self) -> Option<Amount> {
        self.last_trade_price
    }

    /// A snapshot of the book's state suitable for serialization, with
    /// `depth` price levels per side.
    pub fn depth(&self, depth: usize) -> DepthSnapshot {
        let bids = self
            .bids
            .iter()
            .rev()
            .take(depth)
            .map(|(price, level)| DepthLevel {
                price: *price,
                quantity: level.total_quantity(),
                order_count: level.order_count(),
            })
            .collect();
        let asks = self
            .asks
            .iter()
            .take(depth)
            .map(|(price, level)| DepthLevel {
                price: *price,
                quantity: level.total_quantity(),
                order_count: level.order_count(),
            })
            .collect();
        DepthSnapshot {
            symbol: self.symbol.clone(),
            bids,
            asks,
            last_trade_price: self.last_trade_price,
        }
    }

    /// The current state of a resting order, if it is still in the book.
    pub fn order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.get(id)
    }

    /// The number of distinct resting orders across both sides.
    pub fn resting_order_count(&self) -> usize {
        self.orders.len()
    }

    pub(crate) fn side_map(&self, side: Side) -> &BTreeMap<Amount, PriceLevel> {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    pub(crate) fn side_map_mut(&mut self, side: Side) -> &mut BTreeMap<Amount, PriceLevel> {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }
}
