//! Read-only views of book state: depth snapshots and change notifications.

use serde::{Deserialize, Serialize};

use crate::primitives::{Amount, Timestamp};

/// One price level within a [`DepthSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthLevel {
    /// The level's price.
    pub price: Amount,
    /// The aggregate open quantity resting at this price.
    pub quantity: Amount,
    /// The number of distinct orders resting at this price.
    pub order_count: usize,
}

/// A point-in-time view of a book's top `N` levels per side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthSnapshot {
    /// The symbol this snapshot describes.
    pub symbol: String,
    /// Bid levels, best (highest) price first.
    pub bids: Vec<DepthLevel>,
    /// Ask levels, best (lowest) price first.
    pub asks: Vec<DepthLevel>,
    /// The price of the most recent trade, if any has occurred.
    pub last_trade_price: Option<Amount>,
}

/// Notification handed to registered book-update callbacks once per
/// engine operation (order submission or cancellation), built from a
/// [`DepthSnapshot`] taken under the same critical section as the
/// triggering operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookUpdateEvent {
    /// The symbol affected.
    pub symbol: String,
    /// When this snapshot was taken (milliseconds since epoch).
    pub timestamp: Timestamp,
    /// Bid levels, best (highest) price first.
    pub bids: Vec<DepthLevel>,
    /// Ask levels, best (lowest) price first.
    pub asks: Vec<DepthLevel>,
    /// The best bid price and quantity, if any.
    pub best_bid: Option<(Amount, Amount)>,
    /// The best ask price and quantity, if any.
    pub best_ask: Option<(Amount, Amount)>,
}

impl BookUpdateEvent {
    /// Build an event from a snapshot and the book's current top of book.
    pub fn new(
        snapshot: DepthSnapshot,
        best_bid: Option<(Amount, Amount)>,
        best_ask: Option<(Amount, Amount)>,
        timestamp: Timestamp,
    ) -> Self {
        BookUpdateEvent {
            symbol: snapshot.symbol,
            timestamp,
            bids: snapshot.bids,
            asks: snapshot.asks,
            best_bid,
            best_ask,
        }
    }
}
