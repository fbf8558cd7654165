//! The [`Trade`] entity emitted by the matching loop.

use serde::{Deserialize, Serialize};

use crate::primitives::{Amount, OrderId, Sequence, Side, Timestamp};

/// A single execution between a resting maker order and an incoming
/// aggressor (taker) order.
///
/// `price` always equals the maker's resting price (the maker price rule);
/// the aggressor never receives price improvement beyond what the book
/// already offered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Unique identifier for this trade.
    pub id: String,
    /// The trading symbol.
    pub symbol: String,
    /// The execution price — the maker's resting price.
    pub price: Amount,
    /// The executed quantity, `<= min(maker_remaining_before, taker_remaining_before)`.
    pub quantity: Amount,
    /// The side of the aggressor (taker) order.
    pub aggressor_side: Side,
    /// The resting order that supplied liquidity.
    pub maker_order_id: OrderId,
    /// The incoming order that removed liquidity.
    pub taker_order_id: OrderId,
    /// The maker's acceptance sequence, for audit ordering.
    pub maker_sequence: Sequence,
    /// The taker's acceptance sequence, for audit ordering.
    pub taker_sequence: Sequence,
    /// When this trade was emitted (milliseconds since epoch).
    pub timestamp: Timestamp,
}

impl Trade {
    /// Construct a trade. `trade_id` is typically a UUID minted by the book
    /// at emission time.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        symbol: String,
        price: Amount,
        quantity: Amount,
        aggressor_side: Side,
        maker_order_id: OrderId,
        taker_order_id: OrderId,
        maker_sequence: Sequence,
        taker_sequence: Sequence,
        timestamp: Timestamp,
    ) -> Self {
        Trade {
            id,
            symbol,
            price,
            quantity,
            aggressor_side,
            maker_order_id,
            taker_order_id,
            maker_sequence,
            taker_sequence,
            timestamp,
        }
    }
}
