//! The [`Order`] entity and its lifecycle helpers.

use serde::{Deserialize, Serialize};

use crate::primitives::{Amount, OrderId, OrderType, Sequence, Side, Status, Timestamp};

/// A single order accepted by the engine.
///
/// Mutated only inside the engine's per-symbol critical section; removed
/// from the owning [`crate::book::OrderBook`]'s order index once it reaches
/// a terminal [`Status`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier, assigned by the engine if the caller omitted one.
    pub id: OrderId,
    /// The trading symbol this order was submitted for.
    pub symbol: String,
    /// Buy or sell.
    pub side: Side,
    /// Market, Limit, IOC, or FOK.
    pub order_type: OrderType,
    /// The quantity requested at submission. Always > 0.
    pub original_quantity: Amount,
    /// The quantity matched so far. `0 <= filled_quantity <= original_quantity`.
    pub filled_quantity: Amount,
    /// The limit price. `None` for Market orders; required and `Some` for
    /// Limit, IOC, and FOK orders.
    pub price: Option<Amount>,
    /// The engine-assigned sequence number, defining time priority.
    pub sequence: Sequence,
    /// The engine-assigned acceptance timestamp (milliseconds since epoch).
    pub timestamp: Timestamp,
    /// The current lifecycle state.
    pub status: Status,
}

impl Order {
    /// Construct a new, `Pending` order. Callers go through
    /// [`crate::engine::MatchingEngine`] rather than this constructor
    /// directly so that id/sequence/timestamp assignment stays centralized.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: OrderId,
        symbol: String,
        side: Side,
        order_type: OrderType,
        original_quantity: Amount,
        price: Option<Amount>,
        sequence: Sequence,
        timestamp: Timestamp,
    ) -> Self {
        Order {
            id,
            symbol,
            side,
            order_type,
            original_quantity,
            filled_quantity: Amount::ZERO,
            price,
            sequence,
            timestamp,
            status: Status::Pending,
        }
    }

    /// The quantity still open: `original_quantity - filled_quantity`.
    pub fn remaining(&self) -> Amount {
        self.original_quantity.saturating_sub(self.filled_quantity)
    }

    /// Whether this order has reached a terminal status.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Apply a fill of `quantity`, updating `filled_quantity` and `status`.
    ///
    /// `quantity` must not exceed `remaining()`; this is an internal
    /// invariant of the matching loop, not something caller input can
    /// violate, so it is enforced with a `debug_assert!` rather than a
    /// `Result`.
    pub fn apply_fill(&mut self, quantity: Amount) {
        debug_assert!(
            quantity <= self.remaining(),
            "fill quantity must not exceed remaining quantity"
        );
        self.filled_quantity = self.filled_quantity + quantity;
        self.status = if self.remaining().is_zero() {
            Status::Filled
        } else {
            Status::PartiallyFilled
        };
    }

    /// Transition to `Cancelled`. Valid from any non-terminal status.
    pub fn cancel(&mut self) {
        debug_assert!(!self.is_terminal(), "cannot cancel a terminal order");
        self.status = Status::Cancelled;
    }
}
