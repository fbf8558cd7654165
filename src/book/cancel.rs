//! Single-order cancellation.

use super::{error::OrderBookError, OrderBook};
use crate::order::Order;
use crate::primitives::OrderId;

impl OrderBook {
    /// Cancel a resting order, removing it from its price level (and the
    /// level itself, if it was the last order there).
    ///
    /// Fails with [`OrderBookError::NotFound`] if `id` does not name a
    /// currently resting order — already-terminal orders are no longer
    /// indexed, so there is nothing left here to cancel.
    pub fn cancel(&mut self, id: &OrderId) -> Result<Order, OrderBookError> {
        let mut order = self
            .orders
            .remove(id)
            .ok_or_else(|| OrderBookError::NotFound(id.clone()))?;
        let side = order.side;
        let price = order.price.expect("resting orders always carry a price");
        let open_quantity = order.remaining();

        let level_emptied = {
            let level = self
                .side_map_mut(side)
                .get_mut(&price)
                .expect("a resting order's price level must still exist");
            level.remove(id, open_quantity);
            level.is_empty()
        };
        if level_emptied {
            self.side_map_mut(side).remove(&price);
        }

        order.cancel();
        Ok(order)
    }
}
