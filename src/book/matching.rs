//! The matching loop: price-time priority execution against the resting
//! opposite side, plus the per-order-type entry points that drive it.

use uuid::Uuid;

use super::OrderBook;
use crate::order::Order;
use crate::price_level::PriceLevel;
use crate::primitives::{Amount, OrderId, Sequence, Side};
use crate::trade::Trade;
use crate::utils::current_time_millis;

/// The result of submitting one order to a book: its final state and the
/// trades it produced (if any), in execution order.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    /// The submitted order's state after matching (and, for Market/IOC/FOK,
    /// after any non-resting remainder has been cancelled).
    pub order: Order,
    /// Trades executed against resting orders, in execution order.
    pub trades: Vec<Trade>,
}

impl OrderBook {
    /// Add a `Limit` order: match what crosses the book, then rest any
    /// remainder at its limit price.
    pub fn add_limit(&mut self, mut order: Order) -> MatchOutcome {
        let limit_price = order.price.expect("limit order carries a price");
        let taker_id = order.id.clone();
        let taker_sequence = order.sequence;
        let trades = self.match_against(
            order.side,
            order.remaining(),
            Some(limit_price),
            &taker_id,
            taker_sequence,
        );
        for trade in &trades {
            order.apply_fill(trade.quantity);
        }
        if !order.remaining().is_zero() {
            let level = self
                .side_map_mut(order.side)
                .entry(limit_price)
                .or_insert_with(|| PriceLevel::new(limit_price));
            level.enqueue(order.id.clone(), order.remaining());
            self.orders.insert(order.id.clone(), order.clone());
        }
        MatchOutcome { order, trades }
    }

    /// Match a `Market` order against the book until it is filled or the
    /// book runs dry. Never rests: any unfilled remainder is cancelled.
    pub fn match_market(&mut self, mut order: Order) -> MatchOutcome {
        let taker_id = order.id.clone();
        let taker_sequence = order.sequence;
        let trades = self.match_against(order.side, order.remaining(), None, &taker_id, taker_sequence);
        for trade in &trades {
            order.apply_fill(trade.quantity);
        }
        if !order.remaining().is_zero() && !order.is_terminal() {
            order.cancel();
        }
        MatchOutcome { order, trades }
    }

    /// Match an `Ioc` order up to its limit price. Never rests: any unfilled
    /// remainder is cancelled immediately.
    pub fn match_ioc(&mut self, mut order: Order) -> MatchOutcome {
        let limit_price = order.price.expect("IOC order carries a price");
        let taker_id = order.id.clone();
        let taker_sequence = order.sequence;
        let trades = self.match_against(
            order.side,
            order.remaining(),
            Some(limit_price),
            &taker_id,
            taker_sequence,
        );
        for trade in &trades {
            order.apply_fill(trade.quantity);
        }
        if !order.remaining().is_zero() && !order.is_terminal() {
            order.cancel();
        }
        MatchOutcome { order, trades }
    }

    /// Match a `Fok` order. First probes whether the book can fill it
    /// completely at or better than its limit price without mutating any
    /// state; only if that probe succeeds does it actually consume
    /// liquidity. Otherwise the order is cancelled untouched — all or
    /// nothing.
    pub fn match_fok(&mut self, mut order: Order) -> MatchOutcome {
        let limit_price = order.price.expect("FOK order carries a price");
        if self.fillable_quantity(order.side, limit_price) < order.original_quantity {
            order.cancel();
            return MatchOutcome {
                order,
                trades: Vec::new(),
            };
        }
        let taker_id = order.id.clone();
        let taker_sequence = order.sequence;
        let trades = self.match_against(
            order.side,
            order.remaining(),
            Some(limit_price),
            &taker_id,
            taker_sequence,
        );
        for trade in &trades {
            order.apply_fill(trade.quantity);
        }
        debug_assert!(
            order.remaining().is_zero(),
            "a successful fillability probe guarantees the consume phase fully fills"
        );
        MatchOutcome { order, trades }
    }

    /// The total resting quantity on the opposite side of `side` that is
    /// marketable against `limit_price`, without mutating the book. Used by
    /// [`Self::match_fok`] to decide fillability before committing to a
    /// trade.
    fn fillable_quantity(&self, side: Side, limit_price: Amount) -> Amount {
        let opposite = self.side_map(side.opposite());
        let mut total = Amount::ZERO;
        match side {
            Side::Buy => {
                for (price, level) in opposite.iter() {
                    if limit_price < *price {
                        break;
                    }
                    total = total + level.total_quantity();
                }
            }
            Side::Sell => {
                for (price, level) in opposite.iter().rev() {
                    if limit_price > *price {
                        break;
                    }
                    total = total + level.total_quantity();
                }
            }
        }
        total
    }

    /// Consume resting liquidity on the opposite side of `aggressor_side` in
    /// price-time priority order, up to `remaining` quantity and (if
    /// `limit_price` is set) no worse than that price. Every execution
    /// prices at the maker's resting price, never the aggressor's.
    fn match_against(
        &mut self,
        aggressor_side: Side,
        mut remaining: Amount,
        limit_price: Option<Amount>,
        taker_id: &OrderId,
        taker_sequence: Sequence,
    ) -> Vec<Trade> {
        let mut trades = Vec::new();
        let opposite_side = aggressor_side.opposite();
        let timestamp = current_time_millis();

        loop {
            if remaining.is_zero() {
                break;
            }
            let best_price = match opposite_side {
                Side::Buy => self.bids.keys().next_back().copied(),
                Side::Sell => self.asks.keys().next().copied(),
            };
            let Some(price) = best_price else {
                break;
            };
            if let Some(limit) = limit_price {
                let marketable = match aggressor_side {
                    Side::Buy => limit >= price,
                    Side::Sell => limit <= price,
                };
                if !marketable {
                    break;
                }
            }

            let level_emptied;
            {
                let level = match opposite_side {
                    Side::Buy => self
                        .bids
                        .get_mut(&price)
                        .expect("best bid price must still be present in the bid map"),
                    Side::Sell => self
                        .asks
                        .get_mut(&price)
                        .expect("best ask price must still be present in the ask map"),
                };
                while !remaining.is_zero() {
                    let Some(maker_id) = level.front().cloned() else {
                        break;
                    };
                    let maker = self
                        .orders
                        .get_mut(&maker_id)
                        .expect("every queued order id is indexed in the order map");
                    let trade_qty = remaining.min(maker.remaining());
                    maker.apply_fill(trade_qty);
                    level.reduce(trade_qty);
                    remaining = remaining.saturating_sub(trade_qty);
                    self.last_trade_price = Some(price);

                    trades.push(Trade::new(
                        Uuid::new_v4().to_string(),
                        self.symbol.clone(),
                        price,
                        trade_qty,
                        aggressor_side,
                        maker_id.clone(),
                        taker_id.clone(),
                        maker.sequence,
                        taker_sequence,
                        timestamp,
                    ));

                    if maker.remaining().is_zero() {
                        level.pop_front();
                        self.orders.remove(&maker_id);
                    }
                }
                level_emptied = level.is_empty();
            }
            if level_emptied {
                match opposite_side {
                    Side::Buy => self.bids.remove(&price),
                    Side::Sell => self.asks.remove(&price),
                };
            }
        }

        trades
    }
}
