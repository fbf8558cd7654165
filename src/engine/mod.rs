//! [`MatchingEngine`]: the public entry point — validation, symbol routing,
//! id/sequence assignment, and fan-out to registered callbacks, wrapped
//! around a registry of independently-locked per-symbol [`OrderBook`]s.

mod callbacks;
mod config;
mod error;
mod stats;

pub use callbacks::{BookUpdateCallback, TradeCallback};
pub use config::EngineConfig;
pub use error::EngineError;
pub use stats::{Statistics, SymbolStatistics};

use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{info, trace, warn};

use crate::book::{BookUpdateEvent, DepthSnapshot, OrderBook};
use crate::order::Order;
use crate::primitives::{Amount, IdGenerator, OrderId, OrderType, SequenceGenerator, Side, ValidationError};
use crate::trade::Trade;
use crate::utils::current_time_millis;

/// A request to submit a new order, in the raw (string) form external
/// callers supply — parsed and bounds-checked by
/// [`MatchingEngine::submit_order`] before it ever reaches a book.
#[derive(Debug, Clone)]
pub struct NewOrderRequest {
    /// The trading symbol, e.g. `"BTC-USDT"`.
    pub symbol: String,
    /// Buy or sell.
    pub side: Side,
    /// Market, Limit, Ioc, or Fok.
    pub order_type: OrderType,
    /// The requested quantity, as a decimal string.
    pub quantity: String,
    /// The limit price, as a decimal string. Required unless `order_type`
    /// is `Market`.
    pub price: Option<String>,
    /// A caller-supplied id. If set, it must not already name a currently
    /// resting order on this symbol. If unset and `EngineConfig::assign_ids`
    /// is `true`, the engine mints one; otherwise its absence is itself a
    /// validation failure.
    pub client_order_id: Option<String>,
}

/// The matching engine: one [`OrderBook`] per symbol, each guarded by its
/// own lock, fronted by a single validation and routing boundary.
///
/// Two operations on different symbols never contend; two operations on the
/// same symbol serialize through that symbol's `Mutex`, which is exactly
/// the "one logical thread per book" model the core is built around.
pub struct MatchingEngine {
    config: EngineConfig,
    books: RwLock<HashMap<String, Arc<Mutex<OrderBook>>>>,
    sequence: SequenceGenerator,
    id_generator: IdGenerator,
    trade_callbacks: Mutex<Vec<TradeCallback>>,
    book_update_callbacks: Mutex<Vec<BookUpdateCallback>>,
    stats: Mutex<Statistics>,
}

impl MatchingEngine {
    /// A fresh engine with no symbols registered yet — books are created
    /// lazily on first use.
    pub fn new(config: EngineConfig) -> Self {
        let id_generator = if config.deterministic_ids {
            IdGenerator::seeded(0)
        } else {
            IdGenerator::random()
        };
        MatchingEngine {
            config,
            books: RwLock::new(HashMap::new()),
            sequence: SequenceGenerator::new(),
            id_generator,
            trade_callbacks: Mutex::new(Vec::new()),
            book_update_callbacks: Mutex::new(Vec::new()),
            stats: Mutex::new(Statistics::default()),
        }
    }

    /// The symbols with a book, in no particular order.
    pub fn symbols(&self) -> Vec<String> {
        self.books.read().keys().cloned().collect()
    }

    /// Register a callback invoked once per trade. Runs synchronously
    /// inside the matching call that produced it.
    pub fn on_trade(&self, callback: TradeCallback) {
        self.trade_callbacks.lock().push(callback);
    }

    /// Register a callback invoked once per book state change.
    pub fn on_book_update(&self, callback: BookUpdateCallback) {
        self.book_update_callbacks.lock().push(callback);
    }

    /// A snapshot of the engine-wide and per-symbol counters accumulated
    /// since construction.
    pub fn statistics(&self) -> Statistics {
        self.stats.lock().clone()
    }

    /// The top of book for `symbol`.
    pub fn bbo(
        &self,
        symbol: &str,
    ) -> Result<(Option<(Amount, Amount)>, Option<(Amount, Amount)>), EngineError> {
        let book = self.book_for(symbol)?;
        Ok(book.lock().bbo())
    }

    /// A depth snapshot for `symbol` with `depth` levels per side, or the
    /// engine's configured default depth if `depth` is `None`.
    pub fn depth(&self, symbol: &str, depth: Option<usize>) -> Result<DepthSnapshot, EngineError> {
        let book = self.book_for(symbol)?;
        Ok(book.lock().depth(depth.unwrap_or(self.config.default_depth)))
    }

    /// Validate, accept, and match a new order.
    pub fn submit_order(&self, request: NewOrderRequest) -> Result<Order, EngineError> {
        self.record_received(&request.symbol);

        let order = match self.build_order(&request) {
            Ok(order) => order,
            Err(err) => {
                self.record_rejected(&request.symbol);
                return Err(err);
            }
        };
        let symbol = order.symbol.clone();
        let book = self.book_for_or_create(&symbol);

        let mut guard = book.lock();
        if guard.order(&order.id).is_some() {
            drop(guard);
            self.record_rejected(&symbol);
            return Err(EngineError::DuplicateOrderId(order.id.clone()));
        }

        let outcome = match order.order_type {
            OrderType::Market => guard.match_market(order),
            OrderType::Limit => guard.add_limit(order),
            OrderType::Ioc => guard.match_ioc(order),
            OrderType::Fok => guard.match_fok(order),
        };
        let book_update = self.snapshot_event(&guard, &symbol);
        drop(guard);

        trace!(
            symbol = %symbol,
            order_id = %outcome.order.id,
            status = ?outcome.order.status,
            trades = outcome.trades.len(),
            "order matched"
        );

        self.record_accepted(&symbol, &outcome.trades);
        self.dispatch_trades(&outcome.trades);
        self.dispatch_book_update(&book_update);

        Ok(outcome.order)
    }

    /// Cancel a currently resting order.
    pub fn cancel_order(&self, symbol: &str, id: &OrderId) -> Result<Order, EngineError> {
        let book = self.book_for(symbol)?;
        let mut guard = book.lock();
        let order = guard
            .cancel(id)
            .map_err(|_| EngineError::NotFound(id.clone()))?;
        let book_update = self.snapshot_event(&guard, symbol);
        drop(guard);

        info!(symbol = %symbol, order_id = %order.id, "order cancelled");
        self.record_cancelled(symbol);
        self.dispatch_book_update(&book_update);

        Ok(order)
    }

    fn snapshot_event(&self, book: &OrderBook, symbol: &str) -> BookUpdateEvent {
        debug_assert_eq!(book.symbol(), symbol, "snapshot taken for the wrong book");
        let snapshot = book.depth(self.config.default_depth);
        let (best_bid, best_ask) = book.bbo();
        BookUpdateEvent::new(snapshot, best_bid, best_ask, current_time_millis())
    }

    fn build_order(&self, request: &NewOrderRequest) -> Result<Order, EngineError> {
        if request.symbol.trim().is_empty() {
            return Err(EngineError::Validation(ValidationError::EmptySymbol));
        }

        let quantity = Amount::parse_positive(&request.quantity, self.config.decimal_scale)?;
        if let Some(min) = self.config.min_quantity {
            if quantity < min {
                return Err(EngineError::Validation(ValidationError::OutOfRange {
                    field: "quantity",
                    value: quantity.to_string(),
                }));
            }
        }
        if let Some(max) = self.config.max_quantity {
            if quantity > max {
                return Err(EngineError::Validation(ValidationError::OutOfRange {
                    field: "quantity",
                    value: quantity.to_string(),
                }));
            }
        }

        let price = match &request.price {
            Some(raw) => {
                let parsed = Amount::parse_positive(raw, self.config.decimal_scale)?;
                if let Some(min) = self.config.min_price {
                    if parsed < min {
                        return Err(EngineError::Validation(ValidationError::OutOfRange {
                            field: "price",
                            value: parsed.to_string(),
                        }));
                    }
                }
                if let Some(max) = self.config.max_price {
                    if parsed > max {
                        return Err(EngineError::Validation(ValidationError::OutOfRange {
                            field: "price",
                            value: parsed.to_string(),
                        }));
                    }
                }
                Some(parsed)
            }
            None => None,
        };

        if request.order_type.requires_price() && price.is_none() {
            return Err(EngineError::Validation(ValidationError::MissingField("price")));
        }

        let id = match &request.client_order_id {
            Some(raw) => OrderId::new(raw.clone()),
            None if self.config.assign_ids => self.id_generator.next(),
            None => {
                return Err(EngineError::Validation(ValidationError::MissingField(
                    "order_id",
                )))
            }
        };

        Ok(Order::new(
            id,
            request.symbol.clone(),
            request.side,
            request.order_type,
            quantity,
            price,
            self.sequence.next(),
            current_time_millis(),
        ))
    }

    fn book_for(&self, symbol: &str) -> Result<Arc<Mutex<OrderBook>>, EngineError> {
        self.books
            .read()
            .get(symbol)
            .cloned()
            .ok_or_else(|| EngineError::UnknownSymbol(symbol.to_string()))
    }

    fn book_for_or_create(&self, symbol: &str) -> Arc<Mutex<OrderBook>> {
        if let Some(book) = self.books.read().get(symbol) {
            return book.clone();
        }
        let mut books = self.books.write();
        books
            .entry(symbol.to_string())
            .or_insert_with(|| {
                info!(symbol = %symbol, "opened new book");
                Arc::new(Mutex::new(OrderBook::new(symbol.to_string())))
            })
            .clone()
    }

    fn record_received(&self, symbol: &str) {
        let mut stats = self.stats.lock();
        stats.orders_received += 1;
        stats.per_symbol.entry(symbol.to_string()).or_default().orders_received += 1;
    }

    fn record_rejected(&self, symbol: &str) {
        let mut stats = self.stats.lock();
        stats.orders_rejected += 1;
        stats.per_symbol.entry(symbol.to_string()).or_default().orders_rejected += 1;
    }

    fn record_cancelled(&self, symbol: &str) {
        let mut stats = self.stats.lock();
        stats.orders_cancelled += 1;
        stats.per_symbol.entry(symbol.to_string()).or_default().orders_cancelled += 1;
    }

    fn record_accepted(&self, symbol: &str, trades: &[Trade]) {
        let volume = trades.iter().fold(Amount::ZERO, |acc, t| acc + t.quantity);
        let mut stats = self.stats.lock();
        stats.orders_accepted += 1;
        stats.trades_emitted += trades.len() as u64;
        stats.total_volume = stats.total_volume + volume;
        let entry = stats.per_symbol.entry(symbol.to_string()).or_default();
        entry.orders_accepted += 1;
        entry.trades_executed += trades.len() as u64;
        entry.volume_traded = entry.volume_traded + volume;
    }

    /// Invoke every registered trade callback for each trade, in emission
    /// order. A panicking subscriber is caught, logged, and otherwise
    /// ignored — it must not affect engine state or other subscribers.
    fn dispatch_trades(&self, trades: &[Trade]) {
        if trades.is_empty() {
            return;
        }
        let callbacks = self.trade_callbacks.lock();
        for trade in trades {
            for callback in callbacks.iter() {
                if catch_unwind(AssertUnwindSafe(|| callback(trade))).is_err() {
                    warn!(trade_id = %trade.id, "trade callback panicked, subscriber isolated");
                }
            }
        }
    }

    /// Invoke every registered book-update callback once with `event`.
    fn dispatch_book_update(&self, event: &BookUpdateEvent) {
        let callbacks = self.book_update_callbacks.lock();
        for callback in callbacks.iter() {
            if catch_unwind(AssertUnwindSafe(|| callback(event))).is_err() {
                warn!(symbol = %event.symbol, "book-update callback panicked, subscriber isolated");
            }
        }
    }
}
