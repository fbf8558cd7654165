//! # clob-core
//!
//! A price-time priority limit order book and matching engine core, built
//! for the order-entry path of a cryptocurrency exchange.
//!
//! ## Design goals
//!
//! 1. **Correctness over raw throughput**: every book is owned by exactly
//!    one `parking_lot::Mutex`, so a caller either holds the whole book's
//!    critical section or waits — there is no lock-free sharing to reason
//!    about, and no torn reads of partially-applied matches.
//! 2. **Exact monetary arithmetic**: every price and quantity is a
//!    [`primitives::Amount`], a fixed-scale decimal. Binary floating point
//!    never touches a matching path.
//! 3. **Deterministic replay**: a monotonic per-engine [`primitives::Sequence`]
//!    breaks every tie that wall-clock timestamps cannot, so interleaved
//!    audit logs across symbols stay unambiguous, and a seeded
//!    [`primitives::IdGenerator`] makes order ids reproducible in tests.
//!
//! ## Order types
//!
//! - **Limit**: matches what crosses the book at its price or better, rests
//!   the remainder.
//! - **Market**: matches whatever is available right now at any price;
//!   never rests.
//! - **Ioc** (immediate-or-cancel): like Market, but bounded by a limit
//!   price; never rests.
//! - **Fok** (fill-or-kill): fills completely or not at all, decided by a
//!   non-mutating probe before any state changes.
//!
//! ## Entry point
//!
//! [`engine::MatchingEngine`] is the public boundary: it validates raw
//! input, looks up (or lazily opens) the [`book::OrderBook`] for a symbol,
//! drives the matching protocol, and fans resulting trades and book
//! changes out to registered callbacks.
//!
//! ```
//! use clob_core::engine::{EngineConfig, MatchingEngine, NewOrderRequest};
//! use clob_core::primitives::{OrderType, Side};
//!
//! let engine = MatchingEngine::new(EngineConfig::deterministic());
//!
//! let resting = engine
//!     .submit_order(NewOrderRequest {
//!         symbol: "BTC-USDT".to_string(),
//!         side: Side::Sell,
//!         order_type: OrderType::Limit,
//!         quantity: "1.0".to_string(),
//!         price: Some("50000".to_string()),
//!         client_order_id: None,
//!     })
//!     .unwrap();
//! assert_eq!(resting.filled_quantity.to_string(), "0");
//!
//! let taker = engine
//!     .submit_order(NewOrderRequest {
//!         symbol: "BTC-USDT".to_string(),
//!         side: Side::Buy,
//!         order_type: OrderType::Market,
//!         quantity: "1.0".to_string(),
//!         price: None,
//!         client_order_id: None,
//!     })
//!     .unwrap();
//! assert_eq!(taker.filled_quantity, taker.original_quantity);
//! ```

pub mod book;
pub mod engine;
pub mod order;
pub mod prelude;
pub mod price_level;
pub mod primitives;
pub mod trade;
mod utils;

pub use utils::current_time_millis;
