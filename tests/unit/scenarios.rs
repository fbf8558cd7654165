//! The six concrete scenarios from the engine's testable-properties
//! section, each run against a fresh `BTC-USDT` book.

use std::sync::{Arc, Mutex};

use clob_core::primitives::{Amount, OrderType, Side, Status};
use clob_core::trade::Trade;

use super::support::{engine, submit};

const SYMBOL: &str = "BTC-USDT";

fn amt(s: &str) -> Amount {
    Amount::parse(s, 8).unwrap()
}

fn collected_trades(engine: &clob_core::engine::MatchingEngine) -> Arc<Mutex<Vec<Trade>>> {
    let trades = Arc::new(Mutex::new(Vec::new()));
    let sink = trades.clone();
    engine.on_trade(Arc::new(move |trade: &Trade| {
        sink.lock().unwrap().push(trade.clone());
    }));
    trades
}

#[test]
fn resting_then_crossing() {
    let engine = engine();
    let trades = collected_trades(&engine);

    submit(&engine, SYMBOL, Side::Sell, OrderType::Limit, "1.0", Some("50010"));
    submit(&engine, SYMBOL, Side::Sell, OrderType::Limit, "2.0", Some("50020"));
    let taker = submit(&engine, SYMBOL, Side::Buy, OrderType::Limit, "2.5", Some("50020"));

    let recorded = trades.lock().unwrap();
    assert_eq!(recorded.len(), 2);
    assert_eq!(recorded[0].price, amt("50010"));
    assert_eq!(recorded[0].quantity, amt("1.0"));
    assert_eq!(recorded[1].price, amt("50020"));
    assert_eq!(recorded[1].quantity, amt("1.5"));

    assert_eq!(taker.filled_quantity, amt("2.5"));
    assert_eq!(taker.status, Status::Filled);

    let (best_bid, best_ask) = engine.bbo(SYMBOL).unwrap();
    assert!(best_bid.is_none());
    let (ask_price, ask_qty) = best_ask.unwrap();
    assert_eq!(ask_price, amt("50020"));
    assert_eq!(ask_qty, amt("0.5"));
}

#[test]
fn time_priority_at_one_level() {
    let engine = engine();
    let trades = collected_trades(&engine);

    let order_a = submit(&engine, SYMBOL, Side::Buy, OrderType::Limit, "1.0", Some("50000"));
    let order_b = submit(&engine, SYMBOL, Side::Buy, OrderType::Limit, "1.0", Some("50000"));
    submit(&engine, SYMBOL, Side::Sell, OrderType::Limit, "1.5", Some("50000"));

    let recorded = trades.lock().unwrap();
    assert_eq!(recorded.len(), 2);
    assert_eq!(recorded[0].maker_order_id, order_a.id);
    assert_eq!(recorded[0].quantity, amt("1.0"));
    assert_eq!(recorded[1].maker_order_id, order_b.id);
    assert_eq!(recorded[1].quantity, amt("0.5"));

    let (best_bid, _) = engine.bbo(SYMBOL).unwrap();
    let (bid_price, bid_qty) = best_bid.unwrap();
    assert_eq!(bid_price, amt("50000"));
    assert_eq!(bid_qty, amt("0.5"));
}

#[test]
fn fok_unfillable_leaves_book_untouched() {
    let engine = engine();
    submit(&engine, SYMBOL, Side::Buy, OrderType::Limit, "1.0", Some("100"));
    submit(&engine, SYMBOL, Side::Buy, OrderType::Limit, "0.5", Some("99"));

    let trades = collected_trades(&engine);
    let order = submit(&engine, SYMBOL, Side::Sell, OrderType::Fok, "2.0", Some("99"));

    assert_eq!(order.status, Status::Cancelled);
    assert_eq!(order.filled_quantity, Amount::ZERO);
    assert!(trades.lock().unwrap().is_empty());

    let (best_bid, _) = engine.bbo(SYMBOL).unwrap();
    let (bid_price, bid_qty) = best_bid.unwrap();
    assert_eq!(bid_price, amt("100"));
    assert_eq!(bid_qty, amt("1.0"));
}

#[test]
fn fok_fillable_exactly() {
    let engine = engine();
    submit(&engine, SYMBOL, Side::Buy, OrderType::Limit, "1.0", Some("100"));
    submit(&engine, SYMBOL, Side::Buy, OrderType::Limit, "0.5", Some("99"));

    let trades = collected_trades(&engine);
    let order = submit(&engine, SYMBOL, Side::Sell, OrderType::Fok, "1.5", Some("99"));

    assert_eq!(order.status, Status::Filled);
    let recorded = trades.lock().unwrap();
    assert_eq!(recorded.len(), 2);
    assert_eq!(recorded[0].price, amt("100"));
    assert_eq!(recorded[0].quantity, amt("1.0"));
    assert_eq!(recorded[1].price, amt("99"));
    assert_eq!(recorded[1].quantity, amt("0.5"));

    let (best_bid, _) = engine.bbo(SYMBOL).unwrap();
    assert!(best_bid.is_none());
}

#[test]
fn ioc_partial_fill_does_not_rest() {
    let engine = engine();
    submit(&engine, SYMBOL, Side::Sell, OrderType::Limit, "0.4", Some("101"));

    let trades = collected_trades(&engine);
    let order = submit(&engine, SYMBOL, Side::Buy, OrderType::Ioc, "1.0", Some("101"));

    let recorded = trades.lock().unwrap();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].price, amt("101"));
    assert_eq!(recorded[0].quantity, amt("0.4"));

    assert_eq!(order.filled_quantity, amt("0.4"));
    assert_eq!(order.status, Status::Cancelled);

    let (_, best_ask) = engine.bbo(SYMBOL).unwrap();
    assert!(best_ask.is_none());
}

#[test]
fn cancel_during_life() {
    let engine = engine();
    let order_x = submit(&engine, SYMBOL, Side::Buy, OrderType::Limit, "1.0", Some("100"));
    let order_y = submit(&engine, SYMBOL, Side::Buy, OrderType::Limit, "2.0", Some("100"));

    engine.cancel_order(SYMBOL, &order_x.id).unwrap();

    let trades = collected_trades(&engine);
    submit(&engine, SYMBOL, Side::Sell, OrderType::Limit, "1.5", Some("100"));

    let recorded = trades.lock().unwrap();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].maker_order_id, order_y.id);
    assert_eq!(recorded[0].quantity, amt("1.5"));

    let (best_bid, _) = engine.bbo(SYMBOL).unwrap();
    let (bid_price, bid_qty) = best_bid.unwrap();
    assert_eq!(bid_price, amt("100"));
    assert_eq!(bid_qty, amt("0.5"));
}
