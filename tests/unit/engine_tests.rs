//! Boundary and error-path behavior of `MatchingEngine` itself.

use clob_core::engine::{EngineConfig, EngineError, MatchingEngine, NewOrderRequest};
use clob_core::primitives::{Amount, OrderId, OrderType, Side, Status, ValidationError};

use super::support::{engine, submit};

const SYMBOL: &str = "SOL-USDT";

#[test]
fn market_order_against_empty_book_is_cancelled_not_rejected() {
    let engine = engine();
    let order = submit(&engine, SYMBOL, Side::Buy, OrderType::Market, "1.0", None);
    assert_eq!(order.status, Status::Cancelled);
    assert_eq!(order.filled_quantity, Amount::ZERO);
}

#[test]
fn duplicate_client_order_id_is_rejected() {
    let engine = engine();
    let result = engine.submit_order(NewOrderRequest {
        symbol: SYMBOL.to_string(),
        side: Side::Buy,
        order_type: OrderType::Limit,
        quantity: "1.0".to_string(),
        price: Some("10".to_string()),
        client_order_id: Some("dup".to_string()),
    });
    assert!(result.is_ok());

    let second = engine.submit_order(NewOrderRequest {
        symbol: SYMBOL.to_string(),
        side: Side::Sell,
        order_type: OrderType::Limit,
        quantity: "1.0".to_string(),
        price: Some("20".to_string()),
        client_order_id: Some("dup".to_string()),
    });
    assert_eq!(second, Err(EngineError::DuplicateOrderId(OrderId::new("dup"))));
}

#[test]
fn cancelling_an_unknown_order_fails() {
    let engine = engine();
    submit(&engine, SYMBOL, Side::Buy, OrderType::Limit, "1.0", Some("10"));
    let result = engine.cancel_order(SYMBOL, &OrderId::new("never-existed"));
    assert_eq!(
        result,
        Err(EngineError::NotFound(OrderId::new("never-existed")))
    );
}

#[test]
fn cancelling_an_already_filled_order_fails() {
    let engine = engine();
    let maker = submit(&engine, SYMBOL, Side::Sell, OrderType::Limit, "1.0", Some("10"));
    submit(&engine, SYMBOL, Side::Buy, OrderType::Limit, "1.0", Some("10"));
    let result = engine.cancel_order(SYMBOL, &maker.id);
    assert!(matches!(result, Err(EngineError::NotFound(_))));
}

#[test]
fn querying_an_unknown_symbol_fails() {
    let engine = engine();
    let result = engine.bbo("NEVER-TRADED");
    assert_eq!(result, Err(EngineError::UnknownSymbol("NEVER-TRADED".to_string())));
}

#[test]
fn limit_order_without_a_price_is_rejected() {
    let engine = engine();
    let result = engine.submit_order(NewOrderRequest {
        symbol: SYMBOL.to_string(),
        side: Side::Buy,
        order_type: OrderType::Limit,
        quantity: "1.0".to_string(),
        price: None,
        client_order_id: None,
    });
    assert_eq!(
        result,
        Err(EngineError::Validation(ValidationError::MissingField("price")))
    );
}

#[test]
fn quantity_outside_configured_bounds_is_rejected() {
    let config = EngineConfig {
        min_quantity: Some(Amount::parse("1.0", 8).unwrap()),
        max_quantity: Some(Amount::parse("100.0", 8).unwrap()),
        ..EngineConfig::deterministic()
    };
    let engine = MatchingEngine::new(config);
    let result = engine.submit_order(NewOrderRequest {
        symbol: SYMBOL.to_string(),
        side: Side::Buy,
        order_type: OrderType::Limit,
        quantity: "0.001".to_string(),
        price: Some("10".to_string()),
        client_order_id: None,
    });
    assert!(matches!(
        result,
        Err(EngineError::Validation(ValidationError::OutOfRange { field: "quantity", .. }))
    ));
}

#[test]
fn excess_decimal_scale_is_rejected() {
    let engine = engine();
    let result = engine.submit_order(NewOrderRequest {
        symbol: SYMBOL.to_string(),
        side: Side::Buy,
        order_type: OrderType::Limit,
        quantity: "1.123456789".to_string(),
        price: Some("10".to_string()),
        client_order_id: None,
    });
    assert!(matches!(
        result,
        Err(EngineError::Validation(ValidationError::ScaleOverflow { .. }))
    ));
}

#[test]
fn statistics_accumulate_across_submissions() {
    let engine = engine();
    submit(&engine, SYMBOL, Side::Sell, OrderType::Limit, "1.0", Some("10"));
    submit(&engine, SYMBOL, Side::Buy, OrderType::Limit, "1.0", Some("10"));

    let stats = engine.statistics();
    assert_eq!(stats.orders_accepted, 2);
    assert_eq!(stats.trades_emitted, 1);
    assert_eq!(stats.total_volume, Amount::parse("1.0", 8).unwrap());

    let per_symbol = stats.per_symbol.get(SYMBOL).unwrap();
    assert_eq!(per_symbol.orders_accepted, 2);
    assert_eq!(per_symbol.trades_executed, 1);
    assert_eq!(per_symbol.volume_traded, Amount::parse("1.0", 8).unwrap());
}

#[test]
fn depth_reports_levels_best_price_first() {
    let engine = engine();
    submit(&engine, SYMBOL, Side::Buy, OrderType::Limit, "1.0", Some("10"));
    submit(&engine, SYMBOL, Side::Buy, OrderType::Limit, "1.0", Some("11"));
    submit(&engine, SYMBOL, Side::Sell, OrderType::Limit, "1.0", Some("20"));
    submit(&engine, SYMBOL, Side::Sell, OrderType::Limit, "1.0", Some("19"));

    let snapshot = engine.depth(SYMBOL, None).unwrap();
    assert_eq!(snapshot.bids[0].price, Amount::parse("11", 8).unwrap());
    assert_eq!(snapshot.bids[1].price, Amount::parse("10", 8).unwrap());
    assert_eq!(snapshot.asks[0].price, Amount::parse("19", 8).unwrap());
    assert_eq!(snapshot.asks[1].price, Amount::parse("20", 8).unwrap());
}
