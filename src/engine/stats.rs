//! Counters exposed for observability, engine-wide and per symbol.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::primitives::Amount;

/// Running counters for a single symbol's order and trade activity since
/// its book was first touched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SymbolStatistics {
    /// Submissions received, whether or not they were accepted.
    pub orders_received: u64,
    /// Orders accepted (passed validation and reached the book).
    pub orders_accepted: u64,
    /// Orders rejected at validation, before reaching the book.
    pub orders_rejected: u64,
    /// Orders cancelled by explicit request.
    pub orders_cancelled: u64,
    /// Trades executed.
    pub trades_executed: u64,
    /// Aggregate quantity traded.
    pub volume_traded: Amount,
}

/// Engine-wide counters, with a per-symbol breakdown of the same figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Submissions received across every symbol.
    pub orders_received: u64,
    /// Orders accepted across every symbol.
    pub orders_accepted: u64,
    /// Orders rejected at validation across every symbol.
    pub orders_rejected: u64,
    /// Orders cancelled across every symbol.
    pub orders_cancelled: u64,
    /// Trades emitted across every symbol.
    pub trades_emitted: u64,
    /// Aggregate quantity traded across every symbol.
    pub total_volume: Amount,
    /// The same counters broken down by symbol.
    pub per_symbol: HashMap<String, SymbolStatistics>,
}
