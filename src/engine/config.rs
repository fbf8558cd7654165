//! Engine-wide configuration.

use crate::primitives::Amount;

/// Validation bounds and behavioral switches shared by every book the
/// engine manages. Each bound is optional: `None` disables that check
/// entirely rather than standing in for some default numeric limit.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// The smallest acceptable order quantity, if bounded.
    pub min_quantity: Option<Amount>,
    /// The largest acceptable order quantity, if bounded.
    pub max_quantity: Option<Amount>,
    /// The smallest acceptable limit price, if bounded.
    pub min_price: Option<Amount>,
    /// The largest acceptable limit price, if bounded.
    pub max_price: Option<Amount>,
    /// The number of price levels per side returned by `depth` when the
    /// caller does not ask for a specific count.
    pub default_depth: usize,
    /// The maximum number of fractional digits accepted in a price or
    /// quantity string. Must be at least 8.
    pub decimal_scale: u32,
    /// Whether the engine mints an id for a request that omits one. When
    /// `false`, a missing `client_order_id` is itself a `ValidationError`.
    pub assign_ids: bool,
    /// When `true`, order ids left unset by the caller are minted by a
    /// deterministic seeded counter instead of a random UUID — for
    /// reproducible tests, never production.
    pub deterministic_ids: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            min_quantity: None,
            max_quantity: None,
            min_price: None,
            max_price: None,
            default_depth: 10,
            decimal_scale: 8,
            assign_ids: true,
            deterministic_ids: false,
        }
    }
}

impl EngineConfig {
    /// The default bounds, but with deterministic id assignment — the
    /// value integration tests reach for.
    pub fn deterministic() -> Self {
        EngineConfig {
            deterministic_ids: true,
            ..EngineConfig::default()
        }
    }
}
