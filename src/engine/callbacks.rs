//! Callback registries: how the engine tells the outside world what just
//! happened, without owning a transport of its own.

use std::sync::Arc;

use crate::book::BookUpdateEvent;
use crate::trade::Trade;

/// Invoked once per trade, in execution order, synchronously inside the
/// submitting call's critical section. Keep these cheap — a slow callback
/// holds that symbol's book locked for everyone else.
pub type TradeCallback = Arc<dyn Fn(&Trade) + Send + Sync>;

/// Invoked once per book-state change (level added/changed/removed, or a
/// batch of trades), synchronously inside the triggering call.
pub type BookUpdateCallback = Arc<dyn Fn(&BookUpdateEvent) + Send + Sync>;
