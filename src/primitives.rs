//! Money & identity primitives: the decimal scalar, order identifiers,
//! sequence numbers, and the small enums shared across the book and engine.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors raised while parsing or validating a decimal scalar, quantity,
/// symbol, or enum tag supplied at the external boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    /// The decimal string could not be parsed at all.
    MalformedDecimal(String),
    /// The value must be strictly positive but was zero or negative.
    NonPositive(String),
    /// The value carries more fractional digits than the configured scale allows.
    ScaleOverflow {
        /// The offending value, as supplied.
        value: String,
        /// The configured maximum number of fractional digits.
        scale: u32,
    },
    /// The value fell outside the configured `[min, max]` bound.
    OutOfRange {
        /// The field name, for error messages.
        field: &'static str,
        /// The offending value, as supplied.
        value: String,
    },
    /// A required field was missing (e.g. price on a Limit order).
    MissingField(&'static str),
    /// The symbol was empty.
    EmptySymbol,
    /// An unrecognized side tag was supplied.
    UnknownSide(String),
    /// An unrecognized order type tag was supplied.
    UnknownOrderType(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MalformedDecimal(s) => write!(f, "malformed decimal: {s:?}"),
            ValidationError::NonPositive(s) => write!(f, "value must be positive: {s:?}"),
            ValidationError::ScaleOverflow { value, scale } => write!(
                f,
                "value {value:?} has more than {scale} fractional digits"
            ),
            ValidationError::OutOfRange { field, value } => {
                write!(f, "{field} value {value:?} is out of the configured range")
            }
            ValidationError::MissingField(field) => write!(f, "missing required field: {field}"),
            ValidationError::EmptySymbol => write!(f, "symbol must not be empty"),
            ValidationError::UnknownSide(s) => write!(f, "unknown side: {s:?}"),
            ValidationError::UnknownOrderType(s) => write!(f, "unknown order type: {s:?}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A fixed-precision, exact decimal scalar used for every price and quantity
/// field in the core. Wraps [`rust_decimal::Decimal`] so monetary paths can
/// never accidentally accept a binary float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Parse a canonical decimal string, rejecting non-numeric input and
    /// values with more than `scale` fractional digits.
    pub fn parse(raw: &str, scale: u32) -> Result<Self, ValidationError> {
        let decimal = Decimal::from_str(raw.trim())
            .map_err(|_| ValidationError::MalformedDecimal(raw.to_string()))?;
        if decimal.scale() > scale {
            return Err(ValidationError::ScaleOverflow {
                value: raw.to_string(),
                scale,
            });
        }
        Ok(Amount(decimal))
    }

    /// Parse a canonical decimal string and require it to be strictly positive.
    pub fn parse_positive(raw: &str, scale: u32) -> Result<Self, ValidationError> {
        let amount = Self::parse(raw, scale)?;
        if amount.0 <= Decimal::ZERO {
            return Err(ValidationError::NonPositive(raw.to_string()));
        }
        Ok(amount)
    }

    /// Wrap an already-validated [`Decimal`].
    pub const fn from_decimal(decimal: Decimal) -> Self {
        Amount(decimal)
    }

    /// The underlying decimal value.
    pub const fn as_decimal(self) -> Decimal {
        self.0
    }

    /// Zero.
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    /// Whether this amount is zero.
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Saturating subtraction, clamped at zero — used when decrementing a
    /// remaining quantity where the caller has already checked `rhs <= self`.
    pub fn saturating_sub(self, rhs: Amount) -> Amount {
        if rhs.0 >= self.0 {
            Amount::ZERO
        } else {
            Amount(self.0 - rhs.0)
        }
    }

    /// The smaller of two amounts.
    pub fn min(self, other: Amount) -> Amount {
        if self <= other { self } else { other }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::ZERO
    }
}

impl std::ops::Add for Amount {
    type Output = Amount;
    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Amount {
    type Output = Amount;
    fn sub(self, rhs: Amount) -> Amount {
        Amount(self.0 - rhs.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Globally unique, opaque order identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(String);

impl OrderId {
    /// Wrap a caller-supplied identifier string.
    pub fn new(raw: impl Into<String>) -> Self {
        OrderId(raw.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mints [`OrderId`] values for orders the caller did not supply one for.
///
/// In production mode each id is a fresh UUID v4, collision-resistant
/// without coordination. In deterministic (test) mode ids are a
/// monotonically increasing counter formatted as `ord-<n>`, so replayed
/// test scenarios produce identical ids run to run.
#[derive(Debug)]
pub enum IdGenerator {
    /// Collision-resistant UUID v4 generation.
    Random,
    /// Deterministic, seeded counter generation for tests.
    Seeded(AtomicU64),
}

impl IdGenerator {
    /// A generator that mints random, collision-resistant ids.
    pub fn random() -> Self {
        IdGenerator::Random
    }

    /// A generator that mints deterministic `ord-<n>` ids starting at `seed`.
    pub fn seeded(seed: u64) -> Self {
        IdGenerator::Seeded(AtomicU64::new(seed))
    }

    /// Mint the next id.
    pub fn next(&self) -> OrderId {
        match self {
            IdGenerator::Random => OrderId::new(Uuid::new_v4().to_string()),
            IdGenerator::Seeded(counter) => {
                let n = counter.fetch_add(1, Ordering::Relaxed);
                OrderId::new(format!("ord-{n}"))
            }
        }
    }
}

/// Monotonically increasing sequence number, assigned per-engine (not
/// per-symbol) so interleaved audit replays across symbols remain
/// unambiguous.
pub type Sequence = u64;

/// Generates [`Sequence`] numbers for the whole engine.
#[derive(Debug, Default)]
pub struct SequenceGenerator(AtomicU64);

impl SequenceGenerator {
    /// A fresh generator starting at 1.
    pub fn new() -> Self {
        SequenceGenerator(AtomicU64::new(1))
    }

    /// Mint the next sequence number.
    pub fn next(&self) -> Sequence {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

/// Milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// The side of an order or a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// A buy (bid) order.
    Buy,
    /// A sell (ask) order.
    Sell,
}

impl Side {
    /// The opposite side, against which an aggressor of this side matches.
    pub fn opposite(self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

impl FromStr for Side {
    type Err = ValidationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            other => Err(ValidationError::UnknownSide(other.to_string())),
        }
    }
}

/// The four order types the core understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Match against the book at whatever price is available; never rests.
    Market,
    /// Match at `price` or better; any residual rests on the book.
    Limit,
    /// Immediate-or-Cancel: match what is available now, discard the rest.
    Ioc,
    /// Fill-or-Kill: match the whole quantity atomically, or nothing.
    Fok,
}

impl OrderType {
    /// Whether this order type requires a limit price at submission.
    pub fn requires_price(self) -> bool {
        !matches!(self, OrderType::Market)
    }

    /// Whether this order type is ever allowed to rest on the book.
    pub fn may_rest(self) -> bool {
        matches!(self, OrderType::Limit)
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderType::Market => "market",
            OrderType::Limit => "limit",
            OrderType::Ioc => "ioc",
            OrderType::Fok => "fok",
        };
        write!(f, "{s}")
    }
}

impl FromStr for OrderType {
    type Err = ValidationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "market" => Ok(OrderType::Market),
            "limit" => Ok(OrderType::Limit),
            "ioc" => Ok(OrderType::Ioc),
            "fok" => Ok(OrderType::Fok),
            other => Err(ValidationError::UnknownOrderType(other.to_string())),
        }
    }
}

/// The lifecycle state of an [`crate::order::Order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Accepted, not yet (fully) matched. Resting orders sit in this state
    /// until their first partial fill.
    Pending,
    /// Accepted and partially matched; the residual is resting on the book.
    PartiallyFilled,
    /// Fully matched. Terminal.
    Filled,
    /// Cancelled, by the submitter or because it could not (fully) match
    /// and its type forbids resting. Terminal.
    Cancelled,
    /// Rejected at validation, before ever touching the book. Terminal.
    Rejected,
}

impl Status {
    /// Whether this status is terminal (the order will never change again).
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Status::Filled | Status::Cancelled | Status::Rejected
        )
    }
}
