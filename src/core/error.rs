use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while constructing amounts or deriving discount figures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SkontoError {
    /// A percentage or ratio was requested for a zero full amount.
    #[error("full amount is zero, discount percentage is undefined")]
    ZeroFullAmount,

    /// The discounted amount is larger than the full amount, so there is no saving.
    #[error("discounted amount {discounted} exceeds full amount {full}")]
    NegativeSaving { full: Decimal, discounted: Decimal },

    /// Two amounts in different currencies were combined.
    #[error("currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch { expected: String, found: String },

    /// Monetary amounts are never negative.
    #[error("amount must not be negative: {0}")]
    NegativeAmount(Decimal),

    /// A discount percentage outside `0..=100`.
    #[error("discount percentage {0} is outside 0..=100")]
    InvalidPercentage(Decimal),

    /// A derived amount does not fit into a `Decimal`.
    #[error("arithmetic overflow: {0}")]
    Overflow(String),

    /// Malformed amount, date, percentage or payment terms text.
    #[error("parse error: {0}")]
    Parse(String),

    /// A required extraction field is absent.
    #[error("missing field: {0}")]
    MissingField(String),

    /// Invalid rule configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Why a proposed amount was rejected.
///
/// These are returned inside [`ValidationOutcome`](super::ValidationOutcome);
/// the presentation layer maps each one to a localized message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, serde::Serialize, serde::Deserialize)]
pub enum ValidationFailure {
    /// The discounted amount is larger than the invoice's full amount.
    #[error("amount exceeds the full amount")]
    AmountExceedsFullAmount,

    /// The discounted amount is above the absolute currency ceiling.
    #[error("amount exceeds the absolute limit")]
    AmountExceedsAbsoluteLimit,

    /// The full amount is above the absolute currency ceiling.
    #[error("full amount exceeds the absolute limit")]
    FullAmountExceedsAbsoluteLimit,
}

impl ValidationFailure {
    /// Stable identifier for message lookup.
    pub fn code(&self) -> &'static str {
        match self {
            Self::AmountExceedsFullAmount => "amount_exceeds_full_amount",
            Self::AmountExceedsAbsoluteLimit => "amount_exceeds_absolute_limit",
            Self::FullAmountExceedsAbsoluteLimit => "full_amount_exceeds_absolute_limit",
        }
    }
}
