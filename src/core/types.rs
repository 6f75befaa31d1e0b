use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::computation;
use super::currencies;
use super::error::{SkontoError, ValidationFailure};

/// A non-negative decimal quantity in an ISO 4217 currency.
///
/// The text form is the one used by extraction results: `"<amount>:<CUR>"`,
/// e.g. `"1234.56:EUR"`. [`Display`](fmt::Display) rounds to the currency's
/// minor units; serialization keeps the exact value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonetaryAmount {
    value: Decimal,
    currency: String,
}

impl MonetaryAmount {
    /// Create an amount, rejecting negative values and unknown currency codes.
    pub fn new(value: Decimal, currency: impl Into<String>) -> Result<Self, SkontoError> {
        let currency = currency.into();
        if value < Decimal::ZERO {
            return Err(SkontoError::NegativeAmount(value));
        }
        if !currencies::is_known_currency_code(&currency) {
            return Err(SkontoError::Parse(format!(
                "unknown currency code '{currency}'"
            )));
        }
        Ok(Self { value, currency })
    }

    /// Shorthand for an amount in euro.
    pub fn eur(value: Decimal) -> Result<Self, SkontoError> {
        Self::new(value, "EUR")
    }

    /// Zero in the given currency.
    pub fn zero(currency: impl Into<String>) -> Result<Self, SkontoError> {
        Self::new(Decimal::ZERO, currency)
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Fail with [`SkontoError::CurrencyMismatch`] unless both amounts share a currency.
    pub fn ensure_same_currency(&self, other: &MonetaryAmount) -> Result<(), SkontoError> {
        if self.currency != other.currency {
            return Err(SkontoError::CurrencyMismatch {
                expected: self.currency.clone(),
                found: other.currency.clone(),
            });
        }
        Ok(())
    }

    /// `self - other`, failing on currency mismatch or a negative result.
    pub fn checked_sub(&self, other: &MonetaryAmount) -> Result<MonetaryAmount, SkontoError> {
        self.ensure_same_currency(other)?;
        Self::new(self.value - other.value, self.currency.clone())
    }

    /// Same currency, different value.
    pub fn with_value(&self, value: Decimal) -> Result<MonetaryAmount, SkontoError> {
        Self::new(value, self.currency.clone())
    }

    /// Round half-up to `scale` decimal places.
    pub fn rounded(&self, scale: u32) -> MonetaryAmount {
        Self {
            value: self
                .value
                .round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero),
            currency: self.currency.clone(),
        }
    }
}

impl fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = currencies::minor_units(&self.currency).unwrap_or(2);
        let mut value = self
            .value
            .round_dp_with_strategy(units, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(units);
        write!(f, "{}:{}", value, self.currency)
    }
}

impl FromStr for MonetaryAmount {
    type Err = SkontoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, currency) = s.trim().split_once(':').ok_or_else(|| {
            SkontoError::Parse(format!("expected '<amount>:<currency>', got '{s}'"))
        })?;
        let value = Decimal::from_str(value.trim())
            .map_err(|e| SkontoError::Parse(format!("invalid amount '{value}': {e}")))?;
        Self::new(value, currency.trim())
    }
}

impl TryFrom<String> for MonetaryAmount {
    type Error = SkontoError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<MonetaryAmount> for String {
    fn from(amount: MonetaryAmount) -> Self {
        format!("{}:{}", amount.value, amount.currency)
    }
}

/// An early-payment cash discount offered on an invoice.
///
/// Deserialization goes through [`SkontoDiscount::with_percentage`], so a
/// currency mismatch or a percentage outside `0..=100` is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSkontoDiscount")]
pub struct SkontoDiscount {
    /// Undiscounted invoice total.
    pub full_amount: MonetaryAmount,
    /// Amount payable if paid on or before `expiry_date`.
    pub discounted_amount: MonetaryAmount,
    /// Last day the discount applies.
    pub expiry_date: NaiveDate,
    /// Discount in percent of the full amount (0–100).
    pub discount_percentage: Decimal,
}

#[derive(Deserialize)]
struct RawSkontoDiscount {
    full_amount: MonetaryAmount,
    discounted_amount: MonetaryAmount,
    expiry_date: NaiveDate,
    discount_percentage: Decimal,
}

impl TryFrom<RawSkontoDiscount> for SkontoDiscount {
    type Error = SkontoError;

    fn try_from(raw: RawSkontoDiscount) -> Result<Self, Self::Error> {
        Self::with_percentage(
            raw.full_amount,
            raw.discounted_amount,
            raw.expiry_date,
            raw.discount_percentage,
        )
    }
}

impl SkontoDiscount {
    /// Build a discount, deriving the percentage from the two amounts.
    ///
    /// A discounted amount above the full amount, or a zero full amount, is
    /// accepted here and reported by the validators and the classifier; the
    /// stored percentage is zero in those cases.
    pub fn new(
        full_amount: MonetaryAmount,
        discounted_amount: MonetaryAmount,
        expiry_date: NaiveDate,
    ) -> Result<Self, SkontoError> {
        full_amount.ensure_same_currency(&discounted_amount)?;
        let discount_percentage =
            computation::discount_percentage(&full_amount, &discounted_amount)
                .unwrap_or(Decimal::ZERO);
        Ok(Self {
            full_amount,
            discounted_amount,
            expiry_date,
            discount_percentage,
        })
    }

    /// Build a discount with a percentage supplied by the caller.
    pub fn with_percentage(
        full_amount: MonetaryAmount,
        discounted_amount: MonetaryAmount,
        expiry_date: NaiveDate,
        discount_percentage: Decimal,
    ) -> Result<Self, SkontoError> {
        full_amount.ensure_same_currency(&discounted_amount)?;
        if discount_percentage < Decimal::ZERO || discount_percentage > Decimal::ONE_HUNDRED {
            return Err(SkontoError::InvalidPercentage(discount_percentage));
        }
        Ok(Self {
            full_amount,
            discounted_amount,
            expiry_date,
            discount_percentage,
        })
    }

    pub fn currency(&self) -> &str {
        self.full_amount.currency()
    }
}

/// Result of validating an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationOutcome {
    Valid,
    Invalid(ValidationFailure),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn failure(&self) -> Option<ValidationFailure> {
        match self {
            Self::Valid => None,
            Self::Invalid(f) => Some(*f),
        }
    }

    /// Convert to a `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<(), ValidationFailure> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(f) => Err(f),
        }
    }
}

impl From<ValidationFailure> for ValidationOutcome {
    fn from(failure: ValidationFailure) -> Self {
        Self::Invalid(failure)
    }
}

/// Reason the discount offer cannot be applied normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeCase {
    /// The invoice's full amount is zero.
    ZeroFullAmount,
    /// The discount period has passed.
    Expired,
    /// Discount is only granted for cash payment.
    PayByCashOnly,
    /// Discount is only granted for cash payment and ends today.
    PayByCashToday,
    /// Today is the last day of the discount period.
    LastDay,
}

impl EdgeCase {
    /// Stable identifier for message lookup.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ZeroFullAmount => "zero_full_amount",
            Self::Expired => "expired",
            Self::PayByCashOnly => "pay_by_cash_only",
            Self::PayByCashToday => "pay_by_cash_today",
            Self::LastDay => "last_day",
        }
    }

    /// Whether the discount can still be taken in this situation.
    pub fn allows_discount(&self) -> bool {
        !matches!(self, Self::ZeroFullAmount | Self::Expired)
    }
}

/// Which amount is preselected for payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    SelectedDiscount,
    SelectedFullAmount,
}

/// Payment method named by the discount terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    Unspecified,
    Cash,
    Transfer,
    Card,
    Other,
}

impl PaymentMethod {
    /// Interpret the free-text payment method of an extraction.
    pub fn from_text(text: &str) -> Self {
        let normalized = text.trim().to_lowercase();
        match normalized.as_str() {
            "" => Self::Unspecified,
            "cash" | "bar" | "barzahlung" => Self::Cash,
            "transfer" | "bank transfer" | "sepa" | "überweisung" | "ueberweisung" => {
                Self::Transfer
            }
            "card" | "karte" | "kreditkarte" | "ec-karte" | "girocard" => Self::Card,
            _ => Self::Other,
        }
    }
}
