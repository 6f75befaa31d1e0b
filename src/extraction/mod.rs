//! Build a [`SkontoDiscount`] from the key-value extraction results of a
//! document-analysis provider.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use skonto::core::SkontoConfig;
//! use skonto::extraction::ExtractionSnapshot;
//! use rust_decimal_macros::dec;
//!
//! let snapshot: ExtractionSnapshot = [
//!     ("amountToPay", "200.00:EUR"),
//!     ("skontoPercentageDiscounted", "3"),
//!     ("skontoDueDate", "2024-06-20"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
//! let discount = snapshot.to_discount(today, &SkontoConfig::default()).unwrap();
//! assert_eq!(discount.discounted_amount.value(), dec!(194.00));
//! ```

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use crate::core::{
    MonetaryAmount, PaymentMethod, SkontoConfig, SkontoDiscount, SkontoError,
    discounted_from_percentage,
};

/// Full (undiscounted) amount, `"<amount>:<CUR>"`.
pub const AMOUNT_TO_PAY: &str = "amountToPay";
/// Discounted amount, `"<amount>:<CUR>"`.
pub const SKONTO_AMOUNT_TO_PAY: &str = "skontoAmountToPay";
/// Discount in percent, plain decimal.
pub const SKONTO_PERCENTAGE: &str = "skontoPercentageDiscounted";
/// Last day of the discount period, `YYYY-MM-DD`.
pub const SKONTO_DUE_DATE: &str = "skontoDueDate";
/// Days left in the discount period, integer.
pub const SKONTO_REMAINING_DAYS: &str = "skontoRemainingDays";
/// Free-text payment method.
pub const SKONTO_PAYMENT_METHOD: &str = "skontoPaymentMethod";

/// Extracted fields of one analysed document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionSnapshot {
    fields: HashMap<String, String>,
}

impl ExtractionSnapshot {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// Raw value of `key`, with blank values treated as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// The invoice's full amount.
    pub fn full_amount(&self) -> Result<MonetaryAmount, SkontoError> {
        let raw = self
            .get(AMOUNT_TO_PAY)
            .ok_or_else(|| SkontoError::MissingField(AMOUNT_TO_PAY.into()))?;
        raw.parse()
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.get(SKONTO_PAYMENT_METHOD)
            .map(PaymentMethod::from_text)
            .unwrap_or_default()
    }

    /// Assemble the discount offer.
    ///
    /// The discounted amount comes from `skontoAmountToPay`, falling back to
    /// the percentage applied to the full amount. The expiry date comes from
    /// `skontoDueDate`, falling back to `today + skontoRemainingDays`.
    pub fn to_discount(
        &self,
        today: NaiveDate,
        config: &SkontoConfig,
    ) -> Result<SkontoDiscount, SkontoError> {
        let full = self.full_amount()?;
        let expiry = self.expiry_date(today)?;

        match self.discounted_amount(&full)? {
            Some(discounted) => SkontoDiscount::new(full, discounted, expiry),
            None => {
                let percentage = self.percentage()?.ok_or_else(|| {
                    SkontoError::MissingField(format!(
                        "{SKONTO_AMOUNT_TO_PAY} or {SKONTO_PERCENTAGE}"
                    ))
                })?;
                let discounted =
                    discounted_from_percentage(&full, percentage, config.rounding_scale)?;
                SkontoDiscount::with_percentage(full, discounted, expiry, percentage)
            }
        }
    }

    fn discounted_amount(
        &self,
        full: &MonetaryAmount,
    ) -> Result<Option<MonetaryAmount>, SkontoError> {
        let Some(raw) = self.get(SKONTO_AMOUNT_TO_PAY) else {
            return Ok(None);
        };
        match raw.parse::<MonetaryAmount>() {
            Ok(amount) => {
                full.ensure_same_currency(&amount)?;
                Ok(Some(amount))
            }
            Err(err) if self.get(SKONTO_PERCENTAGE).is_some() => {
                tracing::warn!(
                    field = SKONTO_AMOUNT_TO_PAY,
                    value = raw,
                    error = %err,
                    "unparseable discounted amount, deriving it from the percentage"
                );
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn percentage(&self) -> Result<Option<Decimal>, SkontoError> {
        let Some(raw) = self.get(SKONTO_PERCENTAGE) else {
            return Ok(None);
        };
        let raw = raw.trim_end_matches('%').trim();
        Decimal::from_str(raw)
            .map(Some)
            .map_err(|e| SkontoError::Parse(format!("invalid percentage '{raw}': {e}")))
    }

    fn expiry_date(&self, today: NaiveDate) -> Result<NaiveDate, SkontoError> {
        if let Some(raw) = self.get(SKONTO_DUE_DATE) {
            match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => return Ok(date),
                Err(err) if self.get(SKONTO_REMAINING_DAYS).is_some() => {
                    tracing::warn!(
                        field = SKONTO_DUE_DATE,
                        value = raw,
                        error = %err,
                        "unparseable due date, falling back to remaining days"
                    );
                }
                Err(err) => {
                    return Err(SkontoError::Parse(format!("invalid due date '{raw}': {err}")));
                }
            }
        }

        let raw = self.get(SKONTO_REMAINING_DAYS).ok_or_else(|| {
            SkontoError::MissingField(format!("{SKONTO_DUE_DATE} or {SKONTO_REMAINING_DAYS}"))
        })?;
        let days: i64 = raw
            .parse()
            .map_err(|e| SkontoError::Parse(format!("invalid remaining days '{raw}': {e}")))?;
        let shifted = if days >= 0 {
            today.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            today.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        shifted.ok_or_else(|| SkontoError::Parse(format!("remaining days {days} out of range")))
    }
}

impl From<HashMap<String, String>> for ExtractionSnapshot {
    fn from(fields: HashMap<String, String>) -> Self {
        Self::new(fields)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ExtractionSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
