//! Discount arithmetic: percentage, saving, remaining days and the default
//! amount selection.
//!
//! All figures are exact decimals. Functions that derive a new amount round
//! half-up to a caller-supplied scale; the percentage is left unrounded so the
//! presentation layer can choose its own precision.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::edge_case;
use super::error::SkontoError;
use super::types::{EdgeCase, MonetaryAmount, Selection, SkontoDiscount};

/// `(full - discounted) / full * 100`.
///
/// Fails with [`SkontoError::ZeroFullAmount`] for a zero full amount and with
/// [`SkontoError::NegativeSaving`] when the discounted amount is larger.
pub fn discount_percentage(
    full: &MonetaryAmount,
    discounted: &MonetaryAmount,
) -> Result<Decimal, SkontoError> {
    full.ensure_same_currency(discounted)?;
    if full.is_zero() {
        return Err(SkontoError::ZeroFullAmount);
    }
    if discounted.value() > full.value() {
        return Err(SkontoError::NegativeSaving {
            full: full.value(),
            discounted: discounted.value(),
        });
    }
    // The ratio is at most 1, so scaling it by 100 stays in range.
    let percentage = (full.value() - discounted.value())
        .checked_div(full.value())
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| {
            SkontoError::Overflow(format!("discount percentage of {}", full.value()))
        })?;
    tracing::trace!(%percentage, "computed discount percentage");
    Ok(percentage)
}

/// `full - discounted`, never negative.
pub fn saved_amount(
    full: &MonetaryAmount,
    discounted: &MonetaryAmount,
) -> Result<MonetaryAmount, SkontoError> {
    full.ensure_same_currency(discounted)?;
    if discounted.value() > full.value() {
        return Err(SkontoError::NegativeSaving {
            full: full.value(),
            discounted: discounted.value(),
        });
    }
    full.checked_sub(discounted)
}

/// Whole calendar days from `today` until `expiry_date`; negative once expired.
pub fn remaining_days(expiry_date: NaiveDate, today: NaiveDate) -> i64 {
    expiry_date.signed_duration_since(today).num_days()
}

/// The discount is preselected while the period is still running.
pub fn default_selection(remaining_days: i64) -> Selection {
    if remaining_days >= 0 {
        Selection::SelectedDiscount
    } else {
        Selection::SelectedFullAmount
    }
}

/// Discounted amount for `full` at `percentage`, rounded half-up to `scale`.
///
/// Used when the full amount is edited and the percentage is kept.
pub fn discounted_from_percentage(
    full: &MonetaryAmount,
    percentage: Decimal,
    scale: u32,
) -> Result<MonetaryAmount, SkontoError> {
    if percentage < Decimal::ZERO || percentage > Decimal::ONE_HUNDRED {
        return Err(SkontoError::InvalidPercentage(percentage));
    }
    let value = full
        .value()
        .checked_mul(Decimal::ONE_HUNDRED - percentage)
        .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
        .ok_or_else(|| {
            SkontoError::Overflow(format!("{percentage}% discount on {}", full.value()))
        })?;
    full.with_value(value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero))
}

/// Amount to pay for the given selection.
pub fn payable_amount(discount: &SkontoDiscount, selection: Selection) -> &MonetaryAmount {
    match selection {
        Selection::SelectedDiscount => &discount.discounted_amount,
        Selection::SelectedFullAmount => &discount.full_amount,
    }
}

/// Everything the review screen shows for one discount, computed in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountSummary {
    /// `None` when the full amount is zero or below the discounted amount.
    pub percentage: Option<Decimal>,
    /// `None` when the discounted amount is above the full amount.
    pub saved_amount: Option<MonetaryAmount>,
    pub remaining_days: i64,
    pub default_selection: Selection,
    /// Amount for `default_selection`.
    pub payable_amount: MonetaryAmount,
    pub edge_case: Option<EdgeCase>,
}

/// Compute a [`DiscountSummary`] for `discount` as of `today`.
pub fn summarize(discount: &SkontoDiscount, today: NaiveDate) -> DiscountSummary {
    let days = remaining_days(discount.expiry_date, today);
    let selection = default_selection(days);
    DiscountSummary {
        percentage: discount_percentage(&discount.full_amount, &discount.discounted_amount).ok(),
        saved_amount: saved_amount(&discount.full_amount, &discount.discounted_amount).ok(),
        remaining_days: days,
        default_selection: selection,
        payable_amount: payable_amount(discount, selection).clone(),
        edge_case: edge_case::classify(discount, today),
    }
}
