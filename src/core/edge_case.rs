use chrono::NaiveDate;

use super::computation::remaining_days;
use super::types::{EdgeCase, PaymentMethod, SkontoDiscount};

/// Classify why `discount` cannot be applied normally as of `today`.
///
/// Checked in priority order:
///
/// 1. full amount is zero → [`EdgeCase::ZeroFullAmount`]
/// 2. discount period has passed → [`EdgeCase::Expired`]
///
/// Returns `None` for the normal flow.
pub fn classify(discount: &SkontoDiscount, today: NaiveDate) -> Option<EdgeCase> {
    let edge_case = if discount.full_amount.is_zero() {
        Some(EdgeCase::ZeroFullAmount)
    } else if remaining_days(discount.expiry_date, today) < 0 {
        Some(EdgeCase::Expired)
    } else {
        None
    };

    if let Some(edge_case) = edge_case {
        tracing::debug!(
            edge_case = edge_case.code(),
            expiry_date = %discount.expiry_date,
            %today,
            "skonto edge case"
        );
    }
    edge_case
}

/// Like [`classify`], additionally taking the payment method and the last day
/// of the period into account.
///
/// After the base rules:
///
/// 3. cash payment required, days remaining → [`EdgeCase::PayByCashOnly`]
/// 4. cash payment required, ends today → [`EdgeCase::PayByCashToday`]
/// 5. ends today → [`EdgeCase::LastDay`]
pub fn classify_with_payment(
    discount: &SkontoDiscount,
    today: NaiveDate,
    method: PaymentMethod,
) -> Option<EdgeCase> {
    if let Some(edge_case) = classify(discount, today) {
        return Some(edge_case);
    }

    let days = remaining_days(discount.expiry_date, today);
    let edge_case = match (method, days) {
        (PaymentMethod::Cash, 0) => EdgeCase::PayByCashToday,
        (PaymentMethod::Cash, _) => EdgeCase::PayByCashOnly,
        (_, 0) => EdgeCase::LastDay,
        _ => return None,
    };
    tracing::debug!(edge_case = edge_case.code(), ?method, "skonto edge case");
    Some(edge_case)
}
