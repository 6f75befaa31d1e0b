use rust_decimal::Decimal;

use super::config::{AMOUNT_LIMIT, AmountRules, FULL_AMOUNT_LIMIT, SkontoConfig};
use super::error::ValidationFailure;
use super::types::{MonetaryAmount, ValidationOutcome};

/// Validates a proposed discounted amount against the invoice's full amount
/// and an absolute ceiling.
///
/// Enabled rules are checked in order and the first failing rule wins:
///
/// 1. amount > full amount → `AmountExceedsFullAmount`
/// 2. amount > limit → `AmountExceedsAbsoluteLimit`
///
/// Both amounts are expected in the invoice currency; currencies are not
/// compared here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountValidator {
    rules: AmountRules,
    limit: Decimal,
}

impl AmountValidator {
    pub fn new(rules: AmountRules, limit: Decimal) -> Self {
        Self { rules, limit }
    }

    pub fn from_config(config: &SkontoConfig) -> Self {
        Self::new(config.amount_rules, config.amount_limit)
    }

    pub fn rules(&self) -> AmountRules {
        self.rules
    }

    pub fn validate(
        &self,
        new_amount: &MonetaryAmount,
        full_amount: &MonetaryAmount,
    ) -> ValidationOutcome {
        let exceeds_full = new_amount.value() > full_amount.value();
        let outcome: ValidationOutcome = if self.rules.check_full_amount && exceeds_full {
            ValidationFailure::AmountExceedsFullAmount.into()
        } else if self.rules.check_absolute_limit && new_amount.value() > self.limit {
            ValidationFailure::AmountExceedsAbsoluteLimit.into()
        } else {
            ValidationOutcome::Valid
        };

        if let Some(failure) = outcome.failure() {
            tracing::debug!(
                amount = %new_amount.value(),
                full_amount = %full_amount.value(),
                limit = %self.limit,
                rule = failure.code(),
                "discounted amount rejected"
            );
        }
        outcome
    }
}

impl Default for AmountValidator {
    fn default() -> Self {
        Self::new(AmountRules::default(), AMOUNT_LIMIT)
    }
}

/// Validates an invoice's full amount against an absolute ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullAmountValidator {
    limit: Decimal,
}

impl FullAmountValidator {
    pub fn new(limit: Decimal) -> Self {
        Self { limit }
    }

    pub fn from_config(config: &SkontoConfig) -> Self {
        Self::new(config.full_amount_limit)
    }

    pub fn validate(&self, full_amount: &MonetaryAmount) -> ValidationOutcome {
        if full_amount.value() > self.limit {
            tracing::debug!(
                full_amount = %full_amount.value(),
                limit = %self.limit,
                rule = ValidationFailure::FullAmountExceedsAbsoluteLimit.code(),
                "full amount rejected"
            );
            return ValidationFailure::FullAmountExceedsAbsoluteLimit.into();
        }
        ValidationOutcome::Valid
    }
}

impl Default for FullAmountValidator {
    fn default() -> Self {
        Self::new(FULL_AMOUNT_LIMIT)
    }
}
