use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::SkontoError;

/// Default ceiling for a proposed discounted amount.
pub const AMOUNT_LIMIT: Decimal = dec!(99_999);

/// Default ceiling for an invoice's full amount.
pub const FULL_AMOUNT_LIMIT: Decimal = dec!(99_999.99);

/// Decimal places for derived money figures.
pub const DEFAULT_ROUNDING_SCALE: u32 = 2;

/// Which amount rules are enforced, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountRules {
    /// Reject amounts larger than the invoice's full amount.
    pub check_full_amount: bool,
    /// Reject amounts above the absolute limit.
    pub check_absolute_limit: bool,
}

impl AmountRules {
    /// Only compare against the full amount.
    pub const FULL_AMOUNT_ONLY: Self = Self {
        check_full_amount: true,
        check_absolute_limit: false,
    };

    /// Full amount first, then the absolute limit.
    pub const STRICT: Self = Self {
        check_full_amount: true,
        check_absolute_limit: true,
    };
}

impl Default for AmountRules {
    fn default() -> Self {
        Self::STRICT
    }
}

/// Rule configuration shared by the validators and the discount arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkontoConfig {
    pub amount_rules: AmountRules,
    /// Ceiling for a proposed discounted amount.
    pub amount_limit: Decimal,
    /// Ceiling for the invoice's full amount.
    pub full_amount_limit: Decimal,
    /// Decimal places for derived amounts, rounded half-up.
    pub rounding_scale: u32,
}

impl Default for SkontoConfig {
    fn default() -> Self {
        Self {
            amount_rules: AmountRules::default(),
            amount_limit: AMOUNT_LIMIT,
            full_amount_limit: FULL_AMOUNT_LIMIT,
            rounding_scale: DEFAULT_ROUNDING_SCALE,
        }
    }
}

impl SkontoConfig {
    /// Check limits and scale, e.g. after deserializing a config file.
    pub fn validate(&self) -> Result<(), SkontoError> {
        if self.amount_limit < Decimal::ZERO {
            return Err(SkontoError::Config(format!(
                "amount limit must not be negative, got {}",
                self.amount_limit
            )));
        }
        if self.full_amount_limit < Decimal::ZERO {
            return Err(SkontoError::Config(format!(
                "full amount limit must not be negative, got {}",
                self.full_amount_limit
            )));
        }
        if self.rounding_scale > 10 {
            return Err(SkontoError::Config(format!(
                "rounding scale {} is larger than 10",
                self.rounding_scale
            )));
        }
        Ok(())
    }
}

/// Builder for [`SkontoConfig`].
///
/// # Example
///
/// ```
/// use skonto::core::{AmountRules, SkontoConfigBuilder};
/// use rust_decimal_macros::dec;
///
/// let config = SkontoConfigBuilder::new()
///     .amount_rules(AmountRules::FULL_AMOUNT_ONLY)
///     .full_amount_limit(dec!(50_000))
///     .build()
///     .unwrap();
/// assert!(!config.amount_rules.check_absolute_limit);
/// ```
#[derive(Debug, Default)]
pub struct SkontoConfigBuilder {
    config: SkontoConfig,
}

impl SkontoConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount_rules(mut self, rules: AmountRules) -> Self {
        self.config.amount_rules = rules;
        self
    }

    pub fn amount_limit(mut self, limit: Decimal) -> Self {
        self.config.amount_limit = limit;
        self
    }

    pub fn full_amount_limit(mut self, limit: Decimal) -> Self {
        self.config.full_amount_limit = limit;
        self
    }

    pub fn rounding_scale(mut self, scale: u32) -> Self {
        self.config.rounding_scale = scale;
        self
    }

    /// Build the configuration, rejecting negative limits.
    pub fn build(self) -> Result<SkontoConfig, SkontoError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
