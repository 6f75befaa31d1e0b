//! XRechnung Skonto payment terms (BT-20, BR-DE-18).
//!
//! The German CIUS encodes cash discounts inside the payment-terms free text,
//! one entry per line:
//!
//! ```text
//! #SKONTO#TAGE=14#PROZENT=2.00#
//! #SKONTO#TAGE=7#PROZENT=3.00#BASISBETRAG=1000.00#
//! ```
//!
//! Lines that do not start with `#SKONTO#` are ordinary free text and are
//! skipped.
//!
//! # Example
//!
//! ```
//! use skonto::terms::{SkontoTerm, parse_skonto_terms};
//! use rust_decimal_macros::dec;
//!
//! let terms = parse_skonto_terms("Zahlbar in 30 Tagen\n#SKONTO#TAGE=14#PROZENT=2.00#\n").unwrap();
//! assert_eq!(terms, vec![SkontoTerm { days: 14, percent: dec!(2.00), base_amount: None }]);
//! ```

use std::str::FromStr;

use chrono::{Days, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::core::{MonetaryAmount, SkontoDiscount, SkontoError};

const PREFIX: &str = "#SKONTO#";

/// One Skonto entry of the payment terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkontoTerm {
    /// Discount period in days from the invoice issue date.
    pub days: u32,
    /// Discount in percent.
    pub percent: Decimal,
    /// Amount the percentage applies to, if not the full amount.
    pub base_amount: Option<Decimal>,
}

impl SkontoTerm {
    /// The discount offer this term grants on an invoice of `full` issued on
    /// `issue_date`, with the saving rounded half-up to `scale`.
    pub fn to_discount(
        &self,
        full: &MonetaryAmount,
        issue_date: NaiveDate,
        scale: u32,
    ) -> Result<SkontoDiscount, SkontoError> {
        let base = self.base_amount.unwrap_or(full.value());
        let saving = base
            .checked_mul(self.percent)
            .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
            .ok_or_else(|| {
                SkontoError::Overflow(format!("PROZENT={} of {base}", self.percent))
            })?
            .round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
        let discounted = full.with_value(full.value() - saving)?;
        let expiry = issue_date
            .checked_add_days(Days::new(u64::from(self.days)))
            .ok_or_else(|| SkontoError::Parse(format!("TAGE={} out of range", self.days)))?;
        SkontoDiscount::new(full.clone(), discounted, expiry)
    }
}

impl FromStr for SkontoTerm {
    type Err = SkontoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s.trim())
    }
}

/// Parse every `#SKONTO#` line of `text`.
pub fn parse_skonto_terms(text: &str) -> Result<Vec<SkontoTerm>, SkontoError> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.starts_with(PREFIX))
        .map(parse_line)
        .collect()
}

/// Write `term` in canonical form, without a trailing line break.
pub fn format_skonto_term(term: &SkontoTerm) -> String {
    let mut out = format!("{PREFIX}TAGE={}#PROZENT={}#", term.days, two_places(term.percent));
    if let Some(base) = term.base_amount {
        out.push_str(&format!("BASISBETRAG={}#", two_places(base)));
    }
    out
}

fn two_places(value: Decimal) -> Decimal {
    let mut v = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    v.rescale(2);
    v
}

fn parse_line(line: &str) -> Result<SkontoTerm, SkontoError> {
    let body = line
        .strip_prefix(PREFIX)
        .ok_or_else(|| SkontoError::Parse(format!("'{line}' does not start with {PREFIX}")))?;
    let body = body
        .strip_suffix('#')
        .ok_or_else(|| SkontoError::Parse(format!("'{line}' must end with '#'")))?;

    let mut days = None;
    let mut percent = None;
    let mut base_amount = None;

    for part in body.split('#') {
        let (key, value) = part
            .split_once('=')
            .ok_or_else(|| SkontoError::Parse(format!("'{part}' is not KEY=VALUE")))?;
        match key {
            "TAGE" => {
                if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(SkontoError::Parse(format!("TAGE '{value}' is not a day count")));
                }
                days = Some(
                    value
                        .parse::<u32>()
                        .map_err(|e| SkontoError::Parse(format!("TAGE '{value}': {e}")))?,
                );
            }
            "PROZENT" => {
                let p = parse_two_places("PROZENT", value)?;
                if p > Decimal::ONE_HUNDRED {
                    return Err(SkontoError::InvalidPercentage(p));
                }
                percent = Some(p);
            }
            "BASISBETRAG" => base_amount = Some(parse_two_places("BASISBETRAG", value)?),
            other => {
                return Err(SkontoError::Parse(format!("unknown Skonto key '{other}'")));
            }
        }
    }

    Ok(SkontoTerm {
        days: days.ok_or_else(|| SkontoError::MissingField("TAGE".into()))?,
        percent: percent.ok_or_else(|| SkontoError::MissingField("PROZENT".into()))?,
        base_amount,
    })
}

/// Unsigned decimal with a dot and exactly two fraction digits.
fn parse_two_places(key: &str, value: &str) -> Result<Decimal, SkontoError> {
    let well_formed = value.split_once('.').is_some_and(|(int, frac)| {
        !int.is_empty()
            && int.bytes().all(|b| b.is_ascii_digit())
            && frac.len() == 2
            && frac.bytes().all(|b| b.is_ascii_digit())
    });
    if !well_formed {
        return Err(SkontoError::Parse(format!(
            "{key} '{value}' must have two decimal places"
        )));
    }
    Decimal::from_str(value).map_err(|e| SkontoError::Parse(format!("{key} '{value}': {e}")))
}
