//! # skonto
//!
//! Rules for early-payment cash discounts ("Skonto") on scanned invoices:
//! amount validation, discount arithmetic and edge-case classification,
//! plus helpers to build a discount from extraction results or XRechnung
//! payment terms.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Nothing in this crate reads the clock or produces user-facing text: the
//! caller passes "today" and maps returned tags to localized messages.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use skonto::core::*;
//! use rust_decimal_macros::dec;
//!
//! let discount = SkontoDiscount::new(
//!     MonetaryAmount::eur(dec!(1000)).unwrap(),
//!     MonetaryAmount::eur(dec!(980)).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 6, 29).unwrap(),
//! )
//! .unwrap();
//!
//! let validator = AmountValidator::default();
//! assert!(validator.validate(&discount.discounted_amount, &discount.full_amount).is_valid());
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! let summary = summarize(&discount, today);
//! assert_eq!(summary.percentage, Some(dec!(2)));
//! assert_eq!(summary.remaining_days, 14);
//! assert_eq!(summary.edge_case, None);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Types, validators, discount arithmetic, edge cases, config |
//! | `extraction` | Build discounts from key-value extraction results |
//! | `terms` | XRechnung `#SKONTO#` payment terms parsing |
//! | `snapshot` | Versioned state store with latest-value subscriptions |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "extraction")]
pub mod extraction;

#[cfg(feature = "terms")]
pub mod terms;

#[cfg(feature = "snapshot")]
pub mod snapshot;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
