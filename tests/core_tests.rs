use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use skonto::core::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn eur(value: Decimal) -> MonetaryAmount {
    MonetaryAmount::eur(value).unwrap()
}

fn discount(full: Decimal, discounted: Decimal, expiry: NaiveDate) -> SkontoDiscount {
    SkontoDiscount::new(eur(full), eur(discounted), expiry).unwrap()
}

// --- Amount validation ---

#[test]
fn strict_rules_check_full_amount_then_limit() {
    let v = AmountValidator::from_config(&SkontoConfig::default());
    assert_eq!(v.rules(), AmountRules::STRICT);

    assert!(v.validate(&eur(dec!(980)), &eur(dec!(1000))).is_valid());
    assert_eq!(
        v.validate(&eur(dec!(1000.01)), &eur(dec!(1000))).failure(),
        Some(ValidationFailure::AmountExceedsFullAmount)
    );
    assert_eq!(
        v.validate(&eur(dec!(99_999.50)), &eur(dec!(120_000))).failure(),
        Some(ValidationFailure::AmountExceedsAbsoluteLimit)
    );
}

#[test]
fn amount_at_limit_is_valid() {
    let v = AmountValidator::default();
    assert!(v.validate(&eur(dec!(99_999)), &eur(dec!(99_999))).is_valid());
}

#[test]
fn configured_rule_sets_diverge_only_on_limit() {
    let strict = AmountValidator::from_config(&SkontoConfig::default());
    let lenient = AmountValidator::from_config(
        &SkontoConfigBuilder::new()
            .amount_rules(AmountRules::FULL_AMOUNT_ONLY)
            .build()
            .unwrap(),
    );

    let new_amount = eur(dec!(150_000));
    let full = eur(dec!(200_000));
    assert_eq!(
        strict.validate(&new_amount, &full),
        ValidationOutcome::Invalid(ValidationFailure::AmountExceedsAbsoluteLimit)
    );
    assert_eq!(lenient.validate(&new_amount, &full), ValidationOutcome::Valid);

    let too_high = eur(dec!(250_000));
    assert_eq!(
        strict.validate(&too_high, &full),
        lenient.validate(&too_high, &full)
    );
}

#[test]
fn no_rules_always_valid() {
    let v = AmountValidator::new(
        AmountRules {
            check_full_amount: false,
            check_absolute_limit: false,
        },
        dec!(10),
    );
    assert!(v.validate(&eur(dec!(500)), &eur(dec!(1))).is_valid());
}

#[test]
fn custom_limit_from_config() {
    let config = SkontoConfigBuilder::new()
        .amount_limit(dec!(5_000))
        .full_amount_limit(dec!(5_000))
        .build()
        .unwrap();
    let amount = AmountValidator::from_config(&config);
    let full = FullAmountValidator::from_config(&config);

    assert_eq!(
        amount.validate(&eur(dec!(5_000.01)), &eur(dec!(6_000))).failure(),
        Some(ValidationFailure::AmountExceedsAbsoluteLimit)
    );
    assert_eq!(
        full.validate(&eur(dec!(6_000))).failure(),
        Some(ValidationFailure::FullAmountExceedsAbsoluteLimit)
    );
}

#[test]
fn full_amount_validator_limits() {
    let v = FullAmountValidator::default();
    assert_eq!(
        v.validate(&eur(dec!(100_000.00))),
        ValidationOutcome::Invalid(ValidationFailure::FullAmountExceedsAbsoluteLimit)
    );
    assert_eq!(v.validate(&eur(dec!(99_999.98))), ValidationOutcome::Valid);
    assert_eq!(v.validate(&eur(dec!(0))), ValidationOutcome::Valid);
}

#[test]
fn outcome_debug_snapshot() {
    let v = AmountValidator::default();
    insta::assert_debug_snapshot!(
        v.validate(&eur(dec!(2)), &eur(dec!(1))),
        @r"
    Invalid(
        AmountExceedsFullAmount,
    )
    "
    );
}

#[test]
fn failure_into_result_with_question_mark() {
    fn check(
        v: &AmountValidator,
        amount: &MonetaryAmount,
        full: &MonetaryAmount,
    ) -> Result<(), ValidationFailure> {
        v.validate(amount, full).into_result()?;
        Ok(())
    }
    let v = AmountValidator::default();
    assert_eq!(
        check(&v, &eur(dec!(2)), &eur(dec!(1))),
        Err(ValidationFailure::AmountExceedsFullAmount)
    );
    assert_eq!(
        ValidationFailure::AmountExceedsFullAmount.to_string(),
        "amount exceeds the full amount"
    );
}

// --- Discount computation ---

#[test]
fn percentage_ten() {
    assert_eq!(
        discount_percentage(&eur(dec!(100)), &eur(dec!(90))).unwrap(),
        dec!(10)
    );
}

#[test]
fn percentage_zero_full_amount() {
    assert_eq!(
        discount_percentage(&eur(dec!(0)), &eur(dec!(5))),
        Err(SkontoError::ZeroFullAmount)
    );
}

#[test]
fn percentage_currency_mismatch() {
    let chf = MonetaryAmount::new(dec!(90), "CHF").unwrap();
    assert!(matches!(
        discount_percentage(&eur(dec!(100)), &chf),
        Err(SkontoError::CurrencyMismatch { .. })
    ));
}

#[test]
fn saved_amount_is_exact() {
    assert_eq!(
        saved_amount(&eur(dec!(1234.56)), &eur(dec!(1209.87))).unwrap(),
        eur(dec!(24.69))
    );
}

#[test]
fn remaining_days_examples() {
    assert_eq!(remaining_days(date(2024, 1, 10), date(2024, 1, 5)), 5);
    assert_eq!(remaining_days(date(2024, 1, 1), date(2024, 1, 5)), -4);
    assert_eq!(remaining_days(date(2025, 1, 1), date(2024, 12, 31)), 1);
}

#[test]
fn default_selection_follows_remaining_days() {
    assert_eq!(default_selection(5), Selection::SelectedDiscount);
    assert_eq!(default_selection(0), Selection::SelectedDiscount);
    assert_eq!(default_selection(-4), Selection::SelectedFullAmount);
}

#[test]
fn payable_amount_by_selection() {
    let d = discount(dec!(500), dec!(485), date(2024, 6, 30));
    assert_eq!(
        payable_amount(&d, Selection::SelectedDiscount),
        &eur(dec!(485))
    );
    assert_eq!(
        payable_amount(&d, Selection::SelectedFullAmount),
        &eur(dec!(500))
    );
}

#[test]
fn recompute_discount_after_full_amount_edit() {
    let d = discount(dec!(500), dec!(485), date(2024, 6, 30));
    let edited_full = eur(dec!(620));
    let discounted =
        discounted_from_percentage(&edited_full, d.discount_percentage, 2).unwrap();
    assert_eq!(discounted, eur(dec!(601.40)));
}

#[test]
fn summary_for_running_discount() {
    let d = discount(dec!(1000), dec!(970), date(2024, 6, 30));
    let s = summarize(&d, date(2024, 6, 20));
    assert_eq!(s.percentage, Some(dec!(3)));
    assert_eq!(s.saved_amount, Some(eur(dec!(30))));
    assert_eq!(s.remaining_days, 10);
    assert_eq!(s.default_selection, Selection::SelectedDiscount);
    assert_eq!(s.payable_amount, eur(dec!(970)));
    assert_eq!(s.edge_case, None);
}

#[test]
fn summary_for_expired_discount() {
    let d = discount(dec!(1000), dec!(970), date(2024, 6, 30));
    let s = summarize(&d, date(2024, 7, 2));
    assert_eq!(s.remaining_days, -2);
    assert_eq!(s.default_selection, Selection::SelectedFullAmount);
    assert_eq!(s.payable_amount, eur(dec!(1000)));
    assert_eq!(s.edge_case, Some(EdgeCase::Expired));
}

#[test]
fn summary_with_discount_above_full_amount() {
    let d = discount(dec!(100), dec!(120), date(2024, 6, 30));
    assert_eq!(d.discount_percentage, Decimal::ZERO);
    let s = summarize(&d, date(2024, 6, 1));
    assert_eq!(s.percentage, None);
    assert_eq!(s.saved_amount, None);
}

// --- Monetary amounts ---

#[test]
fn amount_parse_and_display() {
    let a: MonetaryAmount = " 99.9:EUR ".parse().unwrap();
    assert_eq!(a.to_string(), "99.90:EUR");
    assert!("12.00:XYZ".parse::<MonetaryAmount>().is_err());
    assert!("abc:EUR".parse::<MonetaryAmount>().is_err());
}

#[test]
fn amount_serde_keeps_exact_value() {
    let a = eur(dec!(10.005));
    let json = serde_json::to_string(&a).unwrap();
    assert_eq!(json, "\"10.005:EUR\"");
    let back: MonetaryAmount = serde_json::from_str(&json).unwrap();
    assert_eq!(back, a);
    assert!(serde_json::from_str::<MonetaryAmount>("\"-1:EUR\"").is_err());
}

#[test]
fn discount_serde_roundtrip() {
    let d = discount(dec!(500), dec!(485), date(2024, 6, 30));
    let json = serde_json::to_string(&d).unwrap();
    let back: SkontoDiscount = serde_json::from_str(&json).unwrap();
    assert_eq!(back, d);
}

#[test]
fn discount_deserialize_rejects_inconsistent_input() {
    let mixed = r#"{
        "full_amount": "100.00:EUR",
        "discounted_amount": "90.00:CHF",
        "expiry_date": "2024-06-30",
        "discount_percentage": "10"
    }"#;
    let err = serde_json::from_str::<SkontoDiscount>(mixed).unwrap_err();
    assert!(err.to_string().contains("currency mismatch"), "{err}");

    let too_high = r#"{
        "full_amount": "100.00:EUR",
        "discounted_amount": "90.00:EUR",
        "expiry_date": "2024-06-30",
        "discount_percentage": "150"
    }"#;
    let err = serde_json::from_str::<SkontoDiscount>(too_high).unwrap_err();
    assert!(err.to_string().contains("outside 0..=100"), "{err}");
}

// --- Configuration ---

#[test]
fn config_from_json_with_defaults() {
    let config: SkontoConfig = serde_json::from_str(
        r#"{ "amount_rules": { "check_full_amount": true, "check_absolute_limit": false } }"#,
    )
    .unwrap();
    assert_eq!(config.amount_rules, AmountRules::FULL_AMOUNT_ONLY);
    assert_eq!(config.amount_limit, AMOUNT_LIMIT);
    assert_eq!(config.full_amount_limit, FULL_AMOUNT_LIMIT);
    assert!(config.validate().is_ok());
}

#[test]
fn config_json_roundtrip() {
    let config = SkontoConfigBuilder::new()
        .amount_limit(dec!(50_000))
        .rounding_scale(3)
        .build()
        .unwrap();
    let json = serde_json::to_string(&config).unwrap();
    let back: SkontoConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn config_rejects_large_scale() {
    assert!(matches!(
        SkontoConfigBuilder::new().rounding_scale(11).build(),
        Err(SkontoError::Config(_))
    ));
}
