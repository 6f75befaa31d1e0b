use chrono::NaiveDate;
use rust_decimal_macros::dec;
use skonto::core::*;
use skonto::extraction::*;
use skonto::snapshot::SnapshotStore;
use skonto::terms::parse_skonto_terms;

fn main() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
    let config = SkontoConfig::default();

    // Extraction results as delivered by the analysis backend
    let snapshot: ExtractionSnapshot = [
        (AMOUNT_TO_PAY, "1785.00:EUR"),
        (SKONTO_AMOUNT_TO_PAY, "1749.30:EUR"),
        (SKONTO_DUE_DATE, "2024-06-29"),
        (SKONTO_PAYMENT_METHOD, "Überweisung"),
    ]
    .into_iter()
    .collect();

    let discount = match snapshot.to_discount(today, &config) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Cannot build discount: {e}");
            return;
        }
    };

    let summary = summarize(&discount, today);
    println!("Full amount:      {}", discount.full_amount);
    println!("Discounted:       {}", discount.discounted_amount);
    if let Some(pct) = summary.percentage {
        println!("Percentage:       {}%", pct.round_dp(2));
    }
    if let Some(saved) = &summary.saved_amount {
        println!("Saved:            {saved}");
    }
    println!("Remaining days:   {}", summary.remaining_days);
    println!("Preselected:      {:?}", summary.default_selection);
    println!("Payable:          {}", summary.payable_amount);
    println!(
        "Edge case:        {:?}",
        classify_with_payment(&discount, today, snapshot.payment_method())
    );

    // User edits the discounted amount
    let amount_validator = AmountValidator::from_config(&config);
    for edited in [dec!(1700), dec!(1800)] {
        let Ok(amount) = discount.full_amount.with_value(edited) else {
            continue;
        };
        match amount_validator.validate(&amount, &discount.full_amount) {
            ValidationOutcome::Valid => println!("{amount}: ok"),
            ValidationOutcome::Invalid(failure) => {
                println!("{amount}: {failure} ({})", failure.code())
            }
        }
    }

    // XRechnung payment terms
    let terms = parse_skonto_terms("#SKONTO#TAGE=14#PROZENT=2.00#\n").unwrap_or_default();
    println!("\nPayment terms: {} Skonto entries", terms.len());

    // Review state shared with the UI layer
    let store = SnapshotStore::new(discount);
    println!("State version: {}", store.current().version);
}
