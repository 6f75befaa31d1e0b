#![no_main]

use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;
use skonto::core::{SkontoConfig, summarize};
use skonto::extraction::{
    AMOUNT_TO_PAY, ExtractionSnapshot, SKONTO_AMOUNT_TO_PAY, SKONTO_DUE_DATE,
    SKONTO_PAYMENT_METHOD, SKONTO_PERCENTAGE, SKONTO_REMAINING_DAYS,
};

const KEYS: [&str; 6] = [
    AMOUNT_TO_PAY,
    SKONTO_AMOUNT_TO_PAY,
    SKONTO_PERCENTAGE,
    SKONTO_DUE_DATE,
    SKONTO_REMAINING_DAYS,
    SKONTO_PAYMENT_METHOD,
];

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // One field value per line, in KEYS order.
        let snapshot: ExtractionSnapshot = KEYS.iter().copied().zip(s.split('\n')).collect();
        let Some(today) = NaiveDate::from_ymd_opt(2024, 6, 1) else {
            return;
        };
        if let Ok(discount) = snapshot.to_discount(today, &SkontoConfig::default()) {
            let _ = summarize(&discount, today);
            let _ = discount.discounted_amount.to_string();
        }
    }
});
