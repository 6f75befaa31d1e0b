#![no_main]

use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;
use rust_decimal_macros::dec;
use skonto::core::MonetaryAmount;
use skonto::terms::{format_skonto_term, parse_skonto_terms};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(terms) = parse_skonto_terms(s) {
            let full = MonetaryAmount::eur(dec!(1785.00)).unwrap();
            let issue_date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
            for term in &terms {
                // Canonical form must parse back to the same term.
                let text = format_skonto_term(term);
                let reparsed = parse_skonto_terms(&text).unwrap();
                assert_eq!(reparsed.as_slice(), std::slice::from_ref(term));

                let _ = term.to_discount(&full, issue_date, 2);
            }
        }
    }
});
