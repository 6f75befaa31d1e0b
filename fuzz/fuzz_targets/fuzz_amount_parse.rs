#![no_main]

use libfuzzer_sys::fuzz_target;
use skonto::core::MonetaryAmount;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        if let Ok(amount) = s.parse::<MonetaryAmount>() {
            assert!(!amount.value().is_sign_negative() || amount.is_zero());
            let _ = amount.to_string();
        }
    }
});
