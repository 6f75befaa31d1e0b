//! ISO 4217 currency metadata.
//!
//! Maps the currency codes that show up on extracted invoices to the number
//! of minor units used when formatting an amount.

/// Number of minor units (decimal places) for `code`, if the code is known.
pub fn minor_units(code: &str) -> Option<u32> {
    CURRENCIES
        .binary_search_by(|(c, _)| c.cmp(&code))
        .ok()
        .map(|i| CURRENCIES[i].1)
}

/// Check whether `code` is a known ISO 4217 currency code.
pub fn is_known_currency_code(code: &str) -> bool {
    minor_units(code).is_some()
}

/// Sorted by code for binary search.
static CURRENCIES: &[(&str, u32)] = &[
    ("AED", 2), // UAE Dirham
    ("AMD", 2), // Armenian Dram
    ("AUD", 2), // Australian Dollar
    ("BGN", 2), // Bulgarian Lev
    ("BHD", 3), // Bahraini Dinar
    ("BRL", 2), // Brazilian Real
    ("CAD", 2), // Canadian Dollar
    ("CHF", 2), // Swiss Franc
    ("CNY", 2), // Chinese Yuan
    ("CZK", 2), // Czech Koruna
    ("DKK", 2), // Danish Krone
    ("EGP", 2), // Egyptian Pound
    ("EUR", 2), // Euro
    ("GBP", 2), // Pound Sterling
    ("GEL", 2), // Georgian Lari
    ("HKD", 2), // Hong Kong Dollar
    ("HRK", 2), // Croatian Kuna
    ("HUF", 2), // Hungarian Forint
    ("IDR", 2), // Indonesian Rupiah
    ("ILS", 2), // Israeli Shekel
    ("INR", 2), // Indian Rupee
    ("ISK", 0), // Icelandic Krona
    ("JOD", 3), // Jordanian Dinar
    ("JPY", 0), // Japanese Yen
    ("KES", 2), // Kenyan Shilling
    ("KRW", 0), // South Korean Won
    ("KWD", 3), // Kuwaiti Dinar
    ("KZT", 2), // Kazakhstani Tenge
    ("MXN", 2), // Mexican Peso
    ("MYR", 2), // Malaysian Ringgit
    ("NGN", 2), // Nigerian Naira
    ("NOK", 2), // Norwegian Krone
    ("NZD", 2), // New Zealand Dollar
    ("PHP", 2), // Philippine Peso
    ("PLN", 2), // Polish Zloty
    ("RON", 2), // Romanian Leu
    ("RUB", 2), // Russian Ruble
    ("SAR", 2), // Saudi Riyal
    ("SEK", 2), // Swedish Krona
    ("SGD", 2), // Singapore Dollar
    ("THB", 2), // Thai Baht
    ("TND", 3), // Tunisian Dinar
    ("TRY", 2), // Turkish Lira
    ("TWD", 2), // New Taiwan Dollar
    ("UAH", 2), // Ukrainian Hryvnia
    ("USD", 2), // US Dollar
    ("VND", 0), // Vietnamese Dong
    ("ZAR", 2), // South African Rand
];
