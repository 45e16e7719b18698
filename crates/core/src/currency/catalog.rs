//! Built-in ISO 4217 currency table used to seed registries.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use super::types::Currency;

/// (code, numeric, minor units, name)
const ISO_4217: &[(&str, &str, u32, &str)] = &[
    ("AED", "784", 2, "UAE Dirham"),
    ("ARS", "032", 2, "Argentine Peso"),
    ("AUD", "036", 2, "Australian Dollar"),
    ("BHD", "048", 3, "Bahraini Dinar"),
    ("BRL", "986", 2, "Brazilian Real"),
    ("CAD", "124", 2, "Canadian Dollar"),
    ("CHF", "756", 2, "Swiss Franc"),
    ("CLP", "152", 0, "Chilean Peso"),
    ("CNY", "156", 2, "Yuan Renminbi"),
    ("CZK", "203", 2, "Czech Koruna"),
    ("DKK", "208", 2, "Danish Krone"),
    ("EGP", "818", 2, "Egyptian Pound"),
    ("EUR", "978", 2, "Euro"),
    ("GBP", "826", 2, "Pound Sterling"),
    ("HKD", "344", 2, "Hong Kong Dollar"),
    ("HUF", "348", 2, "Forint"),
    ("IDR", "360", 2, "Rupiah"),
    ("ILS", "376", 2, "New Israeli Sheqel"),
    ("INR", "356", 2, "Indian Rupee"),
    ("JPY", "392", 0, "Yen"),
    ("KRW", "410", 0, "Won"),
    ("KWD", "414", 3, "Kuwaiti Dinar"),
    ("MXN", "484", 2, "Mexican Peso"),
    ("MYR", "458", 2, "Malaysian Ringgit"),
    ("NGN", "566", 2, "Naira"),
    ("NOK", "578", 2, "Norwegian Krone"),
    ("NZD", "554", 2, "New Zealand Dollar"),
    ("PHP", "608", 2, "Philippine Peso"),
    ("PLN", "985", 2, "Zloty"),
    ("RUB", "643", 2, "Russian Ruble"),
    ("SAR", "682", 2, "Saudi Riyal"),
    ("SEK", "752", 2, "Swedish Krona"),
    ("SGD", "702", 2, "Singapore Dollar"),
    ("THB", "764", 2, "Baht"),
    ("TRY", "949", 2, "Turkish Lira"),
    ("USD", "840", 2, "US Dollar"),
    ("VND", "704", 0, "Dong"),
    ("XXX", "999", 0, "No currency"),
    ("ZAR", "710", 2, "Rand"),
];

static BY_CODE: Lazy<BTreeMap<&'static str, Currency>> = Lazy::new(|| {
    ISO_4217
        .iter()
        .map(|&(code, numeric, minor_units, name)| {
            (code, Currency::new(code, numeric, name).with_minor_units(minor_units))
        })
        .collect()
});

/// Code reserved for "no currency"; never seeded into a registry.
pub const NO_CURRENCY: &str = "XXX";

/// Returns every catalog entry except the "no currency" placeholder.
pub fn iso_currencies() -> Vec<Currency> {
    BY_CODE
        .iter()
        .filter(|(code, _)| **code != NO_CURRENCY)
        .map(|(_, currency)| currency.clone())
        .collect()
}

/// Looks up a catalog entry by code, case-insensitively.
pub fn lookup(code: &str) -> Option<Currency> {
    BY_CODE.get(code.to_uppercase().as_str()).cloned()
}
