//! Currency descriptor and the currency-code capability.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Most fractional digits a minor unit can have (`Decimal`'s maximum scale).
pub const MAX_MINOR_UNITS: u32 = 28;

/// Anything that identifies a currency by its code.
///
/// Lets APIs accept a `Currency`, a `Money`, or a bare code string and
/// compare them on the natural key without runtime probing.
pub trait CurrencyCode {
    /// Returns the ISO 4217-style code (e.g. "USD").
    fn currency_code(&self) -> &str;
}

impl CurrencyCode for str {
    fn currency_code(&self) -> &str {
        self
    }
}

impl CurrencyCode for String {
    fn currency_code(&self) -> &str {
        self
    }
}

impl<T: CurrencyCode + ?Sized> CurrencyCode for &T {
    fn currency_code(&self) -> &str {
        (**self).currency_code()
    }
}

impl<T: CurrencyCode + ?Sized> CurrencyCode for Arc<T> {
    fn currency_code(&self) -> &str {
        (**self).currency_code()
    }
}

/// Immutable descriptor of a monetary unit.
///
/// Equality and hashing use `code` only. Registries own the `enabled` flag
/// and decide which currency is the default; a `Currency` never knows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Currency {
    code: String,
    numeric: String,
    name: String,
    minor_units: u32,
    enabled: bool,
    exchange_rate: Option<Decimal>,
}

impl Currency {
    /// Creates an enabled currency with two minor-unit digits and no exchange rate.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        numeric: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into().to_uppercase(),
            numeric: numeric.into(),
            name: name.into(),
            minor_units: 2,
            enabled: true,
            exchange_rate: None,
        }
    }

    /// Sets the number of fractional digits of the minor unit (0 for JPY, 3 for KWD).
    ///
    /// Clamped to [`MAX_MINOR_UNITS`]; registries built from configuration
    /// reject larger values before they get here.
    #[must_use]
    pub fn with_minor_units(mut self, minor_units: u32) -> Self {
        self.minor_units = minor_units.min(MAX_MINOR_UNITS);
        self
    }

    /// Sets the exchange rate: units of this currency per one unit of the default.
    #[must_use]
    pub fn with_exchange_rate(mut self, rate: Decimal) -> Self {
        self.exchange_rate = Some(rate);
        self
    }

    /// Removes the exchange rate.
    #[must_use]
    pub fn without_exchange_rate(mut self) -> Self {
        self.exchange_rate = None;
        self
    }

    /// Sets the enabled flag.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// ISO 4217-style alphabetic code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Numeric code.
    pub fn numeric(&self) -> &str {
        &self.numeric
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fractional digits of the minor unit.
    pub const fn minor_units(&self) -> u32 {
        self.minor_units
    }

    /// Value of one minor unit, e.g. `0.01` for a two-digit currency.
    pub fn minor_unit(&self) -> Decimal {
        Decimal::new(1, self.minor_units.min(MAX_MINOR_UNITS))
    }

    /// Whether the currency is offered for selection.
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Exchange rate against the default currency, if configured.
    pub const fn exchange_rate(&self) -> Option<Decimal> {
        self.exchange_rate
    }

    /// Compares codes against anything exposing one.
    pub fn same_as<C: CurrencyCode + ?Sized>(&self, other: &C) -> bool {
        self.code == other.currency_code()
    }
}

impl CurrencyCode for Currency {
    fn currency_code(&self) -> &str {
        &self.code
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl PartialEq<str> for Currency {
    fn eq(&self, other: &str) -> bool {
        self.code == other
    }
}

impl PartialEq<&str> for Currency {
    fn eq(&self, other: &&str) -> bool {
        self.code == *other
    }
}

impl PartialEq<String> for Currency {
    fn eq(&self, other: &String) -> bool {
        &self.code == other
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
