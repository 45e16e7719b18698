//! Text form of money: `"<CODE> <amount>"`.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use super::Money;
use crate::currency::{CurrencyRegistry, registry};
use crate::error::{MoneyError, MoneyResult};

/// Fractional digits used by `Display`.
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

impl Money {
    /// Parses `"USD 10.00"`, `"10.00"` (default currency), or either with a leading `-`.
    ///
    /// Amounts are plain decimals or exponent forms such as `1E3` or `2.5e-2`.
    ///
    /// A missing default currency is reported as `NoDefaultCurrency`; every
    /// other failure, including an unknown currency code, is `InvalidFormat`.
    pub fn from_string<R>(text: &str, registry: &R) -> MoneyResult<Self>
    where
        R: CurrencyRegistry + ?Sized,
    {
        let invalid = || MoneyError::InvalidFormat(text.to_string());

        let trimmed = text.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(unsigned) => (true, unsigned.trim_start()),
            None => (false, trimmed),
        };

        let money = if let Some(amount) = parse_decimal(rest) {
            Self::in_default(amount, registry)?
        } else {
            let (code, amount) = rest.split_once(char::is_whitespace).ok_or_else(invalid)?;
            let currency = registry.get(code.trim()).map_err(|_| invalid())?;
            let amount = parse_decimal(amount.trim()).ok_or_else(invalid)?;
            Self::new(amount, currency)
        };

        Ok(if negative { -money } else { money })
    }

    /// Renders the amount at `decimal_places` digits (banker's rounding).
    pub fn format_with_precision(&self, decimal_places: u32) -> String {
        let rounded = self
            .amount
            .round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven);
        format!(
            "{} {:.prec$}",
            self.currency.code(),
            rounded,
            prec = decimal_places as usize
        )
    }

    /// Renders the amount with every digit it carries.
    pub fn to_string_exact(&self) -> String {
        format!("{} {}", self.currency.code(), self.amount)
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    if text.is_empty() {
        return None;
    }
    Decimal::from_str_exact(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_precision(DISPLAY_DECIMAL_PLACES))
    }
}

/// Parses against the process-wide registry (see [`registry::install`]).
impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let registry = registry::active()?;
        Self::from_string(s, registry.as_ref())
    }
}
