//! Currency conversion logic.
//!
//! CRITICAL: conversions always pivot through the default currency.
//! - Rates are units of a currency per one unit of the default
//! - `foreign -> default` divides by the foreign rate
//! - `default -> foreign` multiplies by the foreign rate
//! - No rounding happens here; callers quantize when they need to

use rust_decimal::Decimal;

use super::types::Currency;
use crate::error::{MoneyError, MoneyResult};

/// Returns the exchange rate of `currency`, rejecting missing or zero rates.
pub fn usable_rate(currency: &Currency) -> MoneyResult<Decimal> {
    match currency.exchange_rate() {
        Some(rate) if !rate.is_zero() => Ok(rate),
        _ => Err(MoneyError::UndefinedExchangeRate(currency.code().to_string())),
    }
}

/// Converts `amount` of `from` into the default currency.
///
/// Identity when `from` is the default. Fails with `Overflow` when the
/// converted amount does not fit in a `Decimal`.
pub fn to_default(
    amount: Decimal,
    from: &Currency,
    default: &Currency,
) -> MoneyResult<Decimal> {
    if from == default {
        return Ok(amount);
    }
    let rate = usable_rate(from)?;
    let converted = amount
        .checked_div(rate)
        .ok_or(MoneyError::Overflow("conversion to default"))?;
    tracing::trace!(
        from = %from,
        to = %default,
        %rate,
        %amount,
        %converted,
        "converted to default"
    );
    Ok(converted)
}

/// Converts `amount` of the default currency into `target`.
///
/// Identity when `target` is the default. Fails with `Overflow` when the
/// converted amount does not fit in a `Decimal`.
pub fn from_default(
    amount: Decimal,
    target: &Currency,
    default: &Currency,
) -> MoneyResult<Decimal> {
    if target == default {
        return Ok(amount);
    }
    let rate = usable_rate(target)?;
    let converted = amount
        .checked_mul(rate)
        .ok_or(MoneyError::Overflow("conversion from default"))?;
    tracing::trace!(
        from = %default,
        to = %target,
        %rate,
        %amount,
        %converted,
        "converted from default"
    );
    Ok(converted)
}
