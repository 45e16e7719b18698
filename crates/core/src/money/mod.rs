//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! `Money` wraps `rust_decimal::Decimal` and a shared [`Currency`]; every
//! operation returns a new value.
//!
//! Cross-currency policy:
//! - Arithmetic fails with `CurrencyMismatch` unless the left operand opted in
//!   with [`Money::with_conversion`], then pivots through the default currency
//! - Ordering never converts, opt-in or not

mod ops;
mod text;

#[cfg(test)]
mod props;

use std::cmp::Ordering;
use std::sync::Arc;

use rust_decimal::prelude::*;

use crate::currency::conversion;
use crate::currency::{Currency, CurrencyCode, CurrencyRegistry};
use crate::error::{MoneyError, MoneyResult};

pub use ops::Operand;

/// A monetary amount in a specific currency.
#[derive(Debug, Clone)]
pub struct Money {
    amount: Decimal,
    currency: Arc<Currency>,
    allow_conversion: bool,
}

impl Money {
    /// Creates a new Money instance. The amount is kept exactly as given.
    #[must_use]
    pub fn new(amount: Decimal, currency: Arc<Currency>) -> Self {
        Self {
            amount,
            currency,
            allow_conversion: false,
        }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: Arc<Currency>) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Creates an amount in the registry's default currency.
    pub fn in_default<R>(amount: Decimal, registry: &R) -> MoneyResult<Self>
    where
        R: CurrencyRegistry + ?Sized,
    {
        Ok(Self::new(amount, registry.get_default()?))
    }

    /// Creates an amount in the currency identified by `code`.
    pub fn with_code<C, R>(amount: Decimal, code: &C, registry: &R) -> MoneyResult<Self>
    where
        C: CurrencyCode + ?Sized,
        R: CurrencyRegistry + ?Sized,
    {
        Ok(Self::new(amount, registry.get(code.currency_code())?))
    }

    /// Returns a copy that permits cross-currency arithmetic when it is the left operand.
    #[must_use]
    pub fn with_conversion(mut self) -> Self {
        self.allow_conversion = true;
        self
    }

    /// The exact decimal amount.
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency this amount is expressed in.
    pub fn currency(&self) -> &Arc<Currency> {
        &self.currency
    }

    /// Whether cross-currency arithmetic is permitted.
    pub const fn allows_conversion(&self) -> bool {
        self.allow_conversion
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Absolute value, same currency.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::new(self.amount.abs(), Arc::clone(&self.currency))
    }

    /// Rounds to `decimal_places` with the given strategy, same currency.
    #[must_use]
    pub fn quantize(&self, decimal_places: u32, strategy: RoundingStrategy) -> Self {
        Self::new(
            self.amount.round_dp_with_strategy(decimal_places, strategy),
            Arc::clone(&self.currency),
        )
    }

    /// Rounds to the currency's minor unit using banker's rounding.
    #[must_use]
    pub fn round_to_minor_unit(&self) -> Self {
        self.quantize(
            self.currency.minor_units(),
            RoundingStrategy::MidpointNearestEven,
        )
    }

    /// Lossy conversion for display or interop. Never feed the result back into money math.
    pub fn to_f64(&self) -> Option<f64> {
        self.amount.to_f64()
    }

    /// Whole units, truncated toward zero. Lossy.
    pub fn to_i64(&self) -> Option<i64> {
        self.amount.trunc().to_i64()
    }

    /// Compares two amounts in the same currency.
    ///
    /// Fails with `CurrencyMismatch` for different currencies even when
    /// conversion is allowed: ordering never converts.
    pub fn try_cmp(&self, other: &Self) -> MoneyResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// `self < other`, same currency only.
    pub fn try_lt(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.try_cmp(other)?.is_lt())
    }

    /// `self > other`, same currency only.
    pub fn try_gt(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.try_cmp(other)?.is_gt())
    }

    /// `self <= other`, same currency only.
    pub fn try_le(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.try_cmp(other)?.is_le())
    }

    /// `self >= other`, same currency only.
    pub fn try_ge(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.try_cmp(other)?.is_ge())
    }

    /// Converts into the registry's default currency.
    pub fn convert_to_default<R>(&self, registry: &R) -> MoneyResult<Self>
    where
        R: CurrencyRegistry + ?Sized,
    {
        let default = registry.get_default()?;
        let amount = conversion::to_default(self.amount, &self.currency, &default)?;
        Ok(Self::new(amount, default))
    }

    /// Converts into `target`, pivoting through the default currency.
    ///
    /// The source rate comes from this value's currency; the target is
    /// resolved through the registry. Converting into the own currency is
    /// the identity.
    pub fn convert_to<C, R>(&self, target: &C, registry: &R) -> MoneyResult<Self>
    where
        C: CurrencyCode + ?Sized,
        R: CurrencyRegistry + ?Sized,
    {
        let target = registry.get(target.currency_code())?;
        if *self.currency == *target {
            return Ok(Self::new(self.amount, target));
        }
        let default = registry.get_default()?;
        let pivot = conversion::to_default(self.amount, &self.currency, &default)?;
        let amount = conversion::from_default(pivot, &target, &default)?;
        Ok(Self::new(amount, target))
    }

    /// Splits this amount by `ratios` at the currency's minor unit.
    ///
    /// The parts sum exactly to this amount; leftover minor units go to the
    /// earliest parts.
    pub fn allocate(&self, ratios: &[Decimal]) -> MoneyResult<Vec<Self>> {
        let shares = crate::currency::AllocationUtil::allocate(
            self.amount,
            ratios,
            self.currency.minor_units(),
        )?;
        Ok(shares
            .into_iter()
            .map(|amount| Self::new(amount, Arc::clone(&self.currency)))
            .collect())
    }

    pub(crate) fn ensure_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::mismatch(self.currency.code(), other.currency.code()))
        }
    }
}

impl CurrencyCode for Money {
    fn currency_code(&self) -> &str {
        self.currency.code()
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.currency == other.currency && self.amount == other.amount
    }
}

impl Eq for Money {}

/// Compares the amount only; the currency is ignored.
impl PartialEq<Decimal> for Money {
    fn eq(&self, other: &Decimal) -> bool {
        self.amount == *other
    }
}

/// Orders by amount only; the currency is ignored.
impl PartialOrd<Decimal> for Money {
    fn partial_cmp(&self, other: &Decimal) -> Option<Ordering> {
        Some(self.amount.cmp(other))
    }
}
