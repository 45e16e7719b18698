//! Arithmetic on money.
//!
//! Money-with-money operations can fail and take explicit methods.
//! Money-with-scalar operations get operator impls in both operand orders;
//! like `Decimal`'s own operators they panic when the result overflows.
//! Use [`Money::multiply`] and [`Money::divide`] to get `Overflow` instead.

use std::ops::{Add, Mul, Neg, Sub};
use std::sync::Arc;

use rust_decimal::Decimal;

use super::Money;
use crate::currency::CurrencyRegistry;
use crate::currency::conversion;
use crate::error::{MoneyError, MoneyResult};

/// Right-hand side of [`Money::multiply`] and [`Money::divide`].
#[derive(Debug, Clone)]
pub enum Operand {
    /// A plain number.
    Scalar(Decimal),
    /// Another monetary amount; rejected by multiply and divide.
    Money(Money),
}

impl From<Decimal> for Operand {
    fn from(value: Decimal) -> Self {
        Self::Scalar(value)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Self::Scalar(Decimal::from(value))
    }
}

impl From<Money> for Operand {
    fn from(value: Money) -> Self {
        Self::Money(value)
    }
}

impl From<&Money> for Operand {
    fn from(value: &Money) -> Self {
        Self::Money(value.clone())
    }
}

impl Money {
    /// Adds two amounts.
    ///
    /// Same currency: exact sum in that currency. Different currencies:
    /// `CurrencyMismatch` unless `self` allows conversion, in which case both
    /// sides are converted to the default currency first. `Overflow` when the
    /// result does not fit in a `Decimal`.
    pub fn try_add<R>(&self, other: &Self, registry: &R) -> MoneyResult<Self>
    where
        R: CurrencyRegistry + ?Sized,
    {
        self.combine(other, registry, "add", Decimal::checked_add)
    }

    /// Subtracts `other`, with the same currency rules as [`Money::try_add`].
    pub fn try_sub<R>(&self, other: &Self, registry: &R) -> MoneyResult<Self>
    where
        R: CurrencyRegistry + ?Sized,
    {
        self.combine(other, registry, "subtract", Decimal::checked_sub)
    }

    /// Scales the amount. Multiplying two monetary quantities is rejected.
    pub fn multiply(&self, rhs: impl Into<Operand>) -> MoneyResult<Self> {
        match rhs.into() {
            Operand::Scalar(factor) => self
                .amount
                .checked_mul(factor)
                .map(|amount| self.with_amount(amount))
                .ok_or(MoneyError::Overflow("multiply")),
            Operand::Money(_) => Err(MoneyError::UnsupportedOperation(
                "can not multiply monetary quantities",
            )),
        }
    }

    /// Divides the amount. Dividing by money or by zero is rejected.
    pub fn divide(&self, rhs: impl Into<Operand>) -> MoneyResult<Self> {
        match rhs.into() {
            Operand::Scalar(divisor) if divisor.is_zero() => Err(MoneyError::DivisionByZero),
            Operand::Scalar(divisor) => self
                .amount
                .checked_div(divisor)
                .map(|amount| self.with_amount(amount))
                .ok_or(MoneyError::Overflow("divide")),
            Operand::Money(_) => Err(MoneyError::UnsupportedOperation(
                "can not divide monetary quantities",
            )),
        }
    }

    /// Returns `percent` percent of this amount, same currency.
    ///
    /// # Panics
    ///
    /// When `percent * amount` overflows `Decimal`.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use rust_decimal_macros::dec;
    /// use tally_core::{Currency, Money};
    ///
    /// let usd = Arc::new(Currency::new("USD", "840", "US Dollar"));
    /// let fee = Money::new(dec!(200), usd).percentage_of(dec!(5));
    /// assert_eq!(fee.amount(), dec!(10));
    /// ```
    #[must_use]
    pub fn percentage_of(&self, percent: Decimal) -> Self {
        self.with_amount(percent * self.amount / Decimal::ONE_HUNDRED)
    }

    fn with_amount(&self, amount: Decimal) -> Self {
        Self::new(amount, Arc::clone(&self.currency))
    }

    fn combine<R>(
        &self,
        other: &Self,
        registry: &R,
        name: &'static str,
        op: impl FnOnce(Decimal, Decimal) -> Option<Decimal>,
    ) -> MoneyResult<Self>
    where
        R: CurrencyRegistry + ?Sized,
    {
        if self.currency == other.currency {
            return op(self.amount, other.amount)
                .map(|amount| self.with_amount(amount))
                .ok_or(MoneyError::Overflow(name));
        }
        if !self.allow_conversion {
            return Err(MoneyError::mismatch(
                self.currency.code(),
                other.currency.code(),
            ));
        }

        let default = registry.get_default()?;
        let left = conversion::to_default(self.amount, &self.currency, &default)?;
        let right = conversion::to_default(other.amount, &other.currency, &default)?;
        tracing::debug!(
            left = %self.currency,
            right = %other.currency,
            default = %default,
            "cross-currency arithmetic pivoted through default"
        );
        let amount = op(left, right).ok_or(MoneyError::Overflow(name))?;
        Ok(Self::new(amount, default))
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money::new(-self.amount, self.currency)
    }
}

impl Neg for &Money {
    type Output = Money;

    fn neg(self) -> Money {
        self.with_amount(-self.amount)
    }
}

impl Add<Decimal> for Money {
    type Output = Money;

    fn add(self, rhs: Decimal) -> Money {
        Money::new(self.amount + rhs, self.currency)
    }
}

impl Add<Money> for Decimal {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money::new(self + rhs.amount, rhs.currency)
    }
}

impl Sub<Decimal> for Money {
    type Output = Money;

    fn sub(self, rhs: Decimal) -> Money {
        Money::new(self.amount - rhs, self.currency)
    }
}

/// `scalar - money`, not `money - scalar`.
impl Sub<Money> for Decimal {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money::new(self - rhs.amount, rhs.currency)
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, rhs: Decimal) -> Money {
        Money::new(self.amount * rhs, self.currency)
    }
}

impl Mul<Money> for Decimal {
    type Output = Money;

    fn mul(self, rhs: Money) -> Money {
        Money::new(self * rhs.amount, rhs.currency)
    }
}
