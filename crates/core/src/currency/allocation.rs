//! Proportional allocation that never loses or creates a minor unit.
//!
//! The split works in three steps:
//! 1. Floor each share (`total * ratio / sum`) to the minor unit
//! 2. Compute the shortfall (total - sum of floored shares)
//! 3. Hand out the shortfall one minor unit at a time, first entry first
//!
//! Flooring loses strictly less than one minor unit per entry, so the
//! shortfall is always fewer units than there are entries.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;

use crate::error::{MoneyError, MoneyResult};

/// Allocation utility for distributing amounts.
///
/// Guarantees:
/// - Sum of allocations EXACTLY equals the original total
/// - Shares follow the ratios, truncated to the minor unit
/// - Leftover minor units go to the earliest entries
pub struct AllocationUtil;

impl AllocationUtil {
    /// Allocate `total` proportionally to `ratios`.
    ///
    /// # Arguments
    ///
    /// * `total` - The amount to split, expressed at no more than `decimal_places` digits
    /// * `ratios` - Positive weights, one per recipient
    /// * `decimal_places` - Fractional digits of the minor unit
    ///
    /// # Errors
    ///
    /// `InvalidRatios` for an empty list or a non-positive weight.
    /// `AllocationInvariantViolated` when `total` carries more precision than
    /// the minor unit, which would leave an undistributable remainder.
    /// `InvalidPrecision` when `decimal_places` exceeds the `Decimal` scale.
    /// `Overflow` when a weighted share does not fit in a `Decimal`.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tally_core::currency::AllocationUtil;
    ///
    /// // 10.00 split 1:1:1 = [3.34, 3.33, 3.33]
    /// let result =
    ///     AllocationUtil::allocate(dec!(10.00), &[dec!(1), dec!(1), dec!(1)], 2).unwrap();
    /// assert_eq!(result, vec![dec!(3.34), dec!(3.33), dec!(3.33)]);
    /// ```
    pub fn allocate(
        total: Decimal,
        ratios: &[Decimal],
        decimal_places: u32,
    ) -> MoneyResult<Vec<Decimal>> {
        if ratios.is_empty() {
            return Err(MoneyError::InvalidRatios("no ratios given".to_string()));
        }
        if let Some((index, ratio)) = ratios
            .iter()
            .enumerate()
            .find(|(_, r)| **r <= Decimal::ZERO)
        {
            return Err(MoneyError::InvalidRatios(format!(
                "ratio {ratio} at position {index} is not positive"
            )));
        }
        let unit = Decimal::try_new(1, decimal_places)
            .map_err(|_| MoneyError::InvalidPrecision(decimal_places))?;

        let ratio_sum = checked_sum(ratios.iter().copied())?;

        // Floor, not truncate: negative totals must not round up either
        let mut shares = ratios
            .iter()
            .map(|r| {
                total
                    .checked_mul(*r)
                    .and_then(|scaled| scaled.checked_div(ratio_sum))
                    .map(|share| {
                        share.round_dp_with_strategy(
                            decimal_places,
                            RoundingStrategy::ToNegativeInfinity,
                        )
                    })
                    .ok_or(MoneyError::Overflow("allocate"))
            })
            .collect::<MoneyResult<Vec<Decimal>>>()?;

        let allocated = checked_sum(shares.iter().copied())?;
        let shortfall = total
            .checked_sub(allocated)
            .ok_or(MoneyError::Overflow("allocate"))?;
        let units = shortfall
            .checked_div(unit)
            .ok_or(MoneyError::Overflow("allocate"))?;

        if !units.fract().is_zero() || units.is_sign_negative() {
            tracing::error!(
                %total,
                %shortfall,
                %unit,
                "allocation remainder is not a whole number of minor units"
            );
            return Err(MoneyError::AllocationInvariantViolated(format!(
                "remainder {shortfall} of {total} is not a whole number of {unit} units"
            )));
        }
        let units = units.to_usize().unwrap_or(usize::MAX);
        if units > shares.len() {
            tracing::error!(
                %total,
                units,
                entries = shares.len(),
                "allocation remainder exceeds entries"
            );
            return Err(MoneyError::AllocationInvariantViolated(format!(
                "{units} leftover units for {} entries",
                shares.len()
            )));
        }

        for share in shares.iter_mut().take(units) {
            *share = share
                .checked_add(unit)
                .ok_or(MoneyError::Overflow("allocate"))?;
        }
        Ok(shares)
    }

    /// Allocate `total` equally across `count` recipients.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tally_core::currency::AllocationUtil;
    ///
    /// // 100 / 3 = [33.34, 33.33, 33.33], sum = 100.00
    /// let result = AllocationUtil::allocate_equal(dec!(100), 3, 2).unwrap();
    /// assert_eq!(result.iter().sum::<rust_decimal::Decimal>(), dec!(100));
    /// ```
    pub fn allocate_equal(
        total: Decimal,
        count: usize,
        decimal_places: u32,
    ) -> MoneyResult<Vec<Decimal>> {
        Self::allocate(total, &vec![Decimal::ONE; count], decimal_places)
    }
}

fn checked_sum(mut values: impl Iterator<Item = Decimal>) -> MoneyResult<Decimal> {
    values.try_fold(Decimal::ZERO, |acc, value| {
        acc.checked_add(value).ok_or(MoneyError::Overflow("allocate"))
    })
}
