//! Money error types.

use tally_shared::AppError;
use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by currency lookups and money operations.
///
/// Every variant reflects a programming or input error; none is transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Text does not parse as an amount, with or without a currency prefix.
    #[error("Incorrectly formatted monetary input: {0:?}")]
    InvalidFormat(String),

    /// Operation between two different currencies without the required opt-in.
    #[error("Currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        /// Currency of the left operand.
        left: String,
        /// Currency of the right operand.
        right: String,
    },

    /// Conversion requested but the currency has no usable exchange rate.
    #[error("No exchange rate defined for: {0}")]
    UndefinedExchangeRate(String),

    /// Multiplying or dividing two monetary quantities.
    #[error("Unsupported monetary operation: {0}")]
    UnsupportedOperation(&'static str),

    /// Result does not fit in a `Decimal`.
    #[error("Arithmetic overflow in {0}")]
    Overflow(&'static str),

    /// Minor-unit precision beyond what a `Decimal` can represent.
    #[error(
        "Unsupported precision: {0} fractional digits (maximum {max})",
        max = crate::currency::MAX_MINOR_UNITS
    )]
    InvalidPrecision(u32),

    /// Division of an amount by zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// Currency code unknown to the registry.
    #[error("Currency not found: {0}")]
    CurrencyNotFound(String),

    /// Registry has no default currency configured.
    #[error("No default currency configured")]
    NoDefaultCurrency,

    /// No registry has been installed for the process.
    #[error("No currency registry installed")]
    RegistryNotInstalled,

    /// Allocation ratios are empty or not all positive.
    #[error("Invalid allocation ratios: {0}")]
    InvalidRatios(String),

    /// Allocation remainder cannot be distributed over the entries.
    #[error("Allocation invariant violated: {0}")]
    AllocationInvariantViolated(String),
}

impl MoneyError {
    /// Builds a mismatch error from two currency codes.
    pub(crate) fn mismatch(left: &str, right: &str) -> Self {
        Self::CurrencyMismatch {
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    /// Returns the stable error code for machine-readable output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidFormat(_) => "INVALID_FORMAT",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::UndefinedExchangeRate(_) => "UNDEFINED_EXCHANGE_RATE",
            Self::UnsupportedOperation(_) => "UNSUPPORTED_OPERATION",
            Self::Overflow(_) => "ARITHMETIC_OVERFLOW",
            Self::InvalidPrecision(_) => "INVALID_PRECISION",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::CurrencyNotFound(_) => "CURRENCY_NOT_FOUND",
            Self::NoDefaultCurrency => "NO_DEFAULT_CURRENCY",
            Self::RegistryNotInstalled => "REGISTRY_NOT_INSTALLED",
            Self::InvalidRatios(_) => "INVALID_RATIOS",
            Self::AllocationInvariantViolated(_) => "ALLOCATION_INVARIANT_VIOLATED",
        }
    }
}

impl From<MoneyError> for AppError {
    fn from(err: MoneyError) -> Self {
        let message = err.to_string();
        match err {
            MoneyError::InvalidFormat(_)
            | MoneyError::InvalidRatios(_)
            | MoneyError::DivisionByZero
            | MoneyError::Overflow(_) => Self::Validation(message),
            MoneyError::CurrencyMismatch { .. }
            | MoneyError::UndefinedExchangeRate(_)
            | MoneyError::UnsupportedOperation(_) => Self::BusinessRule(message),
            MoneyError::CurrencyNotFound(_) => Self::NotFound(message),
            MoneyError::NoDefaultCurrency
            | MoneyError::RegistryNotInstalled
            | MoneyError::InvalidPrecision(_) => Self::Configuration(message),
            MoneyError::AllocationInvariantViolated(_) => Self::Internal(message),
        }
    }
}
