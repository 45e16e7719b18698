//! Currency-aware money for Tally.
//!
//! This crate contains pure value-type logic with ZERO I/O dependencies.
//!
//! # Modules
//!
//! - `currency` - Currency descriptors, the registry abstraction, conversion, and allocation
//! - `money` - The `Money` value type, its arithmetic, and its text form
//! - `error` - `MoneyError` and its mapping into the shared application error

pub mod currency;
pub mod error;
pub mod money;

pub use currency::{Currency, CurrencyCode, CurrencyRegistry, InMemoryRegistry};
pub use error::{MoneyError, MoneyResult};
pub use money::{Money, Operand};
