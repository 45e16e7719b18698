//! Currencies, the registry that resolves them, and amount-level algorithms.

pub mod allocation;
pub mod catalog;
pub mod conversion;
pub mod registry;
pub mod types;

#[cfg(test)]
mod props;

pub use allocation::AllocationUtil;
pub use registry::{CurrencyRegistry, InMemoryRegistry};
pub use types::{Currency, CurrencyCode, MAX_MINOR_UNITS};
