//! Currency lookup abstraction and the process-wide registry binding.
//!
//! Money construction, conversion, and parsing resolve currencies through a
//! [`CurrencyRegistry`]. Callers either pass one explicitly or install a
//! single process-wide instance:
//!
//! 1. `install(registry)` at startup (returns whatever was installed before).
//! 2. `active()` from any thread to read it.
//! 3. `install` again to swap catalogs; operations already running keep the
//!    `Arc` they read, new ones see the replacement.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rust_decimal::Decimal;
use tally_shared::CurrencyConfig;

use super::catalog;
use super::types::{Currency, MAX_MINOR_UNITS};
use crate::error::{MoneyError, MoneyResult};

/// Resolves currency codes and identifies the default currency.
///
/// Implementations must be safe to read from many threads at once.
pub trait CurrencyRegistry: Send + Sync {
    /// Resolves a code to a currency.
    fn get(&self, code: &str) -> MoneyResult<Arc<Currency>>;

    /// Returns the single currency marked as default.
    fn get_default(&self) -> MoneyResult<Arc<Currency>>;

    /// Enumerates every known currency, ordered by code.
    fn currencies(&self) -> Vec<Arc<Currency>>;
}

#[derive(Debug, Default)]
struct Catalog {
    currencies: BTreeMap<String, Arc<Currency>>,
    default: Option<String>,
}

/// Registry held in memory behind a read-write lock.
///
/// Guarantees at most one default currency: `set_default` replaces the
/// previous one.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    inner: RwLock<Catalog>,
}

impl InMemoryRegistry {
    /// Creates an empty registry with no default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with the built-in ISO table, USD as default.
    #[must_use]
    pub fn with_iso_catalog() -> Self {
        let registry = Self::new();
        {
            let mut inner = registry.write();
            for currency in catalog::iso_currencies() {
                inner
                    .currencies
                    .insert(currency.code().to_string(), Arc::new(currency));
            }
            inner.default = Some("USD".to_string());
        }
        registry
    }

    /// Builds a registry from configuration.
    ///
    /// Order: ISO seed (optional), custom currencies, exchange rates,
    /// disabled flags, then the default. Without the seed, ISO codes named by
    /// rates, disabled flags, or the default are still taken from the catalog.
    ///
    /// Fails with `InvalidPrecision` for a custom currency whose minor units
    /// exceed [`MAX_MINOR_UNITS`].
    pub fn from_config(config: &CurrencyConfig) -> MoneyResult<Self> {
        let registry = if config.seed_iso_catalog {
            Self::with_iso_catalog()
        } else {
            Self::new()
        };

        for custom in &config.custom {
            if custom.minor_units > MAX_MINOR_UNITS {
                return Err(MoneyError::InvalidPrecision(custom.minor_units));
            }
            let mut currency = Currency::new(&custom.code, &custom.numeric, &custom.name)
                .with_minor_units(custom.minor_units);
            if let Some(rate) = custom.exchange_rate {
                currency = currency.with_exchange_rate(rate);
            }
            registry.insert(currency);
        }
        for (code, rate) in &config.exchange_rates {
            registry.set_exchange_rate(code, *rate)?;
        }
        for code in &config.disabled {
            registry.set_enabled(code, false)?;
        }
        registry.set_default(&config.default)?;

        tracing::debug!(
            currencies = registry.read().currencies.len(),
            default = %config.default.to_uppercase(),
            "currency registry built from config"
        );
        Ok(registry)
    }

    /// Adds or replaces a currency, returning the one it replaced.
    pub fn insert(&self, currency: Currency) -> Option<Arc<Currency>> {
        self.write()
            .currencies
            .insert(currency.code().to_string(), Arc::new(currency))
    }

    /// Marks `code` as the default currency, unmarking any previous default.
    ///
    /// A code missing from the registry but present in the ISO catalog is
    /// added first.
    pub fn set_default(&self, code: &str) -> MoneyResult<()> {
        let code = normalize(code);
        let mut inner = self.write();
        inner.entry_or_catalog(&code)?;
        if let Some(previous) = inner.default.replace(code.clone())
            && previous != code
        {
            tracing::debug!(%previous, default = %code, "default currency changed");
        }
        Ok(())
    }

    /// Replaces the currency under `code` with a copy carrying `rate`.
    pub fn set_exchange_rate(&self, code: &str, rate: Decimal) -> MoneyResult<()> {
        self.update(code, |currency| currency.with_exchange_rate(rate))
    }

    /// Replaces the currency under `code` with a copy carrying `enabled`.
    pub fn set_enabled(&self, code: &str, enabled: bool) -> MoneyResult<()> {
        self.update(code, |currency| currency.with_enabled(enabled))
    }

    /// Returns enabled currencies, ordered by code.
    pub fn active(&self) -> Vec<Arc<Currency>> {
        self.read()
            .currencies
            .values()
            .filter(|currency| currency.is_enabled())
            .cloned()
            .collect()
    }

    /// Returns true if `code` is known.
    pub fn contains(&self, code: &str) -> bool {
        self.read().currencies.contains_key(&normalize(code))
    }

    /// Code of the current default, if any.
    pub fn default_code(&self) -> Option<String> {
        self.read().default.clone()
    }

    fn update(&self, code: &str, f: impl FnOnce(Currency) -> Currency) -> MoneyResult<()> {
        let code = normalize(code);
        let mut inner = self.write();
        let updated = f(Currency::clone(&*inner.entry_or_catalog(&code)?));
        inner.currencies.insert(code, Arc::new(updated));
        Ok(())
    }

    fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CurrencyRegistry for InMemoryRegistry {
    fn get(&self, code: &str) -> MoneyResult<Arc<Currency>> {
        let code = normalize(code);
        self.read()
            .currencies
            .get(&code)
            .cloned()
            .ok_or(MoneyError::CurrencyNotFound(code))
    }

    fn get_default(&self) -> MoneyResult<Arc<Currency>> {
        let inner = self.read();
        inner
            .default
            .as_ref()
            .and_then(|code| inner.currencies.get(code))
            .cloned()
            .ok_or(MoneyError::NoDefaultCurrency)
    }

    fn currencies(&self) -> Vec<Arc<Currency>> {
        self.read().currencies.values().cloned().collect()
    }
}

impl Catalog {
    /// Returns the entry for `code`, pulling it from the ISO catalog if absent.
    fn entry_or_catalog(&mut self, code: &str) -> MoneyResult<Arc<Currency>> {
        if let Some(currency) = self.currencies.get(code) {
            return Ok(Arc::clone(currency));
        }
        let currency = catalog::lookup(code)
            .filter(|currency| currency.code() != catalog::NO_CURRENCY)
            .map(Arc::new)
            .ok_or_else(|| MoneyError::CurrencyNotFound(code.to_string()))?;
        tracing::debug!(code, "currency added from ISO catalog");
        self.currencies.insert(code.to_string(), Arc::clone(&currency));
        Ok(currency)
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}

static ACTIVE: RwLock<Option<Arc<dyn CurrencyRegistry>>> = RwLock::new(None);

/// Installs `registry` as the process-wide registry, returning the previous one.
pub fn install(registry: Arc<dyn CurrencyRegistry>) -> Option<Arc<dyn CurrencyRegistry>> {
    let previous = ACTIVE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .replace(registry);
    tracing::debug!(replaced = previous.is_some(), "currency registry installed");
    previous
}

/// Removes the process-wide registry, returning it.
pub fn uninstall() -> Option<Arc<dyn CurrencyRegistry>> {
    ACTIVE.write().unwrap_or_else(PoisonError::into_inner).take()
}

/// Returns the process-wide registry.
pub fn active() -> MoneyResult<Arc<dyn CurrencyRegistry>> {
    ACTIVE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .ok_or(MoneyError::RegistryNotInstalled)
}
