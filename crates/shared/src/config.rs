//! Application configuration management.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Currency catalog configuration.
    #[serde(default)]
    pub currencies: CurrencyConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Currency catalog configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyConfig {
    /// Code of the default (pivot) currency.
    #[serde(default = "default_currency")]
    pub default: String,
    /// Whether to seed the registry with the built-in ISO 4217 table.
    #[serde(default = "default_seed_iso_catalog")]
    pub seed_iso_catalog: bool,
    /// Exchange rates keyed by currency code, expressed as units of that
    /// currency per one unit of the default currency.
    #[serde(default)]
    pub exchange_rates: HashMap<String, Decimal>,
    /// Codes of currencies that are known but not offered for selection.
    #[serde(default)]
    pub disabled: Vec<String>,
    /// Additional currencies not present in the ISO table.
    #[serde(default)]
    pub custom: Vec<CustomCurrency>,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            default: default_currency(),
            seed_iso_catalog: default_seed_iso_catalog(),
            exchange_rates: HashMap::new(),
            disabled: Vec::new(),
            custom: Vec::new(),
        }
    }
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_seed_iso_catalog() -> bool {
    true
}

/// A currency defined in configuration rather than the ISO table.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomCurrency {
    /// Three-letter code.
    pub code: String,
    /// Numeric code.
    #[serde(default = "default_numeric")]
    pub numeric: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Number of fractional digits of the minor unit.
    #[serde(default = "default_minor_units")]
    pub minor_units: u32,
    /// Optional exchange rate against the default currency.
    #[serde(default)]
    pub exchange_rate: Option<Decimal>,
}

fn default_numeric() -> String {
    "999".to_string()
}

fn default_minor_units() -> u32 {
    2
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

fn default_filter() -> String {
    "tally=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `TALLY__*` environment variables (e.g. `TALLY__CURRENCIES__DEFAULT=EUR`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TALLY").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Parses configuration from a TOML string, applying the same defaults as [`AppConfig::load`].
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or does not match the schema.
    pub fn from_toml(text: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(text, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
