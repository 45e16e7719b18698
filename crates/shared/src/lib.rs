//! Shared errors, configuration, and logging setup for Tally.
//!
//! This crate provides the ambient pieces used by every other crate:
//! - Application-wide error types
//! - Configuration management (currency catalog and logging)
//! - Tracing subscriber initialization

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::{AppConfig, CurrencyConfig, CustomCurrency, LoggingConfig};
pub use error::{AppError, AppResult};
