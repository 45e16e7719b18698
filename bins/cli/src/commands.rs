//! Command execution against a currency registry.

use std::cmp::Ordering;

use anyhow::Context;
use tally_core::{Currency, CurrencyRegistry, InMemoryRegistry, Money};

use crate::cli::Command;

/// Runs `command` and returns the lines to print.
pub fn execute(command: Command, registry: &InMemoryRegistry) -> anyhow::Result<Vec<String>> {
    let lines = match command {
        Command::Parse { money, exact } => {
            let money = parse(&money, registry)?;
            if exact {
                vec![money.to_string_exact()]
            } else {
                vec![money.to_string()]
            }
        }
        Command::Convert { money, to } => {
            let money = parse(&money, registry)?;
            let converted = match to {
                Some(code) => money.convert_to(code.as_str(), registry)?,
                None => money.convert_to_default(registry)?,
            };
            tracing::debug!(
                from = %money.to_string_exact(),
                to = %converted.to_string_exact(),
                "converted"
            );
            vec![converted.round_to_minor_unit().to_string()]
        }
        Command::Add {
            left,
            right,
            allow_conversion,
        } => {
            let (left, right) = operands(&left, &right, allow_conversion, registry)?;
            vec![left.try_add(&right, registry)?.to_string()]
        }
        Command::Sub {
            left,
            right,
            allow_conversion,
        } => {
            let (left, right) = operands(&left, &right, allow_conversion, registry)?;
            vec![left.try_sub(&right, registry)?.to_string()]
        }
        Command::Compare { left, right } => {
            let (left, right) = operands(&left, &right, false, registry)?;
            let symbol = match left.try_cmp(&right)? {
                Ordering::Less => "<",
                Ordering::Equal => "==",
                Ordering::Greater => ">",
            };
            vec![format!("{left} {symbol} {right}")]
        }
        Command::Allocate { money, ratios } => parse(&money, registry)?
            .allocate(&ratios)?
            .iter()
            .map(ToString::to_string)
            .collect(),
        Command::Percent { money, percent } => {
            vec![parse(&money, registry)?.percentage_of(percent).to_string()]
        }
        Command::Currencies { all, json } => {
            let currencies = if all {
                registry.currencies()
            } else {
                registry.active()
            };
            let default = registry.default_code();
            if json {
                let list: Vec<&Currency> = currencies.iter().map(AsRef::as_ref).collect();
                vec![serde_json::to_string_pretty(&list)?]
            } else {
                currencies
                    .iter()
                    .map(|c| currency_row(c, default.as_deref()))
                    .collect()
            }
        }
    };
    Ok(lines)
}

fn parse(text: &str, registry: &InMemoryRegistry) -> anyhow::Result<Money> {
    Money::from_string(text, registry).with_context(|| format!("cannot read amount {text:?}"))
}

fn operands(
    left: &str,
    right: &str,
    allow_conversion: bool,
    registry: &InMemoryRegistry,
) -> anyhow::Result<(Money, Money)> {
    let left = parse(left, registry)?;
    let left = if allow_conversion {
        left.with_conversion()
    } else {
        left
    };
    Ok((left, parse(right, registry)?))
}

fn currency_row(currency: &Currency, default: Option<&str>) -> String {
    let marker = if default == Some(currency.code()) { "*" } else { " " };
    let rate = currency
        .exchange_rate()
        .map_or_else(|| "-".to_string(), |rate| rate.to_string());
    format!(
        "{marker} {:<4} {:>3} {:<24} {:>2} {rate}",
        currency.code(),
        currency.numeric(),
        currency.name(),
        currency.minor_units()
    )
}
