//! Command-line arguments.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

/// Currency-aware money arithmetic.
#[derive(Debug, Parser)]
#[command(name = "tally", version, about = "Currency-aware money arithmetic")]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands. Amounts use the `"<CODE> <amount>"` form, or a bare
/// number for the default currency.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse an amount and print it in canonical form.
    Parse {
        /// Amount to parse.
        #[arg(allow_hyphen_values = true)]
        money: String,
        /// Print every digit instead of two decimals.
        #[arg(long)]
        exact: bool,
    },
    /// Convert an amount, pivoting through the default currency.
    Convert {
        /// Amount to convert.
        #[arg(allow_hyphen_values = true)]
        money: String,
        /// Target currency code; the default currency when omitted.
        #[arg(long)]
        to: Option<String>,
    },
    /// Add two amounts.
    Add {
        /// Left operand.
        #[arg(allow_hyphen_values = true)]
        left: String,
        /// Right operand.
        #[arg(allow_hyphen_values = true)]
        right: String,
        /// Convert both sides to the default currency when they differ.
        #[arg(long)]
        allow_conversion: bool,
    },
    /// Subtract the right amount from the left.
    Sub {
        /// Left operand.
        #[arg(allow_hyphen_values = true)]
        left: String,
        /// Right operand.
        #[arg(allow_hyphen_values = true)]
        right: String,
        /// Convert both sides to the default currency when they differ.
        #[arg(long)]
        allow_conversion: bool,
    },
    /// Compare two amounts in the same currency.
    Compare {
        /// Left operand.
        #[arg(allow_hyphen_values = true)]
        left: String,
        /// Right operand.
        #[arg(allow_hyphen_values = true)]
        right: String,
    },
    /// Split an amount by ratios without losing a minor unit.
    Allocate {
        /// Amount to split.
        #[arg(allow_hyphen_values = true)]
        money: String,
        /// Positive ratio weights.
        #[arg(required = true)]
        ratios: Vec<Decimal>,
    },
    /// Take a percentage of an amount.
    Percent {
        /// Base amount.
        #[arg(allow_hyphen_values = true)]
        money: String,
        /// Percentage to take.
        percent: Decimal,
    },
    /// List known currencies.
    Currencies {
        /// Include disabled currencies.
        #[arg(long)]
        all: bool,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}
